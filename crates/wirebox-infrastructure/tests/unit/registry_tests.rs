//! Registry registration and lookup tests

use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc;
use wirebox_domain::error::Error;
use wirebox_domain::{Binding, BindingSource, Factory, FnFactory, Instance, TypeKey};
use wirebox_infrastructure::Registry;

trait Greeter {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

#[test]
fn test_new_registry_is_empty() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(!registry.has_parent());
    assert_eq!(registry.get::<i32>().unwrap(), None);
}

#[test]
fn test_register_value_then_get() {
    let registry = Registry::new();
    registry.register_value(42_i32).register_value("text".to_string());

    assert_eq!(registry.get::<i32>().unwrap(), Some(42));
    assert_eq!(registry.get::<String>().unwrap(), Some("text".to_string()));
    assert_eq!(registry.len(), 2);
    assert!(registry.contains::<i32>());
    assert!(!registry.contains::<u64>());
}

#[test]
fn test_register_value_overwrites() {
    let registry = Registry::new();
    registry.register_value(1_u8).register_value(2_u8);

    assert_eq!(registry.get::<u8>().unwrap(), Some(2));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_register_as_interface() {
    let registry = Registry::new();
    registry.register_as::<dyn Greeter>(Arc::new(English));

    let greeter = registry.get::<Arc<dyn Greeter>>().unwrap();
    match greeter {
        Some(greeter) => assert_eq!(greeter.greet(), "hello"),
        None => panic!("Expected Arc<dyn Greeter> binding"),
    }

    // The concrete type stays unbound
    assert!(registry.get::<Arc<English>>().unwrap().is_none());
    assert!(!registry.contains::<English>());
}

#[test]
#[should_panic(expected = "is a sized type")]
fn test_register_as_sized_marker_panics() {
    let registry = Registry::new();
    registry.register_as::<English>(Arc::new(English));
}

#[test]
fn test_factory_replaces_value_and_back() {
    let registry = Registry::new();
    registry.register_value(1_u16);
    registry.register_factory(|| 7_u16);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get::<u16>().unwrap(), Some(7));

    registry.register_value(9_u16);
    assert_eq!(registry.get::<u16>().unwrap(), Some(9));
    assert!(
        registry
            .lookup(TypeKey::of::<u16>(), false)
            .unwrap()
            .is_some_and(|binding| binding.is_value())
    );
}

#[test]
fn test_lookup_without_resolution_returns_raw_factory() {
    let registry = Registry::new();
    registry.register_factory(|| 3_i64);

    let binding = registry.lookup(TypeKey::of::<i64>(), false).unwrap();
    match binding {
        Some(Binding::Factory(factory)) => {
            assert_eq!(factory.output(), TypeKey::of::<i64>());
            assert_eq!(factory.signature(), "fn() -> i64");
        }
        other => panic!("Expected raw factory binding, got {other:?}"),
    }

    let resolved = registry.lookup(TypeKey::of::<i64>(), true).unwrap();
    assert!(resolved.is_some_and(|binding| binding.is_value()));
}

#[test]
fn test_callable_registered_as_value_is_not_a_factory() {
    let registry = Registry::new();
    let double: fn(i32) -> i32 = |n| n * 2;
    registry.register_value(double);

    let stored = registry.get::<fn(i32) -> i32>().unwrap();
    match stored {
        Some(f) => assert_eq!(f(4), 8),
        None => panic!("Expected the function value"),
    }
    assert!(registry.get::<i32>().unwrap().is_none());
}

#[test]
fn test_set_with_precomputed_key() {
    let (sender, receiver) = mpsc::channel::<u32>();
    let registry = Registry::new();
    registry.set(TypeKey::of::<mpsc::Sender<u32>>(), Rc::new(sender));

    let sender = registry.resolve::<mpsc::Sender<u32>>().unwrap();
    sender.send(5).unwrap();
    assert_eq!(receiver.recv().unwrap(), 5);
}

#[test]
fn test_set_with_mismatched_instance() {
    let registry = Registry::new();
    registry.set(TypeKey::of::<String>(), Rc::new(12_u8));

    match registry.get::<String>() {
        Err(Error::TypeMismatch { key, expected }) => {
            assert_eq!(key, TypeKey::of::<String>());
            assert!(expected.contains("String"));
        }
        other => panic!("Expected TypeMismatch error, got {other:?}"),
    }
}

#[test]
fn test_set_factory_with_precomputed_key() {
    let registry = Registry::new();
    let key = TypeKey::of::<String>();
    let factory = FnFactory::new(key, vec![TypeKey::of::<u8>()], |args: &[Instance]| {
        let n = args[0].downcast_ref::<u8>().copied().unwrap_or_default();
        Ok(Rc::new(format!("#{n}")) as Instance)
    });
    registry
        .register_value(3_u8)
        .set_factory(key, Rc::new(factory) as Rc<dyn Factory>);

    assert_eq!(registry.resolve::<String>().unwrap(), "#3");
}

#[test]
fn test_resolve_reports_missing_type() {
    let registry = Registry::new();

    match registry.resolve::<f64>() {
        Err(Error::DependencyNotFound {
            key,
            chain,
            factory,
        }) => {
            assert_eq!(key, TypeKey::of::<f64>());
            assert_eq!(chain.as_slice(), &[TypeKey::of::<f64>()]);
            assert!(factory.is_none());
        }
        other => panic!("Expected DependencyNotFound error, got {other:?}"),
    }
}

#[test]
fn test_get_key_for_unknown_type_is_absent() {
    let registry = Registry::new();
    assert!(registry.get_key(TypeKey::of::<Vec<u8>>()).unwrap().is_none());
    assert!(registry.resolve_key(TypeKey::of::<Vec<u8>>()).unwrap().is_none());
}

#[test]
fn test_child_sees_parent_values() {
    let parent = Rc::new(Registry::new());
    parent.register_value(10_i32);

    let child = parent.child();
    assert!(child.has_parent());
    assert!(child.is_empty());
    assert_eq!(child.get::<i32>().unwrap(), Some(10));
}

#[test]
fn test_debug_lists_bindings() {
    let registry = Registry::new();
    registry.register_value(1_u8).register_factory(|n: u8| u32::from(n));

    let debug = format!("{registry:?}");
    assert!(debug.contains("Registry"));
    assert!(debug.contains("fn(u8) -> u32"));
    assert!(debug.contains("has_parent: false"));
}
