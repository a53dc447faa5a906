//! Function invocation tests

use std::cell::RefCell;
use std::rc::Rc;
use wirebox_domain::error::Error;
use wirebox_domain::TypeKey;
use wirebox_infrastructure::Registry;

#[test]
fn test_invoke_with_value_and_factory() {
    let registry = Registry::new();
    registry
        .register_value(42_i32)
        .register_factory(|n: i32| n.to_string());

    let seen = registry.invoke(|s: String| s).unwrap();
    assert_eq!(seen, "42");
}

#[test]
fn test_invoke_without_parameters() {
    let registry = Registry::new();
    assert_eq!(registry.invoke(|| "done").unwrap(), "done");
}

#[test]
fn test_invoke_returns_unit_and_tuples() {
    let registry = Registry::new();
    registry.register_value(3_u8).register_value(4_u16);

    let observed = RefCell::new(None);
    registry
        .invoke(|a: u8| {
            *observed.borrow_mut() = Some(a);
        })
        .unwrap();
    assert_eq!(*observed.borrow(), Some(3));

    let pair = registry.invoke(|a: u8, b: u16| (b, a)).unwrap();
    assert_eq!(pair, (4, 3));
}

#[test]
fn test_invoke_accepts_fn_once() {
    let registry = Registry::new();
    registry.register_value(10_u32);

    let owned = vec![1_u32, 2, 3];
    let total = registry
        .invoke(move |n: u32| owned.into_iter().sum::<u32>() + n)
        .unwrap();
    assert_eq!(total, 16);
}

#[test]
fn test_invoke_multi_level_factory_chain() {
    let registry = Registry::new();
    registry
        .register_value(2_u8)
        .register_factory(|n: u8| u16::from(n) * 100)
        .register_factory(|n: u16| u32::from(n) + 1)
        .register_factory(|n: u32| format!("<{n}>"));

    assert_eq!(registry.invoke(|s: String| s).unwrap(), "<201>");
}

#[test]
fn test_invoke_reports_missing_parameter() {
    let registry = Registry::new();
    registry.register_value(1_i32);

    let result = registry.invoke(|_: i32, _: f32| ());
    match result {
        Err(Error::DependencyNotFound { key, chain, .. }) => {
            assert_eq!(key, TypeKey::of::<f32>());
            assert_eq!(chain.len(), 1);
        }
        other => panic!("Expected DependencyNotFound error, got {other:?}"),
    }
}

#[test]
fn test_invoke_detects_self_loop() {
    let registry = Registry::new();
    registry.register_factory(|s: String| s);

    let result = registry.invoke(|s: String| s.len());
    match result {
        Err(err @ Error::DependencyLoop { .. }) => {
            let key = TypeKey::of::<String>();
            assert_eq!(err.chain().map(|chain| chain.as_slice()), Some(&[key, key][..]));
            assert!(err.to_string().starts_with("dependency loop:"));
        }
        other => panic!("Expected DependencyLoop error, got {other:?}"),
    }
}

#[test]
fn test_invoke_detects_indirect_loop() {
    let registry = Registry::new();
    registry
        .register_factory(|n: i64| n.to_string())
        .register_factory(|s: String| s.len())
        .register_factory(|n: usize| i64::try_from(n).unwrap_or_default());

    match registry.resolve::<String>() {
        Err(err) => {
            assert!(err.is_loop());
            let chain = err.chain().map(|chain| chain.len());
            assert_eq!(chain, Some(4));
        }
        Ok(value) => panic!("Expected DependencyLoop, got {value}"),
    }
}

#[test]
fn test_top_level_products_rebuilt() {
    let registry = Registry::new();
    registry.register_factory(|| Rc::new(RefCell::new(Vec::<u8>::new())));

    let first = registry
        .invoke(|log: Rc<RefCell<Vec<u8>>>| log)
        .unwrap();
    let second = registry
        .invoke(|log: Rc<RefCell<Vec<u8>>>| log)
        .unwrap();

    // Top-level products are rebuilt unless memoize_resolved is set
    assert!(!Rc::ptr_eq(&first, &second));

    registry.register_value(Rc::clone(&first));
    let third = registry
        .invoke(|log: Rc<RefCell<Vec<u8>>>| log)
        .unwrap();
    assert!(Rc::ptr_eq(&first, &third));
}
