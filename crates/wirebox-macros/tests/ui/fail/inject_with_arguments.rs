//! Error: #[inject] is a bare marker.
#![allow(dead_code)]

use wirebox_macros::Inject;

#[derive(Inject)]
struct Handler {
    #[inject(optional)]
    name: String,
}

fn main() {}
