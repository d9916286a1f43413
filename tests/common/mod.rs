#![allow(dead_code)]

use std::{fs, path::Path};

use doodlegen::Composition;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

pub fn load_doodle(name: &str) -> Composition {
    let json = fs::read_to_string(Path::new("tests/data/doodles").join(name)).unwrap();
    Composition::from_json(&json).unwrap()
}

pub fn load_raw(name: &str) -> String {
    fs::read_to_string(Path::new("tests/data/doodles").join(name)).unwrap()
}

pub fn assert_canonical(comp: &Composition) {
    for stroke in comp.strokes() {
        for &v in stroke.xs.iter().chain(&stroke.ys) {
            assert!((0.0..=1.0).contains(&v), "coordinate out of range: {v}");
            assert_eq!(doodlegen::round_coordinate(v), v, "coordinate not rounded: {v}");
        }
    }
}
