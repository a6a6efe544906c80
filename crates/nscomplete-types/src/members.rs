//! Declared member tables for primitive values.
//!
//! Strings, vectors and numbers carry no per-value members; what they expose
//! is the fixed method set of their type.

use crate::namespace::Namespace;
use crate::object::Function;
use once_cell::sync::Lazy;

fn methods(table: &[(&str, i8)]) -> Namespace {
    table
        .iter()
        .map(|&(name, arity)| (name, Function::new(name, arity)))
        .collect()
}

pub static STRING: Lazy<Namespace> = Lazy::new(|| {
    methods(&[
        ("contains", 1),
        ("ends_with", 1),
        ("len", 0),
        ("lower", 0),
        ("replace", 2),
        ("split", 1),
        ("starts_with", 1),
        ("trim", 0),
        ("upper", 0),
    ])
});

pub static VECTOR: Lazy<Namespace> = Lazy::new(|| {
    methods(&[
        ("contains", 1),
        ("filter", 1),
        ("len", 0),
        ("map", 1),
        ("pop", 0),
        ("push", 1),
        ("reduce", 2),
        ("reverse", 0),
        ("sort", 0),
    ])
});

pub static NUMBER: Lazy<Namespace> = Lazy::new(|| {
    methods(&[
        ("abs", 0),
        ("ceil", 0),
        ("floor", 0),
        ("round", 0),
        ("sqrt", 0),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_callable() {
        for table in [&*STRING, &*VECTOR, &*NUMBER] {
            assert!(!table.is_empty());
            assert!(table.iter().all(|(_, v)| v.is_callable()));
        }
    }
}
