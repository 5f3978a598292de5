//! Property tests for resolution ordering and determinism.

use classed::{bind, Props, StyleTable, VariantDefinition};
use proptest::prelude::*;

/// Builds a table and definition where axis `i` value `j` maps to class
/// `a{i}v{j}` and base key `k` maps to class `b{k}`.
fn fixture(axes: usize, values: usize, bases: usize) -> (StyleTable, VariantDefinition) {
    let mut pairs = Vec::new();
    let mut def = VariantDefinition::new();
    for i in 0..axes {
        let mut axis = Vec::new();
        for j in 0..values {
            let key = format!("k{}_{}", i, j);
            pairs.push((key.clone(), format!("a{}v{}", i, j)));
            axis.push((format!("v{}", j), key));
        }
        def = def.axis(format!("axis{}", i), axis);
        def = def.default_variant(format!("axis{}", i), "v0");
    }
    let base_keys: Vec<String> = (0..bases).map(|k| format!("base{}", k)).collect();
    for (k, key) in base_keys.iter().enumerate() {
        pairs.push((key.clone(), format!("b{}", k)));
    }
    let table: StyleTable = pairs.into_iter().collect();
    (table, def.class_names(base_keys))
}

proptest! {
    #[test]
    fn prop_output_follows_schema_then_base_then_override(
        axes in 1usize..5,
        values in 1usize..4,
        bases in 0usize..4,
        picks in proptest::collection::vec(0usize..4, 5),
        reverse in any::<bool>(),
        extra in proptest::option::of("[a-z]{1,8}"),
    ) {
        let (table, def) = fixture(axes, values, bases);
        let classed = bind(table).derive("div", def).unwrap();

        let mut order: Vec<usize> = (0..axes).collect();
        if reverse {
            order.reverse();
        }
        let mut props = Props::new();
        for &i in &order {
            props = props.set(format!("axis{}", i), format!("v{}", picks[i] % values));
        }
        if let Some(extra) = &extra {
            props = props.class_name(extra.as_str());
        }

        let mut expected: Vec<String> = (0..axes)
            .map(|i| format!("a{}v{}", i, picks[i] % values))
            .collect();
        expected.extend((0..bases).map(|k| format!("b{}", k)));
        expected.extend(extra.clone());

        prop_assert_eq!(classed.class_name(&props), expected.join(" "));
    }

    #[test]
    fn prop_resolution_is_deterministic(
        axes in 1usize..5,
        values in 1usize..4,
        bases in 0usize..3,
        picks in proptest::collection::vec(proptest::option::of(0usize..4), 5),
    ) {
        let (table, def) = fixture(axes, values, bases);
        let first = bind(table.clone()).derive("div", def.clone()).unwrap();
        let second = bind(table).derive("div", def).unwrap();

        let mut props = Props::new();
        for i in 0..axes {
            if let Some(pick) = picks[i] {
                props = props.set(format!("axis{}", i), format!("v{}", pick % values));
            }
        }

        let once = first.class_name(&props);
        prop_assert_eq!(&once, &first.class_name(&props));
        prop_assert_eq!(&once, &second.class_name(&props));
    }

    #[test]
    fn prop_omitted_axis_matches_explicit_default(
        axes in 1usize..5,
        values in 1usize..4,
        omit in 0usize..5,
    ) {
        let omit = omit % axes;
        let (table, def) = fixture(axes, values, 1);
        let classed = bind(table).derive("div", def).unwrap();

        let mut implicit = Props::new();
        let mut explicit = Props::new();
        for i in 0..axes {
            let value = format!("v{}", (i + 1) % values);
            if i == omit {
                explicit = explicit.set(format!("axis{}", i), "v0");
            } else {
                implicit = implicit.set(format!("axis{}", i), value.clone());
                explicit = explicit.set(format!("axis{}", i), value);
            }
        }

        prop_assert_eq!(classed.class_name(&implicit), classed.class_name(&explicit));
    }
}
