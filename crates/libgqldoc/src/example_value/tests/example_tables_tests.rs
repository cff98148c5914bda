use crate::example_value::example_tables;
use std::collections::HashSet;

fn assert_unique_keys<'a>(table: &str, keys: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for key in keys {
        assert!(seen.insert(key), "`{key}` is listed twice in {table}");
    }
}

#[test]
fn field_examples_have_unique_names() {
    assert_unique_keys(
        "FIELD_EXAMPLES",
        example_tables::FIELD_EXAMPLES.iter().map(|(name, _)| *name),
    );
}

#[test]
fn id_prefixes_have_unique_parents_and_end_with_underscore() {
    assert_unique_keys(
        "ID_PREFIXES",
        example_tables::ID_PREFIXES.iter().map(|(parent, _)| *parent),
    );
    for (parent, prefix) in example_tables::ID_PREFIXES {
        assert!(prefix.ends_with('_'), "prefix for `{parent}` should end with `_`");
    }
}

#[test]
fn type_examples_have_unique_types() {
    assert_unique_keys(
        "TYPE_EXAMPLES",
        example_tables::TYPE_EXAMPLES.iter().map(|(type_name, _)| *type_name),
    );
}

#[test]
fn decimal_examples_look_like_decimals() {
    let examples =
        example_tables::DECIMAL_RULES.iter()
            .map(|rule| rule.example)
            .chain(std::iter::once(example_tables::DECIMAL_FALLBACK));
    for example in examples {
        let (whole, fraction) = example.split_once('.').expect("has a decimal point");
        assert!(whole.chars().all(|ch| ch.is_ascii_digit()), "{example}");
        assert_eq!(fraction.len(), 2, "{example}");
    }
}
