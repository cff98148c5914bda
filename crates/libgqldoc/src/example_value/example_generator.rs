use crate::example_value::example_tables;
use crate::example_value::ExampleContext;
use crate::example_value::ExampleLiteral;
use std::collections::HashMap;
use std::sync::OnceLock;

fn field_examples() -> &'static HashMap<&'static str, ExampleLiteral> {
    static EXAMPLES: OnceLock<HashMap<&'static str, ExampleLiteral>> = OnceLock::new();
    EXAMPLES.get_or_init(|| {
        example_tables::FIELD_EXAMPLES.iter().copied().collect()
    })
}

fn id_prefixes() -> &'static HashMap<&'static str, &'static str> {
    static PREFIXES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    PREFIXES.get_or_init(|| {
        example_tables::ID_PREFIXES.iter().copied().collect()
    })
}

fn type_examples() -> &'static HashMap<&'static str, ExampleLiteral> {
    static EXAMPLES: OnceLock<HashMap<&'static str, ExampleLiteral>> = OnceLock::new();
    EXAMPLES.get_or_init(|| {
        example_tables::TYPE_EXAMPLES.iter().copied().collect()
    })
}

/// Picks a representative example value for the field, argument or input
/// field described by `ctx`.
///
/// Lookups are tried in order and the first hit wins:
///
/// 1. the field/argument name in [`FIELD_EXAMPLES`];
/// 2. `ID`-typed values and fields named `id` get a synthesized id whose
///    prefix comes from [`ID_PREFIXES`] (keyed by the parent type);
/// 3. the underlying type name in [`TYPE_EXAMPLES`];
/// 4. `Decimal` values are resolved through [`DECIMAL_RULES`].
///
/// Returns `None` when nothing applies so the caller can fall back to its
/// own default.
///
/// [`FIELD_EXAMPLES`]: example_tables::FIELD_EXAMPLES
/// [`ID_PREFIXES`]: example_tables::ID_PREFIXES
/// [`TYPE_EXAMPLES`]: example_tables::TYPE_EXAMPLES
/// [`DECIMAL_RULES`]: example_tables::DECIMAL_RULES
pub fn generate_example(ctx: &ExampleContext<'_>) -> Option<serde_json::Value> {
    let target_name = ctx.target_name();
    let type_name = ctx.underlying_type;

    if let Some(name) = target_name
        && let Some(example) = field_examples().get(name) {
        return Some(example.to_value());
    }

    if type_name == Some("ID") || target_name == Some("id") {
        let prefix =
            ctx.parent_type
                .and_then(|parent| id_prefixes().get(parent).copied())
                .unwrap_or("");
        return Some(serde_json::Value::from(format!(
            "{prefix}{}",
            example_tables::ID_SUFFIX,
        )));
    }

    let type_name = type_name?;
    if let Some(example) = type_examples().get(type_name) {
        return Some(example.to_value());
    }

    if type_name == example_tables::DECIMAL_TYPE_NAME {
        let example =
            target_name
                .and_then(|name| {
                    example_tables::DECIMAL_RULES.iter()
                        .find(|rule| rule.field_name.matches(name))
                })
                .map_or(example_tables::DECIMAL_FALLBACK, |rule| rule.example);
        return Some(serde_json::Value::from(example));
    }

    None
}
