use crate::example_filter::OperationExampleConfig;
use regex::Captures;
use regex::Regex;
use std::sync::OnceLock;

fn signature_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^(\s*(?:query|mutation)\s+\w+\s*)\(([^)]*)\)")
            .expect("operation signature pattern is a valid regex")
    })
}

/// Matches `operation_name(...)` invocations anywhere in the query, including
/// aliased (`alias: name(...)`) and single-line ones. The operation's own
/// signature matches too and is told apart by [`is_operation_signature()`].
fn invocation_pattern(operation_name: &str) -> Option<Regex> {
    let pattern = format!(
        r"\b({}\s*)\(([^)]+)\)",
        regex::escape(operation_name),
    );
    match Regex::new(pattern.as_str()) {
        Ok(regex) => Some(regex),
        Err(err) => {
            log::warn!(
                "Unable to match invocations of `{operation_name}`; leaving \
                its arguments unfiltered: {err}",
            );
            None
        },
    }
}

/// Whether the text preceding a match on its line is a `query` or `mutation`
/// keyword, i.e. the match is the operation signature rather than a field.
fn is_operation_signature(line_prefix: &str) -> bool {
    let before_name = line_prefix.trim_end();
    if before_name.len() == line_prefix.len() {
        return false;
    }
    ["query", "mutation"].iter().any(|keyword| {
        before_name.strip_suffix(keyword)
            .is_some_and(|rest| {
                rest.chars()
                    .next_back()
                    .is_none_or(|ch| !(ch.is_ascii_alphanumeric() || ch == '_'))
            })
    })
}

pub(super) fn filter(
    query: &str,
    operation_name: &str,
    config: &OperationExampleConfig,
) -> String {
    let mut filtered = query.to_string();

    let excluded_args = &config.exclude_arguments;
    if !excluded_args.is_empty() {
        filtered = filter_signature_variables(&filtered, excluded_args);
        if let Some(invocation) = invocation_pattern(operation_name) {
            filtered = filter_invocation_arguments(&filtered, &invocation, excluded_args);
        }
    }

    if !config.exclude_query_fields.is_empty() {
        filtered = filter_selected_fields(&filtered, &config.exclude_query_fields);
    }

    filtered
}

/// `query name($a: Int, $b: Int)` with `b` excluded becomes
/// `query name(\n  $a: Int\n)`. When every variable is excluded the
/// parentheses are dropped altogether.
fn filter_signature_variables(query: &str, excluded_args: &[String]) -> String {
    signature_pattern()
        .replacen(query, 1, |caps: &Captures<'_>| {
            let prefix = &caps[1];
            let kept = retain_arguments(&caps[2], |part| {
                part.strip_prefix('$')
                    .and_then(leading_word)
                    .is_none_or(|name| !excluded_args.iter().any(|arg| arg == name))
            });

            if kept.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}(\n  {}\n)", kept.join(",\n  "))
            }
        })
        .into_owned()
}

/// `  name(a: $a, b: $b) {` with `b` excluded becomes
/// `  name(\n    a: $a\n  ) {`. The operation signature is left alone.
fn filter_invocation_arguments(
    query: &str,
    invocation: &Regex,
    excluded_args: &[String],
) -> String {
    invocation
        .replace_all(query, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let match_start = caps.get(0).map_or(0, |m| m.start());
            let line_start = query[..match_start].rfind('\n').map_or(0, |idx| idx + 1);
            if is_operation_signature(&query[line_start..match_start]) {
                return whole.to_string();
            }

            let prefix = &caps[1];
            let kept = retain_arguments(&caps[2], |part| {
                argument_name(part)
                    .is_none_or(|name| !excluded_args.iter().any(|arg| arg == name))
            });

            if kept.is_empty() {
                prefix.trim_end().to_string()
            } else {
                format!("{prefix}(\n    {}\n  )", kept.join(",\n    "))
            }
        })
        .into_owned()
}

/// Splits a comma-separated argument list, dropping empty entries and any
/// entry rejected by `keep`. Order is preserved.
fn retain_arguments<'a>(
    arguments: &'a str,
    keep: impl Fn(&str) -> bool,
) -> Vec<&'a str> {
    arguments.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter(|part| keep(part))
        .collect()
}

/// The longest prefix of `text` made of ASCII word characters, if any.
fn leading_word(text: &str) -> Option<&str> {
    let end =
        text.find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
            .unwrap_or(text.len());
    if end == 0 {
        None
    } else {
        Some(&text[..end])
    }
}

/// The name of a `name: value` argument.
fn argument_name(part: &str) -> Option<&str> {
    let name = leading_word(part)?;
    part[name.len()..].starts_with(':').then_some(name)
}

/// The field selected by a trimmed selection-set line, i.e. a leading word
/// followed by whitespace, `{`, or the end of the line. Lines that start with
/// an argument list (`field(...)`), an alias or punctuation select nothing.
fn selected_field_name(trimmed_line: &str) -> Option<&str> {
    let name = leading_word(trimmed_line)?;
    match trimmed_line[name.len()..].chars().next() {
        None | Some('{') => Some(name),
        Some(ch) if ch.is_whitespace() => Some(name),
        Some(_) => None,
    }
}

fn brace_delta(line: &str) -> isize {
    line.chars()
        .map(|ch| match ch {
            '{' => 1,
            '}' => -1,
            _ => 0,
        })
        .sum()
}

/// Drops every line selecting an excluded field. When that line opens a
/// selection set, every following line is dropped as well until the braces
/// opened on it are closed again.
fn filter_selected_fields(query: &str, excluded_fields: &[String]) -> String {
    let mut kept_lines = vec![];
    let mut skip_depth: isize = 0;

    for line in query.split('\n') {
        if skip_depth > 0 {
            skip_depth += brace_delta(line);
            continue;
        }

        let trimmed = line.trim();
        if let Some(field_name) = selected_field_name(trimmed)
            && excluded_fields.iter().any(|field| field == field_name) {
            if trimmed.contains('{') {
                skip_depth = brace_delta(line);
            }
            continue;
        }

        kept_lines.push(line);
    }

    kept_lines.join("\n")
}
