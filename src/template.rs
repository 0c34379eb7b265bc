//! Placeholder substitution for command templates
//!
//! A placeholder is `<` followed by one or more word characters (letters,
//! digits, underscore) and `>`, e.g. `<env>` or `<port_2>`. Anything else in
//! angle brackets, such as `< x >` or `<a-b>`, is left alone.
//!
//! Each distinct name is prompted for once, in order of first appearance,
//! and every occurrence of that name receives the same value. Replacement
//! happens in a single pass over the original template, so a value that
//! itself looks like a placeholder is inserted verbatim.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::ui::input::{Result, UserInput};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\w+)>").expect("placeholder pattern is valid"));

/// Distinct placeholder names in `template`, in order of first appearance
///
/// # Examples
///
/// ```
/// use clm::template::placeholders;
///
/// assert_eq!(placeholders("deploy <env> to <env> on <host>"), vec!["env", "host"]);
/// assert!(placeholders("ls -la").is_empty());
/// ```
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        if let Some(name) = caps.get(1).map(|m| m.as_str())
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    names
}

/// Replace every placeholder that has a value in `values`
///
/// Placeholders without a value are kept as written.
#[must_use]
pub fn apply(template: &str, values: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Prompt for each placeholder in `template` and return the filled-in command
///
/// Answers are trimmed of surrounding whitespace. A template without
/// placeholders is returned unchanged and nothing is prompted.
///
/// # Returns
///
/// * `Ok(Some(String))` - The substituted command
/// * `Ok(None)` - The user cancelled one of the prompts
///
/// # Errors
///
/// Returns `InputError` if reading an answer fails.
pub fn substitute(template: &str, input: &dyn UserInput) -> Result<Option<String>> {
    let names = placeholders(template);
    if names.is_empty() {
        return Ok(Some(template.to_string()));
    }

    let mut values = HashMap::with_capacity(names.len());
    for name in names {
        let Some(answer) = input.prompt_text(&format!("Enter value for {name}"), true)? else {
            return Ok(None);
        };
        values.insert(name.to_string(), answer.trim().to_string());
    }

    tracing::debug!(count = values.len(), "substituted placeholders");
    Ok(Some(apply(template, &values)))
}
