//! Placeholder discovery and substitution for prompt content.
//!
//! Placeholders use the `{{name}}` syntax; the name is any run of
//! characters up to the first `}`, taken verbatim.

use regex::Regex;

/// Extract distinct placeholder names from content, in order of first appearance
pub fn extract_parameters(content: &str) -> Vec<String> {
    let re = Regex::new(r"\{\{([^}]+)\}\}").unwrap();
    let mut names: Vec<String> = Vec::new();

    for cap in re.captures_iter(content) {
        let name = cap.get(1).unwrap().as_str();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Replace every `{{key}}` occurrence with its value, one key at a time
/// in slice order. Keys missing from `values` stay as literal text.
pub fn render_template(content: &str, values: &[(String, String)]) -> String {
    let mut rendered = content.to_string();

    for (name, value) in values {
        let token = format!("{{{{{name}}}}}");
        rendered = rendered.replace(&token, value);
    }

    rendered
}
