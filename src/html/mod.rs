mod sections;

use serde_json::Value;

pub const DEFAULT_PRIMARY: &str = "#9b87f5";
pub const DEFAULT_SECONDARY: &str = "#6E59A5";

/// Render the complete preview document for a project.
///
/// Pure and deterministic: identical inputs produce byte-identical output.
/// Section fragments are emitted in a fixed order (home, about, contact)
/// regardless of how the keys are ordered in `sections`; keys outside that
/// set have no rendering rule and are skipped. The `style` tag is stored
/// with the project but does not yet select a theme variant.
///
/// `title` and `description` are embedded verbatim, without HTML escaping.
pub fn render(title: &str, description: &str, _style: &str, sections: &str, colors: &Value) -> String {
    let primary = colors
        .get("primary")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PRIMARY);
    let secondary = colors
        .get("secondary")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_SECONDARY);

    let keys: Vec<&str> = sections.split(',').collect();

    let mut body = String::new();
    if keys.contains(&"home") {
        body.push_str(&sections::hero(title, description));
    }
    if keys.contains(&"about") {
        body.push_str(sections::ABOUT);
    }
    if keys.contains(&"contact") {
        body.push_str(sections::CONTACT);
    }

    sections::shell(title, primary, secondary, &body)
}
