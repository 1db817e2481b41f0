//! Class-name composition helpers.
//!
//! Widgets carry an optional space-separated class list supplied by the host.
//! Sub-elements derive their own classes from it so host stylesheets can
//! target e.g. `my-switcher-switcher-item`.

/// Derive `"<class>-<suffix>"` for every class in a space-separated list.
///
/// Returns `None` when no class list was supplied or it contains no classes.
pub fn create_custom_class_names(class_name: Option<&str>, suffix: &str) -> Option<String> {
    let derived: Vec<String> = class_name?
        .split_whitespace()
        .map(|class| format!("{class}-{suffix}"))
        .collect();
    if derived.is_empty() {
        None
    } else {
        Some(derived.join(" "))
    }
}
