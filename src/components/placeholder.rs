//! Placeholder text for list items without an image.

/// Initials shown in place of a missing image.
///
/// Two or more words give the first letter of the first two words; a single
/// word gives its first letter. The result is uppercased.
pub fn construct_placeholder(label: &str) -> String {
    label
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
