//! Structural errors of the GlobalNav adapter.

use super::node::NavSlot;

/// Misuse of the composition API. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("unsupported child kind: {0}")]
    UnsupportedKind(String),
    #[error("only one {0} is allowed")]
    DuplicateSingleton(NavSlot),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        assert_eq!(
            AdapterError::UnsupportedKind("Slot".into()).to_string(),
            "unsupported child kind: Slot"
        );
        assert_eq!(
            AdapterError::DuplicateSingleton(NavSlot::SideNav).to_string(),
            "only one SideNav is allowed"
        );
    }
}
