//! Mock data for the playground.

use crate::components::ListItem;

pub const LOGO_TEXT: &str = "BIM 360";
pub const MODULE_NAME: &str = "Document Management";
pub const SUPER_HEADER_LABEL: &str = "Global Construction";
pub const HEADER_LABEL: &str = "Oakwood Medical Center";

pub fn account_list() -> Vec<ListItem> {
    vec![
        ListItem::new("1", "Global Construction"),
        ListItem::new("2", "Pacific Architects"),
        ListItem::new("3", "Northwind Engineering"),
    ]
}

pub fn project_list() -> Vec<ListItem> {
    vec![
        ListItem::new("1", "Oakwood Medical Center").with_image("images/oakwood.png"),
        ListItem::new("2", "Harbor Bridge Retrofit"),
        ListItem::new("3", "Maple Street Housing").with_image("images/maple-street.png"),
    ]
}

/// Titles of the side nav links.
pub fn side_nav_links() -> Vec<&'static str> {
    vec!["Autodesk Home", "Help Center", "Release Notes"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_within_each_list() {
        for list in [account_list(), project_list()] {
            let ids: HashSet<_> = list.iter().map(|item| item.id.clone()).collect();
            assert_eq!(ids.len(), list.len());
        }
    }

    #[test]
    fn side_nav_header_names_the_first_account_and_project() {
        assert_eq!(account_list()[0].label, SUPER_HEADER_LABEL);
        assert_eq!(project_list()[0].label, HEADER_LABEL);
    }
}
