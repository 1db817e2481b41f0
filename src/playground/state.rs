//! Playground selection state.

use tracing::debug;

use crate::components::{ListItem, ListKind};

use super::fixtures;

/// Accounts, projects and the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundState {
    accounts: Vec<ListItem>,
    projects: Vec<ListItem>,
    active_account: Option<ListItem>,
    active_project: Option<ListItem>,
    active_label: String,
    active_image: Option<String>,
    active_type: ListKind,
    side_nav_open: bool,
}

impl PlaygroundState {
    /// Start with the first account and the first project selected.
    pub fn new(accounts: Vec<ListItem>, projects: Vec<ListItem>, side_nav_open: bool) -> Self {
        let active_account = accounts.first().cloned();
        let active_project = projects.first().cloned();
        let active_label = match (&active_account, &active_project) {
            (Some(account), Some(project)) => format!("{} / {}", account.label, project.label),
            (Some(only), None) | (None, Some(only)) => only.label.clone(),
            (None, None) => String::new(),
        };
        let active_image = active_project.as_ref().and_then(|p| p.image.clone());
        Self {
            accounts,
            projects,
            active_account,
            active_project,
            active_label,
            active_image,
            active_type: ListKind::Project,
            side_nav_open,
        }
    }

    pub fn from_fixtures(side_nav_open: bool) -> Self {
        Self::new(fixtures::account_list(), fixtures::project_list(), side_nav_open)
    }

    pub fn accounts(&self) -> &[ListItem] {
        &self.accounts
    }

    pub fn projects(&self) -> &[ListItem] {
        &self.projects
    }

    pub fn active_account(&self) -> Option<&ListItem> {
        self.active_account.as_ref()
    }

    pub fn active_project(&self) -> Option<&ListItem> {
        self.active_project.as_ref()
    }

    /// `"<account> / <project>"`, or whichever half is selected.
    pub fn active_label(&self) -> &str {
        &self.active_label
    }

    pub fn active_image(&self) -> Option<&str> {
        self.active_image.as_deref()
    }

    /// The kind of the last selection.
    pub fn active_type(&self) -> ListKind {
        self.active_type
    }

    pub fn side_nav_open(&self) -> bool {
        self.side_nav_open
    }

    /// Select the account or project `id`. Returns `false`, leaving the state
    /// alone, when no item of `kind` has that id.
    ///
    /// The image always follows the active project, also when an account is
    /// picked.
    pub fn set_active_project_or_account(&mut self, kind: ListKind, id: &str) -> bool {
        match kind {
            ListKind::Account => {
                let Some(account) = self.accounts.iter().find(|a| a.id == id).cloned() else {
                    return false;
                };
                self.active_label = match &self.active_project {
                    Some(project) => format!("{} / {}", account.label, project.label),
                    None => account.label.clone(),
                };
                self.active_image = self.active_project.as_ref().and_then(|p| p.image.clone());
                self.active_account = Some(account);
            }
            ListKind::Project => {
                let Some(project) = self.projects.iter().find(|p| p.id == id).cloned() else {
                    return false;
                };
                self.active_label = match &self.active_account {
                    Some(account) => format!("{} / {}", account.label, project.label),
                    None => project.label.clone(),
                };
                self.active_image = project.image.clone();
                self.active_project = Some(project);
            }
        }
        self.active_type = kind;
        debug!(?kind, id, label = %self.active_label, "selection changed");
        true
    }

    /// Flip side nav visibility and return the new value.
    pub fn toggle_side_nav(&mut self) -> bool {
        self.side_nav_open = !self.side_nav_open;
        self.side_nav_open
    }
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self::from_fixtures(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state() -> PlaygroundState {
        PlaygroundState::new(
            vec![ListItem::new("a1", "Acme"), ListItem::new("a2", "Globex")],
            vec![
                ListItem::new("p1", "Tower").with_image("tower.png"),
                ListItem::new("p2", "Bridge"),
            ],
            true,
        )
    }

    // ── Initial selection ────────────────────────────────────────────

    #[test]
    fn starts_with_first_items() {
        let s = state();
        assert_eq!(s.active_label(), "Acme / Tower");
        assert_eq!(s.active_image(), Some("tower.png"));
        assert_eq!(s.active_type(), ListKind::Project);
        assert!(s.side_nav_open());
    }

    #[test]
    fn label_with_one_list_empty() {
        let s = PlaygroundState::new(vec![ListItem::new("a1", "Acme")], Vec::new(), false);
        assert_eq!(s.active_label(), "Acme");
        assert_eq!(s.active_image(), None);
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn pick_account_keeps_project_image() {
        let mut s = state();
        assert!(s.set_active_project_or_account(ListKind::Account, "a2"));
        assert_eq!(s.active_label(), "Globex / Tower");
        assert_eq!(s.active_image(), Some("tower.png"));
        assert_eq!(s.active_type(), ListKind::Account);
        assert_eq!(s.active_account().map(|a| a.id.as_str()), Some("a2"));
    }

    #[test]
    fn pick_project_takes_its_image() {
        let mut s = state();
        assert!(s.set_active_project_or_account(ListKind::Project, "p2"));
        assert_eq!(s.active_label(), "Acme / Bridge");
        assert_eq!(s.active_image(), None);
        assert_eq!(s.active_type(), ListKind::Project);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut s = state();
        let before = s.clone();
        assert!(!s.set_active_project_or_account(ListKind::Project, "a1"));
        assert_eq!(s, before);
    }

    #[test]
    fn toggle_side_nav_flips() {
        let mut s = state();
        assert!(!s.toggle_side_nav());
        assert!(s.toggle_side_nav());
    }
}
