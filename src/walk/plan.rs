//! Action precedence for eligible files
//!
//! The order is fixed and depends only on the run configuration:
//!
//! | list_only | archive | delete | actions          |
//! |-----------|---------|--------|------------------|
//! | yes       | any     | any    | List             |
//! | no        | yes     | no     | Archive, List    |
//! | no        | no      | yes    | Delete           |
//! | no        | yes     | yes    | Archive, Delete  |
//! | no        | no      | no     | List             |

use super::config::RunConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Archive,
    Delete,
}

/// Ordered actions applied to every eligible file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPlan(Vec<Action>);

impl ActionPlan {
    pub fn from_config(config: &RunConfig) -> Self {
        if config.list_only {
            return Self(vec![Action::List]);
        }

        let mut actions = Vec::with_capacity(2);
        if config.archive_dir.is_some() {
            actions.push(Action::Archive);
        }
        // Files that survive the run are reported
        actions.push(if config.delete {
            Action::Delete
        } else {
            Action::List
        });
        Self(actions)
    }

    pub fn actions(&self) -> &[Action] {
        &self.0
    }
}
