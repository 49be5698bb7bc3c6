//! Turning matched packages into an ordered action plan

use serde::Serialize;

use crate::model::{Action, Package};

/// One action per source folder: every patch first, then every skip, each
/// group in discovery order.
pub fn determine_patch_actions(packages: &[Package]) -> Vec<Action> {
    let (mut actions, skips): (Vec<_>, Vec<_>) = packages
        .iter()
        .flat_map(|package| {
            package
                .source_folders
                .iter()
                .map(|folder| Action::for_folder(&package.name, folder))
        })
        .partition(Action::is_patch);

    actions.extend(skips);
    actions
}

/// Counts for a planned set of actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub patches: usize,
    pub skips: usize,
}

impl PlanSummary {
    pub fn of(actions: &[Action]) -> Self {
        let patches = actions.iter().filter(|a| a.is_patch()).count();
        Self {
            patches,
            skips: actions.len() - patches,
        }
    }
}
