//! The scan, match, plan and apply pipeline behind one handle

use crate::model::{Action, Package};
use crate::planner::determine_patch_actions;
use crate::sync::{ActionOutcome, Reporter, RunSummary, SyncMode, Synchronizer};
use crate::{InstalledMatcher, PackageScanner, PathResolver, Result};

/// A game project plus the local packages that feed it.
#[derive(Debug, Clone)]
pub struct Project {
    resolver: PathResolver,
    synchronizer: Synchronizer,
}

impl Project {
    pub fn new(resolver: PathResolver) -> Self {
        Self::with_synchronizer(resolver, Synchronizer::new())
    }

    pub fn with_synchronizer(resolver: PathResolver, synchronizer: Synchronizer) -> Self {
        Self {
            resolver,
            synchronizer,
        }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn require_project_exists(&self) -> Result<()> {
        self.resolver.require_project_exists()
    }

    /// Scan for local packages and record which modules are installed.
    pub async fn list_local_packages(&self) -> Result<Vec<Package>> {
        let mut packages = PackageScanner::new(&self.resolver)
            .find_local_packages()
            .await?;

        let matcher = InstalledMatcher::new(&self.resolver);
        for package in &mut packages {
            matcher.match_package(package);
        }

        Ok(packages)
    }

    /// Scan, match and plan in one go.
    pub async fn plan_patch_actions(&self) -> Result<Vec<Action>> {
        let packages = self.list_local_packages().await?;
        Ok(determine_patch_actions(&packages))
    }

    pub fn apply_action(
        &self,
        action: &Action,
        mode: SyncMode,
        reporter: &mut dyn Reporter,
    ) -> Result<ActionOutcome> {
        self.synchronizer.apply_action(action, mode, reporter)
    }

    pub fn apply_all(
        &self,
        actions: &[Action],
        mode: SyncMode,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary> {
        self.synchronizer.apply_all(actions, mode, reporter)
    }
}
