//! Check command implementation

use colored::Colorize;
use plugsync_core::Project;

use crate::error::Result;

/// Print the resolved folders, then fail if the game project is missing.
pub fn run_check(project: &Project) -> Result<()> {
    let resolver = project.resolver();

    println!("{}", "Project Folders".bold());
    println!();
    println!("{}:      {}", "Root".dimmed(), resolver.root_folder());
    println!("{}: {}", "Workspace".dimmed(), resolver.workspace_folder());
    println!("{}:      {}", "Game".dimmed(), resolver.game_folder());
    println!("{}:   {}", "Plugins".dimmed(), resolver.plugins_folder());
    println!();

    project.require_project_exists()?;

    println!("{} Game project found.", "OK".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugsync_core::{Config, ErrorKind, PathResolver};
    use plugsync_test_utils::TestWorkspace;

    use crate::error::CliError;

    fn project(ws: &TestWorkspace) -> Project {
        Project::new(PathResolver::new(ws.root_folder(), &Config::default()).unwrap())
    }

    #[test]
    fn test_check_passes_with_game_folder() {
        let ws = TestWorkspace::new();
        assert!(run_check(&project(&ws)).is_ok());
    }

    #[test]
    fn test_check_fails_without_game_folder() {
        let ws = TestWorkspace::without_game();
        let err = run_check(&project(&ws)).unwrap_err();
        assert!(
            matches!(&err, CliError::Core(e) if e.kind() == ErrorKind::ProjectNotFound),
            "unexpected error: {err:?}"
        );
    }
}
