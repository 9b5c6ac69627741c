//! Git command invocation.
//!
//! All repository mutation goes through the `git` CLI rather than an
//! in-process implementation, so the tool behaves exactly like the same
//! commands typed by hand (credential helpers, hooks, global config all
//! apply).

use crate::utils::exec::{Cmd, FilterRule};
use crate::{debug, log};
use std::path::Path;

/// git chatter that is noise on success.
static GIT_FILTER: FilterRule = FilterRule::new(&["hint:", "Initialized empty Git repository"]);

/// Runs a single git subcommand in a working tree.
///
/// The seam between deployment orchestration and the actual `git` binary.
/// Implementations never propagate errors; a failed command is reported
/// and collapses to `false`.
pub trait GitRunner {
    /// Run `git <args>` with `root` as working directory.
    ///
    /// Returns true iff the command exited successfully. On failure the
    /// captured stderr is printed and `false` is returned.
    fn run(&self, root: &Path, args: &[&str]) -> bool;
}

/// `GitRunner` backed by the system `git` binary.
pub struct ShellGit;

impl GitRunner for ShellGit {
    fn run(&self, root: &Path, args: &[&str]) -> bool {
        debug!("git"; "git {}", args.join(" "));
        match Cmd::new("git").args(args).cwd(root).filter(&GIT_FILTER).run() {
            Ok(_) => true,
            Err(e) => {
                log!("git"; "{e:#}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failure_is_false() {
        // Nonexistent working directory makes the spawn itself fail.
        let ok = ShellGit.run(Path::new("/definitely/not/a/dir"), &["status"]);
        assert!(!ok);
    }
}
