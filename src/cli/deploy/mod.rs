//! Deploy command: push the working directory to GitHub in batches.
//!
//! The sequence is fixed: wipe `.git`, re-init, configure, add the remote,
//! force-push the essential files, then push each additional path as its
//! own commit. Every step after init is best-effort; a failed command is
//! printed and the run continues, so a partially updated remote is
//! possible and accepted.

mod plan;

pub use plan::DeployPlan;

use crate::log;
use crate::utils::git::GitRunner;
use std::fs;
use std::path::Path;

/// Run the full deployment sequence against `root`.
///
/// Never fails from the caller's point of view: all errors are reported
/// on the console and the process still exits cleanly. The only internal
/// short-circuit is a failed `git init`, which aborts everything
/// downstream.
pub fn deploy(root: &Path, plan: &DeployPlan, git: &dyn GitRunner) {
    log!("deploy"; "🚀 Deploying to GitHub...");

    log!("deploy"; "🧹 Cleaning up old git repository...");
    clean_repository(root);

    log!("deploy"; "📁 Initializing new git repository...");
    if !init_repository(root, plan, git) {
        return;
    }

    configure_repository(root, git);

    log!("deploy"; "🔗 Adding GitHub remote...");
    add_remote(root, plan, git);

    push_essentials(root, plan, git);
    push_additional(root, plan, git);

    print_summary(plan);
}

/// Delete the local `.git` directory if present. Removal errors are
/// ignored; a stale tree that survives here surfaces at `git init`.
fn clean_repository(root: &Path) {
    let metadata = root.join(".git");
    if metadata.exists() {
        let _ = fs::remove_dir_all(&metadata);
    }
}

/// Initialize a fresh repository on the target branch.
fn init_repository(root: &Path, plan: &DeployPlan, git: &dyn GitRunner) -> bool {
    git.run(root, &["init", "-b", plan.branch])
}

/// Apply repository settings. Failures are logged and skipped.
fn configure_repository(root: &Path, git: &dyn GitRunner) {
    for (key, value) in [
        ("core.autocrlf", "false"),
        ("core.filemode", "false"),
        ("core.compression", "0"),
    ] {
        git.run(root, &["config", key, value]);
    }
}

/// Register `origin`. Fails (harmlessly) if the remote already exists.
fn add_remote(root: &Path, plan: &DeployPlan, git: &dyn GitRunner) {
    git.run(root, &["remote", "add", "origin", plan.remote_url]);
}

/// Stage the essential files that exist, commit once, force-push.
///
/// The force push overwrites remote history on the target branch
/// unconditionally.
fn push_essentials(root: &Path, plan: &DeployPlan, git: &dyn GitRunner) {
    log!("deploy"; "📝 Adding essential files...");
    for file in plan.essential_files {
        if root.join(file).exists() {
            git.run(root, &["add", file]);
        }
    }

    log!("deploy"; "💾 Creating initial commit...");
    git.run(root, &["commit", "-m", plan.initial_commit_message]);

    log!("deploy"; "⬆️  Pushing to GitHub...");
    if git.run(root, &["push", "-f", "origin", plan.branch]) {
        log!("deploy"; "✅ Successfully pushed essential files!");
    } else {
        log!("deploy"; "❌ Failed to push. You may need to authenticate with GitHub.");
        log!("deploy"; "Run: git push -f origin {}", plan.branch);
    }
}

/// Push each additional path as its own stage/commit/push cycle.
///
/// Cycles are independent: a failure anywhere in one path's cycle never
/// stops the next path. A failed stage skips that path's commit and push.
fn push_additional(root: &Path, plan: &DeployPlan, git: &dyn GitRunner) {
    log!("deploy"; "📦 Adding additional files in batches...");

    for path in plan.additional_paths {
        if root.join(path).exists() {
            log!("deploy"; "Adding {path}...");
            if git.run(root, &["add", path]) {
                git.run(root, &["commit", "-m", &format!("Add {path}")]);
                git.run(root, &["push", "origin", plan.branch]);
            }
        }
    }
}

/// Final human-readable summary.
fn print_summary(plan: &DeployPlan) {
    log!("deploy"; "✅ Deployment complete!");
    log!("deploy"; "Repository: {}", plan.remote_url);
    log!("deploy"; "Note: paths missing on disk were skipped; the essential files were pushed first.");
}

// ============================================================================
// Tests
// ============================================================================
