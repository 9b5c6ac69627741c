//! Deployment plan: the fixed configuration driving a deploy run.
//!
//! The shipped binary always deploys the same repository with the same
//! batches; there is deliberately no flag or environment override for any
//! of these values. Tests construct custom plans directly.

/// Everything a deploy run needs to know: target repository, branch,
/// and the file batches pushed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    /// Remote repository URL registered as `origin`.
    pub remote_url: &'static str,

    /// Branch created at init and used as push target.
    pub branch: &'static str,

    /// Files staged and pushed first, before the larger batches.
    /// Missing files are skipped silently.
    pub essential_files: &'static [&'static str],

    /// Paths (files or directories) each pushed as an independent
    /// stage/commit/push cycle, in order. Missing paths are skipped.
    pub additional_paths: &'static [&'static str],

    /// Message for the initial essentials commit.
    pub initial_commit_message: &'static str,
}

impl Default for DeployPlan {
    fn default() -> Self {
        Self {
            remote_url: "https://github.com/ehudso7/nexus-studio.git",
            branch: "main",
            essential_files: &[
                "package.json",
                "REPOSITORY_MANIFEST.md",
                "SAAS_REQUIREMENTS.md",
            ],
            additional_paths: &[
                "packages/domain-lock",
                "apps/web/middleware.ts",
                ".github",
                "docs",
                "nginx",
            ],
            initial_commit_message: "Initial commit: NexStudio - SaaS Platform\n\
                \n\
                NexStudio is an enterprise-grade visual app builder available exclusively at https://nexstudio.dev\n\
                \n\
                This is a SaaS-only platform with domain-lock enforcement.\n\
                Repository: https://github.com/ehudso7/nexus-studio",
        }
    }
}
