//! Command-line interface definitions.
//!
//! The deploy behavior itself takes no arguments: target repository,
//! branch and file batches are fixed in [`crate::cli::deploy::DeployPlan`].
//! Only presentation is configurable here.

use clap::{ColorChoice, Parser};

/// ghpush deploy CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_valid() {
        let cli = Cli::try_parse_from(["ghpush"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_presentation_flags() {
        let cli = Cli::try_parse_from(["ghpush", "--color", "never", "-v"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.verbose);
    }
}
