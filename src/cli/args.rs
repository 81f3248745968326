//! Clap argument types for the pflake wrapper.

use clap::Parser;
use std::path::PathBuf;

/// Run flake8 with configuration from pyproject.toml.
///
/// pflake reads the `[tool.pflake]` section (falling back to
/// `[tool.flake8]`) of the nearest pyproject.toml, writes it out as a
/// legacy flake8 config file, and invokes flake8 with `--config` pointing
/// at it. All other arguments are forwarded to flake8 unchanged, so put
/// pflake's own flags before any flake8 flags.
#[derive(Parser, Debug)]
#[command(name = "pflake", version)]
pub struct Cli {
    /// Explicit path to a pyproject.toml (default: search upward from the
    /// current directory).
    #[arg(long, value_name = "PATH")]
    pub pyproject: Option<PathBuf>,

    /// Print the translated flake8 configuration and exit without running
    /// flake8.
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    /// Arguments forwarded to flake8.
    #[arg(
        value_name = "FLAKE8_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_parses_to_defaults() {
        let cli = Cli::try_parse_from(["pflake"]).unwrap();
        assert!(cli.pyproject.is_none());
        assert!(!cli.print_config);
        assert!(cli.args.is_empty());
    }

    #[test]
    fn pyproject_flag_is_consumed() {
        let cli = Cli::try_parse_from(["pflake", "--pyproject", "cfg/pyproject.toml"]).unwrap();
        assert_eq!(cli.pyproject, Some(PathBuf::from("cfg/pyproject.toml")));
    }

    #[test]
    fn unknown_flags_pass_through_to_flake8() {
        let cli =
            Cli::try_parse_from(["pflake", "--max-line-length=100", "src/", "-v"]).unwrap();
        assert_eq!(cli.args, vec!["--max-line-length=100", "src/", "-v"]);
    }

    #[test]
    fn own_flags_before_passthrough() {
        let cli = Cli::try_parse_from([
            "pflake",
            "--pyproject",
            "pyproject.toml",
            "src/",
            "--statistics",
        ])
        .unwrap();
        assert_eq!(cli.pyproject, Some(PathBuf::from("pyproject.toml")));
        assert_eq!(cli.args, vec!["src/", "--statistics"]);
    }

    #[test]
    fn print_config_flag_parses() {
        let cli = Cli::try_parse_from(["pflake", "--print-config"]).unwrap();
        assert!(cli.print_config);
    }
}
