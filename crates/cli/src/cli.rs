use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rule-based folder suggestions for files an agent is about to save.
///
/// Reads a `.folder-rules` file (allowed top-level folders plus optional
/// `pattern:` hints) and either serves it to an agent over MCP or answers
/// one-off queries from the shell.
#[derive(Parser, Debug)]
#[command(name = "folder-enforcer", version, about = "Rule-based folder suggestions")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Ruleset file to use instead of ./.folder-rules and ~/.folder-rules
    #[arg(long, global = true, env = "FOLDER_RULES_PATH")]
    pub rules: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the MCP server on stdin/stdout
    Serve,

    /// Suggest where a file should go
    Suggest {
        /// What the file is, e.g. "Acme Corp invoice March"
        description: String,

        /// "markdown", "pdf", "code", "folder", or an extension like ".py"
        #[arg(long = "type", default_value = "file")]
        file_type: String,

        /// Validate this relative path instead of suggesting one
        #[arg(long)]
        path: Option<String>,
    },

    /// Check a relative path against the allowed folders (exit code 1 if rejected)
    Validate {
        path: String,
    },

    /// Print the active ruleset
    Rules,

    /// Generate a starter ruleset from the folders in a directory
    Init {
        /// Directory whose sub-folders become categories
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Where to write the ruleset (default: <dir>/.folder-rules)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Overwrite an existing ruleset
        #[arg(long)]
        force: bool,

        /// Print the generated ruleset instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show where rulesets are looked up and which one is active
    Where {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_defaults() {
        let args = CliArgs::try_parse_from(["folder-enforcer", "suggest", "standing desk research"])
            .unwrap();
        match args.command {
            Command::Suggest {
                description,
                file_type,
                path,
            } => {
                assert_eq!(description, "standing desk research");
                assert_eq!(file_type, "file");
                assert!(path.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_rules_flag_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "folder-enforcer",
            "validate",
            "clients/acme.pdf",
            "--rules",
            "/tmp/my-rules",
        ])
        .unwrap();
        assert_eq!(args.rules, Some(PathBuf::from("/tmp/my-rules")));
        assert!(matches!(args.command, Command::Validate { .. }));
    }

    #[test]
    fn test_init_flags() {
        let args = CliArgs::try_parse_from([
            "folder-enforcer",
            "init",
            "--dir",
            "/home/me",
            "--force",
        ])
        .unwrap();
        match args.command {
            Command::Init {
                dir,
                output,
                force,
                dry_run,
            } => {
                assert_eq!(dir, PathBuf::from("/home/me"));
                assert!(output.is_none());
                assert!(force);
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(CliArgs::try_parse_from(["folder-enforcer"]).is_err());
    }
}
