use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use pwdgen_core::VERSION;

/// pwdgen - a minimal password generator that copies to the clipboard
#[derive(Parser)]
#[command(name = "pwdgen")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the key file and password store
    #[arg(long, global = true, env = "PWDGEN_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,

    /// Debug mode (print diagnostics on failure)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `gen` command
#[derive(Args)]
pub struct GenArgs {
    /// Name to store the password under
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Password length (defaults to 25, or the configured default)
    #[arg(value_name = "LENGTH")]
    pub length: Option<usize>,
}

/// Arguments for the `get` command
#[derive(Args)]
pub struct GetArgs {
    /// Name the password was stored under
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize pwdgen so you can start using it
    Init,

    /// Generate a password for NAME and copy it to the clipboard
    Gen(GenArgs),

    /// Copy the password stored for NAME to the clipboard
    Get(GetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Short command name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init => "init",
            Commands::Gen(_) => "gen",
            Commands::Get(_) => "get",
            Commands::Completions(_) => "completions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_gen_length_is_optional() {
        let cli = Cli::try_parse_from(["pwdgen", "gen", "github"]).unwrap();
        match cli.command {
            Commands::Gen(args) => {
                assert_eq!(args.name, "github");
                assert_eq!(args.length, None);
            }
            _ => panic!("expected gen"),
        }

        let cli = Cli::try_parse_from(["pwdgen", "gen", "github", "40"]).unwrap();
        match cli.command {
            Commands::Gen(args) => assert_eq!(args.length, Some(40)),
            _ => panic!("expected gen"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pwdgen", "get", "mail", "-d"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.command.name(), "get");
    }

    #[cfg(unix)]
    #[test]
    fn test_data_dir_accepts_non_utf8_path() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let dir = OsString::from_vec(b"/tmp/pwd\xffgen".to_vec());
        let args = vec![
            OsString::from("pwdgen"),
            OsString::from("--data-dir"),
            dir.clone(),
            OsString::from("init"),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from(dir)));
    }

    #[test]
    fn test_gen_requires_name() {
        assert!(Cli::try_parse_from(["pwdgen", "gen"]).is_err());
    }

    #[test]
    fn test_non_numeric_length_rejected() {
        assert!(Cli::try_parse_from(["pwdgen", "gen", "github", "long"]).is_err());
    }
}
