// src/cli.rs
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::warn;

/// Command line: one positional path, no flags.
///
/// Help and version flags are disabled so every argument, dashes included, is data.
#[derive(Debug, Parser)]
#[command(
    name = "validate_user",
    about = "Validate a JSON user profile with a hosted language model",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to the JSON profile to validate
    #[arg(allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Extra arguments are ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

impl Cli {
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }

    /// Parse `args` (program name first). Whenever an argument is present the first one is the input.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match Self::try_parse_from(args.clone()) {
            Ok(cli) if cli.input.is_some() || args.len() < 2 => cli,
            Ok(_) => Self::raw(&args),
            Err(e) => {
                warn!(error = %e, "Falling back to raw argument handling");
                Self::raw(&args)
            }
        }
    }

    fn raw(args: &[OsString]) -> Self {
        Self {
            input: args.get(1).map(PathBuf::from),
            rest: args.iter().skip(2).cloned().collect(),
        }
    }
}
