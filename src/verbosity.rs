//! Output verbosity shared by the CLI commands.

/// How chatty the CLI should be on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Status lines and progress bars
    #[default]
    Normal,
    /// Status plus debug logging from the library
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    pub fn show_status(self) -> bool {
        self != Self::Quiet
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "wavrec=debug",
        }
    }
}
