// Common error types for lcsharp

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The scaffold tool could not be spawned or exited unsuccessfully
    #[error("Process error: {0}")]
    ProcessError(#[from] ProcessError),

    /// The interactive host failed while prompting or displaying
    #[error("Host error: {0}")]
    HostError(String),
}

/// Failure of an external tool invocation
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    NonZeroExit { program: String, status: String },
}

pub type Result<T> = std::result::Result<T, LcError>;

/// An error rendered for the terminal, with an optional hint and exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub suggestion: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_lc_error(err: &LcError) -> Self {
        let suggestion = match err {
            LcError::ProcessError(ProcessError::Spawn { program, .. }) => Some(format!(
                "Make sure '{program}' is installed and on PATH, or set [scaffold] program in lcsharp.toml."
            )),
            LcError::ProcessError(ProcessError::NonZeroExit { .. }) => {
                Some("Check the tool output above for details.".to_string())
            }
            LcError::ConfigError(_) => {
                Some("Fix lcsharp.toml or pass --config with a valid file.".to_string())
            }
            _ => None,
        };

        Self {
            message: err.to_string(),
            suggestion,
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{suggestion}");
        }
    }
}
