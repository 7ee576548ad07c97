// src/exit.rs
//! Standardized process exit codes for `designlint`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::DesignLintError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DesignLintExit {
    /// Operation completed successfully, nothing to report.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input could not be decoded (snapshot, theme, ignore file, index).
    InvalidInput = 2,
    /// Lint finished and found style violations.
    ViolationsFound = 6,
}

impl DesignLintExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Decoding failures are the caller's input, everything else is ours.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<DesignLintError>() {
            Some(
                DesignLintError::Json { .. }
                | DesignLintError::Toml(_)
                | DesignLintError::UnknownProfile(_)
                | DesignLintError::BulkIndex { .. }
                | DesignLintError::InvalidConfig(_),
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for DesignLintExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
