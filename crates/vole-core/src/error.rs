// Error — the single error type for the Vole workspace
//
// Capability checks themselves never fail: a candidate that lacks a member
// simply doesn't satisfy the descriptor, and that is a normal `false`.
// Errors exist only for misuse of the descriptor machinery itself, which
// should surface at the point of misuse rather than as a silent `false`
// from a later check.

/// All errors that can occur within Vole.
///
/// Using a single error type across the workspace simplifies propagation;
/// the variants cover descriptor misuse plus a generic message escape hatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A capability name that matches none of the built-in descriptors.
    #[error("unknown capability: {0:?}")]
    UnknownCapability(String),

    /// A caller-built descriptor that fails validation (empty member list,
    /// duplicate member names, more than one call member).
    #[error("malformed capability {name:?}: {reason}")]
    MalformedCapability { name: String, reason: String },

    /// Generic message for cases not covered above.
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an error from any string message.
    pub fn msg(s: impl Into<String>) -> Self {
        Error::Msg(s.into())
    }
}

/// Convenience Result type used throughout Vole.
pub type Result<T> = std::result::Result<T, Error>;

/// Macro for early return with a formatted error message.
/// Usage: `bail!("something went wrong: {}", detail)`
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::Msg(format!($($arg)*)))
    };
}
