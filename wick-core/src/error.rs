use thiserror::Error;

/// Unified error type for the wick workspace.
///
/// Transient network failures never surface here; connectors absorb them
/// with cooldown-retry. What remains is data that could not be understood,
/// invalid arguments, upstream calls that abort an operation, and series
/// file I/O.
#[derive(Debug, Error)]
pub enum WickError {
    /// Issues with upstream or on-disk data (wrong arity, unparsable fields).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An upstream endpoint failed in a way that aborts the operation.
    #[error("{endpoint} failed: {msg}")]
    Upstream {
        /// Endpoint label, e.g. `exchangeInfo`.
        endpoint: &'static str,
        /// Human-readable failure message.
        msg: String,
    },

    /// Series file I/O failed.
    #[error("series I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Series file (de)serialization failed.
    #[error("series CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl WickError {
    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `Upstream` error for an endpoint label and message.
    pub fn upstream(endpoint: &'static str, msg: impl Into<String>) -> Self {
        Self::Upstream {
            endpoint,
            msg: msg.into(),
        }
    }
}
