//! Error types for connect string resolution.
//!
//! None of these ever escape [`Resolver::resolve`](crate::Resolver::resolve):
//! each one is recorded on the unresolved [`ResolvedDescriptor`](crate::ResolvedDescriptor)
//! so the caller can log why a URL could not be resolved.

use thiserror::Error;

/// Result type for the internal parse stages.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Reasons a connect string could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No URL was supplied.
    #[error("jdbc url must not be null")]
    NullInput,

    /// The URL was an empty string.
    #[error("jdbc url must not be empty")]
    EmptyInput,

    /// The URL does not start with the expected scheme.
    #[error("jdbc url has invalid prefix (expected `{expected}`)")]
    PrefixMismatch {
        /// The scheme literal that was required.
        expected: &'static str,
    },

    /// Parenthesis mismatch or premature end of input inside a descriptor.
    #[error("unbalanced descriptor at offset {position}: {message}")]
    UnbalancedDescriptor {
        /// Byte offset into the descriptor text.
        position: usize,
        /// What the parser expected.
        message: String,
    },

    /// The descriptor nests deeper than the parser accepts.
    #[error("descriptor nesting exceeds {limit} levels")]
    NestingTooDeep {
        /// Maximum accepted depth.
        limit: usize,
    },

    /// The root key is neither `DESCRIPTION` nor `DESCRIPTION_LIST`.
    #[error("unknown top-level descriptor key `{0}`")]
    UnknownTopLevelShape(String),

    /// The descriptor matched but carried no `SERVICE_NAME` or `SID`.
    #[error("descriptor has no SERVICE_NAME or SID")]
    MissingDatabaseId,

    /// Flat URL delimiters were not found where expected.
    #[error("flat url could not be split into host, port and database: {0}")]
    FlatGrammarAmbiguous(String),

    /// An internal panic was caught at the resolver boundary.
    #[error("resolver panicked: {0}")]
    Panicked(String),
}

impl ResolveError {
    /// Create an unbalanced-descriptor error.
    pub fn unbalanced(position: usize, message: impl Into<String>) -> Self {
        Self::UnbalancedDescriptor {
            position,
            message: message.into(),
        }
    }

    /// Whether the error was raised before the Tibero prefix was recognized.
    ///
    /// Such URLs belong to some other database and are reported as unknown.
    pub fn is_foreign(&self) -> bool {
        matches!(
            self,
            Self::NullInput | Self::EmptyInput | Self::PrefixMismatch { .. }
        )
    }
}
