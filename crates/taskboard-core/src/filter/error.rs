//! Error types for the strict filter parser entry point.

use thiserror::Error;

/// A specialized Result type for strict filter parsing.
pub type FilterResult<T> = Result<T, FilterError>;

/// Failures the strict parser can report.
///
/// The fail-open entry point ([`FilterParser::parse`]) never surfaces these;
/// they exist so diagnostics ([`FilterParser::try_parse`]) can say what was
/// wrong with a query before it degrades to match-all.
///
/// [`FilterParser::parse`]: super::FilterParser::parse
/// [`FilterParser::try_parse`]: super::FilterParser::try_parse
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// An unexpected token was encountered during parsing.
    #[error("unexpected token: {token}")]
    UnexpectedToken {
        /// The unexpected token that was encountered.
        token: String,
    },

    /// The query ended where an operand was still required.
    #[error("unexpected end of query")]
    UnexpectedEndOfInput,

    /// A `(` group was never closed.
    #[error("unmatched opening parenthesis")]
    UnmatchedParenthesis,
}

impl FilterError {
    /// Creates an unexpected token error.
    pub fn unexpected_token(token: impl Into<String>) -> Self {
        FilterError::UnexpectedToken {
            token: token.into(),
        }
    }
}
