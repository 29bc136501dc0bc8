//! Error types for code emission.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for codescribe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the writer and the helpers layered on it.
///
/// Every failure is synchronous and surfaces to the direct caller; the
/// writer's indentation state is unchanged on any non-[`Io`](Error::Io)
/// failure.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot increase indentation: level would reach the representable maximum")]
    #[diagnostic(
        code(codescribe::indent_overflow),
        help("check for a generation loop that opens scopes without closing them")
    )]
    IndentOverflow,

    #[error("cannot decrease indentation: level is already zero")]
    #[diagnostic(
        code(codescribe::indent_underflow),
        help("every dedent must be matched by an earlier indent")
    )]
    IndentUnderflow,

    #[error("{name} must not be empty")]
    #[diagnostic(code(codescribe::empty_argument))]
    EmptyArgument { name: &'static str },

    #[error("no open scope to close (attempted to close '{tag}')")]
    #[diagnostic(code(codescribe::unopened_scope))]
    UnopenedScope { tag: String },

    #[error("scopes closed out of order: expected to close '{expected}', got '{found}'")]
    #[diagnostic(
        code(codescribe::scope_mismatch),
        help("close scopes innermost-first, in the reverse of the order they were opened")
    )]
    ScopeMismatch { expected: String, found: String },

    #[error("scope tracker out of sync: {tracked} tracked scopes but writer level is {actual}")]
    #[diagnostic(
        code(codescribe::depth_drift),
        help("do not mix tracked scopes with manual indent/dedent calls on the same writer")
    )]
    DepthDrift { tracked: usize, actual: usize },

    #[error("failed to write to output sink")]
    #[diagnostic(code(codescribe::io))]
    Io(#[from] std::io::Error),
}
