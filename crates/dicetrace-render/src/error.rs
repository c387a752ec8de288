use std::fmt;

/// Result type for dicetrace-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Formatting-invariant violations in the trace handed to the renderer.
///
/// A correct evaluator never produces these shapes; hitting one means the
/// contract between evaluator and renderer is broken, so the render call
/// fails outright instead of degrading the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A named operator applied to something other than 1 or 2 arguments.
    OperatorArity { callee: String, count: usize },
    /// A piped call with no piped-in head argument.
    PipeWithoutHead,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OperatorArity { callee, count } => write!(
                f,
                "invalid argument count for operator `{}`: expected 1 or 2, got {}",
                callee, count
            ),
            Error::PipeWithoutHead => {
                write!(f, "piped call has no piped-in argument")
            }
        }
    }
}

impl std::error::Error for Error {}
