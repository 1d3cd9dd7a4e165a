use std::fmt;

pub const INVALID_INVOCATION_MESSAGE: &str = "Invalid decision, invalid CLT command.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    InvalidInvocation,
    InvalidDimensions { rows: usize, columns: usize },
    Unsolvable,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidInvocation => write!(f, "{}", INVALID_INVOCATION_MESSAGE),
            MazeError::InvalidDimensions { rows, columns } => write!(
                f,
                "Invalid maze dimensions {}x{}: rows and columns must be at least 1.",
                rows, columns
            ),
            MazeError::Unsolvable => {
                write!(f, "No path from the entrance to the exit.")
            }
        }
    }
}

impl std::error::Error for MazeError {}
