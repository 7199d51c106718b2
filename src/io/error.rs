//! Error types and context management for puzzle loading and solving
//!
//! An exhausted search is not an error: the solver reports it as a plain
//! `false`. Errors here are malformed input, I/O failures, and violated
//! solver preconditions.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// A required section of the puzzle file was not found
    MissingSection {
        /// Name of the missing section
        section: &'static str,
    },

    /// A tile line is missing one of its tokens
    MissingField {
        /// Which token was expected
        field: &'static str,
        /// 1-based line number in the puzzle file
        line: usize,
    },

    /// A tile refers to a picture that is not in the header
    UnknownPicture {
        /// Picture name as written
        name: String,
        /// 1-based line number in the puzzle file
        line: usize,
    },

    /// The picture header lists the same name twice
    DuplicatePicture {
        /// Picture name as written
        name: String,
        /// 1-based line number in the puzzle file
        line: usize,
    },

    /// A head/tail tag starts with something other than `h` or `t`
    InvalidPolarity {
        /// Offending token
        token: String,
        /// 1-based line number in the puzzle file
        line: usize,
    },

    /// Wrong number of tiles for the grid or schedule
    TileCount {
        /// Number of tiles required
        expected: usize,
        /// Number of tiles supplied
        found: usize,
    },

    /// A schedule entry refers to a position that is not filled before it
    InvalidSchedule {
        /// Schedule position holding the bad entry
        position: usize,
        /// Neighbour position it refers to
        neighbour: usize,
    },

    /// The solver reached a check whose neighbour slot is empty
    ///
    /// Cannot happen with a validated schedule; reported separately from an
    /// exhausted search because it means the search itself is broken.
    UnplacedNeighbour {
        /// Position being filled
        position: usize,
        /// Neighbour position that was empty
        neighbour: usize,
    },

    /// Tile index exceeds the tile pool
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Size of the tile pool
        max_tiles: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSection { section } => {
                write!(f, "Puzzle definition has no {section} section")
            }
            Self::MissingField { field, line } => {
                write!(f, "Line {line}: missing {field}")
            }
            Self::UnknownPicture { name, line } => {
                write!(f, "Line {line}: unknown picture '{name}'")
            }
            Self::DuplicatePicture { name, line } => {
                write!(f, "Line {line}: picture '{name}' is listed twice")
            }
            Self::InvalidPolarity { token, line } => {
                write!(
                    f,
                    "Line {line}: '{token}' is not a head/tail tag (expected h or t)"
                )
            }
            Self::TileCount { expected, found } => {
                write!(f, "Expected {expected} tiles, found {found}")
            }
            Self::InvalidSchedule {
                position,
                neighbour,
            } => {
                write!(
                    f,
                    "Schedule position {position} checks position {neighbour}, which is not placed before it"
                )
            }
            Self::UnplacedNeighbour {
                position,
                neighbour,
            } => {
                write!(
                    f,
                    "Position {position} was checked against empty position {neighbour}"
                )
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (pool size {max_tiles})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// 1-based line number in the puzzle file
    pub line: Option<usize>,
}

/// Enriches parse errors with the line they came from
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the line number
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line number applied
    fn with_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let AlgorithmError::MissingField { line, .. }
            | AlgorithmError::UnknownPicture { line, .. }
            | AlgorithmError::DuplicatePicture { line, .. }
            | AlgorithmError::InvalidPolarity { line, .. } = &mut error
                && let Some(number) = context.line
            {
                *line = number;
            }
            error
        })
    }

    fn with_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext { line: Some(line) })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation it came from
pub fn file_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> AlgorithmError {
    let path = path.into();
    move |source| AlgorithmError::FileSystem {
        path,
        operation,
        source,
    }
}
