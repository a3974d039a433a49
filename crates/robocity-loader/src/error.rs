use thiserror::Error;

/// Why a map could not be loaded. Line numbers start at 1.
#[derive(Debug, Error)]
pub enum CityFormatError {
    #[error("cannot read map: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected BeginCity")]
    MissingHeader { line: usize },

    #[error("line {line}: map ended before {expected}")]
    UnexpectedEnd { line: usize, expected: &'static str },

    #[error("line {line}: unknown section {found:?}")]
    UnknownSection { line: usize, found: String },

    #[error("line {line}: malformed {record} record: {reason}")]
    Malformed {
        line: usize,
        record: &'static str,
        reason: String,
    },

    #[error("line {line}: expected {record} number {expected}, found {found}")]
    OutOfSequence {
        line: usize,
        record: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: place {place} is not defined")]
    UnknownPlace { line: usize, place: usize },

    #[error("line {line}: {found:?} is not a direction")]
    UnknownDirection { line: usize, found: String },

    #[error("line {line}: place {place} already holds an item called {id}")]
    DuplicateItem {
        line: usize,
        place: usize,
        id: String,
    },

    #[error("the map defines no places")]
    NoPlaces,
}

impl CityFormatError {
    /// The offending line, when the error is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            CityFormatError::MissingHeader { line }
            | CityFormatError::UnexpectedEnd { line, .. }
            | CityFormatError::UnknownSection { line, .. }
            | CityFormatError::Malformed { line, .. }
            | CityFormatError::OutOfSequence { line, .. }
            | CityFormatError::UnknownPlace { line, .. }
            | CityFormatError::UnknownDirection { line, .. }
            | CityFormatError::DuplicateItem { line, .. } => Some(*line),
            CityFormatError::Io(_) | CityFormatError::NoPlaces => None,
        }
    }
}
