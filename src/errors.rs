use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum LSystemError {
    /// The caller asked for fewer than one generation; the axiom itself
    /// is generation 1.
    InvalidGenerations,
}

impl std::error::Error for LSystemError {}

impl fmt::Display for LSystemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LSystemError::InvalidGenerations => {
                write!(f, "Generation count must be at least 1")
            }
        }
    }
}
