use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Preset tag not in the known list.
    UnknownPreset(String),
    /// Condition text that doesn't read as `<op><number>`.
    InvalidCondition(String),
    /// No header cell matches the requested column.
    UnknownColumn(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(tag) => write!(f, "unknown preset: '{tag}'"),
            Self::InvalidCondition(text) => {
                write!(f, "invalid condition '{text}' (expected e.g. '>100', '<=5', '!=0')")
            }
            Self::UnknownColumn(hint) => write!(f, "no header matches column '{hint}'"),
        }
    }
}

impl std::error::Error for EngineError {}
