use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// TOML parse / deserialization error.
    Parse(String),
    /// A value parsed but is out of range (bad delimiter, unknown color, ...).
    Validation(String),
    /// Settings could not be rendered back to TOML.
    Serialize(String),
    /// IO error reading the settings file.
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Validation(msg) => write!(f, "config validation error: {msg}"),
            Self::Serialize(msg) => write!(f, "config serialize error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
