use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GumpError {
    #[error("Unknown layout command: {0}")]
    UnknownCommand(String),
    #[error("Missing argument `{name}` for `{command}`")]
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },
    #[error("Invalid number for `{name}`: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("Text id {id} out of range ({count} lines)")]
    TextIdOutOfRange { id: usize, count: usize },
    #[error("Empty layout command")]
    EmptyCommand,
}

pub type Result<T> = std::result::Result<T, GumpError>;
