use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown field '{0}' (expected name, hobby or age)")]
    UnknownField(String),
    #[error("'{command}' is missing its {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid duration '{0}' (expected milliseconds)")]
    InvalidDuration(String),
}
