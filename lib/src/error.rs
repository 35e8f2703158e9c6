use thiserror::Error;

pub type Result<T = (), E = Error> = ::std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO Error: {0}")]
    Io(#[from] ::std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] crate::parser::ParseError),
    #[error("unknown argument referenced: {0}")]
    UnknownArgument(String),
    #[error("invalid argument name: {0:?}")]
    InvalidArgumentName(String),
    #[error("at most {max} arguments are supported, got {actual}")]
    TooManyArguments { max: usize, actual: usize },
}
