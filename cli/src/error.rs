use thiserror::Error;

pub type Result<T = (), E = Error> = ::std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Engine(#[from] af_engine::Error),
    #[error("-a/--argument is required for this command")]
    MissingArgument,
    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
}
