use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown flow '{0}'")]
    UnknownFlow(String),
}
