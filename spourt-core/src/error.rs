use crate::types::StemId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("no stem with id {0}")]
    UnknownStem(StemId),

    #[error("the root stem cannot be removed")]
    RootRemoval,
}

pub type TreeResult<T> = Result<T, TreeError>;
