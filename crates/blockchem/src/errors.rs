use miette::Diagnostic;
use thiserror::Error;

use crate::{
    block_file::{BlockFileError, BlockNameError},
    peptides::errors::SequenceError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop a single block file from being generated
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    BlockName(#[from] BlockNameError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    BlockFile(#[from] BlockFileError),
}
