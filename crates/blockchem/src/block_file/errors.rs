use std::{io, path::PathBuf};

use itertools::Itertools;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum BlockNameError {
    #[diagnostic(help("block names are used as file names, so at least one letter is needed"))]
    #[error("the block name is empty")]
    Empty,

    #[diagnostic(help("block names may only contain letters and underscores"))]
    #[error("the block name {name:?} contains invalid characters: {}", format_characters(.characters))]
    InvalidCharacters { name: String, characters: Vec<char> },
}

#[derive(Debug, Diagnostic, Error)]
#[diagnostic(help("check that the output directory exists and is writable"))]
#[error("failed to write the block file {}", .path.display())]
pub struct BlockFileError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl BlockFileError {
    pub(crate) const fn new(path: PathBuf, source: io::Error) -> Self {
        Self { path, source }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

fn format_characters(characters: &[char]) -> String {
    characters.iter().map(|c| format!("{c:?}")).join(", ")
}
