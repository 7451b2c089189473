use std::fmt::Display;

use miette::{Diagnostic, LabeledSpan, SourceCode};
use thiserror::Error;

use crate::InvalidResidues;

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum SequenceError {
    #[diagnostic(help("enter a sequence of one-letter amino acid codes, like PEPTIDE"))]
    #[error("the peptide sequence is empty")]
    Empty,

    #[diagnostic(transparent)]
    #[error(transparent)]
    InvalidResidues(Box<InvalidResiduesError>),
}

/// An [`InvalidResidues`] report that keeps hold of the sequence it was found in, for labelling
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("{residues}")]
pub struct InvalidResiduesError {
    sequence: String,
    residues: InvalidResidues,
}

impl InvalidResiduesError {
    pub(crate) const fn new(sequence: String, residues: InvalidResidues) -> Self {
        Self { sequence, residues }
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    #[must_use]
    pub const fn residues(&self) -> &InvalidResidues {
        &self.residues
    }
}

// NOTE: Implemented by hand, since the number of labels depends on the number of invalid residues
impl Diagnostic for InvalidResiduesError {
    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(
            "only the twenty standard one-letter codes (ACDEFGHIKLMNPQRSTVWY) are accepted",
        ))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.sequence)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.residues.iter().map(|residue| {
            let character = residue.character();
            LabeledSpan::new_with_span(
                Some(format!("'{character}' is not an amino acid")),
                (residue.offset(), character.len_utf8()),
            )
        });
        Some(Box::new(labels))
    }
}
