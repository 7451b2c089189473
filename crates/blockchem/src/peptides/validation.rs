use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::{AminoAcid, InvalidResidue, InvalidResidues};

/// Scans `sequence` for characters that aren't one-letter amino acid codes
///
/// The sequence is expected to already be uppercase. Positions are 1-based and count characters, not bytes. Returns
/// an empty [`InvalidResidues`] for a fully valid sequence; deciding what to do with an invalid one is up to the
/// caller.
#[must_use]
pub fn validate_sequence(sequence: &str) -> InvalidResidues {
    let invalid = sequence
        .char_indices()
        .enumerate()
        .filter(|&(_, (_, character))| AminoAcid::from_code(character).is_none())
        .map(|(index, (offset, character))| InvalidResidue {
            position: index + 1,
            character,
            offset,
        })
        .collect();
    InvalidResidues(invalid)
}

impl InvalidResidues {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InvalidResidue> {
        self.0.iter()
    }

    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.0.iter().map(InvalidResidue::position).collect()
    }

    #[must_use]
    pub fn characters(&self) -> Vec<char> {
        self.0.iter().map(InvalidResidue::character).collect()
    }
}

impl InvalidResidue {
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    pub(crate) const fn offset(&self) -> usize {
        self.offset
    }
}

impl<'r> IntoIterator for &'r InvalidResidues {
    type Item = &'r InvalidResidue;
    type IntoIter = std::slice::Iter<'r, InvalidResidue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for InvalidResidues {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => Ok(()),
            [InvalidResidue {
                position,
                character,
                ..
            }] => write!(
                f,
                "Character '{character}' at position {position} does not correspond to any amino acid."
            ),
            residues => {
                let characters = and_join(residues.iter().map(|r| format!("'{}'", r.character)));
                let positions = and_join(residues.iter().map(|r| r.position));
                write!(
                    f,
                    "Characters {characters} at positions {positions} do not correspond to any amino acids."
                )
            }
        }
    }
}

// NOTE: Only called with two or more items, joining them like "a, b and c"
fn and_join<T: Display>(items: impl ExactSizeIterator<Item = T>) -> String {
    let last = items.len() - 1;
    items
        .enumerate()
        .map(|(i, item)| match i {
            0 => item.to_string(),
            i if i == last => format!(" and {item}"),
            _ => format!(", {item}"),
        })
        .join("")
}
