use std::fmt::{self, Display, Formatter};

use super::{
    errors::{InvalidResiduesError, SequenceError},
    validation::validate_sequence,
};
use crate::{AminoAcid, Sequence};

impl Sequence {
    /// Parses free text into a sequence, ignoring case and surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if nothing but whitespace was given, or
    /// [`SequenceError::InvalidResidues`] if any character isn't a one-letter amino acid code.
    pub fn parse(text: impl AsRef<str>) -> Result<Self, SequenceError> {
        let normalized = text.as_ref().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(SequenceError::Empty);
        }

        let invalid = validate_sequence(&normalized);
        if !invalid.is_empty() {
            let error = InvalidResiduesError::new(normalized, invalid);
            return Err(SequenceError::InvalidResidues(Box::new(error)));
        }

        // NOTE: Every character has just been validated, so nothing is dropped by this `filter_map()`
        let residues = normalized.chars().filter_map(AminoAcid::from_code).collect();
        Ok(Self(residues))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    // NOTE: A `Sequence` can't be empty, but clippy insists this exists alongside `len()`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.0.iter().copied()
    }

    /// The number of times `residue` occurs in the sequence
    #[must_use]
    pub fn count(&self, residue: AminoAcid) -> u32 {
        let count = self.0.iter().filter(|&&r| r == residue).count();
        // NOTE: A sequence with more than `u32::MAX` residues would never fit in memory alongside its compositions
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn contains(&self, residue: AminoAcid) -> bool {
        self.0.contains(&residue)
    }

    #[must_use]
    pub fn residues(&self) -> &[AminoAcid] {
        &self.0
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for residue in &self.0 {
            write!(f, "{residue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing_tools::assert_miette_snapshot;

    use super::*;

    #[test]
    fn parse_sequences() {
        let sequence = Sequence::parse("  pepTIDE\n").unwrap();
        assert_eq!(sequence.to_string(), "PEPTIDE");
        assert_eq!(sequence.len(), 7);
        assert!(!sequence.is_empty());
        assert_eq!(sequence.count(AminoAcid::Pro), 2);
        assert_eq!(sequence.count(AminoAcid::Glu), 2);
        assert_eq!(sequence.count(AminoAcid::Cys), 0);
        assert!(sequence.contains(AminoAcid::Ile));
        assert!(!sequence.contains(AminoAcid::Met));
        assert_eq!(
            sequence.residues(),
            [
                AminoAcid::Pro,
                AminoAcid::Glu,
                AminoAcid::Pro,
                AminoAcid::Thr,
                AminoAcid::Ile,
                AminoAcid::Asp,
                AminoAcid::Glu
            ]
        );
    }

    #[test]
    fn empty_sequences() {
        assert_eq!(Sequence::parse(""), Err(SequenceError::Empty));
        assert_eq!(Sequence::parse(" \t "), Err(SequenceError::Empty));
    }

    #[test]
    fn invalid_sequences() {
        let Err(SequenceError::InvalidResidues(error)) = Sequence::parse("axqz") else {
            panic!("expected invalid residues");
        };
        assert_eq!(error.sequence(), "AXQZ");
        assert_eq!(error.residues().positions(), [2, 4]);
        assert_eq!(error.residues().characters(), ['X', 'Z']);
        assert_eq!(
            error.to_string(),
            "Characters 'X' and 'Z' at positions 2 and 4 do not correspond to any amino acids."
        );
    }

    #[test]
    fn invalid_sequence_reports() {
        assert_miette_snapshot!(Sequence::parse("PEPTIDEX"), @r"
          × Character 'X' at position 8 does not correspond to any amino acid.
           ╭────
         1 │ PEPTIDEX
           ·        ┬
           ·        ╰── 'X' is not an amino acid
           ╰────
          help: only the twenty standard one-letter codes (ACDEFGHIKLMNPQRSTVWY) are accepted
        ");
        assert_miette_snapshot!(Sequence::parse("axqz"), @r"
          × Characters 'X' and 'Z' at positions 2 and 4 do not correspond to any amino acids.
           ╭────
         1 │ AXQZ
           ·  ┬ ┬
           ·  │ ╰── 'Z' is not an amino acid
           ·  ╰── 'X' is not an amino acid
           ╰────
          help: only the twenty standard one-letter codes (ACDEFGHIKLMNPQRSTVWY) are accepted
        ");
    }
}
