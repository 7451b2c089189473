use std::fmt::{self, Display, Formatter};

use crate::{AminoAcid, ElementalComposition, Massive, MonoisotopicMass};

impl AminoAcid {
    /// All twenty standard residues, in order of their one-letter codes
    pub const ALL: [Self; 20] = [
        Self::Ala,
        Self::Cys,
        Self::Asp,
        Self::Glu,
        Self::Phe,
        Self::Gly,
        Self::His,
        Self::Ile,
        Self::Lys,
        Self::Leu,
        Self::Met,
        Self::Asn,
        Self::Pro,
        Self::Gln,
        Self::Arg,
        Self::Ser,
        Self::Thr,
        Self::Val,
        Self::Trp,
        Self::Tyr,
    ];

    /// Looks up a residue by its (uppercase) one-letter code
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'A' => Self::Ala,
            'C' => Self::Cys,
            'D' => Self::Asp,
            'E' => Self::Glu,
            'F' => Self::Phe,
            'G' => Self::Gly,
            'H' => Self::His,
            'I' => Self::Ile,
            'K' => Self::Lys,
            'L' => Self::Leu,
            'M' => Self::Met,
            'N' => Self::Asn,
            'P' => Self::Pro,
            'Q' => Self::Gln,
            'R' => Self::Arg,
            'S' => Self::Ser,
            'T' => Self::Thr,
            'V' => Self::Val,
            'W' => Self::Trp,
            'Y' => Self::Tyr,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Ala => 'A',
            Self::Cys => 'C',
            Self::Asp => 'D',
            Self::Glu => 'E',
            Self::Phe => 'F',
            Self::Gly => 'G',
            Self::His => 'H',
            Self::Ile => 'I',
            Self::Lys => 'K',
            Self::Leu => 'L',
            Self::Met => 'M',
            Self::Asn => 'N',
            Self::Pro => 'P',
            Self::Gln => 'Q',
            Self::Arg => 'R',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Val => 'V',
            Self::Trp => 'W',
            Self::Tyr => 'Y',
        }
    }

    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Ala => "Ala",
            Self::Cys => "Cys",
            Self::Asp => "Asp",
            Self::Glu => "Glu",
            Self::Phe => "Phe",
            Self::Gly => "Gly",
            Self::His => "His",
            Self::Ile => "Ile",
            Self::Lys => "Lys",
            Self::Leu => "Leu",
            Self::Met => "Met",
            Self::Asn => "Asn",
            Self::Pro => "Pro",
            Self::Gln => "Gln",
            Self::Arg => "Arg",
            Self::Ser => "Ser",
            Self::Thr => "Thr",
            Self::Val => "Val",
            Self::Trp => "Trp",
            Self::Tyr => "Tyr",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ala => "Alanine",
            Self::Cys => "Cysteine",
            Self::Asp => "Aspartic acid",
            Self::Glu => "Glutamic acid",
            Self::Phe => "Phenylalanine",
            Self::Gly => "Glycine",
            Self::His => "Histidine",
            Self::Ile => "Isoleucine",
            Self::Lys => "Lysine",
            Self::Leu => "Leucine",
            Self::Met => "Methionine",
            Self::Asn => "Asparagine",
            Self::Pro => "Proline",
            Self::Gln => "Glutamine",
            Self::Arg => "Arginine",
            Self::Ser => "Serine",
            Self::Thr => "Threonine",
            Self::Val => "Valine",
            Self::Trp => "Tryptophan",
            Self::Tyr => "Tyrosine",
        }
    }

    /// The composition of the residue: the free amino acid minus the H2O lost when forming a peptide bond
    #[must_use]
    pub const fn composition(self) -> ElementalComposition {
        let (c, h, n, o, s) = match self {
            Self::Ala => (3, 5, 1, 1, 0),
            Self::Cys => (3, 5, 1, 1, 1),
            Self::Asp => (4, 5, 1, 3, 0),
            Self::Glu => (5, 7, 1, 3, 0),
            Self::Phe => (9, 9, 1, 1, 0),
            Self::Gly => (2, 3, 1, 1, 0),
            Self::His => (6, 7, 3, 1, 0),
            Self::Ile => (6, 11, 1, 1, 0),
            Self::Lys => (6, 12, 2, 1, 0),
            Self::Leu => (6, 11, 1, 1, 0),
            Self::Met => (5, 9, 1, 1, 1),
            Self::Asn => (4, 6, 2, 2, 0),
            Self::Pro => (5, 7, 1, 1, 0),
            Self::Gln => (5, 8, 2, 2, 0),
            Self::Arg => (6, 12, 4, 1, 0),
            Self::Ser => (3, 5, 1, 2, 0),
            Self::Thr => (4, 7, 1, 2, 0),
            Self::Val => (5, 9, 1, 1, 0),
            Self::Trp => (11, 10, 2, 1, 0),
            Self::Tyr => (9, 9, 1, 2, 0),
        };
        ElementalComposition::new(c, h, n, o, s)
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = char;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

impl Display for AminoAcid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// NOTE: Residue masses are never stored, only derived from their compositions, so the two can't disagree
impl Massive for AminoAcid {
    fn monoisotopic_mass(&self) -> MonoisotopicMass {
        self.composition().monoisotopic_mass()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn codes_round_trip() {
        for residue in AminoAcid::ALL {
            assert_eq!(AminoAcid::try_from(residue.code()), Ok(residue));
        }
        let codes: String = AminoAcid::ALL.iter().map(|aa| aa.code()).collect();
        assert_eq!(codes, "ACDEFGHIKLMNPQRSTVWY");
    }

    #[test]
    fn only_standard_codes() {
        for code in ['B', 'J', 'O', 'U', 'X', 'Z', 'a', 'c', '1', '*', ' ', 'Å'] {
            assert_eq!(AminoAcid::try_from(code), Err(code));
        }
        let known = ('\0'..='\u{ff}')
            .filter_map(AminoAcid::from_code)
            .count();
        assert_eq!(known, 20);
    }

    #[test]
    fn residue_names() {
        assert_eq!(AminoAcid::Trp.abbreviation(), "Trp");
        assert_eq!(AminoAcid::Trp.name(), "Tryptophan");
        assert_eq!(AminoAcid::Asp.name(), "Aspartic acid");
        assert_eq!(AminoAcid::Gln.to_string(), "Q");
    }

    #[test]
    fn residue_compositions() {
        assert_eq!(AminoAcid::Ala.composition().to_string(), "C3H5NO");
        assert_eq!(AminoAcid::Cys.composition().to_string(), "C3H5NOS");
        assert_eq!(AminoAcid::Trp.composition().to_string(), "C11H10N2O");
        assert_eq!(AminoAcid::Arg.composition().to_string(), "C6H12N4O");
        // Leucine and isoleucine are isomers
        assert_eq!(AminoAcid::Leu.composition(), AminoAcid::Ile.composition());
    }

    #[test]
    fn residue_masses() {
        // The masses here have been checked against https://www.unimod.org/masses.html
        let mass = |aa: AminoAcid| aa.monoisotopic_mass().value();
        assert_eq!(mass(AminoAcid::Gly), dec!(57.021463720));
        assert_eq!(mass(AminoAcid::Ala), dec!(71.037113784));
        assert_eq!(mass(AminoAcid::Cys), dec!(103.009184958));
        assert_eq!(mass(AminoAcid::Lys), dec!(128.094963012));
        assert_eq!(mass(AminoAcid::Met), dec!(131.040485086));
        assert_eq!(mass(AminoAcid::Trp), dec!(186.079312948));
    }
}
