use std::collections::BTreeSet;

use super::{composition, mass};
use crate::{
    AminoAcid, CysteineTreatment, ElementalComposition, LabeledAtoms, Massive, Modifications,
    MonoisotopicMass, Peptide, Sequence,
};

impl Peptide {
    /// Builds a peptide, eagerly calculating its composition and monoisotopic mass
    ///
    /// Only the modifications that apply to `sequence` are kept: a cysteine treatment without any cysteines, a
    /// methionine oxidation flag without any methionines, and labeled residues that never occur are all dropped.
    #[must_use]
    pub fn new(sequence: Sequence, modifications: &Modifications) -> Self {
        let composition = composition::composition(&sequence, modifications);
        let labeled_atoms = composition::labeled_atoms(&sequence, modifications);
        let mass = mass::monoisotopic_mass(&sequence, modifications);

        let cysteine_treatment = sequence
            .contains(AminoAcid::Cys)
            .then_some(modifications.cysteine_treatment());
        let methionine_oxidized = sequence
            .contains(AminoAcid::Met)
            .then_some(modifications.methionine_oxidized());
        let isotope_labeled = modifications
            .isotope_labeled()
            .iter()
            .copied()
            .filter(|&residue| sequence.contains(residue))
            .collect();

        Self {
            sequence,
            cysteine_treatment,
            methionine_oxidized,
            isotope_labeled,
            composition,
            labeled_atoms,
            mass,
        }
    }

    /// Builds a new peptide from the same sequence, but with different modifications
    #[must_use]
    pub fn with_modifications(&self, modifications: &Modifications) -> Self {
        Self::new(self.sequence.clone(), modifications)
    }

    #[must_use]
    pub const fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// The treatment of this peptide's cysteines, or `None` if it doesn't contain any
    #[must_use]
    pub const fn cysteine_treatment(&self) -> Option<CysteineTreatment> {
        self.cysteine_treatment
    }

    /// Whether this peptide's methionines are oxidized, or `None` if it doesn't contain any
    #[must_use]
    pub const fn methionine_oxidized(&self) -> Option<bool> {
        self.methionine_oxidized
    }

    #[must_use]
    pub const fn isotope_labeled(&self) -> &BTreeSet<AminoAcid> {
        &self.isotope_labeled
    }

    /// The normal-isotope atoms of this peptide; atoms of labeled residues are in [`Self::labeled_atoms()`]
    #[must_use]
    pub const fn composition(&self) -> ElementalComposition {
        self.composition
    }

    #[must_use]
    pub const fn labeled_atoms(&self) -> LabeledAtoms {
        self.labeled_atoms
    }

    /// The modifications actually applied to this peptide
    #[must_use]
    pub fn modifications(&self) -> Modifications {
        Modifications::new()
            .with_cysteine_treatment(self.cysteine_treatment.unwrap_or_default())
            .with_methionine_oxidized(self.methionine_oxidized.unwrap_or_default())
            .with_isotope_labeled(self.isotope_labeled.iter().copied())
    }
}

impl Massive for Peptide {
    fn monoisotopic_mass(&self) -> MonoisotopicMass {
        self.mass
    }
}
