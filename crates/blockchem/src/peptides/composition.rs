//! Atom counting for peptides

use crate::{
    AminoAcid, Element, ElementalComposition, LabeledAtoms, Modifications, Sequence, atoms::WATER,
};

/// Counts the atoms of `sequence` (plus one water) after applying `modifications`
///
/// Carbons and nitrogens belonging to isotope-labeled residues are left out of the result; they are reported
/// separately by [`labeled_atoms()`].
#[must_use]
pub fn composition(sequence: &Sequence, modifications: &Modifications) -> ElementalComposition {
    let mut composition: ElementalComposition = sequence.iter().map(AminoAcid::composition).sum();
    composition += WATER;

    let cysteines = sequence.count(AminoAcid::Cys);
    if cysteines > 0 {
        if let Some(group) = modifications.cysteine_treatment().alkylation_group() {
            composition += thiol_substitution(group) * cysteines;
        }
    }

    let methionines = sequence.count(AminoAcid::Met);
    if methionines > 0 && modifications.methionine_oxidized() {
        composition += ElementalComposition::default().with_count(Element::Oxygen, methionines);
    }

    let labeled = labeled_atoms(sequence, modifications);
    composition.remove(Element::Carbon, labeled.carbon_13());
    composition.remove(Element::Nitrogen, labeled.nitrogen_15());

    composition
}

/// Counts the C-13 and N-15 atoms contributed by the isotope-labeled residues of `sequence`
#[must_use]
pub fn labeled_atoms(sequence: &Sequence, modifications: &Modifications) -> LabeledAtoms {
    modifications
        .isotope_labeled()
        .iter()
        .map(|&residue| {
            let occurrences = sequence.count(residue);
            let residue = residue.composition();
            LabeledAtoms::new(
                residue[Element::Carbon] * occurrences,
                residue[Element::Nitrogen] * occurrences,
            )
        })
        .sum()
}

// NOTE: The alkylating group takes the place of the thiol hydrogen, so one hydrogen is lost from the residue
fn thiol_substitution(group: ElementalComposition) -> ElementalComposition {
    group.with_count(Element::Hydrogen, group[Element::Hydrogen] - 1)
}

#[cfg(test)]
mod tests {
    use crate::CysteineTreatment;

    use super::*;

    fn unmodified(sequence: &str) -> ElementalComposition {
        composition(&Sequence::parse(sequence).unwrap(), &Modifications::new())
    }

    #[test]
    fn unmodified_compositions() {
        assert_eq!(unmodified("A"), ElementalComposition::new(3, 7, 1, 2, 0));
        assert_eq!(unmodified("G").to_string(), "C2H5NO2");
        assert_eq!(unmodified("PEPTIDE").to_string(), "C34H53N7O15");
        assert_eq!(unmodified("MCW").to_string(), "C19H26N4O4S2");
    }

    #[test]
    fn water_is_always_present() {
        for residue in AminoAcid::ALL {
            let composition = unmodified(&residue.to_string());
            assert!(composition[Element::Hydrogen] >= 2);
            assert!(composition[Element::Oxygen] >= 1);
        }
    }

    #[test]
    fn residue_order_is_irrelevant() {
        assert_eq!(unmodified("PEPTIDE"), unmodified("EDITPEP"));
        assert_eq!(unmodified("ACK"), unmodified("KAC"));
    }

    #[test]
    fn cysteine_treatments() {
        let sequence = Sequence::parse("CC").unwrap();
        let treated = |treatment| {
            let modifications = Modifications::new().with_cysteine_treatment(treatment);
            composition(&sequence, &modifications)
        };

        let untreated = treated(CysteineTreatment::Untreated);
        assert_eq!(untreated.to_string(), "C6H12N2O3S2");
        assert_eq!(
            treated(CysteineTreatment::Amide),
            untreated + ElementalComposition::new(4, 6, 2, 2, 0)
        );
        assert_eq!(
            treated(CysteineTreatment::Acid),
            untreated + ElementalComposition::new(4, 4, 0, 4, 0)
        );

        // Without any cysteines, the treatment is ignored
        let sequence = Sequence::parse("AG").unwrap();
        let modifications = Modifications::new().with_cysteine_treatment(CysteineTreatment::Amide);
        assert_eq!(composition(&sequence, &modifications), unmodified("AG"));
    }

    #[test]
    fn methionine_oxidation() {
        let sequence = Sequence::parse("PEPMIDE").unwrap();
        let oxidized = Modifications::new().with_methionine_oxidized(true);
        assert_eq!(
            composition(&sequence, &oxidized),
            unmodified("PEPMIDE") + ElementalComposition::new(0, 0, 0, 1, 0)
        );

        let sequence = Sequence::parse("MAM").unwrap();
        assert_eq!(
            composition(&sequence, &oxidized)[Element::Oxygen],
            unmodified("MAM")[Element::Oxygen] + 2
        );

        let sequence = Sequence::parse("PEPTIDE").unwrap();
        assert_eq!(composition(&sequence, &oxidized), unmodified("PEPTIDE"));
    }

    #[test]
    fn isotope_labeling() {
        let sequence = Sequence::parse("MK").unwrap();
        let labeled = Modifications::new().with_isotope_labeled([AminoAcid::Lys]);
        assert_eq!(unmodified("MK").to_string(), "C11H23N3O3S");
        assert_eq!(
            composition(&sequence, &labeled).to_string(),
            "C5H23NO3S"
        );
        assert_eq!(labeled_atoms(&sequence, &labeled), LabeledAtoms::new(6, 2));

        // Labeled residues that are absent change nothing
        let labeled = Modifications::new().with_isotope_labeled([AminoAcid::Arg]);
        assert_eq!(composition(&sequence, &labeled), unmodified("MK"));
        assert!(labeled_atoms(&sequence, &labeled).is_empty());

        // Every occurrence of a labeled residue is counted
        let sequence = Sequence::parse("KAKR").unwrap();
        let labeled = Modifications::new().with_isotope_labeled([AminoAcid::Lys, AminoAcid::Arg]);
        assert_eq!(labeled_atoms(&sequence, &labeled), LabeledAtoms::new(18, 8));
        assert_eq!(
            composition(&sequence, &labeled),
            ElementalComposition::new(3, 43, 1, 5, 0)
        );
    }

    #[test]
    fn combined_modifications() {
        let sequence = Sequence::parse("CMK").unwrap();
        let modifications = Modifications::new()
            .with_cysteine_treatment(CysteineTreatment::Amide)
            .with_methionine_oxidized(true)
            .with_isotope_labeled([AminoAcid::Lys]);
        // C3H5NOS + C5H9NOS + C6H12N2O + H2O + C2H3NO + O - [13C]6 - [15N]2
        assert_eq!(
            composition(&sequence, &modifications).to_string(),
            "C10H31N3O6S2"
        );
    }
}
