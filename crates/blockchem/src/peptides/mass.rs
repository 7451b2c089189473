//! Monoisotopic mass calculation for peptides

use crate::{
    AminoAcid, Element, HeavyIsotope, Massive, Modifications, MonoisotopicMass, Sequence,
    atoms::WATER,
};

/// Calculates the monoisotopic mass of `sequence` (plus one water) after applying `modifications`
///
/// This mirrors [`composition()`](super::composition::composition), but accumulates masses rather than atoms; heavy
/// isotopes are included in the mass. The result is rounded to [`MonoisotopicMass::DECIMAL_PLACES`].
#[must_use]
pub fn monoisotopic_mass(sequence: &Sequence, modifications: &Modifications) -> MonoisotopicMass {
    let mut mass: MonoisotopicMass = sequence.iter().map(|r| r.monoisotopic_mass()).sum();
    mass += WATER.monoisotopic_mass();

    let cysteines = sequence.count(AminoAcid::Cys);
    if cysteines > 0 {
        if let Some(group) = modifications.cysteine_treatment().alkylation_group() {
            let substitution = group.monoisotopic_mass() - Element::Hydrogen.monoisotopic_mass();
            mass += substitution * cysteines;
        }
    }

    let methionines = sequence.count(AminoAcid::Met);
    if methionines > 0 && modifications.methionine_oxidized() {
        mass += Element::Oxygen.monoisotopic_mass() * methionines;
    }

    for &residue in modifications.isotope_labeled() {
        let occurrences = sequence.count(residue);
        let residue = residue.composition();
        mass += HeavyIsotope::Carbon13.mass_shift() * (residue[Element::Carbon] * occurrences);
        mass += HeavyIsotope::Nitrogen15.mass_shift() * (residue[Element::Nitrogen] * occurrences);
    }

    mass.rounded()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::CysteineTreatment;

    use super::*;

    fn mass(sequence: &str, modifications: &Modifications) -> Decimal {
        monoisotopic_mass(&Sequence::parse(sequence).unwrap(), modifications).value()
    }

    fn unmodified(sequence: &str) -> Decimal {
        mass(sequence, &Modifications::new())
    }

    #[test]
    fn unmodified_masses() {
        // Alanine residue (71.037113784) plus water (18.010564684)
        assert_eq!(unmodified("A"), dec!(89.047678468));
        assert_eq!(unmodified("PEPTIDE"), dec!(799.359964024));
        assert_eq!(unmodified("CC"), dec!(224.028934600));
    }

    #[test]
    fn masses_match_compositions() {
        use crate::peptides::composition::composition;

        let modifications = Modifications::new()
            .with_cysteine_treatment(CysteineTreatment::Acid)
            .with_methionine_oxidized(true);
        for sequence in ["A", "PEPTIDE", "CMC", "ACDEFGHIKLMNPQRSTVWY"] {
            let sequence = Sequence::parse(sequence).unwrap();
            assert_eq!(
                monoisotopic_mass(&sequence, &modifications),
                composition(&sequence, &modifications)
                    .monoisotopic_mass()
                    .rounded()
            );
        }
    }

    #[test]
    fn residue_order_is_irrelevant() {
        assert_eq!(unmodified("PEPTIDE"), unmodified("EDITPEP"));
        assert_eq!(unmodified("WYC"), unmodified("CWY"));
    }

    #[test]
    fn cysteine_treatments() {
        let treated = |treatment| mass("CC", &Modifications::new().with_cysteine_treatment(treatment));
        assert_eq!(treated(CysteineTreatment::Untreated), dec!(224.028934600));
        // Carbamidomethylation adds 57.02146372 per cysteine
        assert_eq!(treated(CysteineTreatment::Amide), dec!(338.071862040));
        // Carboxymethylation adds 58.005479304 per cysteine
        assert_eq!(treated(CysteineTreatment::Acid), dec!(340.039893208));

        let amide = Modifications::new().with_cysteine_treatment(CysteineTreatment::Amide);
        assert_eq!(mass("PEPTIDE", &amide), unmodified("PEPTIDE"));
    }

    #[test]
    fn methionine_oxidation() {
        let oxidized = Modifications::new().with_methionine_oxidized(true);
        assert_eq!(unmodified("M"), dec!(149.051049770));
        assert_eq!(mass("M", &oxidized), dec!(165.045964390));
        assert_eq!(
            mass("MAM", &oxidized) - unmodified("MAM"),
            dec!(31.98982924)
        );
        assert_eq!(mass("PEPTIDE", &oxidized), unmodified("PEPTIDE"));
    }

    #[test]
    fn isotope_labeling() {
        let labeled = Modifications::new().with_isotope_labeled([AminoAcid::Lys]);
        // Heavy lysine (13C6 15N2) is 8.0141988 heavier than its light form
        assert_eq!(mass("MK", &labeled), dec!(285.160211582));
        assert_eq!(mass("MK", &labeled) - unmodified("MK"), dec!(8.0141988));
        assert_eq!(mass("KK", &labeled) - unmodified("KK"), dec!(16.0283976));

        let labeled = Modifications::new().with_isotope_labeled([AminoAcid::Arg]);
        // Heavy arginine (13C6 15N4) is 10.00826859 heavier than its light form
        assert_eq!(mass("R", &labeled) - unmodified("R"), dec!(10.00826859));
        assert_eq!(mass("MK", &labeled), unmodified("MK"));
    }

    #[test]
    fn repeated_calculations_are_identical() {
        let modifications = Modifications::new()
            .with_cysteine_treatment(CysteineTreatment::Amide)
            .with_methionine_oxidized(true)
            .with_isotope_labeled([AminoAcid::Lys, AminoAcid::Arg]);
        let first = mass("CMKR", &modifications);
        let second = mass("CMKR", &modifications);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}
