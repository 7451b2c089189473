use std::{
    fmt::{self, Display, Formatter},
    iter::Sum,
    ops::{Add, Index, Mul},
};

use crate::{Element, ElementalComposition, LabeledAtoms, Massive, MonoisotopicMass};

/// H2O, gained by every peptide from the hydrolysis of its terminal bonds
pub const WATER: ElementalComposition = ElementalComposition::new(0, 2, 0, 1, 0);

/// The –CH2–CO–NH2 group added to cysteines by iodo- or chloroacetamide
pub const ACETAMIDE_GROUP: ElementalComposition = ElementalComposition::new(2, 4, 1, 1, 0);

/// The –CH2–CO–OH group added to cysteines by iodo- or chloroacetic acid
pub const ACETIC_ACID_GROUP: ElementalComposition = ElementalComposition::new(2, 3, 0, 2, 0);

// Public API ==========================================================================================================

impl ElementalComposition {
    #[must_use]
    pub const fn new(carbons: u32, hydrogens: u32, nitrogens: u32, oxygens: u32, sulfurs: u32) -> Self {
        Self {
            carbons,
            hydrogens,
            nitrogens,
            oxygens,
            sulfurs,
        }
    }

    #[must_use]
    pub const fn count(&self, element: Element) -> u32 {
        match element {
            Element::Carbon => self.carbons,
            Element::Hydrogen => self.hydrogens,
            Element::Nitrogen => self.nitrogens,
            Element::Oxygen => self.oxygens,
            Element::Sulfur => self.sulfurs,
        }
    }

    /// Yields every element (including those with a count of zero) in Hill order
    pub fn counts(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.into_iter().map(move |e| (e, self.count(e)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts().all(|(_, count)| count == 0)
    }

    #[must_use]
    pub fn with_count(mut self, element: Element, count: u32) -> Self {
        *self.count_mut(element) = count;
        self
    }
}

impl LabeledAtoms {
    #[must_use]
    pub const fn new(carbon_13: u32, nitrogen_15: u32) -> Self {
        Self {
            carbon_13,
            nitrogen_15,
        }
    }

    #[must_use]
    pub const fn carbon_13(&self) -> u32 {
        self.carbon_13
    }

    #[must_use]
    pub const fn nitrogen_15(&self) -> u32 {
        self.nitrogen_15
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.carbon_13 == 0 && self.nitrogen_15 == 0
    }
}

// Crate-Private API ===================================================================================================

impl ElementalComposition {
    // NOTE: Callers only ever remove atoms they've previously added, so this never underflows
    pub(crate) fn remove(&mut self, element: Element, count: u32) {
        *self.count_mut(element) -= count;
    }

    fn count_mut(&mut self, element: Element) -> &mut u32 {
        match element {
            Element::Carbon => &mut self.carbons,
            Element::Hydrogen => &mut self.hydrogens,
            Element::Nitrogen => &mut self.nitrogens,
            Element::Oxygen => &mut self.oxygens,
            Element::Sulfur => &mut self.sulfurs,
        }
    }
}

// Operator Trait Implementations ======================================================================================

impl Index<Element> for ElementalComposition {
    type Output = u32;

    fn index(&self, element: Element) -> &Self::Output {
        match element {
            Element::Carbon => &self.carbons,
            Element::Hydrogen => &self.hydrogens,
            Element::Nitrogen => &self.nitrogens,
            Element::Oxygen => &self.oxygens,
            Element::Sulfur => &self.sulfurs,
        }
    }
}

impl Mul<u32> for ElementalComposition {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self {
            carbons: self.carbons * rhs,
            hydrogens: self.hydrogens * rhs,
            nitrogens: self.nitrogens * rhs,
            oxygens: self.oxygens * rhs,
            sulfurs: self.sulfurs * rhs,
        }
    }
}

impl Sum for ElementalComposition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl Sum for LabeledAtoms {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

// Massive and Display Trait Implementations ===========================================================================

impl Massive for ElementalComposition {
    fn monoisotopic_mass(&self) -> MonoisotopicMass {
        self.counts()
            .map(|(element, count)| element.monoisotopic_mass() * count)
            .sum()
    }
}

impl Display for ElementalComposition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (element, count) in self.counts() {
            match count {
                0 => (),
                1 => write!(f, "{element}")?,
                n => write!(f, "{element}{n}")?,
            }
        }
        Ok(())
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn composition_display() {
        assert_snapshot!(WATER, @"H2O");
        assert_snapshot!(ACETAMIDE_GROUP, @"C2H4NO");
        assert_snapshot!(ACETIC_ACID_GROUP, @"C2H3O2");
        assert_snapshot!(ElementalComposition::new(5, 9, 1, 1, 1), @"C5H9NOS");
        assert_eq!(ElementalComposition::default().to_string(), "");
    }

    #[test]
    fn composition_arithmetic() {
        let alanine = ElementalComposition::new(3, 5, 1, 1, 0);
        assert_eq!(alanine + WATER, ElementalComposition::new(3, 7, 1, 2, 0));
        assert_eq!(alanine * 3, ElementalComposition::new(9, 15, 3, 3, 0));
        assert_eq!(alanine * 0, ElementalComposition::default());

        let total: ElementalComposition = [alanine, WATER, alanine].into_iter().sum();
        assert_eq!(total, ElementalComposition::new(6, 12, 2, 3, 0));

        let mut labeled = total;
        labeled.remove(Element::Carbon, 6);
        labeled.remove(Element::Nitrogen, 2);
        assert_eq!(labeled, ElementalComposition::new(0, 12, 0, 3, 0));
        assert_eq!(
            total.with_count(Element::Sulfur, 2),
            ElementalComposition::new(6, 12, 2, 3, 2)
        );
    }

    #[test]
    fn composition_counts() {
        let methionine = ElementalComposition::new(5, 9, 1, 1, 1);
        assert_eq!(methionine[Element::Hydrogen], 9);
        assert_eq!(methionine.count(Element::Sulfur), 1);
        let counts: Vec<_> = methionine.counts().map(|(_, n)| n).collect();
        assert_eq!(counts, [5, 9, 1, 1, 1]);
        assert!(!methionine.is_empty());
        assert!(ElementalComposition::default().is_empty());
    }

    #[test]
    fn composition_monoisotopic_mass() {
        assert_eq!(
            WATER.monoisotopic_mass(),
            MonoisotopicMass::from(dec!(18.010564684))
        );
        assert_eq!(
            ACETAMIDE_GROUP.monoisotopic_mass(),
            MonoisotopicMass::from(dec!(58.029288752))
        );
        assert_eq!(
            ACETIC_ACID_GROUP.monoisotopic_mass(),
            MonoisotopicMass::from(dec!(59.013304336))
        );
        assert_eq!(
            ElementalComposition::default().monoisotopic_mass(),
            MonoisotopicMass::default()
        );
    }

    #[test]
    fn labeled_atoms() {
        let total: LabeledAtoms = [LabeledAtoms::new(6, 2), LabeledAtoms::new(6, 4)]
            .into_iter()
            .sum();
        assert_eq!(total.carbon_13(), 12);
        assert_eq!(total.nitrogen_15(), 6);
        assert!(!total.is_empty());
        assert!(LabeledAtoms::default().is_empty());
    }
}
