use std::fmt::{self, Display, Formatter};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{Element, HeavyIsotope, Massive, MonoisotopicMass};

// Monoisotopic masses (amu) from https://physics.nist.gov/cgi-bin/Compositions/stand_alone.pl, rounded to 9 places
const CARBON_MASS: Decimal = dec!(12.000000000);
const HYDROGEN_MASS: Decimal = dec!(1.007825032);
const NITROGEN_MASS: Decimal = dec!(14.003074004);
const OXYGEN_MASS: Decimal = dec!(15.994914620);
const SULFUR_MASS: Decimal = dec!(31.972071174);

const CARBON_13_MASS: Decimal = dec!(13.003354835);
const NITROGEN_15_MASS: Decimal = dec!(15.000108899);

impl Element {
    /// Every element, in Hill order
    pub const ALL: [Self; 5] = [
        Self::Carbon,
        Self::Hydrogen,
        Self::Nitrogen,
        Self::Oxygen,
        Self::Sulfur,
    ];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Carbon => "C",
            Self::Hydrogen => "H",
            Self::Nitrogen => "N",
            Self::Oxygen => "O",
            Self::Sulfur => "S",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Carbon => "Carbon",
            Self::Hydrogen => "Hydrogen",
            Self::Nitrogen => "Nitrogen",
            Self::Oxygen => "Oxygen",
            Self::Sulfur => "Sulfur",
        }
    }

    /// The key used for this element's atom count in a block file
    #[must_use]
    pub const fn block_key(self) -> &'static str {
        match self {
            Self::Carbon => "carbons",
            Self::Hydrogen => "hydrogens",
            Self::Nitrogen => "nitrogens",
            Self::Oxygen => "oxygens",
            Self::Sulfur => "sulfurs",
        }
    }

    const fn mass(self) -> Decimal {
        match self {
            Self::Carbon => CARBON_MASS,
            Self::Hydrogen => HYDROGEN_MASS,
            Self::Nitrogen => NITROGEN_MASS,
            Self::Oxygen => OXYGEN_MASS,
            Self::Sulfur => SULFUR_MASS,
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Massive for Element {
    fn monoisotopic_mass(&self) -> MonoisotopicMass {
        MonoisotopicMass(self.mass())
    }
}

impl HeavyIsotope {
    /// The element whose most abundant isotope this one replaces
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Self::Carbon13 => Element::Carbon,
            Self::Nitrogen15 => Element::Nitrogen,
        }
    }

    #[must_use]
    pub const fn mass_number(self) -> u32 {
        match self {
            Self::Carbon13 => 13,
            Self::Nitrogen15 => 15,
        }
    }

    /// How much heavier a single atom of this isotope is than the monoisotopic element it replaces
    #[must_use]
    pub fn mass_shift(self) -> MonoisotopicMass {
        self.monoisotopic_mass() - self.element().monoisotopic_mass()
    }
}

impl Display for HeavyIsotope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}]", self.mass_number(), self.element())
    }
}

impl Massive for HeavyIsotope {
    fn monoisotopic_mass(&self) -> MonoisotopicMass {
        match self {
            Self::Carbon13 => MonoisotopicMass(CARBON_13_MASS),
            Self::Nitrogen15 => MonoisotopicMass(NITROGEN_15_MASS),
        }
    }
}
