use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use miette::Diagnostic;
use thiserror::Error;

use crate::{
    AminoAcid, CysteineTreatment, ElementalComposition, Modifications,
    atoms::{ACETAMIDE_GROUP, ACETIC_ACID_GROUP},
};

// Cysteine Treatments =================================================================================================

impl CysteineTreatment {
    pub const ALL: [Self; 3] = [Self::Untreated, Self::Amide, Self::Acid];

    /// The group that replaces the hydrogen of each cysteine's thiol (–SH), if the cysteines have been alkylated
    #[must_use]
    pub const fn alkylation_group(self) -> Option<ElementalComposition> {
        match self {
            Self::Untreated => None,
            Self::Amide => Some(ACETAMIDE_GROUP),
            Self::Acid => Some(ACETIC_ACID_GROUP),
        }
    }

    /// The short, machine-friendly name accepted by [`FromStr`]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Untreated => "untreated",
            Self::Amide => "amide",
            Self::Acid => "acid",
        }
    }
}

impl Display for CysteineTreatment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::Untreated => "None (reduced form)",
            Self::Amide => "Iodo- or chloroacetamide",
            Self::Acid => "Iodo- or chloroacetic acid",
        };
        write!(f, "{description}")
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
#[diagnostic(help("valid treatments are \"untreated\", \"amide\", or \"acid\""))]
#[error("{0:?} is not a known cysteine treatment")]
pub struct UnknownTreatmentError(String);

impl FromStr for CysteineTreatment {
    type Err = UnknownTreatmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|treatment| treatment.key() == key)
            .ok_or_else(|| UnknownTreatmentError(s.to_owned()))
    }
}

// Modifications =======================================================================================================

impl Modifications {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cysteine_treatment(mut self, treatment: CysteineTreatment) -> Self {
        self.cysteine_treatment = treatment;
        self
    }

    #[must_use]
    pub fn with_methionine_oxidized(mut self, oxidized: bool) -> Self {
        self.methionine_oxidized = oxidized;
        self
    }

    /// Marks every carbon and nitrogen of `residues` as C-13 and N-15
    #[must_use]
    pub fn with_isotope_labeled(mut self, residues: impl IntoIterator<Item = AminoAcid>) -> Self {
        self.isotope_labeled.extend(residues);
        self
    }

    #[must_use]
    pub const fn cysteine_treatment(&self) -> CysteineTreatment {
        self.cysteine_treatment
    }

    #[must_use]
    pub const fn methionine_oxidized(&self) -> bool {
        self.methionine_oxidized
    }

    #[must_use]
    pub const fn isotope_labeled(&self) -> &BTreeSet<AminoAcid> {
        &self.isotope_labeled
    }
}
