//! Elemental compositions, monoisotopic masses, and block files for (optionally modified) peptides

pub mod atoms;
pub mod batch;
pub mod block_file;
pub mod errors;
pub mod log;
pub mod peptides;
#[cfg(test)]
mod testing_tools;

use std::collections::BTreeSet;

// External Crate Imports
use derive_more::{Add, AddAssign, From, Into, Sub};
use rust_decimal::Decimal;

pub use batch::{BatchEntry, BlockMaker, BlockOutcome, read_batch};
pub use errors::{Error, Result};
pub use log::{ActivityLog, LogFile, TracingLog};
pub use peptides::validation::validate_sequence;

// NOTE: As in most of this crate, the types are all declared here, whilst their `impl` blocks live in the submodules
// that are responsible for them. Fields stay private so that every value passes through a validating constructor.

// Atoms ===============================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Element {
    Carbon,
    Hydrogen,
    Nitrogen,
    Oxygen,
    Sulfur,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum HeavyIsotope {
    Carbon13,
    Nitrogen15,
}

/// Counts of the five elements that make up the standard amino acids
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Add, AddAssign)]
pub struct ElementalComposition {
    carbons: u32,
    hydrogens: u32,
    nitrogens: u32,
    oxygens: u32,
    sulfurs: u32,
}

/// Heavy-isotope atoms that are tracked outside of an [`ElementalComposition`]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Add, AddAssign)]
pub struct LabeledAtoms {
    carbon_13: u32,
    nitrogen_15: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, From, Into, Add, Sub, AddAssign)]
pub struct MonoisotopicMass(Decimal);

// Peptides ============================================================================================================

// NOTE: Variants are declared in the order of their one-letter codes, so that the derived `Ord` (and therefore any
// `BTreeSet<AminoAcid>`) sorts residues alphabetically by code
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AminoAcid {
    Ala,
    Cys,
    Asp,
    Glu,
    Phe,
    Gly,
    His,
    Ile,
    Lys,
    Leu,
    Met,
    Asn,
    Pro,
    Gln,
    Arg,
    Ser,
    Thr,
    Val,
    Trp,
    Tyr,
}

/// A non-empty chain of standard amino acid residues
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Sequence(Vec<AminoAcid>);

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct InvalidResidues(Vec<InvalidResidue>);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct InvalidResidue {
    position: usize,
    character: char,
    // NOTE: A byte offset into the validated text, used for labelling source spans in diagnostics
    offset: usize,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum CysteineTreatment {
    #[default]
    Untreated,
    Amide,
    Acid,
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Modifications {
    cysteine_treatment: CysteineTreatment,
    methionine_oxidized: bool,
    isotope_labeled: BTreeSet<AminoAcid>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Peptide {
    sequence: Sequence,
    cysteine_treatment: Option<CysteineTreatment>,
    methionine_oxidized: Option<bool>,
    isotope_labeled: BTreeSet<AminoAcid>,
    composition: ElementalComposition,
    labeled_atoms: LabeledAtoms,
    mass: MonoisotopicMass,
}

// Block Files =========================================================================================================

/// A validated block file name: non-empty, made up of only letters and underscores
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct BlockName(String);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BlockFileRecord<'n> {
    name: &'n str,
    mass: MonoisotopicMass,
    composition: ElementalComposition,
}

// Traits ==============================================================================================================

pub trait Massive {
    fn monoisotopic_mass(&self) -> MonoisotopicMass;
}

// Blanket impls

macro_rules! massive_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Massive + ?Sized> Massive for $ref_type {
                fn monoisotopic_mass(&self) -> MonoisotopicMass {
                    (**self).monoisotopic_mass()
                }
            }
        )+
    };
}

massive_ref_impls!(&T, &mut T, Box<T>);
