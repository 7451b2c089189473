//! Amino acid residues, sequence validation, and modified peptides

mod amino_acid;
pub mod composition;
pub mod errors;
pub mod mass;
pub mod modifications;
mod peptide;
mod sequence;
pub mod validation;
