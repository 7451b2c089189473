//! The fixed-format key/value files ("block files") consumed by downstream mass-spectrometry software

mod errors;
mod name;

use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

pub use errors::{BlockFileError, BlockNameError};

use crate::{
    BlockFileRecord, BlockName, Element, ElementalComposition, Massive, MonoisotopicMass, Peptide,
};

impl<'n> BlockFileRecord<'n> {
    /// Block files never reserve atoms for a charge carrier
    pub const AVAILABLE_FOR_CHARGE_CARRIER: u32 = 0;

    /// Only a validated [`BlockName`] is accepted, so every record names a sensible file
    #[must_use]
    pub fn new(name: &'n BlockName, peptide: &Peptide) -> Self {
        Self {
            name: name.as_str(),
            mass: peptide.monoisotopic_mass(),
            composition: peptide.composition(),
        }
    }

    // NOTE: Skips name validation, so it's kept to tests that need records without building a whole peptide
    #[cfg(test)]
    const fn from_parts(
        name: &'n str,
        mass: MonoisotopicMass,
        composition: ElementalComposition,
    ) -> Self {
        Self {
            name,
            mass,
            composition,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'n str {
        self.name
    }

    #[must_use]
    pub const fn mass(&self) -> MonoisotopicMass {
        self.mass
    }

    #[must_use]
    pub const fn composition(&self) -> ElementalComposition {
        self.composition
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.block", self.name)
    }

    /// Writes the seven lines of this record to `writer`
    ///
    /// # Errors
    ///
    /// Returns any [`io::Error`] raised by `writer`.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Creates (or overwrites) `<directory>/<name>.block`, returning the path of the written file
    ///
    /// # Errors
    ///
    /// Returns a [`BlockFileError`] naming the file if it couldn't be created or written, for example if `directory`
    /// doesn't exist or isn't writable.
    pub fn write_in(&self, directory: impl AsRef<Path>) -> Result<PathBuf, BlockFileError> {
        let path = directory.as_ref().join(self.file_name());
        let written = File::create(&path).and_then(|file| self.write_to(BufWriter::new(file)));
        match written {
            Ok(()) => Ok(path),
            Err(source) => Err(BlockFileError::new(path, source)),
        }
    }
}

impl Display for BlockFileRecord<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = MonoisotopicMass::DECIMAL_PLACES as usize;
        writeln!(f, "mass\t{:.precision$}", self.mass.rounded())?;
        writeln!(
            f,
            "available_for_charge_carrier\t{}",
            Self::AVAILABLE_FOR_CHARGE_CARRIER
        )?;
        for element in Element::ALL {
            writeln!(f, "{}\t{}", element.block_key(), self.composition[element])?;
        }
        Ok(())
    }
}

// Module Tests ========================================================================================================
