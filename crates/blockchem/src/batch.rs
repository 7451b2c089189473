//! Reading sequences in bulk and turning them into block files

use std::{
    iter,
    path::{Path, PathBuf},
};

use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    BlockFileRecord, BlockName, InvalidResidues, Massive, Modifications, Peptide, Result, Sequence,
    TracingLog, log::ActivityLog, log::SECTION_PREFIX, validate_sequence,
};

/// The number of leading residues used for a default block name
const DEFAULT_NAME_LENGTH: usize = 4;

// NOTE: Only used when writing to the activity log; block files always get the full nine decimal places
const LOGGED_DECIMAL_PLACES: u32 = 5;

// Batch Entries =======================================================================================================

/// One (normalized) sequence read from a batch, along with a suggested block name
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BatchEntry {
    name: String,
    sequence: String,
    invalid_residues: InvalidResidues,
}

impl BatchEntry {
    /// Normalizes `sequence` (trimmed and uppercased) and checks it for invalid residues; `name` is kept as given
    pub fn new(name: impl Into<String>, sequence: &str) -> Self {
        let sequence = normalize(sequence);
        let invalid_residues = validate_sequence(&sequence);
        Self {
            name: name.into(),
            sequence,
            invalid_residues,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the suggested block name
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    #[must_use]
    pub const fn invalid_residues(&self) -> &InvalidResidues {
        &self.invalid_residues
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid_residues.is_empty()
    }
}

/// Reads one sequence per line of `text`, in order
///
/// Lines are trimmed and uppercased; blank lines and exact repeats of an earlier sequence are skipped. Invalid
/// sequences are kept (so they can still be corrected) and carry their [`InvalidResidues`]. Each entry is given a
/// default block name by [`default_block_name()`] that is unique within the batch.
#[must_use]
pub fn read_batch(text: &str) -> Vec<BatchEntry> {
    let mut seen_sequences: HashSet<String> = HashSet::new();
    let mut taken_names: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for line in text.lines() {
        let sequence = normalize(line);
        if sequence.is_empty() {
            continue;
        }
        if !seen_sequences.insert(sequence.clone()) {
            debug!(%sequence, "skipping duplicate sequence");
            continue;
        }

        let name = default_block_name(&sequence, |name| taken_names.contains(name));
        taken_names.insert(name.clone());
        entries.push(BatchEntry::new(name, &sequence));
    }

    entries
}

/// Suggests a block name made from the first four characters of `sequence`
///
/// If that name is already `taken`, suffixes `_b` through `_z` are tried, followed by `_aa`, `_ab`, and so on.
pub fn default_block_name(sequence: &str, taken: impl Fn(&str) -> bool) -> String {
    let prefix: String = sequence.chars().take(DEFAULT_NAME_LENGTH).collect();
    iter::once(prefix.clone())
        .chain(name_suffixes().map(|suffix| format!("{prefix}_{suffix}")))
        .find(|name| !taken(name))
        // NOTE: `name_suffixes()` never ends, so this fallback is never reached
        .unwrap_or(prefix)
}

fn name_suffixes() -> impl Iterator<Item = String> {
    let single = ('b'..='z').map(String::from);
    let longer = (2..).flat_map(|length| {
        iter::repeat_n('a'..='z', length)
            .multi_cartesian_product()
            .map(String::from_iter)
    });
    single.chain(longer)
}

fn normalize(sequence: &str) -> String {
    sequence.trim().to_uppercase()
}

// Block Generation ====================================================================================================

#[derive(Debug)]
pub enum BlockOutcome {
    /// The block file was written to this path
    Written(PathBuf),
    /// The entry had no sequence, so nothing was done
    Skipped,
    /// The entry couldn't be turned into a block file; the rest of the batch is unaffected
    Failed(crate::Error),
}

impl BlockOutcome {
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Written(path) => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&crate::Error> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Writes block files for peptides, all sharing the same modifications and output directory
#[derive(Debug)]
pub struct BlockMaker<L = TracingLog> {
    modifications: Modifications,
    output_dir: PathBuf,
    log: L,
}

impl<L: ActivityLog> BlockMaker<L> {
    pub fn new(output_dir: impl Into<PathBuf>, modifications: Modifications, log: L) -> Self {
        Self {
            modifications,
            output_dir: output_dir.into(),
            log,
        }
    }

    #[must_use]
    pub const fn modifications(&self) -> &Modifications {
        &self.modifications
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn into_log(self) -> L {
        self.log
    }

    /// Builds the peptide for `sequence` and writes it to `<output_dir>/<name>.block`
    ///
    /// An empty (or all-whitespace) `sequence` is skipped without touching the activity log, returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Fails if `sequence` contains invalid residues, if `name` isn't a valid [`BlockName`], or if the file couldn't
    /// be written. Each step and failure is also recorded in the activity log.
    pub fn generate(&mut self, name: &str, sequence: &str) -> Result<Option<PathBuf>> {
        if sequence.trim().is_empty() {
            debug!(name, "skipping entry without a sequence");
            return Ok(None);
        }

        let result = self.try_generate(name, sequence).map(Some);
        if let Err(error) = &result {
            warn!(name, sequence, %error, "no block file was generated");
            self.log.record(&format!("No block file was generated: {error}"));
        }
        result
    }

    /// Generates a block file for every entry, in order
    ///
    /// Entries without a sequence are skipped, and a failing entry never stops the entries after it.
    pub fn generate_all<'e>(
        &mut self,
        entries: impl IntoIterator<Item = &'e BatchEntry>,
    ) -> Vec<BlockOutcome> {
        entries
            .into_iter()
            .map(|entry| match self.generate(entry.name(), entry.sequence()) {
                Ok(Some(path)) => BlockOutcome::Written(path),
                Ok(None) => BlockOutcome::Skipped,
                Err(error) => BlockOutcome::Failed(error),
            })
            .collect()
    }

    fn try_generate(&mut self, name: &str, sequence: &str) -> Result<PathBuf> {
        self.log
            .record(&format!("{SECTION_PREFIX} sequence '{}'", sequence.trim()));

        let sequence = Sequence::parse(sequence)?;
        let name = BlockName::new(name)?;
        let peptide = Peptide::new(sequence, &self.modifications);
        debug!(%name, formula = %peptide.composition(), mass = %peptide.monoisotopic_mass(), "built peptide");

        let labeled = peptide.labeled_atoms();
        if !labeled.is_empty() {
            let message = format!(
                "Sequence '{}' contains {} [13C] and {} [15N] labeled atoms, which are not recorded in block files",
                peptide.sequence(),
                labeled.carbon_13(),
                labeled.nitrogen_15()
            );
            warn!("{message}");
            self.log.record(&message);
        }

        let record = BlockFileRecord::new(&name, &peptide);
        self.log.record(&writing_message(&peptide, &record));
        let path = record.write_in(&self.output_dir)?;
        self.log.record(&format!(
            "'{}' file created in directory '{}'",
            record.file_name(),
            self.output_dir.display()
        ));
        debug!(path = %path.display(), "wrote block file");

        Ok(path)
    }
}

fn writing_message(peptide: &Peptide, record: &BlockFileRecord<'_>) -> String {
    let mass = record.mass().value().round_dp(LOGGED_DECIMAL_PLACES);
    let precision = LOGGED_DECIMAL_PLACES as usize;
    let composition = record.composition();
    let counts: String = composition
        .counts()
        .map(|(element, count)| format!("\n\t{}s = {count}", element.name()))
        .collect();
    format!(
        "Writing sequence '{}' info to block file '{}':\n\tMass = {mass:.precision$}{counts}",
        peptide.sequence(),
        record.file_name(),
    )
}

// Module Tests ========================================================================================================
