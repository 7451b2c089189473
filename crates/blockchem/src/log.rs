//! The activity log: a human-readable record of what the block file generator has done
//!
//! The calculators never log anything themselves; a [`BlockMaker`](crate::BlockMaker) is handed an [`ActivityLog`]
//! and records each step of generation through it.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

/// Messages starting with this are preceded by a blank line, separating the entries of a batch
pub const SECTION_PREFIX: &str = "Start processing";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait ActivityLog {
    fn record(&mut self, message: &str);
}

impl<L: ActivityLog + ?Sized> ActivityLog for &mut L {
    fn record(&mut self, message: &str) {
        (**self).record(message);
    }
}

impl<L: ActivityLog + ?Sized> ActivityLog for Box<L> {
    fn record(&mut self, message: &str) {
        (**self).record(message);
    }
}

/// Collects messages in memory, without timestamps
impl ActivityLog for Vec<String> {
    fn record(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Forwards every message to [`tracing`] as an `INFO` event
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct TracingLog;

impl ActivityLog for TracingLog {
    fn record(&mut self, message: &str) {
        info!(target: "block_maker", "{message}");
    }
}

/// Writes timestamped messages, one `<timestamp>\t<message>` entry per line
#[derive(Debug)]
pub struct LogFile<W: Write = File> {
    writer: W,
}

impl LogFile {
    /// Opens (or creates) the log file at `path`, appending to anything already logged there
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the file can't be opened for appending.
    pub fn append(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> LogFile<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entry(&mut self, timestamp: NaiveDateTime, message: &str) -> io::Result<()> {
        self.writer
            .write_all(format_entry(timestamp, message).as_bytes())?;
        self.writer.flush()
    }
}

impl<W: Write> ActivityLog for LogFile<W> {
    fn record(&mut self, message: &str) {
        let now = Local::now().naive_local();
        // NOTE: Failing to log must never stop a block file from being written, so the error is only reported
        if let Err(error) = self.write_entry(now, message) {
            warn!(%error, "failed to write to the activity log");
        }
    }
}

/// Formats a single log entry, including its trailing newline
#[must_use]
pub fn format_entry(timestamp: NaiveDateTime, message: &str) -> String {
    let separator = if message.starts_with(SECTION_PREFIX) {
        "\n"
    } else {
        ""
    };
    let timestamp = timestamp.format(TIMESTAMP_FORMAT);
    format!("{separator}{timestamp}\t{message}\n")
}
