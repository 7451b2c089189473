use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    str::FromStr,
};

use itertools::Itertools;

use super::errors::BlockNameError;
use crate::BlockName;

impl BlockName {
    /// Validates a block name, ignoring surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns a [`BlockNameError`] if the trimmed name is empty, or contains anything other than letters and
    /// underscores.
    pub fn new(name: impl AsRef<str>) -> Result<Self, BlockNameError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(BlockNameError::Empty);
        }

        let characters: Vec<_> = name.chars().filter(|&c| !is_name_char(c)).unique().collect();
        if characters.is_empty() {
            Ok(Self(name.to_owned()))
        } else {
            let name = name.to_owned();
            Err(BlockNameError::InvalidCharacters { name, characters })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name of the file this block is written to: `<name>.block`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.block", self.0)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

impl FromStr for BlockName {
    type Err = BlockNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Deref for BlockName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for BlockName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for BlockName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
