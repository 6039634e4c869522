//! Topic names
//!
//! A topic owns one generated resource document and one font asset, so its
//! name ends up inside file names and relative asset paths.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A validated topic name (e.g. `feed`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Validate and wrap a topic name
    ///
    /// # Errors
    /// Returns [`Error::InvalidTopic`] if the name is empty, is `.`/`..`, or
    /// contains whitespace or path separators.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let usable = !name.is_empty()
            && name != "."
            && name != ".."
            && !name
                .chars()
                .any(|c| c.is_whitespace() || c == '/' || c == '\\');

        if usable {
            Ok(Self(name))
        } else {
            Err(Error::InvalidTopic { topic: name })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the generated resource document: `iconfont_<topic>.xml`
    #[must_use]
    pub fn resource_file_name(&self) -> String {
        format!("iconfont_{}.xml", self.0)
    }

    /// File name of the relocated font: `<topic>.ttf`
    #[must_use]
    pub fn font_file_name(&self) -> String {
        format!("{}.ttf", self.0)
    }
}

impl FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
