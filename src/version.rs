use std::fmt;

use winnow::{ascii::digit1, ModalResult, Parser};

/// Name of a directory that holds one installed compiler release, e.g. `3.2.2`.
///
/// Versions order by their name as a plain string, so `3.2.2` sorts after `3.10.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionDir {
    name: String,
}

impl VersionDir {
    /// Accepts only `MAJOR.MINOR.PATCH` made of ASCII digits, matched against the whole name.
    pub fn parse(name: &str) -> Option<VersionDir> {
        version_triple.parse(name).ok()?;
        Some(VersionDir {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for VersionDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn version_triple(input: &mut &str) -> ModalResult<()> {
    (digit1, '.', digit1, '.', digit1).void().parse_next(input)
}
