//! Dashboard resource names excluded from generation

use crate::domain::ResourceName;
use std::collections::BTreeSet;

/// Set of dashboard resource names to leave out of the configuration
///
/// Entries go through [`ResourceName::normalize`], so `d_my-dash` and
/// `d_my_dash` are the same entry. Blank entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet(BTreeSet<ResourceName>);

impl SkipSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .filter(|n| !n.as_ref().trim().is_empty())
                .map(|n| ResourceName::normalize(n.as_ref()))
                .collect(),
        )
    }

    pub fn contains(&self, name: &ResourceName) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceName> {
        self.0.iter()
    }
}
