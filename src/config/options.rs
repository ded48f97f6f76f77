// src/config/options.rs
use super::consts::DEFAULT_BREEDS;

/// What identification does when a present evidence field fails to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Lower-priority evidence is consulted only when higher-priority
    /// evidence is absent. A present-but-unresolvable field ends the search.
    #[default]
    OnAbsence,
    /// Lower-priority evidence is also consulted when a present field
    /// fails to resolve.
    OnFailure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IdentifyOptions {
    pub fallback: Fallback,
}

impl IdentifyOptions {
    pub fn fall_through() -> Self {
        Self { fallback: Fallback::OnFailure }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Breeds used to generate the skins tab's categories.
    pub breeds: Vec<String>,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            breeds: DEFAULT_BREEDS.iter().map(|b| s!(*b)).collect(),
        }
    }
}

impl RegistryOptions {
    pub fn with_breeds<I, S>(breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { breeds: breeds.into_iter().map(Into::into).collect() }
    }
}
