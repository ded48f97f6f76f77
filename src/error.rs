// src/error.rs
use thiserror::Error;

use crate::tabs::{CanonicalTab, Subsystem};

/// A broken registry declaration. Raised once, at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{table} table references unknown tab '{tab}'")]
    UnknownTab { table: &'static str, tab: String },

    #[error("{table} table declares tab '{tab}' more than once")]
    DuplicateTab { table: &'static str, tab: CanonicalTab },

    #[error("tab '{tab}' declares several {subsystem} names; only market names of specialty/other may fan out")]
    UnexpectedCandidates { tab: CanonicalTab, subsystem: Subsystem },

    #[error("breed list is empty; skin categories cannot be generated")]
    NoBreeds,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tab id '{0}'")]
pub struct ParseTabError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown subsystem '{0}' (expected ah, market, hoard or legacy)")]
pub struct ParseSubsystemError(pub String);
