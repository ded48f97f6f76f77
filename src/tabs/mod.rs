// src/tabs/mod.rs
//! Tab classification: the closed tab vocabulary and everything that maps
//! scraped text onto it or back out to a subsystem's own names.
//!
//! ```text
//! evidence ─→ Identifier ─→ CanonicalTab ─→ Translator ─→ subsystem name
//!               │  ↑                            │
//!               ↓  │                            ↓
//!             Resolver ──────── Registry ───────┘
//! ```

pub mod identify;
pub mod registry;
pub mod resolve;
pub mod tab;
pub mod translate;

pub use identify::{Evidence, Identifier};
pub use registry::{Registry, RegistrySnapshot, SubsystemName, SubsystemTabSet};
pub use resolve::{generate_skin_categories, Resolver};
pub use tab::{CanonicalTab, Subsystem};
pub use translate::{Hint, Item, ResolvedTabSet, Translator};
