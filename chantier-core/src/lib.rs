//! chantier core - content data types
//!
//! Pure data structures with no behavior beyond validation and (de)serialization.
//! The content client crate depends on this; this crate depends on nothing of ours.

use chrono::{DateTime, Utc};

pub mod documents;
pub mod error;
pub mod manifest;

pub use documents::{
    Document, DirectorDoc, HeroDoc, Icon, PartnerDoc, ProjectDoc, ServiceDoc, SettingsDoc,
};
pub use error::{ContentError, ContentResult};
pub use manifest::{site_manifest, CollectionManifest};

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;
