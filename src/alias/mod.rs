//! Alias index: static Korean → canonical-name mapping data.
//!
//! Three tables feed resolution:
//!
//! - an exact alias table (`korean alias → canonical name`), loaded from CSV
//! - the canonical catalog (`canonical name → id`, one map per [`EntityKind`]), loaded from CSV
//! - hand-authored category mappings (`korean category → [english fragment, ...]`), built in
//!
//! Either file-backed table can be missing or malformed; [`AliasIndex::load`] then logs and
//! substitutes the embedded copy, so resolution degrades in coverage rather than failing.

mod embedded;
pub mod error;
pub mod index;
pub mod source;
pub mod types;


pub use error::AliasError;
pub use index::{AliasIndex, TableOrigins};
pub use source::{AliasDataSource, EmbeddedDataSource, FileDataSource, TableOrigin};
pub use types::{
    Catalog, CategoryMapping, CategoryMappings, Entity, EntityId, EntityKind, ExactAliasTable,
    KindFilter, normalize_name,
};
