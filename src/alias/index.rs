use std::collections::BTreeMap;
use tracing::{info, warn};

use super::embedded;
use super::error::AliasError;
use super::source::{AliasDataSource, EmbeddedDataSource, TableOrigin};
use super::types::{
    Catalog, CategoryMapping, CategoryMappings, Entity, EntityId, EntityKind, ExactAliasTable,
};

/// Origins of the two loaded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TableOrigins {
    pub exact_aliases: TableOrigin,
    pub catalog: TableOrigin,
}

/// Immutable lookup structure shared by every resolution.
///
/// Built once and then only read; wrap it in an `Arc` to share across requests.
#[derive(Debug, Clone)]
pub struct AliasIndex {
    exact: ExactAliasTable,
    catalog: Catalog,
    categories: CategoryMappings,
    names_by_id: BTreeMap<(EntityKind, EntityId), String>,
    origins: TableOrigins,
}

impl AliasIndex {
    /// Loads both tables from `source`, falling back to the embedded data for any table that
    /// cannot be loaded. Never fails.
    pub fn load(source: &dyn AliasDataSource) -> Self {
        let (exact, exact_origin) = Self::load_or_fallback(
            "alias table",
            source.origin(),
            source.load_exact_table(),
            embedded::exact_aliases,
        );
        let (catalog, catalog_origin) = Self::load_or_fallback(
            "entity dataset",
            source.origin(),
            source.load_catalog(),
            embedded::catalog,
        );

        let index = Self::build(
            exact,
            catalog,
            embedded::category_mappings(),
            TableOrigins {
                exact_aliases: exact_origin,
                catalog: catalog_origin,
            },
        );

        info!(
            aliases = index.exact.len(),
            liquors = index.catalog.len(EntityKind::Liquor),
            ingredients = index.catalog.len(EntityKind::Ingredient),
            alias_origin = exact_origin.as_str(),
            catalog_origin = catalog_origin.as_str(),
            "Alias index ready"
        );
        index
    }

    /// Index over the built-in data only.
    pub fn embedded() -> Self {
        Self::load(&EmbeddedDataSource)
    }

    /// Index over caller-supplied tables.
    pub fn from_parts(
        exact: ExactAliasTable,
        catalog: Catalog,
        categories: CategoryMappings,
    ) -> Self {
        Self::build(
            exact,
            catalog,
            categories,
            TableOrigins {
                exact_aliases: TableOrigin::InMemory,
                catalog: TableOrigin::InMemory,
            },
        )
    }

    fn load_or_fallback<T>(
        table: &'static str,
        origin: TableOrigin,
        loaded: Result<T, AliasError>,
        fallback: impl FnOnce() -> T,
    ) -> (T, TableOrigin) {
        match loaded {
            Ok(value) => (value, origin),
            Err(AliasError::NotConfigured { .. }) => {
                info!(table, "No file configured, using embedded data");
                (fallback(), TableOrigin::Embedded)
            }
            Err(e) => {
                warn!(table, error = %e, "Falling back to embedded data");
                (fallback(), TableOrigin::Embedded)
            }
        }
    }

    fn build(
        exact: ExactAliasTable,
        catalog: Catalog,
        categories: CategoryMappings,
        origins: TableOrigins,
    ) -> Self {
        let mut names_by_id = BTreeMap::new();
        for kind in EntityKind::ALL {
            for (name, &id) in catalog.names(kind) {
                // first (alphabetical) name wins for ids listed under several names
                names_by_id
                    .entry((kind, id))
                    .or_insert_with(|| name.clone());
            }
        }

        Self {
            exact,
            catalog,
            categories,
            names_by_id,
            origins,
        }
    }

    /// Canonical name registered for an exact Korean alias.
    pub fn exact_alias(&self, alias: &str) -> Option<&str> {
        self.exact.get(alias)
    }

    /// All `(alias, canonical_name)` rows in alias order.
    pub fn exact_aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exact.iter()
    }

    /// Canonical name → id map for `kind`.
    pub fn names(&self, kind: EntityKind) -> &BTreeMap<String, EntityId> {
        self.catalog.names(kind)
    }

    /// Category rows for `kind`, in authored order.
    pub fn categories(&self, kind: EntityKind) -> &[CategoryMapping] {
        self.categories.for_kind(kind)
    }

    /// Looks up an entity by canonical name.
    pub fn entity_by_name(&self, kind: EntityKind, name: &str) -> Option<Entity> {
        self.catalog
            .id_of(kind, name)
            .map(|id| Entity::new(id, name, kind))
    }

    /// Reverse lookup by id.
    pub fn entity(&self, kind: EntityKind, id: EntityId) -> Option<Entity> {
        self.names_by_id
            .get(&(kind, id))
            .map(|name| Entity::new(id, name.clone(), kind))
    }

    /// Every entity of `kind`, in id order.
    pub fn entities(&self, kind: EntityKind) -> impl Iterator<Item = Entity> + '_ {
        self.names_by_id
            .range((kind, EntityId::MIN)..=(kind, EntityId::MAX))
            .map(move |(&(_, id), name)| Entity::new(id, name.clone(), kind))
    }

    pub fn entity_count(&self, kind: EntityKind) -> usize {
        self.catalog.len(kind)
    }

    pub fn alias_count(&self) -> usize {
        self.exact.len()
    }

    pub fn origins(&self) -> TableOrigins {
        self.origins
    }
}
