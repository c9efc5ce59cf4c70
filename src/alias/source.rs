//! Where alias tables come from.
//!
//! [`AliasIndex::load`](super::AliasIndex::load) asks a primary [`AliasDataSource`] for each
//! table and falls back to [`EmbeddedDataSource`] table by table.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::embedded;
use super::error::AliasError;
use super::types::{Catalog, EntityId, EntityKind, ExactAliasTable};

const EXACT_TABLE: &str = "alias table";
const DATASET: &str = "entity dataset";

/// Where a loaded table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableOrigin {
    /// Read from a file on disk.
    File,
    /// Built-in fallback data.
    Embedded,
    /// Supplied directly by the caller (tests, tools).
    InMemory,
}

impl TableOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            TableOrigin::File => "file",
            TableOrigin::Embedded => "embedded",
            TableOrigin::InMemory => "in_memory",
        }
    }
}

/// Strategy for loading the two independent alias tables.
pub trait AliasDataSource {
    /// Origin recorded for tables this source loads successfully.
    fn origin(&self) -> TableOrigin;

    /// Loads the Korean alias → canonical name table.
    fn load_exact_table(&self) -> Result<ExactAliasTable, AliasError>;

    /// Loads the per-kind canonical name → id maps.
    fn load_catalog(&self) -> Result<Catalog, AliasError>;
}

/// Built-in data; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataSource;

impl AliasDataSource for EmbeddedDataSource {
    fn origin(&self) -> TableOrigin {
        TableOrigin::Embedded
    }

    fn load_exact_table(&self) -> Result<ExactAliasTable, AliasError> {
        Ok(embedded::exact_aliases())
    }

    fn load_catalog(&self) -> Result<Catalog, AliasError> {
        Ok(embedded::catalog())
    }
}

/// CSV files on disk.
///
/// - alias table: `canonical_name,korean_alias` (header row required)
/// - dataset: must carry `node_id`, `name` and `node_type` columns; rows whose type is neither
///   `liquor` nor `ingredient` are ignored
#[derive(Debug, Clone, Default)]
pub struct FileDataSource {
    alias_table_path: Option<PathBuf>,
    dataset_path: Option<PathBuf>,
}

impl FileDataSource {
    pub fn new(alias_table_path: Option<PathBuf>, dataset_path: Option<PathBuf>) -> Self {
        Self {
            alias_table_path,
            dataset_path,
        }
    }

    pub fn alias_table_path(&self) -> Option<&Path> {
        self.alias_table_path.as_deref()
    }

    pub fn dataset_path(&self) -> Option<&Path> {
        self.dataset_path.as_deref()
    }

    fn reader(table: &'static str, path: &Path) -> Result<csv::Reader<std::fs::File>, AliasError> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| AliasError::from_csv(table, path, e))
    }
}

impl AliasDataSource for FileDataSource {
    fn origin(&self) -> TableOrigin {
        TableOrigin::File
    }

    fn load_exact_table(&self) -> Result<ExactAliasTable, AliasError> {
        let path = self
            .alias_table_path
            .as_deref()
            .ok_or(AliasError::NotConfigured { table: EXACT_TABLE })?;

        let mut reader = Self::reader(EXACT_TABLE, path)?;
        let mut table = ExactAliasTable::new();
        let mut skipped = 0usize;

        for record in reader.records() {
            let record = record.map_err(|e| AliasError::from_csv(EXACT_TABLE, path, e))?;
            match (record.get(0), record.get(1)) {
                (Some(name), Some(alias)) if table.insert(alias, name) => {}
                _ => skipped += 1,
            }
        }

        if table.is_empty() {
            return Err(AliasError::Empty {
                table: EXACT_TABLE,
                path: path.to_path_buf(),
            });
        }

        debug!(
            path = %path.display(),
            aliases = table.len(),
            skipped,
            "Loaded alias table"
        );
        Ok(table)
    }

    fn load_catalog(&self) -> Result<Catalog, AliasError> {
        let path = self
            .dataset_path
            .as_deref()
            .ok_or(AliasError::NotConfigured { table: DATASET })?;

        let mut reader = Self::reader(DATASET, path)?;
        let headers = reader
            .headers()
            .map_err(|e| AliasError::from_csv(DATASET, path, e))?
            .clone();

        let column = |name: &str| -> Result<usize, AliasError> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| AliasError::Malformed {
                    table: DATASET,
                    path: path.to_path_buf(),
                    reason: format!("missing '{}' column", name),
                })
        };
        let id_col = column("node_id")?;
        let name_col = column("name")?;
        let type_col = column("node_type")?;

        let mut catalog = Catalog::new();
        let mut skipped = 0usize;

        for record in reader.records() {
            let record = record.map_err(|e| AliasError::from_csv(DATASET, path, e))?;

            let kind = match record.get(type_col).map(str::parse::<EntityKind>) {
                Some(Ok(kind)) => kind,
                // compounds and other node types share the file
                _ => continue,
            };
            let id = record
                .get(id_col)
                .and_then(|v| v.parse::<EntityId>().ok());
            let name = record.get(name_col);

            match (id, name) {
                (Some(id), Some(name)) if catalog.insert(kind, name, id) => {}
                _ => skipped += 1,
            }
        }

        if catalog.is_empty() {
            return Err(AliasError::Empty {
                table: DATASET,
                path: path.to_path_buf(),
            });
        }

        debug!(
            path = %path.display(),
            liquors = catalog.len(EntityKind::Liquor),
            ingredients = catalog.len(EntityKind::Ingredient),
            skipped,
            "Loaded entity dataset"
        );
        Ok(catalog)
    }
}
