use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable external identifier of a catalog entity.
pub type EntityId = u64;

/// The two kinds of canonical entity in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Liquor,
    Ingredient,
}

impl EntityKind {
    /// Both kinds, in the order passes iterate them.
    pub const ALL: [EntityKind; 2] = [EntityKind::Liquor, EntityKind::Ingredient];

    /// The kind an entity of this kind is paired with.
    pub fn opposite(self) -> Self {
        match self {
            EntityKind::Liquor => EntityKind::Ingredient,
            EntityKind::Ingredient => EntityKind::Liquor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Liquor => "liquor",
            EntityKind::Ingredient => "ingredient",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "liquor" | "liquors" => Ok(Self::Liquor),
            "ingredient" | "ingredients" => Ok(Self::Ingredient),
            _ => Err(format!("Unknown entity kind: {}", s)),
        }
    }
}

/// Which catalog(s) a resolution should search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    Liquor,
    Ingredient,
    #[default]
    Both,
}

impl KindFilter {
    /// Entity kinds covered by this filter.
    pub fn kinds(self) -> &'static [EntityKind] {
        match self {
            KindFilter::Liquor => &[EntityKind::Liquor],
            KindFilter::Ingredient => &[EntityKind::Ingredient],
            KindFilter::Both => &EntityKind::ALL,
        }
    }

    pub fn includes(self, kind: EntityKind) -> bool {
        self.kinds().contains(&kind)
    }
}

impl From<EntityKind> for KindFilter {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Liquor => KindFilter::Liquor,
            EntityKind::Ingredient => KindFilter::Ingredient,
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "both" | "all" | "" => Ok(Self::Both),
            other => other.parse::<EntityKind>().map(Self::from),
        }
    }
}

/// A canonical catalog entity. Identity is `(kind, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: EntityId, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }
}

/// Normalizes a canonical name: trimmed, lower-cased, inner whitespace collapsed to `_`.
///
/// ```
/// use pairing::alias::normalize_name;
///
/// assert_eq!(normalize_name("  Bourbon Whiskey "), "bourbon_whiskey");
/// assert_eq!(normalize_name("dry_gin"), "dry_gin");
/// ```
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Korean alias → canonical name.
///
/// Keys are trimmed but otherwise kept verbatim (Korean script has no case).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExactAliasTable {
    entries: BTreeMap<String, String>,
}

impl ExactAliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an alias. Blank aliases or names are ignored; returns whether the row was kept.
    pub fn insert(&mut self, alias: &str, canonical_name: &str) -> bool {
        let alias = alias.trim();
        let name = normalize_name(canonical_name);
        if alias.is_empty() || name.is_empty() {
            return false;
        }
        self.entries.insert(alias.to_string(), name);
        true
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    /// Iterates `(alias, canonical_name)` in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: AsRef<str>, N: AsRef<str>> FromIterator<(A, N)> for ExactAliasTable {
    fn from_iter<T: IntoIterator<Item = (A, N)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (alias, name) in iter {
            table.insert(alias.as_ref(), name.as_ref());
        }
        table
    }
}

/// Canonical name → id maps, one per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    liquors: BTreeMap<String, EntityId>,
    ingredients: BTreeMap<String, EntityId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity name. A repeated name keeps the last id seen.
    pub fn insert(&mut self, kind: EntityKind, name: &str, id: EntityId) -> bool {
        let name = normalize_name(name);
        if name.is_empty() {
            return false;
        }
        self.names_mut(kind).insert(name, id);
        true
    }

    pub fn with(mut self, kind: EntityKind, name: &str, id: EntityId) -> Self {
        self.insert(kind, name, id);
        self
    }

    /// Name → id map for `kind`, iterated in name order.
    pub fn names(&self, kind: EntityKind) -> &BTreeMap<String, EntityId> {
        match kind {
            EntityKind::Liquor => &self.liquors,
            EntityKind::Ingredient => &self.ingredients,
        }
    }

    fn names_mut(&mut self, kind: EntityKind) -> &mut BTreeMap<String, EntityId> {
        match kind {
            EntityKind::Liquor => &mut self.liquors,
            EntityKind::Ingredient => &mut self.ingredients,
        }
    }

    pub fn id_of(&self, kind: EntityKind, name: &str) -> Option<EntityId> {
        self.names(kind).get(name).copied()
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.names(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.liquors.is_empty() && self.ingredients.is_empty()
    }
}

/// One hand-authored category row: a Korean category term and the English name fragments it
/// stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMapping {
    pub term: String,
    pub fragments: Vec<String>,
}

impl CategoryMapping {
    /// Returns `true` if `term` and the category term contain one another.
    pub fn matches(&self, term: &str) -> bool {
        self.term.contains(term) || term.contains(self.term.as_str())
    }
}

/// Category tables for both kinds, kept in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMappings {
    liquors: Vec<CategoryMapping>,
    ingredients: Vec<CategoryMapping>,
}

impl CategoryMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: EntityKind, term: &str, fragments: &[&str]) {
        let mapping = CategoryMapping {
            term: term.trim().to_string(),
            fragments: fragments.iter().map(|f| f.trim().to_lowercase()).collect(),
        };
        match kind {
            EntityKind::Liquor => self.liquors.push(mapping),
            EntityKind::Ingredient => self.ingredients.push(mapping),
        }
    }

    pub fn with(mut self, kind: EntityKind, term: &str, fragments: &[&str]) -> Self {
        self.insert(kind, term, fragments);
        self
    }

    pub fn for_kind(&self, kind: EntityKind) -> &[CategoryMapping] {
        match kind {
            EntityKind::Liquor => &self.liquors,
            EntityKind::Ingredient => &self.ingredients,
        }
    }
}
