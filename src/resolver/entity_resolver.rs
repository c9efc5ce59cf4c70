use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::alias::{AliasIndex, Entity, EntityId, EntityKind, KindFilter};
use crate::constants::MAX_CANDIDATES;

use super::priority::PriorityTable;
use super::types::{Candidate, MatchType};

/// Maps free-text terms to ranked candidate entities.
///
/// Resolution is a pure function of `(term, kind)` for a given index: no state is kept
/// between calls.
#[derive(Debug, Clone)]
pub struct EntityResolver {
    index: Arc<AliasIndex>,
    priorities: PriorityTable,
}

/// Per-query accumulator that keeps the first emission of every `(kind, id)`.
struct Emitted {
    candidates: Vec<Candidate>,
    positions: HashMap<(EntityKind, EntityId), usize>,
}

impl Emitted {
    fn new() -> Self {
        Self {
            candidates: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn contains(&self, kind: EntityKind, id: EntityId) -> bool {
        self.positions.contains_key(&(kind, id))
    }

    fn push(&mut self, candidate: Candidate) {
        let key = (candidate.kind(), candidate.id());
        if self.positions.contains_key(&key) {
            return;
        }
        self.positions.insert(key, self.candidates.len());
        self.candidates.push(candidate);
    }

    /// Inserts a mapping hit. Entities from earlier passes (before `pass_start`) are left alone;
    /// entities already emitted by this pass are upgraded if the new priority is higher.
    fn push_mapping(&mut self, candidate: Candidate, pass_start: usize) {
        let key = (candidate.kind(), candidate.id());
        match self.positions.get(&key) {
            Some(&pos) if pos >= pass_start => {
                if candidate.priority > self.candidates[pos].priority {
                    self.candidates[pos] = candidate;
                }
            }
            Some(_) => {}
            None => self.push(candidate),
        }
    }
}

impl EntityResolver {
    pub fn new(index: Arc<AliasIndex>) -> Self {
        Self::with_priorities(index, PriorityTable::default())
    }

    pub fn with_priorities(index: Arc<AliasIndex>, priorities: PriorityTable) -> Self {
        Self { index, priorities }
    }

    pub fn index(&self) -> &AliasIndex {
        &self.index
    }

    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    /// Resolves `term` to at most [`MAX_CANDIDATES`] candidates, best first.
    ///
    /// An empty (or whitespace-only) term, or one that matches nothing, yields an empty list.
    pub fn resolve(&self, term: &str, filter: KindFilter) -> Vec<Candidate> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        let mut emitted = Emitted::new();

        self.exact_alias_pass(term, filter, &mut emitted);
        self.partial_alias_pass(term, filter, &mut emitted);
        self.category_pass(term, filter, &mut emitted);

        let found = emitted.candidates.len();
        let mut candidates = emitted.candidates;
        candidates.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.entity.name.len().cmp(&b.entity.name.len()))
                .then_with(|| a.entity.name.cmp(&b.entity.name))
                .then_with(|| a.entity.kind.cmp(&b.entity.kind))
                .then_with(|| a.entity.id.cmp(&b.entity.id))
        });
        candidates.truncate(MAX_CANDIDATES);

        debug!(
            term,
            filter = ?filter,
            found,
            returned = candidates.len(),
            "Resolved term"
        );

        candidates
    }

    fn exact_alias_pass(&self, term: &str, filter: KindFilter, emitted: &mut Emitted) {
        let Some(name) = self.index.exact_alias(term) else {
            return;
        };

        for &kind in filter.kinds() {
            if let Some(entity) = self.index.entity_by_name(kind, name) {
                emitted.push(Candidate {
                    entity,
                    matched_alias: term.to_string(),
                    match_type: MatchType::ExactAlias,
                    priority: self.priorities.base(MatchType::ExactAlias),
                });
            }
        }
    }

    fn partial_alias_pass(&self, term: &str, filter: KindFilter, emitted: &mut Emitted) {
        let priority = self.priorities.base(MatchType::PartialAlias);

        for (alias, name) in self.index.exact_aliases() {
            if !(alias.contains(term) || term.contains(alias)) {
                continue;
            }

            for &kind in filter.kinds() {
                let Some(entity) = self.index.entity_by_name(kind, name) else {
                    continue;
                };
                if emitted.contains(kind, entity.id) {
                    continue;
                }
                emitted.push(Candidate {
                    entity,
                    matched_alias: alias.to_string(),
                    match_type: MatchType::PartialAlias,
                    priority,
                });
            }
        }
    }

    fn category_pass(&self, term: &str, filter: KindFilter, emitted: &mut Emitted) {
        let pass_start = emitted.candidates.len();

        for &kind in filter.kinds() {
            let names = self.index.names(kind);

            for mapping in self.index.categories(kind) {
                if !mapping.matches(term) {
                    continue;
                }

                for fragment in &mapping.fragments {
                    for (name, &id) in names {
                        if !name.contains(fragment.as_str()) {
                            continue;
                        }

                        let (match_type, priority) = self.priorities.mapping(fragment, name);
                        emitted.push_mapping(
                            Candidate {
                                entity: Entity::new(id, name.clone(), kind),
                                matched_alias: mapping.term.clone(),
                                match_type,
                                priority,
                            },
                            pass_start,
                        );
                    }
                }
            }
        }
    }
}
