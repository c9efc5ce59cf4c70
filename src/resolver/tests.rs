use super::*;
use crate::alias::{
    AliasIndex, Catalog, CategoryMappings, EntityKind, ExactAliasTable, KindFilter,
};
use crate::constants::MAX_CANDIDATES;
use std::sync::Arc;

fn embedded_resolver() -> EntityResolver {
    EntityResolver::new(Arc::new(AliasIndex::embedded()))
}

fn names(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(Candidate::name).collect()
}

#[test]
fn test_empty_term_yields_nothing() {
    let resolver = embedded_resolver();

    assert!(resolver.resolve("", KindFilter::Both).is_empty());
    assert!(resolver.resolve("   ", KindFilter::Liquor).is_empty());
}

#[test]
fn test_unknown_term_yields_nothing() {
    let resolver = embedded_resolver();
    assert!(resolver.resolve("zzz", KindFilter::Both).is_empty());
}

#[test]
fn test_exact_alias_ranks_first() {
    let resolver = embedded_resolver();

    let candidates = resolver.resolve("버번", KindFilter::Liquor);

    assert_eq!(candidates[0].name(), "bourbon");
    assert_eq!(candidates[0].id(), 652);
    assert_eq!(candidates[0].match_type, MatchType::ExactAlias);
    assert_eq!(candidates[0].priority, EXACT_ALIAS_PRIORITY);
    // "버번 위스키" contains the term
    assert_eq!(candidates[1].name(), "bourbon_whiskey");
    assert_eq!(candidates[1].match_type, MatchType::PartialAlias);
}

#[test]
fn test_term_is_trimmed() {
    let resolver = embedded_resolver();

    let padded = resolver.resolve("  버번 ", KindFilter::Liquor);
    let plain = resolver.resolve("버번", KindFilter::Liquor);

    assert_eq!(padded, plain);
}

#[test]
fn test_whisky_category() {
    let resolver = embedded_resolver();

    let candidates = resolver.resolve("위스키", KindFilter::Liquor);

    assert_eq!(names(&candidates), vec!["bourbon", "bourbon_whiskey"]);
    assert_eq!(candidates[0].match_type, MatchType::ExactMapping);
    assert_eq!(candidates[0].priority, EXACT_MAPPING_PRIORITY);
    assert_eq!(candidates[0].matched_alias, "위스키");
    // first found by the partial alias pass; the mapping pass must not overwrite it
    assert_eq!(candidates[1].match_type, MatchType::PartialAlias);
}

#[test]
fn test_wine_override_ordering() {
    let resolver = embedded_resolver();

    let candidates = resolver.resolve("와인", KindFilter::Liquor);

    assert_eq!(
        names(&candidates),
        vec![
            "dry_red_wine",
            "dry_white_wine",
            "dry_wine",
            "chianti_wine",
            "burgundy_wine",
        ]
    );
    assert_eq!(candidates[2].priority, 400);
    // upgraded from the generic "wine" tail by the "chianti" fragment
    assert_eq!(candidates[3].priority, PARTIAL_MAPPING_PRIORITY);
}

#[test]
fn test_without_overrides_wine_is_flat() {
    let resolver = EntityResolver::with_priorities(
        Arc::new(AliasIndex::embedded()),
        PriorityTable::without_overrides(),
    );

    let candidates = resolver.resolve("와인", KindFilter::Liquor);

    assert!(
        candidates
            .iter()
            .filter(|c| c.match_type == MatchType::PartialMapping)
            .all(|c| c.priority == PARTIAL_MAPPING_PRIORITY)
    );
}

#[test]
fn test_kind_filter_restricts_results() {
    let resolver = embedded_resolver();

    let liquors = resolver.resolve("치즈", KindFilter::Liquor);
    assert!(liquors.is_empty());

    let ingredients = resolver.resolve("치즈", KindFilter::Ingredient);
    assert_eq!(ingredients[0].name(), "cheese");
    assert_eq!(ingredients[0].match_type, MatchType::ExactMapping);
    assert!(ingredients.iter().all(|c| c.kind() == EntityKind::Ingredient));
}

#[test]
fn test_results_are_capped() {
    let resolver = embedded_resolver();

    let candidates = resolver.resolve("치즈", KindFilter::Both);

    assert_eq!(candidates.len(), MAX_CANDIDATES);
}

#[test]
fn test_no_duplicate_entities() {
    let resolver = embedded_resolver();

    for term in ["와인", "위스키", "치즈", "크림", "럼", "버번"] {
        let candidates = resolver.resolve(term, KindFilter::Both);
        let mut keys: Vec<_> = candidates.iter().map(|c| (c.kind(), c.id())).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), candidates.len(), "duplicates for {term}");
    }
}

#[test]
fn test_sorted_by_priority() {
    let resolver = embedded_resolver();

    for term in ["와인", "치즈", "크림치즈", "진"] {
        let candidates = resolver.resolve(term, KindFilter::Both);
        assert!(
            candidates.windows(2).all(|w| w[0].priority >= w[1].priority),
            "unsorted for {term}"
        );
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let resolver = embedded_resolver();

    let first = resolver.resolve("와인", KindFilter::Both);
    for _ in 0..5 {
        assert_eq!(resolver.resolve("와인", KindFilter::Both), first);
    }
}

#[test]
fn test_exact_alias_resolves_in_both_kinds() {
    let catalog = Catalog::new()
        .with(EntityKind::Liquor, "cherry", 1)
        .with(EntityKind::Ingredient, "cherry", 2);
    let exact: ExactAliasTable = [("체리", "cherry")].into_iter().collect();
    let resolver = EntityResolver::new(Arc::new(AliasIndex::from_parts(
        exact,
        catalog,
        CategoryMappings::new(),
    )));

    let candidates = resolver.resolve("체리", KindFilter::Both);

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].kind(), EntityKind::Liquor);
    assert_eq!(candidates[1].kind(), EntityKind::Ingredient);
    assert!(candidates.iter().all(|c| c.priority == EXACT_ALIAS_PRIORITY));
}

#[test]
fn test_alias_to_unknown_name_is_ignored() {
    let catalog = Catalog::new().with(EntityKind::Liquor, "beer", 423);
    let exact: ExactAliasTable = [("맥주", "lager")].into_iter().collect();
    let resolver = EntityResolver::new(Arc::new(AliasIndex::from_parts(
        exact,
        catalog,
        CategoryMappings::new(),
    )));

    assert!(resolver.resolve("맥주", KindFilter::Both).is_empty());
}

#[test]
fn test_priority_table_mapping() {
    let table = PriorityTable::default();

    assert_eq!(
        table.mapping("cheese", "cheese"),
        (MatchType::ExactMapping, EXACT_MAPPING_PRIORITY)
    );
    assert_eq!(
        table.mapping("cheese", "cheddar_cheese"),
        (MatchType::PartialMapping, PARTIAL_MAPPING_PRIORITY)
    );
    assert_eq!(
        table.mapping("wine", "dry_red_wine"),
        (MatchType::PartialMapping, 400)
    );
    assert_eq!(
        table.mapping("wine", "chardonnay_wine"),
        (MatchType::PartialMapping, 300)
    );
    assert_eq!(
        table.mapping("wine", "chinese_wine"),
        (MatchType::PartialMapping, 100)
    );
}

#[test]
fn test_custom_override() {
    let mut table = PriorityTable::without_overrides();
    table
        .overrides
        .push(FragmentOverride::new("cheese", 50).tier(&["cream"], 350));

    assert_eq!(table.mapping("cheese", "cream_cheese").1, 350);
    assert_eq!(table.mapping("cheese", "feta_cheese").1, 50);
    assert_eq!(table.base(MatchType::PartialAlias), PARTIAL_ALIAS_PRIORITY);
}
