//! Tiered tag lookup.
//!
//! A value is folded and looked up in three tiers, first within the
//! categories answering the hint, then across every category:
//!
//! 1. **Exact**: folded tag name equals the folded value.
//! 2. **Alias**: the value's alias table, each alias first compared for
//!    equality, then as a substring of the tag name.
//! 3. **Partial**: the folded value is a substring of the tag name.
//!
//! Substring comparisons need at least three characters. Tags without an
//! id are never returned.

use super::aliases::{aliases_for, CategoryHint};
use super::taxonomy::{Category, Tag, TagId, Taxonomy};
use seedforge_common::text::fold;
use tracing::debug;

const MIN_SUBSTRING_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Exact,
    Alias,
    Partial,
}

/// A resolved tag and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    pub tag: &'a Tag,
    pub category: &'a Category,
    pub tier: MatchTier,
    /// Found within the hinted categories.
    pub scoped: bool,
}

/// Looks up tags in a borrowed taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct TagResolver<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> TagResolver<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &'a Taxonomy {
        self.taxonomy
    }

    /// Tag id for a display value, trying every tier.
    pub fn find_tag_id_by_name(&self, value: &str, hint: Option<CategoryHint>) -> Option<&'a TagId> {
        self.find(value, hint).map(|m| &m.tag.id)
    }

    /// Full lookup: scoped exact, alias and partial, then the same unscoped.
    ///
    /// Without a hint every category is in scope.
    pub fn find(&self, value: &str, hint: Option<CategoryHint>) -> Option<TagMatch<'a>> {
        let query = fold(value);
        if query.is_empty() {
            return None;
        }

        let scope = self.scope(hint);
        if let Some(found) = self.search(&scope, &query, &ALL_TIERS, true) {
            return Some(found);
        }
        if hint.is_none() {
            return None;
        }

        let all: Vec<&'a Category> = self.taxonomy.categories.iter().collect();
        let found = self.search(&all, &query, &ALL_TIERS, false);
        if let Some(found) = &found {
            debug!(
                value,
                ?hint,
                category = %found.category.name,
                tag = %found.tag.name,
                "Tag matched outside its category"
            );
        }
        found
    }

    /// Scoped exact and alias lookup only, with no unscoped fallback.
    pub fn find_strict(&self, value: &str, hint: CategoryHint) -> Option<TagMatch<'a>> {
        let query = fold(value);
        if query.is_empty() {
            return None;
        }
        let scope = self.scope(Some(hint));
        self.search(&scope, &query, &[MatchTier::Exact, MatchTier::Alias], true)
    }

    fn scope(&self, hint: Option<CategoryHint>) -> Vec<&'a Category> {
        self.taxonomy
            .categories
            .iter()
            .filter(|c| hint.map_or(true, |h| h.matches_category(&c.name, c.slug.as_deref())))
            .collect()
    }

    fn search(
        &self,
        categories: &[&'a Category],
        query: &str,
        tiers: &[MatchTier],
        scoped: bool,
    ) -> Option<TagMatch<'a>> {
        for tier in tiers {
            let found = match tier {
                MatchTier::Exact => first_tag(categories, |name| name == query),
                MatchTier::Alias => {
                    let aliases = aliases_for(query);
                    aliases
                        .iter()
                        .find_map(|alias| first_tag(categories, |name| name == *alias))
                        .or_else(|| {
                            aliases
                                .iter()
                                .filter(|alias| alias.len() >= MIN_SUBSTRING_LEN)
                                .find_map(|alias| first_tag(categories, |name| name.contains(alias)))
                        })
                }
                MatchTier::Partial if query.len() >= MIN_SUBSTRING_LEN => {
                    first_tag(categories, |name| name.contains(query))
                }
                MatchTier::Partial => None,
            };

            if let Some((category, tag)) = found {
                if *tier != MatchTier::Exact {
                    debug!(query, tier = ?tier, tag = %tag.name, "Tag matched by fallback tier");
                }
                return Some(TagMatch {
                    tag,
                    category,
                    tier: *tier,
                    scoped,
                });
            }
        }
        None
    }
}

const ALL_TIERS: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Alias, MatchTier::Partial];

fn first_tag<'a>(
    categories: &[&'a Category],
    predicate: impl Fn(&str) -> bool,
) -> Option<(&'a Category, &'a Tag)> {
    categories.iter().find_map(|category| {
        category
            .tags
            .iter()
            .filter(|t| t.is_selectable())
            .find(|t| predicate(&fold(&t.name)))
            .map(|t| (*category, t))
    })
}
