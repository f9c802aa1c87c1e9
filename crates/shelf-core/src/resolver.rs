//! Query Resolver: prefix lookup plus per-token set intersection/union.
//!
//! A query is split on runs of whitespace, so leading, trailing and repeated
//! spaces never produce empty tokens. Each token selects the contiguous run of
//! vocabulary entries it prefixes; the ids under those entries form the
//! token's match set. `All` intersects the per-token sets, `Any` unions them.
//!
//! Results come back in ascending id order. Callers must not rely on that:
//! the contract is a set.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use crate::index::CatalogIndex;
use crate::types::{Item, ItemId};

/// How per-token match sets are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every token must match (intersection).
    #[default]
    All,
    /// Any token may match (union).
    Any,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::All => write!(f, "all"),
            MatchMode::Any => write!(f, "any"),
        }
    }
}

/// A tokenized, lowercased query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Read-only view over a [`CatalogIndex`] that answers queries.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a CatalogIndex,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a CatalogIndex) -> Self {
        Self { index }
    }

    /// Items having a keyword that starts with `token` (case-insensitive).
    ///
    /// An item matched through several keywords is returned once per keyword.
    pub fn lookup_prefix(&self, token: &str) -> Vec<&'a Item> {
        let index = self.index;
        let keywords = index.keyword_index();
        self.prefix_run(&token.to_lowercase())
            .iter()
            .flat_map(|keyword| keywords.get(keyword))
            .filter_map(|id| index.item(*id))
            .collect()
    }

    /// Items matching every token of `query`. An empty query matches nothing.
    pub fn resolve_all(&self, query: &str) -> Vec<&'a Item> {
        self.resolve(query, MatchMode::All)
    }

    /// Items matching at least one token of `query`.
    pub fn resolve_any(&self, query: &str) -> Vec<&'a Item> {
        self.resolve(query, MatchMode::Any)
    }

    pub fn resolve(&self, query: &str, mode: MatchMode) -> Vec<&'a Item> {
        let query = Query::parse(query);
        let ids = match mode {
            MatchMode::All => self.intersect(&query),
            MatchMode::Any => self.union(&query),
        };
        tracing::debug!(tokens = query.tokens().len(), %mode, matches = ids.len(), "query resolved");

        let index = self.index;
        ids.into_iter().filter_map(|id| index.item(id)).collect()
    }

    fn intersect(&self, query: &Query) -> BTreeSet<ItemId> {
        let mut tokens = query.tokens().iter();
        let Some(first) = tokens.next() else {
            return BTreeSet::new();
        };

        let mut matching = self.token_ids(first);
        for token in tokens {
            if matching.is_empty() {
                break;
            }
            let current = self.token_ids(token);
            matching.retain(|id| current.contains(id));
        }
        matching
    }

    fn union(&self, query: &Query) -> BTreeSet<ItemId> {
        query
            .tokens()
            .iter()
            .flat_map(|token| self.token_ids(token))
            .collect()
    }

    /// Match set of one already-lowercased token.
    fn token_ids(&self, token: &str) -> BTreeSet<ItemId> {
        let keywords = self.index.keyword_index();
        self.prefix_run(token)
            .iter()
            .flat_map(|keyword| keywords.get(keyword))
            .copied()
            .collect()
    }

    /// The contiguous vocabulary slice whose entries start with `token`.
    ///
    /// Starts at the leftmost entry `>= token`; since the vocabulary is
    /// sorted, every prefix match follows it without gaps.
    fn prefix_run(&self, token: &str) -> &'a [String] {
        let vocabulary = self.index.vocabulary();
        let start = vocabulary.partition_point(|keyword| keyword.as_str() < token);
        let len = vocabulary[start..]
            .iter()
            .take_while(|keyword| keyword.starts_with(token))
            .count();
        &vocabulary[start..start + len]
    }
}
