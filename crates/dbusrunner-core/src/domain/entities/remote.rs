//! Records exchanged with the search host: matches, actions, queries.
//!
//! All three are created inside a request handler and dropped once the reply
//! is serialized. None of them carries identity beyond a single reply.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::value_objects::{PropertyValue, QueryType, Relevance};

/// Property keys the host interprets. Anything else is passed through.
pub mod keys {
    pub const SUBTEXT: &str = "subtext";
    pub const CATEGORY: &str = "category";
    pub const MULTILINE: &str = "multiline";
    pub const URLS: &str = "urls";
    pub const ACTIONS: &str = "actions";
}

// ── Query ─────────────────────────────────────────────────────────────────────

/// The search string typed by the user. Never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── MatchProperties ──────────────────────────────────────────────────────────

/// Open-ended property map attached to a match.
///
/// Ordered so that replies are deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchProperties(BTreeMap<String, PropertyValue>);

impl MatchProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    pub fn subtext(&self) -> Option<&str> {
        self.get(keys::SUBTEXT).and_then(PropertyValue::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.get(keys::CATEGORY).and_then(PropertyValue::as_str)
    }

    pub fn is_multiline(&self) -> bool {
        self.get(keys::MULTILINE)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(false)
    }

    pub fn urls(&self) -> &[String] {
        self.get(keys::URLS)
            .and_then(PropertyValue::as_str_list)
            .unwrap_or(&[])
    }

    /// Action ids this match is restricted to, if the runner narrowed them.
    pub fn action_ids(&self) -> Option<&[String]> {
        self.get(keys::ACTIONS).and_then(PropertyValue::as_str_list)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── RemoteMatch ──────────────────────────────────────────────────────────────

/// A single search-result candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteMatch {
    /// Opaque data handed back to `Run` when the match is chosen.
    pub id: String,
    pub text: String,
    pub icon_name: String,
    pub query_type: QueryType,
    pub relevance: Relevance,
    pub properties: MatchProperties,
}

impl RemoteMatch {
    pub fn builder(id: impl Into<String>, text: impl Into<String>) -> RemoteMatchBuilder {
        RemoteMatchBuilder {
            inner: RemoteMatch {
                id: id.into(),
                text: text.into(),
                icon_name: String::new(),
                query_type: QueryType::default(),
                relevance: Relevance::default(),
                properties: MatchProperties::new(),
            },
        }
    }
}

/// Builder for [`RemoteMatch`]; only id and text are mandatory.
#[derive(Debug, Clone)]
pub struct RemoteMatchBuilder {
    inner: RemoteMatch,
}

impl RemoteMatchBuilder {
    pub fn icon(mut self, icon_name: impl Into<String>) -> Self {
        self.inner.icon_name = icon_name.into();
        self
    }

    pub fn query_type(mut self, query_type: QueryType) -> Self {
        self.inner.query_type = query_type;
        self
    }

    pub fn relevance(mut self, relevance: impl Into<Relevance>) -> Self {
        self.inner.relevance = relevance.into();
        self
    }

    pub fn subtext(self, subtext: impl Into<String>) -> Self {
        self.property(keys::SUBTEXT, subtext.into())
    }

    pub fn category(self, category: impl Into<String>) -> Self {
        self.property(keys::CATEGORY, category.into())
    }

    pub fn multiline(self, multiline: bool) -> Self {
        self.property(keys::MULTILINE, multiline)
    }

    pub fn urls(self, urls: Vec<String>) -> Self {
        self.property(keys::URLS, urls)
    }

    pub fn actions(self, action_ids: Vec<String>) -> Self {
        self.property(keys::ACTIONS, action_ids)
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.inner.properties.insert(key, value);
        self
    }

    pub fn build(self) -> RemoteMatch {
        self.inner
    }
}

// ── RemoteAction ─────────────────────────────────────────────────────────────

/// A follow-up operation offered for matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteAction {
    pub id: String,
    pub text: String,
    pub icon_name: String,
}

impl RemoteAction {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        icon_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            icon_name: icon_name.into(),
        }
    }
}
