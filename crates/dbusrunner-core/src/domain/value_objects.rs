//! Domain value objects: QueryType, Relevance, PathStyle, PropertyValue.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! carry no bus knowledge: conversion to wire shapes happens in the D-Bus
//! adapter.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── QueryType ────────────────────────────────────────────────────────────────

/// Category code of a match, as understood by the search host.
///
/// Codes the host does not define are preserved in [`QueryType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryType {
    NoMatch,
    CompletionMatch,
    #[default]
    PossibleMatch,
    HelperMatch,
    ExactMatch,
    Other(i32),
}

impl QueryType {
    pub const fn code(&self) -> i32 {
        match self {
            Self::NoMatch => 0,
            Self::CompletionMatch => 10,
            Self::PossibleMatch => 30,
            Self::HelperMatch => 70,
            Self::ExactMatch => 100,
            Self::Other(code) => *code,
        }
    }

    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::NoMatch,
            10 => Self::CompletionMatch,
            30 => Self::PossibleMatch,
            70 => Self::HelperMatch,
            100 => Self::ExactMatch,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => f.write_str("no-match"),
            Self::CompletionMatch => f.write_str("completion"),
            Self::PossibleMatch => f.write_str("possible"),
            Self::HelperMatch => f.write_str("helper"),
            Self::ExactMatch => f.write_str("exact"),
            Self::Other(code) => write!(f, "other({code})"),
        }
    }
}

// ── Relevance ────────────────────────────────────────────────────────────────

/// Relevance score of a match.
///
/// Invariant: always within `[0.0, 1.0]`. NaN collapses to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Relevance(f64);

impl Relevance {
    pub const MAX: Self = Self(1.0);
    pub const MIN: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::MIN
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Relevance {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// ── PathStyle ────────────────────────────────────────────────────────────────

/// Which object path a runner publishes its interface at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStyle {
    /// `/runner`, the path the host assumes when none is configured.
    #[default]
    Default,
    /// `/<appnamelc>`.
    AppScoped,
}

impl PathStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AppScoped => "app-scoped",
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PropertyValue ────────────────────────────────────────────────────────────

/// Value stored in a match's open-ended property map.
///
/// Each variant travels as a D-Bus variant (`v`) on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Bool(bool),
    StrList(Vec<String>),
    Int(i64),
    Double(f64),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            Self::StrList(list) => Some(list),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        Self::StrList(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}
