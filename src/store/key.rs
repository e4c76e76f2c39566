//! Draft kinds and storage key computation
//!
//! Keys follow the layout `<prefix>:<userId|anon>[:<entityId>]`. The prefix
//! identifies the draft kind, the middle segment scopes the draft to the
//! authenticated user (or the shared anonymous scope), and the optional
//! trailing segment ties a draft to a parent entity, e.g. an application
//! draft to its program.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Scope segment used when no user is authenticated
pub const ANON_SCOPE: &str = "anon";

/// The entity kinds that have draftable creation flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftKind {
    Program,
    Investment,
    Project,
    Application,
}

impl DraftKind {
    /// Stable storage prefix for this kind. These values are persisted in
    /// draft keys and must not change between releases.
    pub fn prefix(&self) -> &'static str {
        match self {
            DraftKind::Program => "programDraft",
            DraftKind::Investment => "investmentDraft",
            DraftKind::Project => "projectDraft",
            DraftKind::Application => "applicationDraft",
        }
    }

    /// Human-facing name, as accepted by the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftKind::Program => "program",
            DraftKind::Investment => "investment",
            DraftKind::Project => "project",
            DraftKind::Application => "application",
        }
    }

    /// All kinds, in display order
    pub fn all() -> &'static [DraftKind] {
        &[
            DraftKind::Program,
            DraftKind::Investment,
            DraftKind::Project,
            DraftKind::Application,
        ]
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        DraftKind::all().iter().copied().find(|k| k.prefix() == prefix)
    }
}

impl FromStr for DraftKind {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "program" => Ok(DraftKind::Program),
            "investment" => Ok(DraftKind::Investment),
            "project" => Ok(DraftKind::Project),
            "application" => Ok(DraftKind::Application),
            _ => Err(ParseKeyError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for DraftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("unknown draft kind: {0}")]
    UnknownKind(String),
    #[error("malformed draft key: {0}")]
    Malformed(String),
}

/// A computed draft storage key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraftKey {
    kind: DraftKind,
    raw: String,
}

impl DraftKey {
    /// Compute the key for a draft kind, user, and optional parent entity.
    ///
    /// Deterministic: the same inputs always produce the same key. A missing
    /// user falls back to the shared anonymous scope, so a draft started
    /// before login lands under `<prefix>:anon`.
    pub fn new(kind: DraftKind, user: Option<&str>, entity: Option<&str>) -> Self {
        let scope = user.filter(|u| !u.is_empty()).unwrap_or(ANON_SCOPE);
        let raw = match entity {
            Some(entity) => format!("{}:{}:{}", kind.prefix(), scope, entity),
            None => format!("{}:{}", kind.prefix(), scope),
        };
        Self { kind, raw }
    }

    /// The kind this key belongs to
    pub fn kind(&self) -> DraftKind {
        self.kind
    }

    /// The raw key text as stored
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this key is in the anonymous scope
    pub fn is_anonymous(&self) -> bool {
        self.raw
            .split(':')
            .nth(1)
            .is_some_and(|scope| scope == ANON_SCOPE)
    }
}

impl FromStr for DraftKey {
    type Err = ParseKeyError;

    /// Parse a raw key back into a DraftKey, e.g. for CLI `show`/`clear`.
    /// Accepts `prefix:scope` and `prefix:scope:entity` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.splitn(3, ':');
        let prefix = segments.next().unwrap_or_default();
        let kind = DraftKind::from_prefix(prefix)
            .ok_or_else(|| ParseKeyError::UnknownKind(prefix.to_string()))?;

        match segments.next() {
            Some(scope) if !scope.is_empty() => Ok(Self {
                kind,
                raw: s.to_string(),
            }),
            _ => Err(ParseKeyError::Malformed(s.to_string())),
        }
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
