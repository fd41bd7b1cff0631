//! Settings types for the notebook configurator
//!
//! These types map onto the `config.toml` layers merged by
//! `shop_core::config::SettingsResolver`:
//!
//! ```toml
//! [catalog]
//! path = "catalog.json"
//! malformed = "skip"
//!
//! [resolver]
//! match_policy = "first-match"
//!
//! [display]
//! currency = "$"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How the resolver breaks ties when a partial selection matches several records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// The first matching record in catalog order wins.
    #[default]
    FirstMatch,

    /// Only an unambiguous selection produces a match.
    ///
    /// Option availability is unaffected: a value stays selectable as long
    /// as some record carries it alongside the current selection.
    RequireUnique,
}

impl FromStr for MatchPolicy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-match" | "first" | "permissive" => Ok(MatchPolicy::FirstMatch),
            "require-unique" | "unique" | "strict" => Ok(MatchPolicy::RequireUnique),
            _ => Err(Error::InvalidMatchPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::FirstMatch => write!(f, "first-match"),
            MatchPolicy::RequireUnique => write!(f, "require-unique"),
        }
    }
}

/// What the catalog loader does with rows it cannot turn into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the row, log it, and keep it in the snapshot's quarantine list.
    #[default]
    Skip,
    /// Fail the whole product snapshot.
    Reject,
}

impl FromStr for MalformedPolicy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" | "quarantine" => Ok(MalformedPolicy::Skip),
            "reject" | "fail" => Ok(MalformedPolicy::Reject),
            _ => Err(Error::InvalidMalformedPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPolicy::Skip => write!(f, "skip"),
            MalformedPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Where the catalog comes from and how strictly it is loaded
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Catalog document path (`.json`, `.toml`, `.yaml`)
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub malformed: MalformedPolicy,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolverSettings {
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Symbol printed before prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Effective settings after all layers are merged
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub resolver: ResolverSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}
