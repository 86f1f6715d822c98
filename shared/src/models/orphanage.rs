//! Orphanage Model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Orphanage image entry
///
/// Order inside [`Orphanage::images`] is display order; `id` is only a
/// stable key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanageImage {
    pub id: i64,
    pub path: String,
}

/// Orphanage record as served by `GET /orphanages/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orphanage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub instructions: String,
    /// Free-text schedule, shown verbatim (e.g. "8am to 6pm")
    #[serde(
        default,
        alias = "opening_hour",
        alias = "openingHour",
        alias = "openingHours"
    )]
    pub opening_hours: String,
    #[serde(
        default,
        alias = "openOnWeekends",
        deserialize_with = "deserialize_weekend_flag"
    )]
    pub open_on_weekends: bool,
    #[serde(default)]
    pub images: Vec<OrphanageImage>,
}

impl Orphanage {
    /// Image at `index`, if any
    pub fn image(&self, index: usize) -> Option<&OrphanageImage> {
        self.images.get(index)
    }

    /// `(latitude, longitude)`
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Raw representations the API has been seen to use for the weekend flag
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

/// Coerce the weekend flag into an explicit `bool`.
///
/// Booleans pass through, numbers are `true` when non-zero, and strings
/// must be one of `true/false`, `1/0`, `yes/no` or empty. `null` is `false`.
fn deserialize_weekend_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawFlag>::deserialize(deserializer)?;
    match raw {
        None => Ok(false),
        Some(RawFlag::Bool(b)) => Ok(b),
        Some(RawFlag::Number(n)) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Some(RawFlag::Text(s)) => parse_flag_text(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid open_on_weekends value: {:?}", s))
        }),
    }
}

fn parse_flag_text(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Rejected orphanage identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid orphanage id: {0:?}")]
pub struct InvalidOrphanageId(pub String);

/// Identifier taken from the navigation context
///
/// Always a single URL path segment made of unreserved characters
/// (ASCII alphanumerics, `-`, `_`, `.`, `~`). The dot segments `.` and `..`
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrphanageId(String);

impl OrphanageId {
    pub fn parse(raw: &str) -> Result<Self, InvalidOrphanageId> {
        let trimmed = raw.trim();
        let valid = !matches!(trimmed, "" | "." | "..")
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidOrphanageId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// API path for this record, relative to the base URL
    pub fn api_path(&self) -> String {
        format!("orphanages/{}", self.0)
    }
}

impl fmt::Display for OrphanageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for OrphanageId {
    type Err = InvalidOrphanageId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for OrphanageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
