//! Travel mode identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InvalidMode;

/// Identifier of a catalog travel mode, e.g. `driving`, `bus`, `e-bike`.
///
/// Identifiers are non-empty, lowercase ASCII letters, digits and `-`.
///
/// # Examples
///
/// ```
/// use greenway_server::domain::ModeId;
///
/// let mode = ModeId::parse("e-bike").unwrap();
/// assert_eq!(mode.as_str(), "e-bike");
///
/// assert!(ModeId::parse("").is_err());
/// assert!(ModeId::parse("E-Bike").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModeId(String);

impl ModeId {
    /// The mode that carries carpooling state in the selection view.
    pub const DRIVING: &'static str = "driving";

    /// Parse a mode identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        if s.is_empty() {
            return Err(InvalidMode {
                value: s.to_string(),
                reason: "must not be empty",
            });
        }

        let valid = s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if !valid {
            return Err(InvalidMode {
                value: s.to_string(),
                reason: "must be lowercase ASCII letters, digits or '-'",
            });
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `driving` mode.
    pub fn is_driving(&self) -> bool {
        self.0 == Self::DRIVING
    }
}

impl TryFrom<String> for ModeId {
    type Error = InvalidMode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ModeId> for String {
    fn from(mode: ModeId) -> Self {
        mode.0
    }
}

impl PartialEq<str> for ModeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModeId({})", self.0)
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A travel mode the directions provider understands directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    Driving,
    Transit,
    Walking,
    Bicycling,
}

impl ProviderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderMode::Driving => "driving",
            ProviderMode::Transit => "transit",
            ProviderMode::Walking => "walking",
            ProviderMode::Bicycling => "bicycling",
        }
    }

    /// Driving-like modes request traffic-aware durations.
    pub fn is_driving_like(&self) -> bool {
        matches!(self, ProviderMode::Driving)
    }
}

impl FromStr for ProviderMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(ProviderMode::Driving),
            "transit" => Ok(ProviderMode::Transit),
            "walking" => Ok(ProviderMode::Walking),
            "bicycling" => Ok(ProviderMode::Bicycling),
            _ => Err(InvalidMode {
                value: s.to_string(),
                reason: "not a provider mode",
            }),
        }
    }
}

impl fmt::Display for ProviderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transit vehicle filter for transit sub-modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitVehicle {
    Bus,
    Tram,
    Subway,
}

impl TransitVehicle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitVehicle::Bus => "bus",
            TransitVehicle::Tram => "tram",
            TransitVehicle::Subway => "subway",
        }
    }
}

impl fmt::Display for TransitVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
