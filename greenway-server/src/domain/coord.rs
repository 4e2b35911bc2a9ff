//! Geographic coordinates and bounding boxes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InvalidCoordinate;

/// A WGS84 latitude/longitude pair.
///
/// Values are guaranteed finite and in range when built with [`LatLng::new`]
/// or parsed from a string.
///
/// # Examples
///
/// ```
/// use greenway_server::domain::LatLng;
///
/// let boston: LatLng = "42.3601,-71.0589".parse().unwrap();
/// assert_eq!(boston.lat(), 42.3601);
/// assert_eq!(boston.to_string(), "42.3601,-71.0589");
///
/// assert!("91,0".parse::<LatLng>().is_err());
/// assert!("boston".parse::<LatLng>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLatLng")]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

/// Unchecked wire form, validated through [`LatLng::new`].
#[derive(Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawLatLng> for LatLng {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawLatLng) -> Result<Self, Self::Error> {
        LatLng::new(raw.lat, raw.lng)
    }
}

impl LatLng {
    /// Create a coordinate, checking both components are in range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::LatitudeOutOfRange(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl FromStr for LatLng {
    type Err = InvalidCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| InvalidCoordinate::Format(s.to_string()))?;

        let parse = |component: &'static str, value: &str| {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| InvalidCoordinate::NotANumber {
                    component,
                    value: value.to_string(),
                })
        };

        LatLng::new(parse("latitude", lat)?, parse("longitude", lng)?)
    }
}

/// Formats as `lat,lng`, the form directions providers accept.
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Viewport rectangle covering a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl Bounds {
    pub fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            southwest,
            northeast,
        }
    }
}
