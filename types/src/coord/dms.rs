use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{OutOfRange, ParseDmsError};

use super::{
    dd::DdPoint, ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MAX_LATITUDE, MAX_LONGITUDE,
    MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE,
};

/// A single latitude or longitude coordinate in the
/// degrees-minutes-seconds (DMS) notation.
///
/// The sign of the whole coordinate is carried by the degrees part;
/// minutes and seconds are always non-negative magnitudes.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsCoordinate {
    degrees: f64,
    minutes: f64,
    seconds: f64,
}

impl DmsCoordinate {
    /// Construct a coordinate from its degrees, minutes and seconds parts.
    ///
    /// # Errors
    /// The degrees should be in the range `-180..=180`,
    /// the minutes and the seconds in the range `0..60`.
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Result<Self, OutOfRange> {
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&degrees) {
            return Err(OutOfRange::Degrees);
        }
        if !(0.0..MINUTES_IN_DEGREE).contains(&minutes) {
            return Err(OutOfRange::ArcMinutes);
        }
        if !(0.0..SECONDS_IN_MINUTE).contains(&seconds) {
            return Err(OutOfRange::ArcSeconds);
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    /// Degrees part, carrying the sign of the whole coordinate
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// Arc minutes part
    pub fn minutes(self) -> f64 {
        self.minutes
    }

    /// Arc seconds part
    pub fn seconds(self) -> f64 {
        self.seconds
    }
}

/// Construct regular expression to parse Degree-Minute-Second notation of a coordinate
fn parse_dms_re(is_ascii: bool) -> String {
    let (deg, min, sec) = if is_ascii {
        ("\\*?", '\'', '"')
    } else {
        ("°", '′', '″')
    };

    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<sign>[+-])?                                 # optional sign of the whole coordinate
        (?P<deg>1?\d{{1,2}})                            # degrees VALUE (0..=199) - requires more validation!
        {}                                              # degree sign (can be mandatory or optional)
        (?:\x20?                                        # minutes group optionally started with the space
            (?P<min>[0-5]?\d(?:\.\d+)?)                     # minutes VALUE (0..=59 with an optional decimal fraction)
            {}                                              # arcminute sign
            (?:\x20?                                        # seconds group optionally started with the space
                (?P<sec>[0-5]?\d(?:\.\d+)?)                     # seconds VALUE (0..=59 with an optional decimal fraction)
                {}                                              # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        $                                           # match the whole line till the end
        "#,
        deg, min, sec
    )
}

lazy_static! {
    static ref RE_UNICODE: Regex =
        Regex::new(&parse_dms_re(false)).expect("Unicode regex is valid");
    static ref RE_ASCII: Regex = Regex::new(&parse_dms_re(true)).expect("ASCII regex is valid");
}

impl FromStr for DmsCoordinate {
    type Err = ParseDmsError;

    /// Parse a coordinate from the `55°44′55.68″` notation
    /// or its ASCII fallback (`55*44'55.68"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let capture = RE_UNICODE
            .captures(s)
            .or_else(|| RE_ASCII.captures(s))
            .ok_or(ParseDmsError::DmsNotation)?;

        let degrees: f64 = capture
            .name("deg")
            .expect("the degrees group is mandatory")
            .as_str()
            .parse()?;
        let degrees = match capture.name("sign") {
            Some(sign) if sign.as_str() == "-" => -degrees,
            _ => degrees,
        };

        let minutes = capture
            .name("min")
            .map_or(Ok(0.0), |min| min.as_str().parse())?;
        let seconds = capture
            .name("sec")
            .map_or(Ok(0.0), |sec| sec.as_str().parse())?;

        Ok(Self::new(degrees, minutes, seconds)?)
    }
}

impl fmt::Display for DmsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degrees, DEGREE_SIGN)?;
        if self.seconds > 0.0 {
            write!(
                f,
                "{}{}{}{}",
                self.minutes, ARC_MINUTE_SIGN, self.seconds, ARC_SECOND_SIGN
            )
        } else if self.minutes > 0.0 {
            write!(f, "{}{}", self.minutes, ARC_MINUTE_SIGN)
        } else {
            Ok(())
        }
    }
}

/// The point on the surface of a sphere, represented as the pair
/// (latitude, longitude) in the degrees-minutes-seconds (DMS) notation.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsPoint {
    latitude: DmsCoordinate,
    longitude: DmsCoordinate,
}

impl DmsPoint {
    /// Construct a point from the given latitude and longitude
    /// in the DMS notation.
    ///
    /// # Errors
    /// The latitude degrees should be in the range `-90..=90`.
    /// The longitude is constrained by the
    /// [coordinate](struct.DmsCoordinate.html)'s own bounds only.
    pub fn new(latitude: DmsCoordinate, longitude: DmsCoordinate) -> Result<Self, OutOfRange> {
        if latitude.degrees.abs() > MAX_LATITUDE {
            return Err(OutOfRange::Latitude);
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude of the point
    pub fn latitude(self) -> DmsCoordinate {
        self.latitude
    }

    /// Longitude of the point
    pub fn longitude(self) -> DmsCoordinate {
        self.longitude
    }

    /// The equivalent point in the decimal degrees (DD) notation.
    ///
    /// # Errors
    /// The reconstructed decimal value can leave the valid latitude
    /// or longitude range when the degrees part already sits on the bound
    /// (e.g. the latitude `90°30′` reconstructs into 90.5).
    ///
    /// ```
    /// use haversine_types::{DmsCoordinate, DmsPoint};
    ///
    /// let latitude = DmsCoordinate::new(55.0, 44.0, 55.68).unwrap();
    /// let longitude = DmsCoordinate::new(-12.0, 31.0, 8.76).unwrap();
    /// let point = DmsPoint::new(latitude, longitude).unwrap();
    ///
    /// let dd = point.to_dd_point().unwrap();
    /// assert_eq!((dd.latitude() * 1e4).round() / 1e4, 55.7488);
    /// assert_eq!((dd.longitude() * 1e4).round() / 1e4, -12.5191);
    /// ```
    pub fn to_dd_point(self) -> Result<DdPoint, OutOfRange> {
        DdPoint::new(to_decimal(self.latitude), to_decimal(self.longitude))
    }
}

/// Recompose a DMS coordinate into a single decimal degrees value,
/// the sign taken from the degrees part (zero treated as non-negative).
fn to_decimal(coordinate: DmsCoordinate) -> f64 {
    let magnitude = coordinate.degrees.abs()
        + coordinate.minutes / MINUTES_IN_DEGREE
        + coordinate.seconds / SECONDS_IN_DEGREE;

    if coordinate.degrees >= 0.0 {
        magnitude
    } else {
        -magnitude
    }
}

impl fmt::Display for DmsPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.latitude, self.longitude)
    }
}
