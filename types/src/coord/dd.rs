use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::OutOfRange;

use super::{
    dms::{DmsCoordinate, DmsPoint},
    DEGREE_SIGN, MAX_LATITUDE, MAX_LONGITUDE, MINUTES_IN_DEGREE, SECONDS_IN_DEGREE,
};

/// The point on the surface of a sphere, represented as the pair
/// (latitude, longitude) in decimal degrees (DD).
/// [Read more](https://en.wikipedia.org/wiki/Decimal_degrees).
#[derive(Debug, Default, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DdPoint {
    latitude: f64,
    longitude: f64,
}

impl DdPoint {
    /// Construct a point from the given latitude and longitude
    /// in decimal degrees.
    ///
    /// # Errors
    /// The latitude should be in the range `-90..=90` degrees
    /// and the longitude in the range `-180..=180` degrees.
    ///
    /// ```
    /// use haversine_types::DdPoint;
    ///
    /// let copenhagen = DdPoint::new(55.7488, -12.5191).unwrap();
    /// assert_eq!(copenhagen.latitude(), 55.7488);
    ///
    /// assert!(DdPoint::new(90.1, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, OutOfRange> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(OutOfRange::Latitude);
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(OutOfRange::Longitude);
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude of the point, in decimal degrees
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude of the point, in decimal degrees
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// The equivalent point in the degrees-minutes-seconds (DMS) notation
    pub fn to_dms_point(self) -> DmsPoint {
        let latitude = to_dms_coordinate(self.latitude);
        let longitude = to_dms_coordinate(self.longitude);
        DmsPoint::new(latitude, longitude).expect("DD latitude is never beyond the poles")
    }
}

/// Decompose a single decimal degrees value into whole degrees,
/// whole arc minutes and the arc seconds remainder.
/// The sign is carried by the degrees part only (zero stays non-negative).
fn to_dms_coordinate(dd: f64) -> DmsCoordinate {
    let magnitude = dd.abs();
    let degrees = magnitude.floor();
    let minutes = ((magnitude - degrees) * MINUTES_IN_DEGREE).floor();
    let seconds = (magnitude - degrees - minutes / MINUTES_IN_DEGREE) * SECONDS_IN_DEGREE;

    let degrees = if dd >= 0.0 { degrees } else { -degrees };
    DmsCoordinate::new(degrees, minutes, seconds)
        .expect("floor decomposition keeps minutes and seconds below 60")
}

impl fmt::Display for DdPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}{sign},{}{sign})",
            self.latitude,
            self.longitude,
            sign = DEGREE_SIGN
        )
    }
}


#[cfg(test)]
mod tests_random {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn dms_round_trip(latitude in -90.0..=90.0f64, longitude in -180.0..=180.0f64) {
            let point = DdPoint::new(latitude, longitude).unwrap();
            let back = point.to_dms_point().to_dd_point().unwrap();

            prop_assert!((back.latitude() - latitude).abs() < 1e-4);
            prop_assert!((back.longitude() - longitude).abs() < 1e-4);
        }

        #[test]
        fn decomposed_parts_are_in_range(value in -180.0..=180.0f64) {
            let coordinate = to_dms_coordinate(value);

            prop_assert!(coordinate.degrees().abs() <= 180.0);
            prop_assert!((0.0..60.0).contains(&coordinate.minutes()));
            prop_assert!((0.0..60.0).contains(&coordinate.seconds()));
        }
    }
}
