//! Bearings of a sphere path (orthodrome) between two points

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::OutOfRange;

pub(crate) const FULL_TURN_DEG: f64 = 360.0;
pub(crate) const HALF_TURN_DEG: f64 = 180.0;

/// The pair of start and end bearings of a sphere path between two points,
/// in degrees clockwise from North.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereBearing {
    start: f64,
    end: f64,
}

impl SphereBearing {
    /// Construct a bearing pair.
    ///
    /// # Errors
    /// Both bearings should be in the range `0..360` degrees.
    pub fn new(start: f64, end: f64) -> Result<Self, OutOfRange> {
        if !(0.0..FULL_TURN_DEG).contains(&start) {
            return Err(OutOfRange::StartBearing);
        }
        if !(0.0..FULL_TURN_DEG).contains(&end) {
            return Err(OutOfRange::EndBearing);
        }

        Ok(Self { start, end })
    }

    /// Bearing at the start of the path, in degrees clockwise from North
    pub fn start(self) -> f64 {
        self.start
    }

    /// Bearing at the end of the path, in degrees clockwise from North
    pub fn end(self) -> f64 {
        self.end
    }
}

impl fmt::Display for SphereBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}°,{}°)", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values() {
        assert!(SphereBearing::new(0.0, 0.0).is_ok());
        assert!(SphereBearing::new(359.99, 359.99).is_ok());
    }

    #[test]
    fn start_bounds() {
        assert_eq!(
            SphereBearing::new(-0.1, 0.0),
            Err(OutOfRange::StartBearing)
        );
        assert_eq!(
            SphereBearing::new(360.0, 0.0),
            Err(OutOfRange::StartBearing)
        );
    }

    #[test]
    fn end_bounds() {
        assert_eq!(SphereBearing::new(0.0, -0.1), Err(OutOfRange::EndBearing));
        assert_eq!(SphereBearing::new(0.0, 360.0), Err(OutOfRange::EndBearing));
    }

    #[test]
    fn accessors() {
        let bearing = SphereBearing::new(114.8916, 148.4681).unwrap();
        assert_eq!(bearing.start(), 114.8916);
        assert_eq!(bearing.end(), 148.4681);
    }

    #[test]
    fn display() {
        let bearing = SphereBearing::new(114.5, 148.25).unwrap();
        assert_eq!(bearing.to_string(), "(114.5°,148.25°)");
    }
}
