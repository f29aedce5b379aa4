use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// A range violation detected while constructing a value
/// or validating an operation's argument
pub enum OutOfRange {
    Latitude,     // |lat| > 90
    Longitude,    // |lon| > 180
    Degrees,      // |deg| > 180
    ArcMinutes,   // min not in [0..60)
    ArcSeconds,   // sec not in [0..60)
    StartBearing, // not in [0..360)
    EndBearing,   // not in [0..360)
    Bearing,      // not in [0..360)
    Distance,     // negative
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Latitude => "Latitude out of range: it must be between -90 and 90",
            Self::Longitude => "Longitude out of range: it must be between -180 and 180",
            Self::Degrees => "Coordinate degrees out of range: they must be between -180 and 180",
            Self::ArcMinutes => "Coordinate minutes out of range: they must be in the range 0 to <60",
            Self::ArcSeconds => "Coordinate seconds out of range: they must be in the range 0 to <60",
            Self::StartBearing => "Start bearing out of range: it must be between 0 and <360",
            Self::EndBearing => "End bearing out of range: it must be between 0 and <360",
            Self::Bearing => "Bearing out of range: it must be between 0 and <360",
            Self::Distance => "Distance out of range: it must not be negative",
        };

        write!(f, "{msg}")
    }
}

impl Error for OutOfRange {}

#[derive(Debug)]
/// The error that can appear while parsing a coordinate
/// from its Degree-Minute-Second notation
pub enum ParseDmsError {
    /// The notation is well-formed, but some part of it violates its range
    Range(OutOfRange),
    /// Some part of the notation is not a valid number
    Float(ParseFloatError),
    /// The string does not look like a Degree-Minute-Second notation at all
    DmsNotation,
}

enum_trivial_from_impl!(OutOfRange => ParseDmsError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseDmsError:Float);

impl fmt::Display for ParseDmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse coordinate: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::DmsNotation => write!(f, "not a Degree-Minute-Second notation"),
        }
    }
}

impl Error for ParseDmsError {}
