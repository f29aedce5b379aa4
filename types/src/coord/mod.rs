//! Sphere point coordinates in the decimal degrees (DD)
//! and degrees-minutes-seconds (DMS) notations

pub use self::{
    dd::DdPoint,
    dms::{DmsCoordinate, DmsPoint},
};

mod dd;
mod dms;

pub(crate) const MAX_LATITUDE: f64 = 90.0;
pub(crate) const MAX_LONGITUDE: f64 = 180.0;

pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';
