//! The Haversine great-circle resolver.
//! [Read more](https://en.wikipedia.org/wiki/Haversine_formula)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{to_degrees, to_radians},
    bearing::{SphereBearing, FULL_TURN_DEG, HALF_TURN_DEG},
    coord::DdPoint,
    errors::OutOfRange,
};

/// The closed set of supported units of distance
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitOfDistance {
    /// metres
    Metre,
    /// kilometres (the default)
    #[default]
    Kilometre,
    /// statute miles
    Mile,
}

impl UnitOfDistance {
    /// The Earth radius at the equator, expressed in this unit.
    /// [Read more](https://en.wikipedia.org/wiki/Earth_radius)
    pub fn equatorial_earth_radius(self) -> f64 {
        match self {
            Self::Metre => 6_378_137.0,
            Self::Kilometre => 6_378.137,
            Self::Mile => 3_963.191,
        }
    }
}

/// The ordering applied by [`Haversine::sort_by_distance`]
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortDirection {
    /// The closest points first (the default)
    #[default]
    Ascending,
    /// The farthest points first
    Descending,
}

/// Haversine formula resolver over a sphere of a fixed radius.
///
/// All the distance-producing and distance-consuming operations
/// are expressed in the unit of the radius chosen at construction.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Haversine {
    sphere_radius: f64,
}

impl Haversine {
    /// Construct a resolver over the Earth,
    /// with the radius implied by the given unit of distance.
    pub fn new(unit: UnitOfDistance) -> Self {
        Self {
            sphere_radius: unit.equatorial_earth_radius(),
        }
    }

    /// Construct a resolver over a custom sphere.
    /// The radius is taken verbatim and defines the unit
    /// of every operation of the resolver.
    pub fn with_sphere_radius(sphere_radius: f64) -> Self {
        Self { sphere_radius }
    }

    /// The radius of the sphere the resolver operates on
    pub fn sphere_radius(self) -> f64 {
        self.sphere_radius
    }

    /// The great-circle distance between two points,
    /// in the unit of the resolver's radius.
    ///
    /// The distance is always non-negative, symmetric in its arguments
    /// and zero for two identical points.
    pub fn get_distance(self, point_a: DdPoint, point_b: DdPoint) -> f64 {
        let rad_a_latitude = to_radians(point_a.latitude());
        let rad_b_latitude = to_radians(point_b.latitude());

        let latitude_delta = rad_b_latitude - rad_a_latitude;
        let longitude_delta = to_radians(point_b.longitude()) - to_radians(point_a.longitude());

        let a = (latitude_delta / 2.0).sin().powi(2)
            + rad_a_latitude.cos() * rad_b_latitude.cos() * (longitude_delta / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        c * self.sphere_radius
    }

    /// The start and end bearings of the sphere path (orthodrome)
    /// from `point_a` to `point_b`.
    pub fn get_bearing(self, point_a: DdPoint, point_b: DdPoint) -> SphereBearing {
        let start = initial_bearing(point_a, point_b);
        let end = (initial_bearing(point_b, point_a) + HALF_TURN_DEG) % FULL_TURN_DEG;

        SphereBearing::new(start, end).expect("normalized bearings always fit the full turn")
    }

    /// The destination point after travelling the given distance
    /// from the start point along the given bearing.
    ///
    /// # Errors
    /// The bearing should be in the range `0..360` degrees
    /// and the distance non-negative.
    /// The destination coordinates are re-validated on construction:
    /// a path crossing the antimeridian leaves the valid longitude
    /// range and is reported as a range violation.
    pub fn get_point(
        self,
        start: DdPoint,
        bearing: f64,
        distance: f64,
    ) -> Result<DdPoint, OutOfRange> {
        if !(0.0..FULL_TURN_DEG).contains(&bearing) {
            return Err(OutOfRange::Bearing);
        }
        if distance < 0.0 {
            return Err(OutOfRange::Distance);
        }

        let angular_distance = distance / self.sphere_radius;
        let rad_bearing = to_radians(bearing);
        let rad_latitude = to_radians(start.latitude());
        let rad_longitude = to_radians(start.longitude());

        let end_latitude = (rad_latitude.sin() * angular_distance.cos()
            + rad_latitude.cos() * angular_distance.sin() * rad_bearing.cos())
        .asin();
        let end_longitude = rad_longitude
            + (rad_bearing.sin() * angular_distance.sin() * rad_latitude.cos())
                .atan2(angular_distance.cos() - rad_latitude.sin() * end_latitude.sin());

        DdPoint::new(to_degrees(end_latitude), to_degrees(end_longitude))
    }

    /// The given points reordered by their distance from the reference point.
    ///
    /// The sort is stable: the points at equal distances keep
    /// their relative input order. The input is left intact.
    ///
    /// ```
    /// use haversine_types::{DdPoint, Haversine, SortDirection};
    ///
    /// let haversine = Haversine::default();
    /// let origin = DdPoint::default();
    /// let points = [
    ///     DdPoint::new(1.0, 1.0).unwrap(),
    ///     DdPoint::new(0.5, 0.5).unwrap(),
    ///     DdPoint::new(2.0, 2.0).unwrap(),
    /// ];
    ///
    /// let closest_first = haversine.sort_by_distance(origin, &points, SortDirection::Ascending);
    /// assert_eq!(closest_first[0], points[1]);
    /// assert_eq!(closest_first[1], points[0]);
    /// assert_eq!(closest_first[2], points[2]);
    /// ```
    pub fn sort_by_distance(
        self,
        reference: DdPoint,
        points: &[DdPoint],
        direction: SortDirection,
    ) -> Vec<DdPoint> {
        let mut keyed: Vec<_> = points
            .iter()
            .map(|&point| (self.get_distance(reference, point), point))
            .collect();

        keyed.sort_by(|(left, _), (right, _)| {
            let ordering = left.total_cmp(right);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        keyed.into_iter().map(|(_, point)| point).collect()
    }

    /// The subsequence of the given points lying within `max_distance`
    /// of the reference point, in their input order.
    ///
    /// A negative `max_distance` filters everything out.
    pub fn get_in_range(
        self,
        reference: DdPoint,
        points: &[DdPoint],
        max_distance: f64,
    ) -> Vec<DdPoint> {
        points
            .iter()
            .copied()
            .filter(|&point| self.get_distance(reference, point) <= max_distance)
            .collect()
    }
}

impl Default for Haversine {
    /// The resolver over the Earth with the distances in kilometres
    fn default() -> Self {
        Self::new(UnitOfDistance::default())
    }
}

/// Forward azimuth of the path from `point_a` to `point_b`,
/// normalized to `0..360` degrees clockwise from North
fn initial_bearing(point_a: DdPoint, point_b: DdPoint) -> f64 {
    let rad_a_latitude = to_radians(point_a.latitude());
    let rad_b_latitude = to_radians(point_b.latitude());
    let longitude_delta = to_radians(point_b.longitude()) - to_radians(point_a.longitude());

    let y = longitude_delta.sin() * rad_b_latitude.cos();
    let x = rad_a_latitude.cos() * rad_b_latitude.sin()
        - rad_a_latitude.sin() * rad_b_latitude.cos() * longitude_delta.cos();
    let theta = y.atan2(x);

    (to_degrees(theta) + FULL_TURN_DEG) % FULL_TURN_DEG
}


#[cfg(test)]
mod tests_bearing {
    use super::*;

    fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10.0_f64.powi(places);
        (value * factor).round() / factor
    }

    #[test]
    fn concrete_path() {
        let haversine = Haversine::default();
        let point_a = DdPoint::new(55.7488, -12.5191).unwrap();
        let point_b = DdPoint::new(-12.5191, 55.7488).unwrap();

        let bearing = haversine.get_bearing(point_a, point_b);

        assert_eq!(round_to(bearing.start(), 4), 114.8916);
        assert_eq!(round_to(bearing.end(), 4), 148.4681);
    }

    #[test]
    fn due_north_path() {
        let haversine = Haversine::default();
        let equator = DdPoint::new(0.0, 0.0).unwrap();
        let north = DdPoint::new(10.0, 0.0).unwrap();

        let bearing = haversine.get_bearing(equator, north);

        assert_eq!(bearing.start(), 0.0);
        assert_eq!(bearing.end(), 0.0);
    }

    #[test]
    fn degenerate_path_of_a_single_point() {
        let haversine = Haversine::default();
        let point = DdPoint::new(55.7488, -12.5191).unwrap();

        let bearing = haversine.get_bearing(point, point);

        assert_eq!(bearing.start(), 0.0);
        assert_eq!(bearing.end(), 180.0);
    }
}



#[cfg(test)]
mod tests_random {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat_a in -90.0..=90.0f64, lon_a in -180.0..=180.0f64,
            lat_b in -90.0..=90.0f64, lon_b in -180.0..=180.0f64,
        ) {
            let haversine = Haversine::default();
            let point_a = DdPoint::new(lat_a, lon_a).unwrap();
            let point_b = DdPoint::new(lat_b, lon_b).unwrap();

            let there = haversine.get_distance(point_a, point_b);
            let back = haversine.get_distance(point_b, point_a);

            prop_assert!(there >= 0.0);
            prop_assert!((there - back).abs() < 1e-6);
        }

        #[test]
        fn distance_to_itself_is_zero(lat in -90.0..=90.0f64, lon in -180.0..=180.0f64) {
            let haversine = Haversine::default();
            let point = DdPoint::new(lat, lon).unwrap();

            prop_assert_eq!(haversine.get_distance(point, point), 0.0);
        }

        #[test]
        fn bearings_are_normalized(
            lat_a in -90.0..=90.0f64, lon_a in -180.0..=180.0f64,
            lat_b in -90.0..=90.0f64, lon_b in -180.0..=180.0f64,
        ) {
            let haversine = Haversine::default();
            let point_a = DdPoint::new(lat_a, lon_a).unwrap();
            let point_b = DdPoint::new(lat_b, lon_b).unwrap();

            let bearing = haversine.get_bearing(point_a, point_b);

            prop_assert!((0.0..360.0).contains(&bearing.start()));
            prop_assert!((0.0..360.0).contains(&bearing.end()));
        }

        #[test]
        fn destination_of_the_measured_path(
            lat_a in -60.0..=60.0f64, lon_a in 0.0..=90.0f64,
            lat_b in -60.0..=60.0f64, lon_b in 0.0..=90.0f64,
        ) {
            let haversine = Haversine::default();
            let point_a = DdPoint::new(lat_a, lon_a).unwrap();
            let point_b = DdPoint::new(lat_b, lon_b).unwrap();

            let bearing = haversine.get_bearing(point_a, point_b);
            let distance = haversine.get_distance(point_a, point_b);
            let end = haversine.get_point(point_a, bearing.start(), distance).unwrap();

            prop_assert!((end.latitude() - point_b.latitude()).abs() < 1e-6);
            prop_assert!((end.longitude() - point_b.longitude()).abs() < 1e-6);
        }
    }
}
