use geo_types::{CoordNum, Point};
use nalgebra::{Rotation2, Vector2};
use num_traits::real::Real;

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

impl<T> PointDistance<T> for Point<T>
    where T: CoordNum,
          T: Real {
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

/// Rotates a 2D vector (carried as a [`geo_types::Point`]) counterclockwise
/// by `angle_degrees`. Magnitude is preserved. Returns a new point; the
/// input is never modified.
pub fn rotate_vector(vector: Point<f64>, angle_degrees: f64) -> Point<f64> {
    let rotated = Rotation2::new(degrees(angle_degrees)) * Vector2::new(vector.x(), vector.y());
    Point::new(rotated.x, rotated.y)
}

#[cfg(test)]
mod test {
    use std::f64::consts::PI;
    use geo_types::Point;
    use super::{degrees, rotate_vector, PointDistance};

    #[test]
    fn test_degrees() {
        assert!((degrees(180.0) - PI).abs() < 1e-12);
        assert!((degrees(-90.0) + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_sixty() {
        let sqrt3 = 3.0f64.sqrt();
        let rotated = rotate_vector(Point::new(1.0, 0.0), 60.0);
        assert!(rotated.distance(&Point::new(0.5, sqrt3 / 2.0)) < 1e-9);
        let rotated = rotate_vector(Point::new(1.0, 0.0), -60.0);
        assert!(rotated.distance(&Point::new(0.5, -sqrt3 / 2.0)) < 1e-9);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = Point::new(3.0, -4.0);
        for angle in [0.0, 17.5, 60.0, -60.0, 133.0, 360.0] {
            assert!((rotate_vector(v, angle).length() - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotate_full_turn() {
        let v = Point::new(0.4, 0.0);
        let mut rotated = v;
        for _ in 0..6 {
            rotated = rotate_vector(rotated, 60.0);
        }
        assert!(rotated.distance(&v) < 1e-9);
    }
}
