//! City type.

use serde::{Deserialize, Serialize};

/// A city in the plane.
///
/// Cities are immutable once created and are stored by the caller in an
/// ordered list; a tour refers to them by position in that list.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_new() {
        let c = City::new(10.0, 20.0);
        assert_eq!(c.x(), 10.0);
        assert_eq!(c.y(), 20.0);
    }

    #[test]
    fn test_distance() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = City::new(1.0, 2.0);
        let b = City::new(4.0, 6.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_self() {
        let a = City::new(7.0, -3.0);
        assert!(a.distance_to(&a).abs() < 1e-10);
    }
}
