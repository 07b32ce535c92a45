//! # O: Open/Closed
//!
//! `total_area` is closed for modification but the `Shape` family stays
//! open for extension: `Rectangle` was added without touching the
//! aggregator. [`type_checked`] shows the version that has to be edited
//! every time a new shape appears.

use std::f64::consts::PI;
use tracing::debug;

pub trait Shape {
    fn area(&self) -> f64;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn name(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub length: f64,
}

impl Square {
    pub fn new(length: f64) -> Self {
        Self { length }
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.length.powi(2)
    }

    fn name(&self) -> &'static str {
        "Square"
    }
}

/// The extension: a new variant, and nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }
}

/// Sum of every shape's area, accumulated in sequence order from zero.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().fold(0.0, |sum, shape| {
        let area = shape.area();
        debug!(shape = shape.name(), area, "adding area");
        sum + area
    })
}

// =============================================================================
// The closed alternative: one function that knows every shape
// =============================================================================

pub mod type_checked {
    use std::f64::consts::PI;

    /// Adding a variant here means editing `calculate_area` too.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum ShapeKind {
        Circle { radius: f64 },
        Square { length: f64 },
    }

    pub fn calculate_area(shape: &ShapeKind) -> f64 {
        match shape {
            ShapeKind::Circle { radius } => PI * radius.powi(2),
            ShapeKind::Square { length } => length.powi(2),
        }
    }

    pub fn calculate_total_area(shapes: &[ShapeKind]) -> f64 {
        shapes.iter().fold(0.0, |sum, shape| calculate_area(shape) + sum)
    }
}

#[cfg(test)]
mod tests {
    use super::type_checked::{calculate_area, calculate_total_area, ShapeKind};
    use super::*;

    const EPSILON: f64 = 1e-9;

    // A shape defined outside the module, as a downstream crate would.
    struct Triangle {
        base: f64,
        height: f64,
    }

    impl Shape for Triangle {
        fn area(&self) -> f64 {
            0.5 * self.base * self.height
        }

        fn name(&self) -> &'static str {
            "Triangle"
        }
    }

    #[test]
    fn test_individual_areas() {
        assert!((Circle::new(2.0).area() - 4.0 * PI).abs() < EPSILON);
        assert_eq!(Square::new(5.0).area(), 25.0);
        assert_eq!(Rectangle::new(4.0, 3.0).area(), 12.0);
    }

    #[test]
    fn test_total_area_circle_and_square() {
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Circle::new(2.0)), Box::new(Square::new(5.0))];
        let total = total_area(&shapes);
        assert!((total - (4.0 * PI + 25.0)).abs() < EPSILON);
        assert!((total - 37.566).abs() < 1e-3);
    }

    #[test]
    fn test_total_area_with_rectangle() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(2.0)),
            Box::new(Square::new(5.0)),
            Box::new(Rectangle::new(4.0, 3.0)),
        ];
        assert!((total_area(&shapes) - (4.0 * PI + 37.0)).abs() < EPSILON);
    }

    #[test]
    fn test_total_area_accepts_foreign_shape() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Square::new(2.0)),
            Box::new(Triangle {
                base: 4.0,
                height: 3.0,
            }),
        ];
        assert_eq!(total_area(&shapes), 10.0);
    }

    #[test]
    fn test_total_area_empty() {
        assert_eq!(total_area(&[]), 0.0);
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(Circle::new(1.0).name(), "Circle");
        assert_eq!(Square::new(1.0).name(), "Square");
        assert_eq!(Rectangle::new(1.0, 1.0).name(), "Rectangle");
    }

    #[test]
    fn test_type_checked_matches_polymorphic() {
        let kinds = [
            ShapeKind::Circle { radius: 2.0 },
            ShapeKind::Square { length: 5.0 },
        ];
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Circle::new(2.0)), Box::new(Square::new(5.0))];
        assert!((calculate_total_area(&kinds) - total_area(&shapes)).abs() < EPSILON);
        assert_eq!(calculate_area(&kinds[1]), 25.0);
    }
}
