//! Conversions between the crate's `Point` and nalgebra's 2D point/vector types.

use nalgebra::{Point2, Scalar as NaScalar, Vector2};

use super::scalar::Scalar;
use super::types::Point;

impl<T: Scalar + NaScalar> From<Point2<T>> for Point<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl<T: Scalar + NaScalar> From<Point<T>> for Point2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<T: Scalar + NaScalar> From<Vector2<T>> for Point<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl<T: Scalar + NaScalar> From<Point<T>> for Vector2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Vector2::new(p.x, p.y)
    }
}
