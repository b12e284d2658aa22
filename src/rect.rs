use crate::{
    approx::ApproxEq,
    traits::{MinMax, Number},
    vec2, Vector,
};

/// An axis-aligned rectangle with [`f32`] coordinates.
pub type Rectf = Rect<f32>;
/// An axis-aligned rectangle with [`f64`] coordinates.
pub type Rectd = Rect<f64>;

/// An axis-aligned rectangle, stored as its 4 edge coordinates.
///
/// Y points down: `top` is expected to be the smaller Y coordinate. A rectangle is *well-formed*
/// when `right >= left` and `bottom >= top`, but this is not enforced. Degenerate rectangles can
/// result from [`Rect::intersection`] and are valid values; [`Rect::is_well_formed`] tells them
/// apart.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(C)]
pub struct Rect<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Rect<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Rect<T> {}

impl<T: Number> Rect<T> {
    /// Creates a rectangle from its 4 edge coordinates.
    #[inline]
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle extending downwards and right from its top left corner.
    #[inline]
    pub fn from_position_size(position: Vector<T, 2>, size: Vector<T, 2>) -> Self {
        Self {
            left: position.x,
            top: position.y,
            right: position.x + size.x,
            bottom: position.y + size.y,
        }
    }

    /// Returns the width of the rectangle.
    #[inline]
    pub fn width(&self) -> T {
        self.right - self.left
    }

    /// Returns the height of the rectangle.
    #[inline]
    pub fn height(&self) -> T {
        self.bottom - self.top
    }

    /// Returns the size of the rectangle as a width/height vector.
    #[inline]
    pub fn size(&self) -> Vector<T, 2> {
        vec2(self.width(), self.height())
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Vector<T, 2> {
        let two = T::ONE + T::ONE;
        vec2(
            (self.left + self.right) / two,
            (self.top + self.bottom) / two,
        )
    }

    /// Returns a copy of this rectangle, moved by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vector<T, 2>) -> Self {
        Self {
            left: self.left + offset.x,
            top: self.top + offset.y,
            right: self.right + offset.x,
            bottom: self.bottom + offset.y,
        }
    }

    /// Moves every edge of this rectangle outwards by the given amounts.
    ///
    /// The rectangle grows by `2 * x` horizontally and `2 * y` vertically. Negative amounts shrink
    /// it instead and can leave it malformed.
    #[must_use]
    pub fn inflate(&self, x: T, y: T) -> Self {
        Self {
            left: self.left - x,
            top: self.top - y,
            right: self.right + x,
            bottom: self.bottom + y,
        }
    }
}

impl<T: Number + PartialOrd> Rect<T> {
    /// Returns whether `right >= left` and `bottom >= top`.
    pub fn is_well_formed(&self) -> bool {
        self.right >= self.left && self.bottom >= self.top
    }

    /// Returns whether `point` lies inside this rectangle.
    ///
    /// Points on the edges are considered inside.
    pub fn contains_point(&self, point: Vector<T, 2>) -> bool {
        self.left <= point.x && point.x <= self.right && self.top <= point.y && point.y <= self.bottom
    }

    /// Returns whether `other` lies fully inside this rectangle.
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.left <= other.left
            && other.right <= self.right
            && self.top <= other.top
            && other.bottom <= self.bottom
    }

    /// Returns whether this rectangle and `other` share any point.
    ///
    /// Rectangles that only touch at an edge or corner count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }
}

impl<T: Number + MinMax> Rect<T> {
    /// Computes the intersection of two rectangles.
    ///
    /// If the rectangles do not overlap, the result is malformed (`right < left` or
    /// `bottom < top`).
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }

    /// Computes the smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

impl<T> ApproxEq for Rect<T>
where
    T: ApproxEq + Copy,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .abs_diff_eq(&[other.left, other.top, other.right, other.bottom], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .rel_diff_eq(&[other.left, other.top, other.right, other.bottom], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .ulps_diff_eq(&[other.left, other.top, other.right, other.bottom], ulps_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn dimensions() {
        let rect = Rect::new(1.0, 2.0, 5.0, 8.0);
        assert_approx_eq!(rect.width(), 4.0);
        assert_approx_eq!(rect.height(), 6.0);
        assert_approx_eq!(rect.size(), vec2(4.0, 6.0));
        assert_approx_eq!(rect.center(), vec2(3.0, 5.0));
        assert_eq!(
            Rect::from_position_size(vec2(1.0, 2.0), vec2(4.0, 6.0)),
            rect,
        );
    }

    #[test]
    fn containment() {
        let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(rect.contains_point(vec2(5.0, 2.0)));
        assert!(rect.contains_point(vec2(0.0, 0.0)));
        assert!(rect.contains_point(vec2(10.0, 5.0)));
        assert!(!rect.contains_point(vec2(10.1, 2.0)));
        assert!(!rect.contains_point(vec2(5.0, -0.1)));

        assert!(rect.contains_rect(&Rect::new(1.0, 1.0, 9.0, 4.0)));
        assert!(rect.contains_rect(&rect));
        assert!(!rect.contains_rect(&Rect::new(1.0, 1.0, 11.0, 4.0)));
    }

    #[test]
    fn intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b), Rect::new(5.0, 5.0, 10.0, 10.0));

        // Disjoint rectangles produce a malformed intersection.
        let c = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert!(!a.intersects(&c));
        assert!(!a.intersection(&c).is_well_formed());

        // Touching at a corner still counts.
        let d = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(a.intersects(&d));
        let corner = a.intersection(&d);
        assert!(corner.is_well_formed());
        assert_approx_eq!(corner.size(), vec2(0.0, 0.0));
    }

    #[test]
    fn union() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(5.0, -1.0, 6.0, 1.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -1.0, 6.0, 2.0));
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn inflate_translate() {
        let rect = Rect::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(rect.inflate(1.0, 2.0), Rect::new(1.0, 0.0, 5.0, 6.0));
        assert!(!rect.inflate(-2.0, 0.0).is_well_formed());
        assert_eq!(
            rect.translate(vec2(1.0, -1.0)),
            Rect::new(3.0, 1.0, 5.0, 3.0),
        );
    }
}
