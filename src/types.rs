//! Strongly-typed building blocks shared by layout and rendering.
//!
//! All coordinates are pitch metres in a y-up frame with the origin at the
//! south-west corner of the diagram. The [`Mapper`] is the only place that
//! frame is converted to SVG pixel space.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::PitchError;

/// Which way the pitch's long axis runs on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Long axis along x: a full pitch spans 40 x 20.
    #[default]
    Horizontal,
    /// Long axis along y: a full pitch spans 20 x 40.
    Vertical,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = PitchError;

    /// Accepts exactly `"horizontal"` and `"vertical"`. Anything else is
    /// rejected up front rather than silently drawing nothing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(PitchError::UnknownOrientation {
                value: s.to_string(),
            }),
        }
    }
}

/// Axis-aligned bounding box in pitch metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// An empty box: expanding it with any point yields exactly that point.
    pub fn new() -> Self {
        Self {
            min: dvec2(f64::INFINITY, f64::INFINITY),
            max: dvec2(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn of(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Grow to cover `p`.
    pub fn expand(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Grow to cover `other`.
    pub fn include(&mut self, other: Bounds) {
        if !other.is_empty() {
            self.expand(other.min);
            self.expand(other.max);
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The box grown by `margin` on all four sides.
    pub fn grown(&self, margin: f64) -> Bounds {
        Bounds {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }

    /// Point containment with a tolerance for angle-derived coordinates.
    pub fn contains(&self, p: DVec2, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    /// Swap the axes, mapping (x, y) to (y, x).
    pub fn transposed(&self) -> Bounds {
        Bounds {
            min: dvec2(self.min.y, self.min.x),
            max: dvec2(self.max.y, self.max.x),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps the y-up pitch frame onto SVG's y-down pixel frame.
///
/// `view.min` lands on the left edge of the viewBox and `view.max.y` on its
/// top edge, so the flip is `svg_y = (top - y) * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mapper {
    scale: f64,
    origin: DVec2,
    top: f64,
}

impl Mapper {
    pub fn new(view: Bounds, scale: f64) -> Self {
        Self {
            scale,
            origin: view.min,
            top: view.max.y,
        }
    }

    /// Convert a point in pitch metres to viewBox pixels.
    pub fn point(&self, p: DVec2) -> DVec2 {
        dvec2((p.x - self.origin.x) * self.scale, (self.top - p.y) * self.scale)
    }

    /// Convert a length in pitch metres to viewBox pixels.
    pub fn len(&self, v: f64) -> f64 {
        v * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_default_is_horizontal() {
        assert_eq!(Orientation::default(), Orientation::Horizontal);
    }

    #[test]
    fn orientation_parses_both_variants() {
        assert_eq!("horizontal".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!("vertical".parse::<Orientation>().unwrap(), Orientation::Vertical);
    }

    #[test]
    fn orientation_rejects_anything_else() {
        for bad in ["diagonal", "Horizontal", "VERTICAL", ""] {
            let err = bad.parse::<Orientation>().unwrap_err();
            assert!(matches!(err, PitchError::UnknownOrientation { .. }), "{bad:?}: {err}");
        }
    }

    #[test]
    fn bounds_expand_and_union() {
        let mut b = Bounds::new();
        assert!(b.is_empty());
        b.expand(dvec2(1.0, 2.0));
        b.expand(dvec2(-3.0, 5.0));
        assert_eq!(b.min, dvec2(-3.0, 2.0));
        assert_eq!(b.max, dvec2(1.0, 5.0));

        let mut u = Bounds::new();
        u.include(b);
        u.include(Bounds::new()); // empty boxes contribute nothing
        assert_eq!(u, b);
    }

    #[test]
    fn bounds_transposed_swaps_axes() {
        let b = Bounds::of(dvec2(0.0, 0.0), dvec2(40.0, 20.0)).transposed();
        assert_eq!(b.max, dvec2(20.0, 40.0));
    }

    #[test]
    fn mapper_flips_y() {
        let view = Bounds::of(dvec2(0.0, 0.0), dvec2(40.0, 20.0));
        let map = Mapper::new(view, 10.0);
        assert_eq!(map.point(dvec2(0.0, 0.0)), dvec2(0.0, 200.0));
        assert_eq!(map.point(dvec2(40.0, 20.0)), dvec2(400.0, 0.0));
        assert_eq!(map.len(6.0), 60.0);
    }
}
