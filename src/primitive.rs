//! Drawing primitives for pitch diagrams.
//!
//! Each mark knows its painted bounds, how to move through the layout
//! transforms, and how to render itself as an SVG element. Stroke widths
//! are display points, independent of the metre-to-pixel scale.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};
use svg::Node;
use svg::node::element::path::Data;
use svg::node::element::{Circle as SvgCircle, Line as SvgLine, Path as SvgPath};

use crate::types::{Bounds, Mapper};

/// Dash pattern as on/off run lengths in display points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub on: f64,
    pub off: f64,
}

/// Common behavior for all marks.
#[enum_dispatch]
pub trait Shape {
    /// Bounding box of the painted geometry (the stroke width is ignored).
    fn bounds(&self) -> Bounds;

    /// Stroke width in display points.
    fn stroke_width(&self) -> f64;

    /// Move by an offset in pitch metres.
    fn translate(&mut self, offset: DVec2);

    /// Swap the axes, mapping every (x, y) to (y, x).
    fn transpose(&mut self);

    /// Render as an SVG element under `map`.
    fn to_node(&self, map: &Mapper) -> Box<dyn Node>;
}

/// A straight stroke between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
    /// `None` draws solid.
    pub dash: Option<Dash>,
    pub width: f64,
}

impl Segment {
    pub fn solid(from: DVec2, to: DVec2, width: f64) -> Self {
        Self {
            from,
            to,
            dash: None,
            width,
        }
    }

    pub fn dashed(from: DVec2, to: DVec2, dash: Dash, width: f64) -> Self {
        Self {
            from,
            to,
            dash: Some(dash),
            width,
        }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

impl Shape for Segment {
    fn bounds(&self) -> Bounds {
        let mut b = Bounds::new();
        b.expand(self.from);
        b.expand(self.to);
        b
    }

    fn stroke_width(&self) -> f64 {
        self.width
    }

    fn translate(&mut self, offset: DVec2) {
        self.from += offset;
        self.to += offset;
    }

    fn transpose(&mut self) {
        self.from = dvec2(self.from.y, self.from.x);
        self.to = dvec2(self.to.y, self.to.x);
    }

    fn to_node(&self, map: &Mapper) -> Box<dyn Node> {
        let a = map.point(self.from);
        let b = map.point(self.to);
        let mut line = SvgLine::new()
            .set("x1", a.x)
            .set("y1", a.y)
            .set("x2", b.x)
            .set("y2", b.y)
            .set("stroke", "black")
            .set("stroke-width", self.width);
        if let Some(dash) = self.dash {
            line = line.set("stroke-dasharray", format!("{} {}", dash.on, dash.off));
        }
        Box::new(line)
    }
}

/// An open elliptical-arc stroke.
///
/// The arc runs counter-clockwise from `rotation + start` through `sweep`
/// degrees. Every arc on the pitch is circular (`radius.x == radius.y`);
/// the rx/ry split exists so the mark mirrors the SVG arc model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: DVec2,
    pub radius: DVec2,
    /// Start angle in degrees, inside the rotated frame.
    pub start: f64,
    /// Counter-clockwise sweep in degrees.
    pub sweep: f64,
    /// Rotation of the ellipse frame in degrees.
    pub rotation: f64,
    pub width: f64,
}

impl Arc {
    /// A 90-degree circular arc starting at `rotation`.
    pub fn quarter(center: DVec2, radius: f64, rotation: f64, width: f64) -> Self {
        Self {
            center,
            radius: DVec2::splat(radius),
            start: 0.0,
            sweep: 90.0,
            rotation,
            width,
        }
    }

    /// A 180-degree circular arc starting at `rotation`.
    pub fn half_circle(center: DVec2, radius: f64, rotation: f64, width: f64) -> Self {
        Self {
            center,
            radius: DVec2::splat(radius),
            start: 0.0,
            sweep: 180.0,
            rotation,
            width,
        }
    }

    /// Point on the arc `theta` degrees past the start.
    pub fn point_at(&self, theta: f64) -> DVec2 {
        let t = (self.start + theta).to_radians();
        let rot = self.rotation.to_radians();
        let local = dvec2(self.radius.x * t.cos(), self.radius.y * t.sin());
        self.center
            + dvec2(
                local.x * rot.cos() - local.y * rot.sin(),
                local.x * rot.sin() + local.y * rot.cos(),
            )
    }
}

impl Shape for Arc {
    fn bounds(&self) -> Bounds {
        let mut b = Bounds::new();
        b.expand(self.point_at(0.0));
        b.expand(self.point_at(self.sweep));
        // Cardinal crossings bound the bulge. Exact only for circular arcs,
        // which is all the pitch ever contains.
        let a0 = self.rotation + self.start;
        let a1 = a0 + self.sweep;
        let mut k = (a0 / 90.0).ceil() as i64;
        while (k as f64) * 90.0 <= a1 {
            let dir = match k.rem_euclid(4) {
                0 => dvec2(self.radius.x, 0.0),
                1 => dvec2(0.0, self.radius.y),
                2 => dvec2(-self.radius.x, 0.0),
                _ => dvec2(0.0, -self.radius.y),
            };
            b.expand(self.center + dir);
            k += 1;
        }
        b
    }

    fn stroke_width(&self) -> f64 {
        self.width
    }

    fn translate(&mut self, offset: DVec2) {
        self.center += offset;
    }

    fn transpose(&mut self) {
        // Reflecting about the 45-degree axis maps angle a to 90 - a, so the
        // span [rot + start, rot + start + sweep] becomes [90 - end, 90 - start].
        let end = self.rotation + self.start + self.sweep;
        self.center = dvec2(self.center.y, self.center.x);
        self.radius = dvec2(self.radius.y, self.radius.x);
        self.rotation = (90.0 - end).rem_euclid(360.0);
        self.start = 0.0;
    }

    fn to_node(&self, map: &Mapper) -> Box<dyn Node> {
        let a = map.point(self.point_at(0.0));
        let b = map.point(self.point_at(self.sweep));
        let large = if self.sweep.abs() > 180.0 { 1.0 } else { 0.0 };
        // Counter-clockwise in the y-up pitch frame is sweep-flag 0 in
        // SVG's y-down frame.
        let data = Data::new().move_to((a.x, a.y)).elliptical_arc_to((
            map.len(self.radius.x),
            map.len(self.radius.y),
            0.0,
            large,
            0.0,
            b.x,
            b.y,
        ));
        Box::new(
            SvgPath::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", self.width),
        )
    }
}

/// A circle, either an outline ring or a filled spot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    pub filled: bool,
    pub width: f64,
}

impl Circle {
    /// An unfilled ring.
    pub fn outline(center: DVec2, radius: f64, width: f64) -> Self {
        Self {
            center,
            radius,
            filled: false,
            width,
        }
    }

    /// A filled marker spot.
    pub fn spot(center: DVec2, radius: f64, width: f64) -> Self {
        Self {
            center,
            radius,
            filled: true,
            width,
        }
    }
}

impl Shape for Circle {
    fn bounds(&self) -> Bounds {
        Bounds::of(
            self.center - DVec2::splat(self.radius),
            self.center + DVec2::splat(self.radius),
        )
    }

    fn stroke_width(&self) -> f64 {
        self.width
    }

    fn translate(&mut self, offset: DVec2) {
        self.center += offset;
    }

    fn transpose(&mut self) {
        self.center = dvec2(self.center.y, self.center.x);
    }

    fn to_node(&self, map: &Mapper) -> Box<dyn Node> {
        let c = map.point(self.center);
        Box::new(
            SvgCircle::new()
                .set("cx", c.x)
                .set("cy", c.y)
                .set("r", map.len(self.radius))
                .set("fill", if self.filled { "black" } else { "none" })
                .set("stroke", "black")
                .set("stroke-width", self.width),
        )
    }
}

/// One drawing primitive of a pitch layout.
#[enum_dispatch(Shape)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Segment(Segment),
    Arc(Arc),
    Circle(Circle),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_bounds_and_length() {
        let seg = Segment::solid(dvec2(6.0, 8.17), dvec2(6.0, 11.83), 1.0);
        assert!((seg.length() - 3.66).abs() < 1e-12);
        let b = seg.bounds();
        assert_eq!(b.min, dvec2(6.0, 8.17));
        assert_eq!(b.max, dvec2(6.0, 11.83));
    }

    #[test]
    fn quarter_arc_bounds_hug_the_quadrant() {
        // Opens east then north: from (6, 11.83) up to (0, 17.83).
        let arc = Arc::quarter(dvec2(0.0, 11.83), 6.0, 0.0, 1.0);
        let b = arc.bounds();
        let eps = 1e-9;
        assert!((b.min.x - 0.0).abs() < eps);
        assert!((b.min.y - 11.83).abs() < eps);
        assert!((b.max.x - 6.0).abs() < eps);
        assert!((b.max.y - 17.83).abs() < eps);
    }

    #[test]
    fn arc_endpoints() {
        let arc = Arc::quarter(dvec2(40.0, 8.17), 6.0, 180.0, 1.0);
        let start = arc.point_at(0.0);
        let end = arc.point_at(arc.sweep);
        assert!((start.x - 34.0).abs() < 1e-9);
        assert!((start.y - 8.17).abs() < 1e-9);
        assert!((end.x - 40.0).abs() < 1e-9);
        assert!((end.y - 2.17).abs() < 1e-9);
    }

    #[test]
    fn transpose_reflects_arc_span() {
        let mut arc = Arc::quarter(dvec2(0.0, 11.83), 6.0, 0.0, 1.0);
        arc.transpose();
        assert_eq!(arc.center, dvec2(11.83, 0.0));
        assert_eq!(arc.rotation, 0.0);
        assert_eq!(arc.sweep, 90.0);

        let mut arc = Arc::quarter(dvec2(40.0, 11.83), 6.0, 90.0, 1.0);
        arc.transpose();
        assert_eq!(arc.center, dvec2(11.83, 40.0));
        assert_eq!(arc.rotation, 270.0);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let before = Arc::half_circle(dvec2(0.0, 10.0), 6.0, 270.0, 1.0);
        let mut arc = before;
        arc.transpose();
        arc.transpose();
        assert_eq!(arc.center, before.center);
        assert_eq!(
            (arc.rotation + arc.start).rem_euclid(360.0),
            (before.rotation + before.start).rem_euclid(360.0)
        );
    }

    #[test]
    fn circle_bounds() {
        let ring = Circle::outline(dvec2(20.0, 10.0), 6.0, 1.0);
        let b = ring.bounds();
        assert_eq!(b.min, dvec2(14.0, 4.0));
        assert_eq!(b.max, dvec2(26.0, 16.0));
    }

    #[test]
    fn primitive_from_mark_types() {
        let p: Primitive = Segment::solid(dvec2(0.0, 0.0), dvec2(1.0, 0.0), 1.5).into();
        assert_eq!(p.stroke_width(), 1.5);
    }
}
