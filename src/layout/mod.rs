//! Pitch layouts as pure functions of `(orientation, half)`.
//!
//! One canonical table describes the full pitch in horizontal orientation;
//! the half and vertical variants are derived from it by the transforms in
//! [`transform`], so every layout flows from the same source geometry.

pub mod dimensions;
pub mod transform;

use glam::dvec2;

use crate::primitive::{Arc, Circle, Dash, Primitive, Segment};
use crate::types::{Bounds, Orientation};

use self::dimensions as dim;

/// The ordered primitives of one pitch diagram.
#[derive(Clone, Debug)]
pub struct PitchLayout {
    orientation: Orientation,
    half: bool,
    primitives: Vec<Primitive>,
    bounds: Bounds,
}

impl PitchLayout {
    /// Compute the layout for one `(orientation, half)` selection.
    pub fn new(orientation: Orientation, half: bool) -> Self {
        let mut primitives = full_pitch();
        if half {
            primitives = transform::rebase_half(primitives);
        }
        if orientation.is_vertical() {
            transform::transpose(&mut primitives);
        }

        let long = if half { dim::HALF_LENGTH } else { dim::LENGTH };
        let mut bounds = Bounds::of(dvec2(0.0, 0.0), dvec2(long, dim::WIDTH));
        if orientation.is_vertical() {
            bounds = bounds.transposed();
        }

        crate::log::debug!(%orientation, half, marks = primitives.len(), "computed pitch layout");
        Self {
            orientation,
            half,
            primitives,
            bounds,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_half(&self) -> bool {
        self.half
    }

    /// Declared bounding box: 40 x 20, 20 x 40, or 20 x 20 for a half view.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }
}

/// Canonical table: the full pitch in horizontal orientation.
fn full_pitch() -> Vec<Primitive> {
    let mut marks = Vec::with_capacity(27);
    outline(&mut marks);
    third_lines(&mut marks);
    centre(&mut marks);
    penalty_spots(&mut marks);
    keeper_areas(&mut marks);
    penalty_areas(&mut marks);
    goals(&mut marks);
    marks
}

fn outline(marks: &mut Vec<Primitive>) {
    let corners = [
        dvec2(0.0, 0.0),
        dvec2(0.0, dim::WIDTH),
        dvec2(dim::LENGTH, dim::WIDTH),
        dvec2(dim::LENGTH, 0.0),
    ];
    for i in 0..corners.len() {
        let next = corners[(i + 1) % corners.len()];
        marks.push(Segment::solid(corners[i], next, dim::LINE_WIDTH).into());
    }
}

fn third_lines(marks: &mut Vec<Primitive>) {
    let dash = Dash {
        on: dim::THIRD_DASH_ON,
        off: dim::THIRD_DASH_OFF,
    };
    for x in [dim::THIRD_NEAR, dim::THIRD_FAR] {
        marks.push(Segment::dashed(dvec2(x, 0.0), dvec2(x, dim::WIDTH), dash, dim::LINE_WIDTH).into());
    }
}

fn centre(marks: &mut Vec<Primitive>) {
    let mid = dvec2(dim::HALF_LENGTH, dim::WIDTH / 2.0);
    marks.push(
        Segment::solid(
            dvec2(dim::HALF_LENGTH, 0.0),
            dvec2(dim::HALF_LENGTH, dim::WIDTH),
            dim::LINE_WIDTH,
        )
        .into(),
    );
    marks.push(Circle::outline(mid, dim::CENTRE_RADIUS, dim::MARK_WIDTH).into());
    marks.push(Circle::spot(mid, dim::SPOT_RADIUS, dim::MARK_WIDTH).into());
}

fn penalty_spots(marks: &mut Vec<Primitive>) {
    let mid_y = dim::WIDTH / 2.0;
    for x in [
        dim::PENALTY_SPOT,
        dim::DOUBLE_PENALTY_SPOT,
        dim::LENGTH - dim::PENALTY_SPOT,
        dim::LENGTH - dim::DOUBLE_PENALTY_SPOT,
    ] {
        marks.push(Circle::spot(dvec2(x, mid_y), dim::SPOT_RADIUS, dim::MARK_WIDTH).into());
    }
}

/// Open three-segment boxes in front of each goal, 2 m deep.
fn keeper_areas(marks: &mut Vec<Primitive>) {
    for (goal_line, front) in [
        (0.0, dim::KEEPER_DEPTH),
        (dim::LENGTH, dim::LENGTH - dim::KEEPER_DEPTH),
    ] {
        marks.push(
            Segment::solid(
                dvec2(goal_line, dim::KEEPER_TOP),
                dvec2(front, dim::KEEPER_TOP),
                dim::LINE_WIDTH,
            )
            .into(),
        );
        marks.push(
            Segment::solid(
                dvec2(front, dim::KEEPER_TOP),
                dvec2(front, dim::KEEPER_BOTTOM),
                dim::LINE_WIDTH,
            )
            .into(),
        );
        marks.push(
            Segment::solid(
                dvec2(front, dim::KEEPER_BOTTOM),
                dvec2(goal_line, dim::KEEPER_BOTTOM),
                dim::LINE_WIDTH,
            )
            .into(),
        );
    }
}

/// Rounded D-shapes: two quarter-arcs anchored on the goal line, joined by
/// a chord spanning the goal mouth.
fn penalty_areas(marks: &mut Vec<Primitive>) {
    let r = dim::PENALTY_RADIUS;

    // Left side opens east: upper arc sweeps 0..90, lower 270..360.
    marks.push(Arc::quarter(dvec2(0.0, dim::GOAL_TOP), r, 0.0, dim::MARK_WIDTH).into());
    marks.push(Arc::quarter(dvec2(0.0, dim::GOAL_BOTTOM), r, 270.0, dim::MARK_WIDTH).into());
    marks.push(
        Segment::solid(
            dvec2(r, dim::GOAL_BOTTOM),
            dvec2(r, dim::GOAL_TOP),
            dim::MARK_WIDTH,
        )
        .into(),
    );

    // Right side opens west: upper arc sweeps 90..180, lower 180..270.
    marks.push(Arc::quarter(dvec2(dim::LENGTH, dim::GOAL_TOP), r, 90.0, dim::MARK_WIDTH).into());
    marks.push(Arc::quarter(dvec2(dim::LENGTH, dim::GOAL_BOTTOM), r, 180.0, dim::MARK_WIDTH).into());
    marks.push(
        Segment::solid(
            dvec2(dim::LENGTH - r, dim::GOAL_BOTTOM),
            dvec2(dim::LENGTH - r, dim::GOAL_TOP),
            dim::MARK_WIDTH,
        )
        .into(),
    );
}

fn goals(marks: &mut Vec<Primitive>) {
    for x in [0.0, dim::LENGTH] {
        marks.push(
            Segment::solid(
                dvec2(x, dim::GOAL_BOTTOM),
                dvec2(x, dim::GOAL_TOP),
                dim::GOAL_LINE_WIDTH,
            )
            .into(),
        );
    }
}
