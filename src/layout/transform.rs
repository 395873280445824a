//! Geometric transforms deriving the half and vertical layouts from the
//! canonical full-horizontal table.

use glam::{DVec2, dvec2};

use crate::primitive::{Arc, Primitive, Segment, Shape};

use super::dimensions as dim;

/// Keep the half of the pitch beyond the centre line and re-base it so the
/// cut line becomes the new x = 0.
///
/// Segments are clipped at the cut and marks entirely behind it are
/// dropped. The centre line lands exactly on the cut and becomes the
/// baseline edge of the half view; an unfilled circle straddling the cut
/// (the centre circle) degrades to its outward half-arc.
pub fn rebase_half(marks: Vec<Primitive>) -> Vec<Primitive> {
    let shift = dvec2(-dim::HALF_LENGTH, 0.0);
    marks
        .into_iter()
        .filter_map(|mut mark| {
            mark.translate(shift);
            match mark {
                Primitive::Segment(seg) => clip_segment(seg).map(Primitive::from),
                Primitive::Circle(circle) => {
                    if circle.filled {
                        // Spots are indivisible markers: kept or dropped whole.
                        (circle.center.x >= 0.0).then(|| circle.into())
                    } else if circle.center.x - circle.radius >= 0.0 {
                        Some(circle.into())
                    } else if circle.center.x + circle.radius <= 0.0 {
                        None
                    } else {
                        Some(
                            Arc::half_circle(circle.center, circle.radius, 270.0, circle.width)
                                .into(),
                        )
                    }
                }
                Primitive::Arc(arc) => (arc.center.x >= 0.0).then(|| arc.into()),
            }
        })
        .collect()
}

fn clip_segment(mut seg: Segment) -> Option<Segment> {
    if seg.from.x < 0.0 && seg.to.x < 0.0 {
        return None;
    }
    if seg.from.x < 0.0 {
        seg.from = cut_point(seg.from, seg.to);
    } else if seg.to.x < 0.0 {
        seg.to = cut_point(seg.from, seg.to);
    }
    Some(seg)
}

/// Intersection of `a`-`b` with the cut line x = 0.
fn cut_point(a: DVec2, b: DVec2) -> DVec2 {
    let t = -a.x / (b.x - a.x);
    dvec2(0.0, a.y + (b.y - a.y) * t)
}

/// Swap the axes of every mark, mapping (x, y) to (y, x).
pub fn transpose(marks: &mut [Primitive]) {
    for mark in marks {
        mark.transpose();
    }
}
