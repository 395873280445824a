//! SVG document assembly.
//!
//! The document carries no axes, ticks or frame; equal aspect comes from
//! the viewBox plus `preserveAspectRatio`. Stroke widths stay in display
//! points while coordinates scale at [`PX_PER_METRE`].

use glam::DVec2;

use crate::primitive::Shape;
use crate::types::{Bounds, Mapper};

use super::Surface;

/// ViewBox pixels per pitch metre.
pub const PX_PER_METRE: f64 = 10.0;
/// Whitespace kept around the drawn marks, in metres.
pub const MARGIN: f64 = 1.0;

/// Assemble the SVG document for a surface.
pub fn document(surface: &Surface) -> ::svg::Document {
    let bounds = if surface.bounds().is_empty() {
        // Nothing drawn: an empty frame still gets the display configuration.
        Bounds::of(DVec2::ZERO, DVec2::ZERO)
    } else {
        surface.bounds()
    };
    let view = bounds.grown(MARGIN);
    let map = Mapper::new(view, PX_PER_METRE);

    let mut doc = ::svg::Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", map.len(view.width()), map.len(view.height())),
        )
        .set("preserveAspectRatio", "xMidYMid meet");
    if let Some(size) = surface.size() {
        doc = doc.set("width", size.width()).set("height", size.height());
    }
    for mark in surface.marks() {
        doc = doc.add(mark.to_node(&map));
    }
    crate::log::debug!(marks = surface.marks().len(), "serialized surface");
    doc
}

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::*;
    use crate::primitive::{Circle, Dash, Segment};

    #[test]
    fn blank_surface_still_gets_display_configuration() {
        let doc = document(&Surface::new()).to_string();
        assert!(doc.contains("viewBox=\"0 0 20 20\""), "{doc}");
        assert!(doc.contains("preserveAspectRatio=\"xMidYMid meet\""), "{doc}");
        assert!(!doc.contains("<line"));
        assert!(!doc.contains("<circle"));
        assert!(!doc.contains("<path"));
    }

    #[test]
    fn marks_serialize_to_their_elements() {
        let mut surface = Surface::new();
        surface.push(Segment::dashed(
            dvec2(0.0, 0.0),
            dvec2(0.0, 20.0),
            Dash { on: 5.0, off: 15.0 },
            1.5,
        ));
        surface.push(Circle::spot(dvec2(6.0, 10.0), 0.12, 1.0));
        let doc = document(&surface).to_string();
        assert!(doc.contains("<line"), "{doc}");
        assert!(doc.contains("stroke-dasharray=\"5 15\""), "{doc}");
        assert!(doc.contains("<circle"), "{doc}");
        assert!(doc.contains("fill=\"black\""), "{doc}");
    }

    #[test]
    fn explicit_size_lands_on_the_root_element() {
        let size = crate::render::SurfaceSize::new(640.0, 320.0).unwrap();
        let surface = Surface::sized(size);
        let doc = document(&surface).to_string();
        assert!(doc.contains("width=\"640\""), "{doc}");
        assert!(doc.contains("height=\"320\""), "{doc}");
    }
}
