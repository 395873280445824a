//! Surfaces and the renderer that fills them.
//!
//! A [`Surface`] is an owned canvas accumulating marks in pitch metres;
//! [`PitchRenderer`] writes one [`PitchLayout`](crate::layout::PitchLayout)
//! into it and hands back a [`Viewport`] describing the coordinate frame,
//! so callers can keep composing (tactics overlays) before serializing.

pub mod svg;

use glam::DVec2;

use crate::errors::PitchError;
use crate::layout::PitchLayout;
use crate::primitive::{Primitive, Shape};
use crate::types::{Bounds, Orientation};

/// Explicit pixel size for a renderer-created surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    width: f64,
    height: f64,
}

impl SurfaceSize {
    /// Both dimensions must be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, PitchError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(PitchError::InvalidSize { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// An owned drawing canvas.
///
/// Marks are stored in the y-up pitch frame; serialization flips them into
/// SVG pixel space. The surface tracks the bounds of everything written so
/// the viewBox wraps overlays as well as the pitch itself.
#[derive(Clone, Debug, Default)]
pub struct Surface {
    size: Option<SurfaceSize>,
    marks: Vec<Primitive>,
    bounds: Bounds,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose serialized document carries explicit width/height.
    pub fn sized(size: SurfaceSize) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    /// Append one mark, growing the tracked bounds.
    pub fn push(&mut self, mark: impl Into<Primitive>) {
        let mark = mark.into();
        self.bounds.include(mark.bounds());
        self.marks.push(mark);
    }

    pub fn extend<I>(&mut self, marks: I)
    where
        I: IntoIterator<Item = Primitive>,
    {
        for mark in marks {
            self.push(mark);
        }
    }

    pub fn marks(&self) -> &[Primitive] {
        &self.marks
    }

    pub fn is_blank(&self) -> bool {
        self.marks.is_empty()
    }

    /// Bounds of everything drawn so far; empty while blank.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Serialize to an axis-free, equal-aspect SVG document.
    pub fn to_svg(&self) -> ::svg::Document {
        svg::document(self)
    }

    /// Write the SVG document to a file.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        ::svg::save(path, &self.to_svg())
    }
}

/// The drawing context handed back by a draw: the pitch coordinate frame
/// the primitives were written in, for caller-side overlay composition.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    orientation: Orientation,
    half: bool,
    bounds: Bounds,
}

impl Viewport {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_half(&self) -> bool {
        self.half
    }

    /// Declared pitch box: (0,0)-(40,20), (0,0)-(20,40) or (0,0)-(20,20).
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `point` lies on the pitch.
    pub fn contains(&self, point: DVec2) -> bool {
        self.bounds.contains(point, 1e-9)
    }
}

/// Renders the fixed pitch diagram onto a [`Surface`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PitchRenderer {
    orientation: Orientation,
    half: bool,
}

impl PitchRenderer {
    /// A full pitch in horizontal orientation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Draw only the outward half: the right half when horizontal, the
    /// upper half when vertical.
    pub fn half(mut self, half: bool) -> Self {
        self.half = half;
        self
    }

    /// The layout this renderer would draw.
    pub fn layout(&self) -> PitchLayout {
        PitchLayout::new(self.orientation, self.half)
    }

    /// Draw onto a fresh, default-sized surface.
    pub fn draw(&self) -> (Surface, Viewport) {
        let mut surface = Surface::new();
        let viewport = self.draw_on(&mut surface);
        (surface, viewport)
    }

    /// Draw onto a fresh surface with an explicit pixel size.
    pub fn draw_sized(&self, size: SurfaceSize) -> (Surface, Viewport) {
        let mut surface = Surface::sized(size);
        let viewport = self.draw_on(&mut surface);
        (surface, viewport)
    }

    /// Draw onto a caller-owned surface.
    ///
    /// Never allocates a canvas: whatever was already on the surface stays
    /// put and the pitch marks are appended after it. The surface's own
    /// size, if any, is left untouched.
    pub fn draw_on(&self, surface: &mut Surface) -> Viewport {
        let layout = self.layout();
        let viewport = Viewport {
            orientation: self.orientation,
            half: self.half,
            bounds: layout.bounds(),
        };
        surface.extend(layout.into_primitives());
        viewport
    }
}
