//! Blind-football pitch diagrams as SVG.
//!
//! Draws the fixed geometry of a regulation 40 m x 20 m blind-football
//! pitch: outline, dashed thirds, centre circle and spot, penalty and
//! double-penalty spots, goalkeeper areas, penalty-area arcs and goals.
//! Full or half view, horizontal or vertical orientation.
//!
//! ```
//! use bfpitch::{Orientation, PitchRenderer};
//!
//! let (surface, viewport) = PitchRenderer::new()
//!     .orientation(Orientation::Vertical)
//!     .half(true)
//!     .draw();
//! assert_eq!(viewport.bounds().width(), 20.0);
//! let svg = surface.to_svg().to_string();
//! assert!(svg.contains("viewBox"));
//! ```
//!
//! The layout itself is a pure function of `(orientation, half)`; a
//! [`Surface`] is an owned canvas the caller can keep drawing onto after
//! the pitch is placed, then serialize or save.

pub mod errors;
pub mod layout;
pub(crate) mod log;
pub mod primitive;
pub mod render;
pub mod types;

pub use errors::PitchError;
pub use layout::PitchLayout;
pub use primitive::{Arc, Circle, Dash, Primitive, Segment, Shape};
pub use render::{PitchRenderer, Surface, SurfaceSize, Viewport};
pub use types::{Bounds, Orientation};

/// Render one pitch straight to an SVG string.
pub fn pitch_svg(orientation: Orientation, half: bool) -> String {
    let (surface, _) = PitchRenderer::new()
        .orientation(orientation)
        .half(half)
        .draw();
    surface.to_svg().to_string()
}
