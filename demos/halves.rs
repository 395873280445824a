use std::str::FromStr;

use bfpitch::{Orientation, PitchRenderer, SurfaceSize};

fn main() -> miette::Result<()> {
    let arg = std::env::args().nth(1).unwrap_or_else(|| "vertical".to_string());
    let orientation = Orientation::from_str(&arg)?;
    let size = SurfaceSize::new(320.0, 320.0)?;

    let (surface, _viewport) = PitchRenderer::new()
        .orientation(orientation)
        .half(true)
        .draw_sized(size);
    println!("{}", surface.to_svg());
    Ok(())
}
