// File: crates/looplens-examples/src/bin/groups.rs
// Summary: Minimal example that renders two group series to PNG.

use anyhow::Result;
use looplens_core::{ChartRenderer, ChartSpec, PaletteColor, RasterSurface, Series};

fn main() -> Result<()> {
    let spec = ChartSpec::new(vec![
        Series::new("Group A", PaletteColor::Blue, vec![0.1, 0.3, 0.3, 0.5, 0.9]),
        Series::new("Group B", PaletteColor::Red, vec![0.1, 0.2, 0.2, 0.15, 0.1]),
    ]);

    let mut surface = RasterSurface::new(400.0, 200.0)?.with_device_pixel_ratio(2.0);
    ChartRenderer::new().render(&mut surface, &spec)?;

    let out = std::path::PathBuf::from("target/out/example_groups.png");
    surface.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
