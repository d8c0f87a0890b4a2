// File: crates/looplens-core/tests/raster.rs
// Purpose: Validate the Skia raster surface: backing size, clearing, determinism and overlap order.

use looplens_core::{render_to_png_bytes, ChartRenderer, ChartSpec, PaletteColor, RasterSurface, Series, Surface};

fn crossing(first: PaletteColor, second: PaletteColor) -> ChartSpec {
    ChartSpec::new(vec![
        Series::new("first", first, vec![0.0, 1.0, 0.0]),
        Series::new("second", second, vec![1.0, 0.0, 1.0]),
    ])
}

fn pixel(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

#[test]
fn backing_buffer_scales_with_pixel_ratio() {
    let spec = crossing(PaletteColor::Blue, PaletteColor::Red);
    let mut surface = RasterSurface::new(400.0, 200.0).expect("surface").with_device_pixel_ratio(2.0);
    ChartRenderer::new().render(&mut surface, &spec).expect("render");

    assert_eq!(surface.backing_size(), (800, 400));
    assert_eq!(surface.logical_size(), (400.0, 200.0));
    let (px, w, h) = surface.to_rgba8().expect("rgba");
    assert_eq!((w, h), (800, 400));
    assert_eq!(px.len(), 800 * 400 * 4);

    // Padding corner is cleared, not filled.
    assert_eq!(pixel(&px, w, 0, 0)[3], 0);
}

#[test]
fn repeated_renders_are_pixel_identical() {
    let spec = ChartSpec::new(vec![
        Series::new("Group A", PaletteColor::Blue, vec![0.1, 0.3, 0.3, 0.5, 0.9]),
        Series::new("Group B", PaletteColor::Red, vec![0.1, 0.2, 0.2, 0.15, 0.1]),
    ]);
    let renderer = ChartRenderer::new();

    let mut a = RasterSurface::new(400.0, 200.0).expect("surface");
    renderer.render(&mut a, &spec).expect("render a");
    let mut b = RasterSurface::new(400.0, 200.0).expect("surface");
    renderer.render(&mut b, &spec).expect("render b");
    // Rendering the same surface twice must not accumulate paint.
    renderer.render(&mut b, &spec).expect("render b again");

    assert_eq!(a.to_rgba8().expect("a").0, b.to_rgba8().expect("b").0);
}

#[test]
fn later_series_wins_at_crossing() {
    // Both lines cross at logical (131, 92); at 2x that is backing pixel (262, 184).
    let renderer = ChartRenderer::new();

    let mut surface = RasterSurface::new(400.0, 200.0).expect("surface").with_device_pixel_ratio(2.0);
    renderer.render(&mut surface, &crossing(PaletteColor::Blue, PaletteColor::Red)).expect("render");
    let (px, w, _) = surface.to_rgba8().expect("rgba");
    let [r, _, b, a] = pixel(&px, w, 262, 184);
    assert_eq!(a, 255);
    assert!(r > 200 && b < 120, "expected red on top, got r={r} b={b}");

    let mut surface = RasterSurface::new(400.0, 200.0).expect("surface").with_device_pixel_ratio(2.0);
    renderer.render(&mut surface, &crossing(PaletteColor::Red, PaletteColor::Blue)).expect("render");
    let (px, w, _) = surface.to_rgba8().expect("rgba");
    let [r, _, b, _] = pixel(&px, w, 262, 184);
    assert!(b > 200 && r < 120, "expected blue on top, got r={r} b={b}");
}

#[test]
fn legend_fits_measured_labels() {
    let labels = ["Group A", "Acceptance gap", "p"];
    let spec = ChartSpec::new(
        labels
            .iter()
            .map(|l| Series::new(*l, PaletteColor::Gray, vec![0.0, 1.0]))
            .collect(),
    );
    let surface = RasterSurface::new(480.0, 220.0).expect("surface");
    let style = looplens_core::TextStyle::mono(10.0, looplens_core::Theme::dark().legend_text);
    let widest = labels.iter().map(|l| surface.measure_text(l, &style)).fold(0.0f32, f32::max);

    let layout = looplens_core::ChartLayout::compute(&spec, surface.logical_size(), |l| surface.measure_text(l, &style))
        .expect("layout");
    assert!(layout.legend.frame.width() >= widest + 16.0);
}

#[test]
fn png_export_writes_file() {
    let spec = crossing(PaletteColor::Green, PaletteColor::Purple);
    let mut surface = RasterSurface::new(320.0, 160.0).expect("surface");
    ChartRenderer::new().render(&mut surface, &spec).expect("render");

    let out = std::path::PathBuf::from("target/test_out/raster_export.png");
    surface.write_png(&out).expect("write png");
    let bytes = std::fs::read(&out).expect("read back");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (320, 160));
}

#[test]
fn two_groups_png_shows_both_series() {
    let spec = ChartSpec::new(vec![
        Series::new("Group A", PaletteColor::Blue, vec![0.1, 0.3, 0.3, 0.5, 0.9]),
        Series::new("Group B", PaletteColor::Red, vec![0.1, 0.2, 0.2, 0.15, 0.1]),
    ]);
    let bytes = render_to_png_bytes(&spec, 400.0, 200.0, 1.0).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (400, 200));

    // Last A marker: (386, 10 + 164 - (0.9 - 0.036) / 0.928 * 164) = (386, 21.3).
    let [r, _, b, a] = img.get_pixel(386, 21).0;
    assert_eq!(a, 255);
    assert!(b > 200 && r < 120, "expected blue marker, got r={r} b={b}");
    // Last B marker: 0.1 maps to y = 162.7.
    let [r, _, b, _] = img.get_pixel(386, 163).0;
    assert!(r > 200 && b < 120, "expected red marker, got r={r} b={b}");
}

#[test]
fn flat_series_png_runs_through_plot_middle() {
    let spec = ChartSpec::new(vec![Series::new("reinforcement", PaletteColor::Green, vec![0.0; 20])]);
    let bytes = render_to_png_bytes(&spec, 480.0, 220.0, 2.0).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (960, 440));

    // Plot spans y 10..194, so 0.0 sits at logical y 102 (backing 204).
    for x in [150, 480, 800] {
        let [r, g, b, a] = img.get_pixel(x, 204).0;
        assert_eq!(a, 255, "x={x}");
        assert!(g > 150 && g > r && g > b, "expected green at x={x}, got {r},{g},{b}");
    }
    // Well above the line the plot stays clear (no gridline lands on logical y 60).
    assert_eq!(img.get_pixel(480, 120).0[3], 0);
}
