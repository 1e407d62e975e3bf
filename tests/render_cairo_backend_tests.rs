#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use cartesian_axis::ChartError;
use cartesian_axis::api::{AxisLayoutEngine, AxisOptions, AxisScales, AxisTitles};
use cartesian_axis::core::{FontMetrics, LinearScale};
use cartesian_axis::render::{CairoContextRenderer, CairoRenderer, PangoFontMetrics};

fn scales() -> (LinearScale, LinearScale, LinearScale) {
    (
        LinearScale::new((0.0, 100.0), (40.0, 860.0)).expect("x scale"),
        LinearScale::new((0.0, 50.0), (20.0, 440.0)).expect("y scale"),
        LinearScale::new((0.0, 5_000.0), (20.0, 440.0)).expect("yr scale"),
    )
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn pango_metrics_measure_non_empty_text() {
    let font = PangoFontMetrics::new("Sans", 12.0);
    assert_eq!(font.size(), 12.0);
    assert!(font.text_width("1000") > font.text_width("1"));
    assert_eq!(font.text_width(""), 0.0);
}

#[test]
fn cairo_renderer_draws_axis_layout() {
    let (x, y, yr) = scales();
    let engine = AxisLayoutEngine::new(
        AxisOptions::default()
            .with_numerical_data(true)
            .with_titles(AxisTitles {
                x: Some("time".to_owned()),
                yl: Some("price".to_owned()),
                yr: vec!["volume".to_owned()],
            }),
    );
    let font = PangoFontMetrics::new("Sans", 12.0);
    let mut renderer = CairoRenderer::new(900, 500).expect("renderer");

    let layout = engine
        .render(AxisScales::new(&x, &y, &yr), Some(&font), &mut renderer)
        .expect("render");
    let stats = renderer.last_stats();

    assert_eq!(stats.lines_drawn, layout.gridlines().len());
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.texts_drawn, layout.labels().len());
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let (x, y, yr) = scales();
    let engine = AxisLayoutEngine::new(AxisOptions::default().with_numerical_data(true));
    let layout = engine.layout(AxisScales::new(&x, &y, &yr), None);

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut renderer = CairoRenderer::new(600, 320).expect("renderer");
    renderer
        .render_on_cairo_context(&context, &layout.to_render_frame())
        .expect("render on context");

    assert_eq!(renderer.last_stats().lines_drawn, 12);
    assert_eq!(renderer.last_stats().texts_drawn, 0);
}
