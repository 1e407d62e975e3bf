use cartesian_axis::api::{AxisLayoutEngine, AxisOption, AxisOptions, AxisScales, AxisTitles};
use cartesian_axis::core::{LinearScale, MonospaceFontMetrics};
use cartesian_axis::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn non_positive_tick_counts_suppress_the_axis(
        x_ticks in -5i32..=0,
        y_ticks in -5i32..=0,
        span in 1.0f64..1_000.0,
    ) {
        let x = LinearScale::new((0.0, span), (0.0, 640.0)).expect("x scale");
        let y = LinearScale::new((0.0, span), (0.0, 480.0)).expect("y scale");
        let options = AxisOptions::default()
            .with_numerical_data(true)
            .with_tick_count(AxisOption::PerAxis { x: Some(x_ticks), y: Some(y_ticks) })
            .with_titles(AxisTitles {
                x: Some("time".to_owned()),
                yl: Some("price".to_owned()),
                yr: vec!["volume".to_owned()],
            });
        let engine = AxisLayoutEngine::new(options);
        let font = MonospaceFontMetrics::new(12.0, 6.0);

        let layout = engine.layout(AxisScales::new(&x, &y, &y), Some(&font));

        prop_assert!(layout.x_ticks.is_empty());
        prop_assert!(layout.y_ticks.is_empty());
        prop_assert!(layout.yr_ticks.is_empty());
        prop_assert!(layout.gridlines().is_empty());
        prop_assert!(layout.titles.x.is_none());
        prop_assert!(layout.titles.yl.is_none());
        prop_assert!(layout.titles.yr.is_empty());
    }

    #[test]
    fn secondary_ticks_match_primary_count(
        y_ticks in 1i32..12,
        y_end in 1.0f64..10_000.0,
        yr_end in 1.0f64..10_000.0,
    ) {
        let x = LinearScale::new((0.0, 10.0), (0.0, 640.0)).expect("x scale");
        let y = LinearScale::new((0.0, y_end), (0.0, 480.0)).expect("y scale");
        let yr = LinearScale::new((0.0, yr_end), (0.0, 480.0)).expect("yr scale");
        let engine = AxisLayoutEngine::new(
            AxisOptions::default()
                .with_numerical_data(true)
                .with_tick_count(AxisOption::PerAxis { x: Some(5), y: Some(y_ticks) }),
        );

        let layout = engine.layout(AxisScales::new(&x, &y, &yr), None);

        prop_assert_eq!(layout.yr_ticks.len(), layout.y_ticks.len());
        for node in &layout.yr_ticks {
            prop_assert!(node.value >= -1e-9 && node.value <= yr_end + 1e-9);
        }
    }

    #[test]
    fn layouts_over_finite_scales_render_valid_frames(
        x_start in -1_000.0f64..1_000.0,
        x_span in 0.5f64..1_000.0,
        y_start in -1_000.0f64..1_000.0,
        y_span in 0.5f64..1_000.0,
        width in 50.0f64..2_000.0,
        height in 50.0f64..2_000.0,
        ticks in 1i32..15,
    ) {
        let x = LinearScale::new((x_start, x_start + x_span), (0.0, width)).expect("x scale");
        let y = LinearScale::new((y_start, y_start + y_span), (height, 0.0)).expect("y scale");
        let engine = AxisLayoutEngine::new(
            AxisOptions::default()
                .with_numerical_data(true)
                .with_tick_count(AxisOption::Uniform(ticks)),
        );
        let font = MonospaceFontMetrics::new(11.0, 6.5);
        let mut renderer = NullRenderer::default();

        let layout = engine
            .render(AxisScales::new(&x, &y, &y), Some(&font), &mut renderer)
            .expect("render");

        prop_assert_eq!(renderer.frames_rendered, 1);
        for node in layout.x_ticks.iter().filter(|node| node.label_visible) {
            prop_assert!(node.label_x + node.label_width < width);
        }
    }
}
