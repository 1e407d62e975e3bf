use std::f64::consts::FRAC_PI_2;

use smallvec::SmallVec;

use crate::core::{Scale, ScaleExtent};
use crate::render::Color;

use super::axis_configuration::AxisConfiguration;
use super::axis_options::AxisTitles;

const X_TITLE_OFFSET_Y_PX: f64 = 40.0;
const X_TITLE_SHIFT_LEFT_PX: f64 = 20.0;
const Y_TITLE_X_PX: f64 = 10.0;
const Y_TITLE_SHIFT_DOWN_PX: f64 = 20.0;
const YR_TITLE_GAP_PX: f64 = 20.0;
const YR_TITLE_SPACING_PX: f64 = 20.0;
const YR_TITLE_NUDGE_X_PX: f64 = 10.0;
const YR_TITLE_NUDGE_Y_PX: f64 = -50.0;

/// Placed axis title. `rotation_rad` turns the text around `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation_rad: f64,
    pub color: Color,
}

/// Placed titles for one layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTitlePlacements {
    pub x: Option<AxisTitle>,
    pub yl: Option<AxisTitle>,
    pub yr: SmallVec<[AxisTitle; 2]>,
}

/// Places the X title below the plot, the left Y title reading bottom-to-top
/// and the right Y titles stacked outward reading top-to-bottom.
///
/// The X title is omitted when the X axis is suppressed; Y titles when the
/// primary Y axis is suppressed.
pub(super) fn place_axis_titles(
    titles: &AxisTitles,
    config: &AxisConfiguration,
    x: &dyn Scale,
    y: &dyn Scale,
    yr: &dyn Scale,
) -> AxisTitlePlacements {
    let mut placements = AxisTitlePlacements::default();

    if config.x_tick_request().is_some() {
        if let Some(text) = titles.x.as_deref().filter(|text| !text.is_empty()) {
            let y_domain = ScaleExtent::of_domain(y);
            placements.x = Some(AxisTitle {
                text: text.to_owned(),
                x: ScaleExtent::of_range(x).midpoint() - X_TITLE_SHIFT_LEFT_PX,
                y: y.map(y_domain.end) + X_TITLE_OFFSET_Y_PX,
                rotation_rad: 0.0,
                color: config.x_label_color,
            });
        }
    }

    if config.y_tick_request().is_none() {
        return placements;
    }

    if let Some(text) = titles.yl.as_deref().filter(|text| !text.is_empty()) {
        placements.yl = Some(AxisTitle {
            text: text.to_owned(),
            x: Y_TITLE_X_PX,
            y: ScaleExtent::of_range(y).midpoint() + Y_TITLE_SHIFT_DOWN_PX,
            rotation_rad: -FRAC_PI_2,
            color: config.yl_label_color,
        });
    }

    let right_edge = x.map(ScaleExtent::of_domain(x).end);
    let yr_mid = ScaleExtent::of_range(yr).midpoint() + Y_TITLE_SHIFT_DOWN_PX;
    placements.yr = titles
        .yr
        .iter()
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(index, text)| AxisTitle {
            text: text.clone(),
            x: right_edge
                + YR_TITLE_GAP_PX
                + index as f64 * YR_TITLE_SPACING_PX
                + YR_TITLE_NUDGE_X_PX,
            y: yr_mid + YR_TITLE_NUDGE_Y_PX,
            rotation_rad: FRAC_PI_2,
            color: config.yr_label_color,
        })
        .collect();

    placements
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::place_axis_titles;
    use crate::api::axis_configuration::AxisConfiguration;
    use crate::api::axis_options::{AxisOption, AxisOptions, AxisTitles};
    use crate::core::LinearScale;

    fn scales() -> (LinearScale, LinearScale, LinearScale) {
        (
            LinearScale::new((0.0, 10.0), (50.0, 250.0)).expect("x"),
            LinearScale::new((0.0, 100.0), (200.0, 0.0)).expect("y"),
            LinearScale::new((0.0, 1.0), (200.0, 0.0)).expect("yr"),
        )
    }

    fn titles() -> AxisTitles {
        AxisTitles {
            x: Some("Time".to_owned()),
            yl: Some("Price".to_owned()),
            yr: vec!["Volume".to_owned(), "Trades".to_owned()],
        }
    }

    #[test]
    fn titles_anchor_on_axis_midpoints() {
        let (x, y, yr) = scales();
        let placements =
            place_axis_titles(&titles(), &AxisConfiguration::default(), &x, &y, &yr);

        let x_title = placements.x.expect("x title");
        assert_eq!((x_title.x, x_title.y), (130.0, 40.0));

        let y_title = placements.yl.expect("y title");
        assert_eq!((y_title.x, y_title.y), (10.0, 120.0));
        assert_eq!(y_title.rotation_rad, -FRAC_PI_2);

        assert_eq!(placements.yr.len(), 2);
        assert_eq!((placements.yr[0].x, placements.yr[0].y), (280.0, 70.0));
        assert_eq!((placements.yr[1].x, placements.yr[1].y), (300.0, 70.0));
        assert!(placements.yr.iter().all(|t| t.rotation_rad == FRAC_PI_2));
    }

    #[test]
    fn suppressed_axes_drop_their_titles() {
        let (x, y, yr) = scales();
        let config = AxisConfiguration::resolve(&AxisOptions::default().with_tick_count(
            AxisOption::PerAxis {
                x: Some(0),
                y: Some(0),
            },
        ));
        let placements = place_axis_titles(&titles(), &config, &x, &y, &yr);
        assert!(placements.x.is_none());
        assert!(placements.yl.is_none());
        assert!(placements.yr.is_empty());
    }
}
