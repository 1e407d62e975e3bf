use crate::render::Color;

use super::axis_options::{
    AxisOptions, AxisPair, DEFAULT_LABEL_COLOR, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH_PX,
    DEFAULT_TICK_COUNT, DEFAULT_X_LABEL_OFFSET_PX, DEFAULT_Y_LABEL_OFFSET_PX, LabelPosition,
    XAxisSide, YAxisSide,
};

/// Axis options normalized to one concrete value per logical target.
///
/// Derived from [`AxisOptions`] before any geometry is computed; layout code
/// never branches on the shape of an option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfiguration {
    pub x_ticks: i32,
    pub y_ticks: i32,
    pub x_label_offset: f64,
    pub y_label_offset: f64,
    pub x_axis_side: XAxisSide,
    pub y_axis_side: YAxisSide,
    pub x_label_position: LabelPosition,
    pub y_label_position: LabelPosition,
    pub grid_x_line_color: Color,
    pub grid_y_line_color: Color,
    pub frame_line_color: Color,
    pub grid_x_line_width: f64,
    pub grid_y_line_width: f64,
    pub frame_line_width: f64,
    pub x_label_color: Color,
    pub yl_label_color: Color,
    pub yr_label_color: Color,
}

impl AxisConfiguration {
    #[must_use]
    pub fn resolve(options: &AxisOptions) -> Self {
        let ticks = options
            .tick_count
            .resolve(AxisPair::splat(DEFAULT_TICK_COUNT));
        let offsets = options.label_offset.resolve(AxisPair {
            x: DEFAULT_X_LABEL_OFFSET_PX,
            y: DEFAULT_Y_LABEL_OFFSET_PX,
        });
        let positions = options
            .label_position
            .resolve(AxisPair::splat(LabelPosition::Outset));
        let colors = options.line_color.resolve(DEFAULT_LINE_COLOR);
        let widths = options.line_width.resolve(DEFAULT_LINE_WIDTH_PX);
        let label_colors = options.label_color.resolve(DEFAULT_LABEL_COLOR);

        Self {
            x_ticks: ticks.x,
            y_ticks: ticks.y,
            x_label_offset: offsets.x,
            y_label_offset: offsets.y,
            x_axis_side: options.axis_side.x,
            y_axis_side: options.axis_side.y,
            x_label_position: positions.x,
            y_label_position: positions.y,
            grid_x_line_color: colors.grid_x,
            grid_y_line_color: colors.grid_y,
            frame_line_color: colors.frame,
            grid_x_line_width: widths.grid_x,
            grid_y_line_width: widths.grid_y,
            frame_line_width: widths.frame,
            x_label_color: label_colors.x,
            yl_label_color: label_colors.yl,
            yr_label_color: label_colors.yr,
        }
    }

    /// Number of X ticks to request, `None` when the X axis is suppressed.
    #[must_use]
    pub fn x_tick_request(&self) -> Option<usize> {
        usize::try_from(self.x_ticks).ok().filter(|count| *count > 0)
    }

    /// Number of primary Y ticks to request, `None` when Y is suppressed.
    #[must_use]
    pub fn y_tick_request(&self) -> Option<usize> {
        usize::try_from(self.y_ticks).ok().filter(|count| *count > 0)
    }
}

impl Default for AxisConfiguration {
    fn default() -> Self {
        Self::resolve(&AxisOptions::default())
    }
}
