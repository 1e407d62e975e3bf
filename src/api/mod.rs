//! Axis layout: option normalization, tick placement, titles and frame.

mod axis_configuration;
mod axis_layout;
mod axis_options;
mod axis_tick_nodes;
mod axis_titles;
mod label_formatter;

pub use axis_configuration::AxisConfiguration;
pub use axis_layout::{AxisLayout, AxisLayoutEngine, AxisScales};
pub use axis_options::{
    AxisOption, AxisOptions, AxisPair, AxisSides, AxisTitles, DEFAULT_LABEL_COLOR,
    DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH_PX, DEFAULT_TICK_COUNT, DEFAULT_X_LABEL_OFFSET_PX,
    DEFAULT_Y_LABEL_OFFSET_PX, LabelColorOption, LabelColors, LabelPosition, LineOption,
    LineTargets, XAxisSide, YAxisSide,
};
pub use axis_tick_nodes::TickNode;
pub use axis_titles::{AxisTitle, AxisTitlePlacements};
pub use label_formatter::{LabelFormatters, XLabelFormatterFn, YLabelFormatterFn};
