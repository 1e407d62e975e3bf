use serde::{Deserialize, Serialize};

use crate::core::AxisValue;
use crate::error::ChartResult;
use crate::render::Color;

pub const DEFAULT_TICK_COUNT: i32 = 5;
pub const DEFAULT_X_LABEL_OFFSET_PX: f64 = 2.0;
pub const DEFAULT_Y_LABEL_OFFSET_PX: f64 = 4.0;
/// Thinnest visible stroke on a 2x display.
pub const DEFAULT_LINE_WIDTH_PX: f64 = 0.5;
pub const DEFAULT_LINE_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.25);
pub const DEFAULT_LABEL_COLOR: Color = Color::BLACK;

/// Edge the X axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisSide {
    Top,
    #[default]
    Bottom,
}

/// Edge the primary Y axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAxisSide {
    #[default]
    Left,
    Right,
}

/// Whether tick labels sit inside or outside the plot frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Inset,
    #[default]
    Outset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisSides {
    #[serde(default)]
    pub x: XAxisSide,
    #[serde(default)]
    pub y: YAxisSide,
}

/// A fully resolved per-axis value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> AxisPair<T> {
    #[must_use]
    pub const fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }
}

/// Option given either once for both axes or per axis.
///
/// In JSON this is a bare value or an `{ "x": .., "y": .. }` map. Axes
/// missing from the map resolve to the option's default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    untagged,
    deny_unknown_fields,
    bound(deserialize = "T: Deserialize<'de>")
)]
pub enum AxisOption<T> {
    Uniform(T),
    PerAxis {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x: Option<T>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<T>,
    },
}

impl<T: Copy> AxisOption<T> {
    #[must_use]
    pub fn resolve(&self, default: AxisPair<T>) -> AxisPair<T> {
        match *self {
            Self::Uniform(value) => AxisPair::splat(value),
            Self::PerAxis { x, y } => AxisPair {
                x: x.unwrap_or(default.x),
                y: y.unwrap_or(default.y),
            },
        }
    }
}

/// Line styling resolved per logical target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTargets<T> {
    pub grid_x: T,
    pub grid_y: T,
    pub frame: T,
}

/// Line option given once, or split between gridlines and the frame.
///
/// The `grid` entry may itself be uniform or per axis. Targets missing from
/// the map resolve to the option's default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    untagged,
    deny_unknown_fields,
    bound(deserialize = "T: Deserialize<'de>")
)]
pub enum LineOption<T> {
    Uniform(T),
    PerTarget {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        grid: Option<AxisOption<T>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frame: Option<T>,
    },
}

impl<T: Copy> LineOption<T> {
    #[must_use]
    pub fn resolve(&self, default: T) -> LineTargets<T> {
        match *self {
            Self::Uniform(value) => LineTargets {
                grid_x: value,
                grid_y: value,
                frame: value,
            },
            Self::PerTarget { grid, frame } => {
                let grid = grid
                    .map(|grid| grid.resolve(AxisPair::splat(default)))
                    .unwrap_or(AxisPair::splat(default));
                LineTargets {
                    grid_x: grid.x,
                    grid_y: grid.y,
                    frame: frame.unwrap_or(default),
                }
            }
        }
    }
}

/// Resolved colors for X labels, left Y labels and right Y labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelColors {
    pub x: Color,
    pub yl: Color,
    pub yr: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum LabelColorOption {
    Uniform(Color),
    PerAxis {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        yl: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        yr: Option<Color>,
    },
}

impl LabelColorOption {
    #[must_use]
    pub fn resolve(&self, default: Color) -> LabelColors {
        match *self {
            Self::Uniform(color) => LabelColors {
                x: color,
                yl: color,
                yr: color,
            },
            Self::PerAxis { x, yl, yr } => LabelColors {
                x: x.unwrap_or(default),
                yl: yl.unwrap_or(default),
                yr: yr.unwrap_or(default),
            },
        }
    }
}

/// Axis titles: one for X, one for the left Y axis and a stack for the
/// right Y axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yl: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub yr: Vec<String>,
}

/// Caller-facing axis configuration.
///
/// Serializable so hosts can persist axis setup; every field has a default
/// so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(default = "default_tick_count")]
    pub tick_count: AxisOption<i32>,
    #[serde(default = "default_label_offset")]
    pub label_offset: AxisOption<f64>,
    #[serde(default)]
    pub axis_side: AxisSides,
    #[serde(default = "default_label_position")]
    pub label_position: AxisOption<LabelPosition>,
    #[serde(default = "default_line_color")]
    pub line_color: LineOption<Color>,
    #[serde(default = "default_line_width")]
    pub line_width: LineOption<f64>,
    #[serde(default = "default_label_color")]
    pub label_color: LabelColorOption,
    /// Category lookup table for non-numerical X data, indexed by tick.
    #[serde(default)]
    pub ix: Vec<AxisValue>,
    #[serde(default)]
    pub is_numerical_data: bool,
    #[serde(default)]
    pub label: AxisTitles,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            tick_count: default_tick_count(),
            label_offset: default_label_offset(),
            axis_side: AxisSides::default(),
            label_position: default_label_position(),
            line_color: default_line_color(),
            line_width: default_line_width(),
            label_color: default_label_color(),
            ix: Vec::new(),
            is_numerical_data: false,
            label: AxisTitles::default(),
        }
    }
}

impl AxisOptions {
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: AxisOption<i32>) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_label_offset(mut self, label_offset: AxisOption<f64>) -> Self {
        self.label_offset = label_offset;
        self
    }

    #[must_use]
    pub fn with_axis_side(mut self, x: XAxisSide, y: YAxisSide) -> Self {
        self.axis_side = AxisSides { x, y };
        self
    }

    #[must_use]
    pub fn with_label_position(mut self, label_position: AxisOption<LabelPosition>) -> Self {
        self.label_position = label_position;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, line_color: LineOption<Color>) -> Self {
        self.line_color = line_color;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: LineOption<f64>) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, label_color: LabelColorOption) -> Self {
        self.label_color = label_color;
        self
    }

    /// Switches X to categorical data looked up through `ix`.
    #[must_use]
    pub fn with_categories(mut self, ix: Vec<AxisValue>) -> Self {
        self.ix = ix;
        self.is_numerical_data = false;
        self
    }

    #[must_use]
    pub fn with_numerical_data(mut self, is_numerical_data: bool) -> Self {
        self.is_numerical_data = is_numerical_data;
        self
    }

    #[must_use]
    pub fn with_titles(mut self, label: AxisTitles) -> Self {
        self.label = label;
        self
    }
}

fn default_tick_count() -> AxisOption<i32> {
    AxisOption::Uniform(DEFAULT_TICK_COUNT)
}

fn default_label_offset() -> AxisOption<f64> {
    AxisOption::PerAxis {
        x: Some(DEFAULT_X_LABEL_OFFSET_PX),
        y: Some(DEFAULT_Y_LABEL_OFFSET_PX),
    }
}

fn default_label_position() -> AxisOption<LabelPosition> {
    AxisOption::Uniform(LabelPosition::Outset)
}

fn default_line_color() -> LineOption<Color> {
    LineOption::Uniform(DEFAULT_LINE_COLOR)
}

fn default_line_width() -> LineOption<f64> {
    LineOption::Uniform(DEFAULT_LINE_WIDTH_PX)
}

fn default_label_color() -> LabelColorOption {
    LabelColorOption::Uniform(DEFAULT_LABEL_COLOR)
}
