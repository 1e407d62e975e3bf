use tracing::trace;

use crate::core::{AxisValue, FontMetrics, Scale, ScaleExtent};

use super::axis_configuration::AxisConfiguration;
use super::axis_options::{LabelPosition, XAxisSide, YAxisSide};
use super::label_formatter::LabelFormatters;

/// Pixel nudge applied to bottom-outset X labels so their baseline hugs the
/// frame instead of sitting a full font size below it.
const X_LABEL_BOTTOM_OUTSET_NUDGE_PX: f64 = 5.0;

/// One generated tick: data value, pixel position and label placement.
#[derive(Debug, Clone, PartialEq)]
pub struct TickNode {
    /// Tick value as produced by the scale.
    pub value: f64,
    /// Value handed to the formatter (category for non-numerical X data).
    pub datum: Option<AxisValue>,
    /// Pixel coordinate along the tick's axis.
    pub position: f64,
    pub label: String,
    pub label_width: f64,
    pub label_x: f64,
    pub label_y: f64,
    /// False when the label is not drawn (no font, empty text, overflow).
    pub label_visible: bool,
}

/// Inputs shared by the per-axis node builders for one layout pass.
#[derive(Clone, Copy)]
pub(super) struct TickNodeContext<'a> {
    pub x: &'a dyn Scale,
    pub y: &'a dyn Scale,
    pub yr: &'a dyn Scale,
    pub font: Option<&'a dyn FontMetrics>,
    pub config: &'a AxisConfiguration,
    pub formatters: &'a LabelFormatters,
    pub ix: &'a [AxisValue],
    pub is_numerical_data: bool,
}

impl TickNodeContext<'_> {
    fn font_size(&self) -> f64 {
        self.font.map_or(0.0, |font| font.size())
    }

    fn label_width(&self, label: &str) -> f64 {
        match self.font {
            Some(font) if !label.is_empty() => font.text_width(label),
            _ => 0.0,
        }
    }
}

/// Primary Y ticks, labelled to the left of the plot area.
pub(super) fn build_y_tick_nodes(ctx: TickNodeContext<'_>, count: usize) -> Vec<TickNode> {
    let x_domain = ScaleExtent::of_domain(ctx.x);
    let left_edge = ctx.x.map(x_domain.start);
    let baseline_shift = ctx.font_size() / 3.0;

    ctx.y
        .ticks(count)
        .into_iter()
        .map(|tick| {
            let label = ctx.formatters.format_y(tick);
            let label_width = ctx.label_width(&label);
            let position = ctx.y.map(tick);
            TickNode {
                value: tick,
                datum: Some(AxisValue::Number(tick)),
                position,
                label_visible: ctx.font.is_some() && !label.is_empty(),
                label_x: left_edge - (label_width + ctx.config.y_label_offset),
                label_y: position + baseline_shift,
                label,
                label_width,
            }
        })
        .collect()
}

/// Secondary Y ticks, one per primary tick, labelled to the right of the plot.
///
/// The secondary scale is asked for `primary.len()` ticks. Its tick
/// generator treats the count as a hint, so when it answers with a different
/// number the primary ticks are projected proportionally onto the secondary
/// domain instead, which keeps both label columns on the same rows.
pub(super) fn build_yr_tick_nodes(ctx: TickNodeContext<'_>, primary: &[TickNode]) -> Vec<TickNode> {
    let count = primary.len();
    if count == 0 {
        return Vec::new();
    }

    let mut ticks = ctx.yr.ticks(count);
    if ticks.len() != count {
        trace!(
            requested = count,
            produced = ticks.len(),
            "secondary y ticks projected from primary axis"
        );
        let y_domain = ScaleExtent::of_domain(ctx.y);
        let yr_domain = ScaleExtent::of_domain(ctx.yr);
        let span = y_domain.end - y_domain.start;
        ticks = primary
            .iter()
            .map(|node| {
                let ratio = if span == 0.0 {
                    0.0
                } else {
                    (node.value - y_domain.start) / span
                };
                yr_domain.start + ratio * (yr_domain.end - yr_domain.start)
            })
            .collect();
    }

    let x_domain = ScaleExtent::of_domain(ctx.x);
    let right_edge = ctx.x.map(x_domain.end);
    let baseline_shift = ctx.font_size() / 3.0;

    ticks
        .into_iter()
        .map(|tick| {
            let label = ctx.formatters.format_y(tick);
            let label_width = ctx.label_width(&label);
            let position = ctx.yr.map(tick);
            TickNode {
                value: tick,
                datum: Some(AxisValue::Number(tick)),
                position,
                label_visible: ctx.font.is_some() && !label.is_empty(),
                label_x: right_edge + (label_width - ctx.config.y_label_offset),
                label_y: position + baseline_shift,
                label,
                label_width,
            }
        })
        .collect()
}

/// X ticks with labels centred on the tick and clipped to the plot width.
pub(super) fn build_x_tick_nodes(ctx: TickNodeContext<'_>, count: usize) -> Vec<TickNode> {
    let y_domain = ScaleExtent::of_domain(ctx.y);
    let x_range = ScaleExtent::of_range(ctx.x);
    let label_y = x_label_baseline(
        ctx.config,
        ctx.y.map(y_domain.start),
        ctx.y.map(y_domain.end),
        ctx.font_size(),
    );

    ctx.x
        .ticks(count)
        .into_iter()
        .map(|tick| {
            let datum = if ctx.is_numerical_data {
                Some(AxisValue::Number(tick))
            } else {
                category_at(ctx.ix, tick)
            };
            let label = datum
                .as_ref()
                .map(|datum| ctx.formatters.format_x(datum))
                .unwrap_or_default();
            let label_width = ctx.label_width(&label);
            let position = ctx.x.map(tick);
            let label_x = position - label_width / 2.0;
            let fits = match ctx.config.y_axis_side {
                YAxisSide::Left => label_x + label_width < x_range.end,
                YAxisSide::Right => x_range.start < label_x,
            };
            if label_width > 0.0 && !fits {
                trace!(tick, label = %label, "x label dropped: overflows plot bounds");
            }

            TickNode {
                value: tick,
                datum,
                position,
                label_visible: ctx.font.is_some() && label_width > 0.0 && fits,
                label_x,
                label_y,
                label,
                label_width,
            }
        })
        .collect()
}

/// Baseline of X labels for the side/position combination.
///
/// `top_px` and `bottom_px` are the Y pixels of the primary domain's first
/// and last values.
pub(super) fn x_label_baseline(
    config: &AxisConfiguration,
    top_px: f64,
    bottom_px: f64,
    font_size: f64,
) -> f64 {
    let offset = config.x_label_offset;
    match (config.x_axis_side, config.x_label_position) {
        (XAxisSide::Bottom, LabelPosition::Outset) => {
            bottom_px + offset + font_size - X_LABEL_BOTTOM_OUTSET_NUDGE_PX
        }
        (XAxisSide::Bottom, LabelPosition::Inset) => bottom_px - offset,
        (XAxisSide::Top, LabelPosition::Outset) => top_px - offset,
        (XAxisSide::Top, LabelPosition::Inset) => top_px + font_size + offset,
    }
}

/// Looks up the category for a tick of an index-based X scale.
fn category_at(ix: &[AxisValue], tick: f64) -> Option<AxisValue> {
    if !tick.is_finite() || tick < 0.0 || tick.fract() != 0.0 {
        return None;
    }
    ix.get(tick as usize).cloned()
}
