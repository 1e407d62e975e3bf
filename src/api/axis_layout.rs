use tracing::{debug, trace};

use crate::core::{FontMetrics, Scale, ScaleExtent};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::axis_configuration::AxisConfiguration;
use super::axis_options::AxisOptions;
use super::axis_tick_nodes::{
    TickNode, TickNodeContext, build_x_tick_nodes, build_y_tick_nodes, build_yr_tick_nodes,
};
use super::axis_titles::{AxisTitlePlacements, place_axis_titles};
use super::label_formatter::{LabelFormatters, XLabelFormatterFn, YLabelFormatterFn};

/// The three scales an axis pass reads: X, primary Y and secondary Y.
#[derive(Clone, Copy)]
pub struct AxisScales<'a> {
    pub x: &'a dyn Scale,
    pub y: &'a dyn Scale,
    pub yr: &'a dyn Scale,
}

impl<'a> AxisScales<'a> {
    #[must_use]
    pub fn new(x: &'a dyn Scale, y: &'a dyn Scale, yr: &'a dyn Scale) -> Self {
        Self { x, y, yr }
    }
}

/// Result of one layout pass: tick nodes, titles and the bounding frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub configuration: AxisConfiguration,
    pub x_ticks: Vec<TickNode>,
    pub y_ticks: Vec<TickNode>,
    pub yr_ticks: Vec<TickNode>,
    pub titles: AxisTitlePlacements,
    pub frame: RectPrimitive,
    /// Font size used for every label; `None` when laid out without a font.
    pub font_size: Option<f64>,
    /// Pixel X extent of horizontal gridlines.
    pub y_grid_span: (f64, f64),
    /// Pixel Y extent of vertical gridlines.
    pub x_grid_span: (f64, f64),
}

impl AxisLayout {
    /// Vertical X gridlines followed by horizontal primary-Y gridlines.
    ///
    /// Secondary Y ticks never produce gridlines. A grid target with a zero
    /// line width is omitted.
    #[must_use]
    pub fn gridlines(&self) -> Vec<LinePrimitive> {
        let config = &self.configuration;
        let (grid_top, grid_bottom) = self.x_grid_span;
        let (grid_left, grid_right) = self.y_grid_span;

        let vertical = self.x_ticks.iter().map(|node| {
            LinePrimitive::new(
                node.position,
                grid_bottom,
                node.position,
                grid_top,
                config.grid_x_line_width,
                config.grid_x_line_color,
            )
        });
        let horizontal = self.y_ticks.iter().map(|node| {
            LinePrimitive::new(
                grid_left,
                node.position,
                grid_right,
                node.position,
                config.grid_y_line_width,
                config.grid_y_line_color,
            )
        });
        vertical
            .chain(horizontal)
            .filter(|line| line.stroke_width > 0.0)
            .collect()
    }

    /// Visible tick labels and titles as text draw commands.
    #[must_use]
    pub fn labels(&self) -> Vec<TextPrimitive> {
        let Some(font_size) = self.font_size else {
            return Vec::new();
        };
        let config = &self.configuration;

        let tick_labels = [
            (&self.x_ticks, config.x_label_color),
            (&self.y_ticks, config.yl_label_color),
            (&self.yr_ticks, config.yr_label_color),
        ]
        .into_iter()
        .flat_map(|(nodes, color)| {
            nodes.iter().filter(|node| node.label_visible).map(move |node| {
                TextPrimitive::new(
                    node.label.clone(),
                    node.label_x,
                    node.label_y,
                    font_size,
                    color,
                    TextHAlign::Left,
                )
            })
        });

        let titles = self
            .titles
            .x
            .iter()
            .chain(self.titles.yl.iter())
            .chain(self.titles.yr.iter())
            .map(|title| {
                TextPrimitive::new(
                    title.text.clone(),
                    title.x,
                    title.y,
                    font_size,
                    title.color,
                    TextHAlign::Left,
                )
                .with_rotation(title.rotation_rad)
            });

        tick_labels.chain(titles).collect()
    }

    #[must_use]
    pub fn to_render_frame(&self) -> RenderFrame {
        RenderFrame {
            lines: self.gridlines(),
            rects: vec![self.frame],
            texts: self.labels(),
        }
    }
}

/// Computes axis geometry from caller scales and options.
///
/// Options are normalized into an [`AxisConfiguration`] once, when they are
/// set; each [`layout`](Self::layout) call is a pure function of the scales,
/// the font and that resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct AxisLayoutEngine {
    options: AxisOptions,
    configuration: AxisConfiguration,
    formatters: LabelFormatters,
}

impl AxisLayoutEngine {
    #[must_use]
    pub fn new(options: AxisOptions) -> Self {
        let configuration = AxisConfiguration::resolve(&options);
        Self {
            options,
            configuration,
            formatters: LabelFormatters::default(),
        }
    }

    #[must_use]
    pub fn with_formatters(mut self, formatters: LabelFormatters) -> Self {
        self.formatters = formatters;
        self
    }

    #[must_use]
    pub fn options(&self) -> &AxisOptions {
        &self.options
    }

    #[must_use]
    pub fn configuration(&self) -> &AxisConfiguration {
        &self.configuration
    }

    /// Replaces the options, re-resolving only when they actually changed.
    ///
    /// Returns `true` when the resolved configuration was recomputed.
    pub fn set_options(&mut self, options: AxisOptions) -> bool {
        if options == self.options {
            return false;
        }
        self.configuration = AxisConfiguration::resolve(&options);
        self.options = options;
        debug!(configuration = ?self.configuration, "axis configuration re-resolved");
        true
    }

    pub fn set_x_label_formatter(&mut self, formatter: XLabelFormatterFn) {
        self.formatters = self.formatters.clone().with_x(formatter);
    }

    pub fn set_y_label_formatter(&mut self, formatter: YLabelFormatterFn) {
        self.formatters = self.formatters.clone().with_y(formatter);
    }

    /// Lays out ticks, titles and the frame for one pass.
    ///
    /// Never fails: a font with a non-positive size is treated as no font,
    /// and a negative or non-finite frame width draws a zero-width frame.
    #[must_use]
    pub fn layout(&self, scales: AxisScales<'_>, font: Option<&dyn FontMetrics>) -> AxisLayout {
        let config = &self.configuration;
        let font = font.filter(|font| {
            let size = font.size();
            size.is_finite() && size > 0.0
        });
        let ctx = TickNodeContext {
            x: scales.x,
            y: scales.y,
            yr: scales.yr,
            font,
            config,
            formatters: &self.formatters,
            ix: &self.options.ix,
            is_numerical_data: self.options.is_numerical_data,
        };

        let x_ticks = config
            .x_tick_request()
            .map(|count| build_x_tick_nodes(ctx, count))
            .unwrap_or_default();
        let (y_ticks, yr_ticks) = match config.y_tick_request() {
            Some(count) => {
                let y_ticks = build_y_tick_nodes(ctx, count);
                let yr_ticks = build_yr_tick_nodes(ctx, &y_ticks);
                (y_ticks, yr_ticks)
            }
            None => (Vec::new(), Vec::new()),
        };

        let x_domain = ScaleExtent::of_domain(scales.x);
        let y_domain = ScaleExtent::of_domain(scales.y);
        let (left, right) = (scales.x.map(x_domain.start), scales.x.map(x_domain.end));
        let (top, bottom) = (scales.y.map(y_domain.start), scales.y.map(y_domain.end));
        let frame = RectPrimitive::stroked_between(
            left,
            top,
            right,
            bottom,
            drawable_width(config.frame_line_width),
            config.frame_line_color,
        );

        let titles = place_axis_titles(&self.options.label, config, scales.x, scales.y, scales.yr);

        trace!(
            x_ticks = x_ticks.len(),
            y_ticks = y_ticks.len(),
            yr_ticks = yr_ticks.len(),
            has_font = font.is_some(),
            "axis layout pass"
        );

        AxisLayout {
            configuration: *config,
            x_ticks,
            y_ticks,
            yr_ticks,
            titles,
            frame,
            font_size: font.map(|font| font.size()),
            y_grid_span: (left, right),
            x_grid_span: (top, bottom),
        }
    }

    /// Lays out the axes and hands the draw instructions to `renderer`.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        scales: AxisScales<'_>,
        font: Option<&dyn FontMetrics>,
        renderer: &mut R,
    ) -> ChartResult<AxisLayout> {
        let layout = self.layout(scales, font);
        renderer.render(&layout.to_render_frame())?;
        Ok(layout)
    }
}

fn drawable_width(width: f64) -> f64 {
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}
