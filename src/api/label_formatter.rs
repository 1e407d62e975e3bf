use std::fmt;
use std::sync::Arc;

use crate::core::AxisValue;

pub type XLabelFormatterFn = Arc<dyn Fn(&AxisValue) -> String + Send + Sync + 'static>;
pub type YLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Tick label formatters. Both default to plain stringification.
///
/// The Y formatter is shared by the primary and secondary Y axes.
#[derive(Clone)]
pub struct LabelFormatters {
    x: XLabelFormatterFn,
    y: YLabelFormatterFn,
}

impl LabelFormatters {
    #[must_use]
    pub fn with_x(mut self, formatter: XLabelFormatterFn) -> Self {
        self.x = formatter;
        self
    }

    #[must_use]
    pub fn with_y(mut self, formatter: YLabelFormatterFn) -> Self {
        self.y = formatter;
        self
    }

    #[must_use]
    pub fn format_x(&self, value: &AxisValue) -> String {
        (self.x)(value)
    }

    #[must_use]
    pub fn format_y(&self, value: f64) -> String {
        (self.y)(value)
    }
}

impl Default for LabelFormatters {
    fn default() -> Self {
        Self {
            x: Arc::new(|value: &AxisValue| value.to_string()),
            y: Arc::new(|value: f64| AxisValue::Number(value).to_string()),
        }
    }
}

impl fmt::Debug for LabelFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFormatters").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::LabelFormatters;
    use crate::core::AxisValue;

    #[test]
    fn default_formatters_stringify() {
        let formatters = LabelFormatters::default();
        assert_eq!(formatters.format_x(&AxisValue::Number(4.0)), "4");
        assert_eq!(formatters.format_x(&AxisValue::from("Jan")), "Jan");
        assert_eq!(formatters.format_y(0.25), "0.25");
    }

    #[test]
    fn custom_formatters_override_defaults() {
        let formatters = LabelFormatters::default()
            .with_y(Arc::new(|value: f64| format!("${value:.2}")))
            .with_x(Arc::new(|value: &AxisValue| format!("<{value}>")));
        assert_eq!(formatters.format_y(3.0), "$3.00");
        assert_eq!(formatters.format_x(&AxisValue::Number(1.0)), "<1>");
    }
}
