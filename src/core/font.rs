/// Font metrics collaborator used to size tick labels.
///
/// Layout never draws text without one; with no font every label width is
/// treated as zero and no text primitives are produced.
pub trait FontMetrics {
    /// Rendered font size in pixels.
    fn size(&self) -> f64;

    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str) -> f64;
}

impl<F: FontMetrics + ?Sized> FontMetrics for &F {
    fn size(&self) -> f64 {
        (**self).size()
    }

    fn text_width(&self, text: &str) -> f64 {
        (**self).text_width(text)
    }
}

/// Deterministic, backend-independent width estimator.
///
/// Glyph advances are approximated per character class as a fraction of the
/// font size, which keeps headless layout stable across platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedFontMetrics {
    size_px: f64,
}

impl EstimatedFontMetrics {
    #[must_use]
    pub fn new(size_px: f64) -> Self {
        let size_px = if size_px.is_finite() {
            size_px.max(0.0)
        } else {
            0.0
        };
        Self { size_px }
    }
}

impl Default for EstimatedFontMetrics {
    fn default() -> Self {
        Self::new(12.0)
    }
}

impl FontMetrics for EstimatedFontMetrics {
    fn size(&self) -> f64 {
        self.size_px
    }

    fn text_width(&self, text: &str) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                'i' | 'l' | 'j' | 'I' | '!' | '|' => 0.28,
                'm' | 'w' | 'M' | 'W' => 0.86,
                _ => 0.58,
            }
        });
        units * self.size_px
    }
}

/// Fixed-advance metrics: every character is `advance_px` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceFontMetrics {
    pub size_px: f64,
    pub advance_px: f64,
}

impl MonospaceFontMetrics {
    #[must_use]
    pub const fn new(size_px: f64, advance_px: f64) -> Self {
        Self {
            size_px,
            advance_px,
        }
    }
}

impl FontMetrics for MonospaceFontMetrics {
    fn size(&self) -> f64 {
        self.size_px
    }

    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance_px
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{EstimatedFontMetrics, FontMetrics, MonospaceFontMetrics};

    #[test]
    fn empty_text_has_zero_width() {
        let font = EstimatedFontMetrics::new(12.0);
        assert_eq!(font.text_width(""), 0.0);
    }

    #[test]
    fn digit_width_scales_with_size() {
        let small = EstimatedFontMetrics::new(10.0);
        let large = EstimatedFontMetrics::new(20.0);
        assert_abs_diff_eq!(
            large.text_width("42"),
            2.0 * small.text_width("42"),
            epsilon = 1e-9
        );
    }

    #[test]
    fn non_finite_size_degrades_to_zero() {
        let font = EstimatedFontMetrics::new(f64::NAN);
        assert_eq!(font.size(), 0.0);
    }

    #[test]
    fn monospace_counts_chars() {
        let font = MonospaceFontMetrics::new(12.0, 6.0);
        assert_eq!(font.text_width("abc"), 18.0);
    }
}
