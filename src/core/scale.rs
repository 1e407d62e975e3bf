use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Mapping between a data-space domain and a pixel-space range.
///
/// Scales are supplied by the host chart. `domain()` and `range()` normally
/// hold two extremes but layout tolerates shorter slices (see [`ScaleExtent`]).
pub trait Scale {
    fn domain(&self) -> &[f64];

    fn range(&self) -> &[f64];

    /// Maps a data-space value to a pixel coordinate.
    fn map(&self, value: f64) -> f64;

    /// Representative values spanning the domain. `count` is a hint; the
    /// returned length may differ.
    fn ticks(&self, count: usize) -> Vec<f64>;
}

impl<S: Scale + ?Sized> Scale for &S {
    fn domain(&self) -> &[f64] {
        (**self).domain()
    }

    fn range(&self) -> &[f64] {
        (**self).range()
    }

    fn map(&self, value: f64) -> f64 {
        (**self).map(value)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        (**self).ticks(count)
    }
}

/// First and last extremes of a domain or range, with `0.0` standing in
/// for missing entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleExtent {
    pub start: f64,
    pub end: f64,
}

impl ScaleExtent {
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            start: values.first().copied().unwrap_or(0.0),
            end: values.get(1).copied().unwrap_or(0.0),
        }
    }

    #[must_use]
    pub fn of_domain(scale: &dyn Scale) -> Self {
        Self::from_slice(scale.domain())
    }

    #[must_use]
    pub fn of_range(scale: &dyn Scale) -> Self {
        Self::from_slice(scale.range())
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Continuous linear scale with d3-compatible nice tick generation.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: SmallVec<[f64; 2]>,
    range: SmallVec<[f64; 2]>,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let values = [domain.0, domain.1, range.0, range.1];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain: SmallVec::from_buf([domain.0, domain.1]),
            range: SmallVec::from_buf([range.0, range.1]),
        })
    }
}

impl Scale for LinearScale {
    fn domain(&self) -> &[f64] {
        &self.domain
    }

    fn range(&self) -> &[f64] {
        &self.range
    }

    fn map(&self, value: f64) -> f64 {
        let (d0, d1) = (self.domain[0], self.domain[1]);
        let (r0, r1) = (self.range[0], self.range[1]);
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain[0], self.domain[1], count)
    }
}

/// Nice tick values inside `[start, stop]`, in the direction of the domain.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let increment = tick_increment(lo, hi, count);
    if increment == 0.0 || !increment.is_finite() {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = if increment > 0.0 {
        let first = (lo / increment).ceil();
        let last = (hi / increment).floor();
        steps(first, last).map(|i| i * increment).collect()
    } else {
        // Negative increments encode 1/step so fractional ticks stay exact.
        let inverse = -increment;
        let first = (lo * inverse).ceil();
        let last = (hi * inverse).floor();
        steps(first, last).map(|i| i / inverse).collect()
    };

    if reverse {
        ticks.reverse();
    }
    ticks
}

fn steps(first: f64, last: f64) -> impl Iterator<Item = f64> {
    let n = if last >= first {
        ((last - first).round() as usize).saturating_add(1).min(10_000)
    } else {
        0
    };
    (0..n).map(move |i| first + i as f64)
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, Scale, ScaleExtent, nice_ticks};

    #[test]
    fn ticks_land_on_nice_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(nice_ticks(-7.0, 23.0, 3), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn reversed_domain_yields_descending_ticks() {
        assert_eq!(nice_ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn zero_count_and_degenerate_domain() {
        assert!(nice_ticks(0.0, 10.0, 0).is_empty());
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn linear_scale_maps_forward_and_flipped_ranges() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("valid scale");
        assert_eq!(scale.map(4.0), 40.0);

        let inverted_y = LinearScale::new((0.0, 50.0), (300.0, 0.0)).expect("valid scale");
        assert_eq!(inverted_y.map(50.0), 0.0);
        assert_eq!(inverted_y.map(0.0), 300.0);
    }

    #[test]
    fn rejects_non_finite_extents() {
        assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    }

    #[test]
    fn extent_defaults_missing_values_to_zero() {
        assert_eq!(ScaleExtent::from_slice(&[]), ScaleExtent { start: 0.0, end: 0.0 });
        assert_eq!(ScaleExtent::from_slice(&[7.0]), ScaleExtent { start: 7.0, end: 0.0 });
        assert_eq!(ScaleExtent::from_slice(&[1.0, 2.0, 3.0]).midpoint(), 1.5);
    }
}
