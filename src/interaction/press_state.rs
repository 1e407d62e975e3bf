use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::shared_value::SharedValue;

/// Data-space value and pixel position tracked for one press dimension.
#[derive(Debug, Clone)]
pub struct PressValue<T> {
    pub value: SharedValue<T>,
    pub position: SharedValue<f64>,
}

impl<T: Clone + PartialEq> PressValue<T> {
    fn new(value: T) -> Self {
        Self {
            value: SharedValue::new(value),
            position: SharedValue::new(0.0),
        }
    }
}

/// Initial values a press state is built from.
///
/// The key sets of `y` and `yr` decide which series the state tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressStateInit<X> {
    pub x: X,
    #[serde(default)]
    pub y: IndexMap<String, f64>,
    #[serde(default)]
    pub yr: IndexMap<String, f64>,
}

impl<X> PressStateInit<X> {
    #[must_use]
    pub fn new(x: X) -> Self {
        Self {
            x,
            y: IndexMap::new(),
            yr: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_y(mut self, key: impl Into<String>, value: f64) -> Self {
        self.y.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_yr(mut self, key: impl Into<String>, value: f64) -> Self {
        self.yr.insert(key.into(), value);
        self
    }

    /// Ordered series keys; equal keys mean an existing state can be reused.
    #[must_use]
    pub fn keys(&self) -> PressStateKeys {
        PressStateKeys {
            y: self.y.keys().cloned().collect(),
            yr: self.yr.keys().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PressStateKeys {
    pub y: Vec<String>,
    pub yr: Vec<String>,
}

/// Press state for one chart.
///
/// Every scalar is its own [`SharedValue`], so a gesture context can write
/// positions and values while the view reads them. The tracked series are
/// fixed at construction.
#[derive(Debug)]
pub struct PressState<X> {
    pub is_active: SharedValue<bool>,
    pub x: PressValue<X>,
    pub y: IndexMap<String, PressValue<f64>>,
    pub yr: IndexMap<String, PressValue<f64>>,
}

impl<X: Clone + PartialEq> PressState<X> {
    #[must_use]
    pub fn new(init: &PressStateInit<X>) -> Self {
        Self {
            is_active: SharedValue::new(false),
            x: PressValue::new(init.x.clone()),
            y: series_values(&init.y),
            yr: series_values(&init.yr),
        }
    }

    pub fn y_series(&self, key: &str) -> ChartResult<&PressValue<f64>> {
        self.y.get(key).ok_or_else(|| ChartError::UnknownSeries {
            key: key.to_owned(),
        })
    }

    pub fn yr_series(&self, key: &str) -> ChartResult<&PressValue<f64>> {
        self.yr.get(key).ok_or_else(|| ChartError::UnknownSeries {
            key: key.to_owned(),
        })
    }

    #[must_use]
    pub fn keys(&self) -> PressStateKeys {
        PressStateKeys {
            y: self.y.keys().cloned().collect(),
            yr: self.yr.keys().cloned().collect(),
        }
    }
}

fn series_values(initial: &IndexMap<String, f64>) -> IndexMap<String, PressValue<f64>> {
    initial
        .iter()
        .map(|(key, value)| (key.clone(), PressValue::new(*value)))
        .collect()
}
