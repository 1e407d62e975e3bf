//! cartesian-axis: headless axis layout and press-state tracking for
//! Cartesian charts.
//!
//! Layout turns caller-supplied scales and axis options into backend-agnostic
//! draw instructions; the press-state store tracks pointer gestures over the
//! chart in data and pixel space.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{AxisLayout, AxisLayoutEngine, AxisOptions, AxisScales};
pub use error::{ChartError, ChartResult};
pub use interaction::{PressState, PressStateInit, PressStateStore};
