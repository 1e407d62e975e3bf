pub mod font;
pub mod scale;
pub mod types;

pub use font::{EstimatedFontMetrics, FontMetrics, MonospaceFontMetrics};
pub use scale::{LinearScale, Scale, ScaleExtent, nice_ticks};
pub use types::AxisValue;
