//! Press-state tracking for chart gestures.
//!
//! A gesture handler (outside this crate) writes pointer positions and the
//! data values under them into a [`PressState`]; view code reads the
//! mirrored active flag from the [`PressStateStore`].

mod press_state;
mod press_state_store;
mod shared_value;

pub use press_state::{PressState, PressStateInit, PressStateKeys, PressValue};
pub use press_state_store::{ActiveFlagMirror, PressStateStore};
pub use shared_value::SharedValue;
