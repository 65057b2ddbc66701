use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// How raw mouse and wheel input is turned into look and zoom deltas.
pub struct InputOptions {
    /// Pull the mouse down to look up.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
    /// Degrees of field of view per wheel notch.
    #[schemars(title = "Scroll Scale", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub scroll_scale: f32,
    /// Drop the first mouse-motion sample after startup or focus loss.
    /// Relative-mouse backends report a large bogus jump there.
    #[schemars(skip)]
    pub suppress_first_motion: bool,
    /// Drop the first wheel sample after startup or focus loss.
    #[schemars(skip)]
    pub suppress_first_scroll: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            invert_y: false,
            scroll_scale: 1.0,
            suppress_first_motion: true,
            suppress_first_scroll: false,
        }
    }
}
