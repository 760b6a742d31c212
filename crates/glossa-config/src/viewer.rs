use serde::{Deserialize, Serialize};

fn default_zoom() -> f32 {
    1.0
}

fn default_open_on_start() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Render scale; 1.0 is 72 dpi, one pixel per PDF point
    #[serde(default = "default_zoom")]
    pub zoom: f32,
    /// Show the file picker as soon as the window opens
    #[serde(default = "default_open_on_start")]
    pub open_on_start: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            open_on_start: default_open_on_start(),
        }
    }
}
