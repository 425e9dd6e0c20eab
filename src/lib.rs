pub mod config;
pub mod engine;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod monitor;
pub mod snap;
pub mod snap_assist;
pub mod transform;
pub mod window_menu;

pub mod prelude {
    pub use crate::Config;
    pub use crate::WindowId;
    pub use crate::engine::{TileChosenHandler, TilingEngine};
    pub use crate::geometry::{Margin, Point, Rect};
    pub use crate::layout::{Layout, LayoutType, Tile};
    pub use crate::monitor::Monitor;
    pub use crate::transform::TilePreview;
}

use crate::geometry::Margin;
use crate::layout::{Layout, LayoutType};

/// Identity of a window, as assigned by the host shell.
pub type WindowId = u64;

#[derive(Debug, Clone)]
pub struct Config {
    // Gaps
    pub gaps_enabled: bool,
    pub inner_gaps: Margin,
    pub outer_gaps: Margin,

    // Layouts
    pub layouts: Vec<Layout>,
    pub default_layout: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gaps_enabled: true,
            inner_gaps: Margin::uniform(8),
            outer_gaps: Margin::uniform(4),
            layouts: LayoutType::all()
                .iter()
                .map(|layout_type| layout_type.build())
                .collect(),
            default_layout: LayoutType::Halves.as_str().to_string(),
        }
    }
}
