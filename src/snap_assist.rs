use crate::geometry::{Margin, Point, Rect};
use crate::layout::Layout;
use crate::snap;
use crate::transform::{self, TilePreview};

const SNAP_ASSIST_HEIGHT: u32 = 68;
// 16:9 ratio of the height, rounded to int.
const SNAP_ASSIST_WIDTH: u32 = 120;

/// Geometry of the snap-assist strip: a miniature rendition of the active
/// layout offered while a window is being dragged. The host positions the
/// strip on screen; this only owns its internal geometry.
#[derive(Debug, Clone)]
pub struct SnapAssist {
    container: Rect,
    previews: Vec<TilePreview>,
}

impl SnapAssist {
    /// Builds the strip for a layout at the given monitor scaling factor.
    /// Inner gaps separate the miniature tiles; outer gaps do not apply.
    pub fn new(layout: &Layout, inner_gaps: &Margin, scaling_factor: f64) -> Self {
        let width = (SNAP_ASSIST_WIDTH as f64 * scaling_factor).round() as u32;
        let height = (SNAP_ASSIST_HEIGHT as f64 * scaling_factor).round() as u32;
        let container = Rect::new(0, 0, width, height);

        let previews = transform::compute_previews(
            layout,
            container,
            inner_gaps,
            &Margin::default(),
            scaling_factor,
        );

        Self {
            container,
            previews,
        }
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn previews(&self) -> &[TilePreview] {
        &self.previews
    }

    /// The preview under the cursor, given the strip's screen-space
    /// origin. Absent when the cursor hovers none of the miniatures.
    pub fn tile_below(&self, cursor: Point, origin: Point) -> Option<&TilePreview> {
        snap::tile_at(cursor, origin, &self.previews)
    }
}
