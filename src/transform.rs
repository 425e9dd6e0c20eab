use crate::geometry::{EPSILON, Margin, Rect};
use crate::layout::{Layout, Tile};

/// A tile together with the absolute rectangle computed for it against a
/// specific container, gap and scaling context.
#[derive(Debug, Clone)]
pub struct TilePreview {
    pub tile: Tile,
    pub rect: Rect,
}

/// Maps a tile onto a container rectangle. Outer gaps (scaled) shrink the
/// usable container area; inner gaps (scaled) are deducted on interior
/// edges only, half per side, so two facing tiles end up separated by
/// exactly one scaled gap. Edges flush with the container take no inner
/// gap at all, which is what keeps the outer boundary from being gapped
/// twice.
///
/// Edge positions are computed in floating point and rounded
/// independently, so adjacent tiles always agree on their shared boundary
/// pixel: no 1px seam, no overlap.
pub fn apply(
    tile: &Tile,
    container: Rect,
    inner_gaps: &Margin,
    outer_gaps: &Margin,
    scaling_factor: f64,
) -> Rect {
    let usable_x = container.x as f64 + outer_gaps.left as f64 * scaling_factor;
    let usable_y = container.y as f64 + outer_gaps.top as f64 * scaling_factor;
    let usable_width = (container.width as f64
        - (outer_gaps.left + outer_gaps.right) as f64 * scaling_factor)
        .max(0.0);
    let usable_height = (container.height as f64
        - (outer_gaps.top + outer_gaps.bottom) as f64 * scaling_factor)
        .max(0.0);

    let mut left = usable_x + tile.x * usable_width;
    let mut right = usable_x + (tile.x + tile.width) * usable_width;
    let mut top = usable_y + tile.y * usable_height;
    let mut bottom = usable_y + (tile.y + tile.height) * usable_height;

    if tile.x > EPSILON {
        left += inner_gaps.left as f64 * scaling_factor / 2.0;
    }
    if tile.x + tile.width < 1.0 - EPSILON {
        right -= inner_gaps.right as f64 * scaling_factor / 2.0;
    }
    if tile.y > EPSILON {
        top += inner_gaps.top as f64 * scaling_factor / 2.0;
    }
    if tile.y + tile.height < 1.0 - EPSILON {
        bottom -= inner_gaps.bottom as f64 * scaling_factor / 2.0;
    }

    rounded(left, top, right, bottom)
}

/// Projects a tile onto a container with no gaps and no scaling. The
/// vacancy filter compares these rects against occupied window frames.
pub fn apply_props(tile: &Tile, container: Rect) -> Rect {
    let left = container.x as f64 + tile.x * container.width as f64;
    let right = container.x as f64 + (tile.x + tile.width) * container.width as f64;
    let top = container.y as f64 + tile.y * container.height as f64;
    let bottom = container.y as f64 + (tile.y + tile.height) * container.height as f64;

    rounded(left, top, right, bottom)
}

/// Computes the preview rectangle for every tile of a layout, preserving
/// layout order. Callers recompute after any geometry-affecting change;
/// nothing is cached here.
pub fn compute_previews(
    layout: &Layout,
    container: Rect,
    inner_gaps: &Margin,
    outer_gaps: &Margin,
    scaling_factor: f64,
) -> Vec<TilePreview> {
    layout
        .tiles
        .iter()
        .map(|tile| TilePreview {
            tile: tile.clone(),
            rect: apply(tile, container, inner_gaps, outer_gaps, scaling_factor),
        })
        .collect()
}

fn rounded(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
    let x = left.round() as i32;
    let y = top.round() as i32;
    let width = (right.round() as i32 - x).max(0) as u32;
    let height = (bottom.round() as i32 - y).max(0) as u32;

    Rect {
        x,
        y,
        width,
        height,
    }
}
