use std::cmp::Ordering;

use crate::geometry::{Point, Rect};
use crate::layout::Tile;
use crate::transform::{self, TilePreview};

/// First preview whose rectangle, translated to screen space by the
/// container origin, contains the pointer. Layout order is the tie-break
/// for overlapping previews; a pointer outside every preview is a normal
/// outcome, not a fault.
pub fn tile_at<'a>(
    pointer: Point,
    origin: Point,
    previews: &'a [TilePreview],
) -> Option<&'a TilePreview> {
    previews
        .iter()
        .find(|preview| preview.rect.translated(origin).contains(pointer))
}

/// Tiles whose gap-less rectangle over the work area intersects none of
/// the occupied rectangles. Layout order is preserved.
pub fn vacant_tiles(tiles: &[Tile], work_area: Rect, occupied: &[Rect]) -> Vec<Tile> {
    tiles
        .iter()
        .filter(|tile| {
            let tile_rect = transform::apply_props(tile, work_area);
            !occupied
                .iter()
                .any(|window_rect| tile_rect.overlaps(window_rect))
        })
        .cloned()
        .collect()
}

/// The vacant tile whose horizontal center sits closest to the container
/// midline. Vertical position is deliberately ignored. Ties go to the
/// first candidate of the ascending scan.
pub fn best_tile(vacant: &[Tile]) -> Option<Tile> {
    let sorted = sorted_by_position(vacant);
    let mut candidates = sorted.into_iter();

    let mut best = candidates.next()?;
    let mut best_distance = (0.5 - best.horizontal_center()).abs();

    for tile in candidates {
        let distance = (0.5 - tile.horizontal_center()).abs();
        if distance < best_distance {
            best = tile;
            best_distance = distance;
        }
    }

    Some(best.clone())
}

/// Vacant tile with the smallest left edge.
pub fn leftmost_tile(vacant: &[Tile]) -> Option<Tile> {
    sorted_by_position(vacant).first().map(|tile| (*tile).clone())
}

/// Vacant tile with the largest left edge; within the rightmost column
/// the topmost tile wins.
pub fn rightmost_tile(vacant: &[Tile]) -> Option<Tile> {
    let mut sorted: Vec<&Tile> = vacant.iter().collect();
    sorted.sort_by(|a, b| match b.x.total_cmp(&a.x) {
        Ordering::Equal => a.y.total_cmp(&b.y),
        ordering => ordering,
    });

    sorted.first().map(|tile| (*tile).clone())
}

// Every query sorts its own sequence; the caller's tile list is never
// reordered in place.
fn sorted_by_position(tiles: &[Tile]) -> Vec<&Tile> {
    let mut sorted: Vec<&Tile> = tiles.iter().collect();
    sorted.sort_by(|a, b| a.position_cmp(b));
    sorted
}
