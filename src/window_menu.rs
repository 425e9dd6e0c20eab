use crate::geometry::Rect;
use crate::layout::{Layout, Tile};
use crate::snap;

/// Which resolver produced a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    BestTile,
    LeftmostTile,
    RightmostTile,
}

/// A single "move to tile" entry contributed to the host's window menu.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: &'static str,
    pub tile: Tile,
}

/// One clickable miniature per tile of a layout, for the layout-picker
/// rows of the menu.
#[derive(Debug, Clone)]
pub struct LayoutButtons {
    pub layout_name: String,
    pub tiles: Vec<Tile>,
}

/// Tile-selection entries for the window menu of one window. The host
/// renders these and reports activations back through the engine's
/// tile-chosen contract.
#[derive(Debug, Clone)]
pub struct WindowMenu {
    pub entries: Vec<MenuEntry>,
    pub layout_buttons: Vec<LayoutButtons>,
}

/// Builds the tile entries for a window on the given work area. The best
/// entry appears whenever a vacant tile exists; the leftmost/rightmost
/// pair only when there is a real choice between at least two. No vacant
/// tiles means no entries, which callers treat as "skip the section".
pub fn build_window_menu(
    layouts: &[Layout],
    active: &Layout,
    work_area: Rect,
    occupied: &[Rect],
) -> WindowMenu {
    let vacant = snap::vacant_tiles(&active.tiles, work_area, occupied);

    let mut entries = Vec::new();

    if let Some(tile) = snap::best_tile(&vacant) {
        entries.push(MenuEntry {
            action: MenuAction::BestTile,
            label: "Move to best tile",
            tile,
        });
    }

    if vacant.len() > 1 {
        if let Some(tile) = snap::leftmost_tile(&vacant) {
            entries.push(MenuEntry {
                action: MenuAction::LeftmostTile,
                label: "Move to leftmost tile",
                tile,
            });
        }
        if let Some(tile) = snap::rightmost_tile(&vacant) {
            entries.push(MenuEntry {
                action: MenuAction::RightmostTile,
                label: "Move to rightmost tile",
                tile,
            });
        }
    }

    let layout_buttons = layouts
        .iter()
        .map(|layout| LayoutButtons {
            layout_name: layout.name.clone(),
            tiles: layout.tiles.clone(),
        })
        .collect();

    WindowMenu {
        entries,
        layout_buttons,
    }
}
