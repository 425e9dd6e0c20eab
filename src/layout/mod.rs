pub mod halves;
pub mod master_stack;
pub mod monocle;
pub mod quarters;
pub mod three_columns;

use std::cmp::Ordering;

use crate::errors::LayoutError;
use crate::geometry::EPSILON;

// A layout that tiles less than this share of the unit square is probably
// a config mistake, but still usable.
const COVERAGE_TOLERANCE: f64 = 1e-3;

/// Proportional rectangle template within a layout. Coordinates are
/// fractions of a container, in [0, 1]. Treated as immutable once
/// constructed; the engine only ever clones tiles, never rewrites them.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Tags merging adjacent tiles into compound regions. Tiles sharing a
    /// group are allowed to overlap.
    pub groups: Vec<String>,
}

impl Tile {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            groups: Vec::new(),
        }
    }

    pub fn with_groups(x: f64, y: f64, width: f64, height: f64, groups: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            groups,
        }
    }

    pub fn horizontal_center(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn shares_group(&self, other: &Tile) -> bool {
        self.groups.iter().any(|group| other.groups.contains(group))
    }

    /// Left-to-right, top-to-bottom ordering used by the resolver.
    pub fn position_cmp(&self, other: &Tile) -> Ordering {
        match self.x.total_cmp(&other.x) {
            Ordering::Equal => self.y.total_cmp(&other.y),
            ordering => ordering,
        }
    }
}

/// Named ordered sequence of tiles defining one arrangement. Order is
/// selection order, not spatial.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: String,
    pub tiles: Vec<Tile>,
}

impl Layout {
    pub fn new(name: impl Into<String>, tiles: Vec<Tile>) -> Self {
        Self {
            name: name.into(),
            tiles,
        }
    }

    /// Checks fractional bounds for every tile and rejects overlap between
    /// tiles that do not share a group. Violations are reported, never
    /// silently corrected.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (tile_index, tile) in self.tiles.iter().enumerate() {
            let out_of_bounds = tile.x < -EPSILON
                || tile.y < -EPSILON
                || tile.width <= EPSILON
                || tile.height <= EPSILON
                || tile.x + tile.width > 1.0 + EPSILON
                || tile.y + tile.height > 1.0 + EPSILON;
            if out_of_bounds {
                return Err(LayoutError::InvalidTileBounds { tile_index });
            }
        }

        for first in 0..self.tiles.len() {
            for second in first + 1..self.tiles.len() {
                let a = &self.tiles[first];
                let b = &self.tiles[second];
                if a.shares_group(b) {
                    continue;
                }
                if fractional_overlap_area(a, b) > EPSILON {
                    return Err(LayoutError::OverlappingTiles { first, second });
                }
            }
        }

        let covered: f64 = self
            .tiles
            .iter()
            .map(|tile| tile.width * tile.height)
            .sum();
        if covered < 1.0 - COVERAGE_TOLERANCE {
            log::warn!(
                "layout '{}' covers only {:.1}% of its container",
                self.name,
                covered * 100.0
            );
        }

        Ok(())
    }
}

fn fractional_overlap_area(a: &Tile, b: &Tile) -> f64 {
    let horizontal = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
    let vertical = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
    if horizontal <= 0.0 || vertical <= 0.0 {
        0.0
    } else {
        horizontal * vertical
    }
}

/// Built-in layout presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutType {
    Halves,
    ThreeColumns,
    Quarters,
    MasterStack,
    Monocle,
}

impl LayoutType {
    pub fn build(&self) -> Layout {
        match self {
            Self::Halves => Layout::new(self.as_str(), halves::tiles()),
            Self::ThreeColumns => Layout::new(self.as_str(), three_columns::tiles()),
            Self::Quarters => Layout::new(self.as_str(), quarters::tiles()),
            Self::MasterStack => Layout::new(self.as_str(), master_stack::tiles()),
            Self::Monocle => Layout::new(self.as_str(), monocle::tiles()),
        }
    }

    pub fn all() -> [Self; 5] {
        [
            Self::Halves,
            Self::ThreeColumns,
            Self::Quarters,
            Self::MasterStack,
            Self::Monocle,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Halves => "halves",
            Self::ThreeColumns => "three-columns",
            Self::Quarters => "quarters",
            Self::MasterStack => "master-stack",
            Self::Monocle => "monocle",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Halves => halves::SYMBOL,
            Self::ThreeColumns => three_columns::SYMBOL,
            Self::Quarters => quarters::SYMBOL,
            Self::MasterStack => master_stack::SYMBOL,
            Self::Monocle => monocle::SYMBOL,
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "halves" => Ok(Self::Halves),
            "three-columns" | "columns" => Ok(Self::ThreeColumns),
            "quarters" | "grid" => Ok(Self::Quarters),
            "master-stack" => Ok(Self::MasterStack),
            "monocle" => Ok(Self::Monocle),
            _ => Err(format!("Invalid Layout Type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets_validate() {
        for layout_type in LayoutType::all() {
            let layout = layout_type.build();
            assert!(
                layout.validate().is_ok(),
                "preset '{}' failed validation",
                layout.name
            );
        }
    }

    #[test]
    fn rejects_tile_outside_unit_square() {
        let layout = Layout::new("bad", vec![Tile::new(0.5, 0.0, 0.75, 1.0)]);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidTileBounds { tile_index: 0 })
        ));
    }

    #[test]
    fn rejects_negative_dimensions() {
        let layout = Layout::new("bad", vec![Tile::new(0.0, 0.0, -0.5, 1.0)]);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidTileBounds { tile_index: 0 })
        ));
    }

    #[test]
    fn rejects_ungrouped_overlap() {
        let layout = Layout::new(
            "bad",
            vec![
                Tile::new(0.0, 0.0, 0.6, 1.0),
                Tile::new(0.4, 0.0, 0.6, 1.0),
            ],
        );
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::OverlappingTiles {
                first: 0,
                second: 1
            })
        ));
    }

    #[test]
    fn grouped_tiles_may_overlap() {
        let group = vec!["center".to_string()];
        let layout = Layout::new(
            "grouped",
            vec![
                Tile::with_groups(0.0, 0.0, 0.6, 1.0, group.clone()),
                Tile::with_groups(0.4, 0.0, 0.6, 1.0, group),
            ],
        );
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn adjacent_tiles_do_not_overlap() {
        let layout = LayoutType::ThreeColumns.build();
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn position_ordering_is_left_to_right_top_to_bottom() {
        let upper_right = Tile::new(0.5, 0.0, 0.5, 0.5);
        let lower_right = Tile::new(0.5, 0.5, 0.5, 0.5);
        let left = Tile::new(0.0, 0.0, 0.5, 1.0);

        assert_eq!(left.position_cmp(&upper_right), Ordering::Less);
        assert_eq!(upper_right.position_cmp(&lower_right), Ordering::Less);
    }

    #[test]
    fn layout_type_round_trips_through_names() {
        for layout_type in LayoutType::all() {
            assert_eq!(
                LayoutType::from_str(layout_type.as_str()),
                Ok(layout_type)
            );
        }
        assert!(LayoutType::from_str("spiral").is_err());
    }
}
