use super::Tile;

pub const SYMBOL: &str = "[M]";

// A single tile covering the whole container.
pub fn tiles() -> Vec<Tile> {
    vec![Tile::new(0.0, 0.0, 1.0, 1.0)]
}
