use super::Tile;

pub const SYMBOL: &str = "[|]";

// Two columns splitting the container down the middle.
pub fn tiles() -> Vec<Tile> {
    vec![
        Tile::new(0.0, 0.0, 0.5, 1.0),
        Tile::new(0.5, 0.0, 0.5, 1.0),
    ]
}
