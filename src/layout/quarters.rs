use super::Tile;

pub const SYMBOL: &str = "[#]";

// 2x2 grid, one tile per corner.
pub fn tiles() -> Vec<Tile> {
    vec![
        Tile::new(0.0, 0.0, 0.5, 0.5),
        Tile::new(0.5, 0.0, 0.5, 0.5),
        Tile::new(0.0, 0.5, 0.5, 0.5),
        Tile::new(0.5, 0.5, 0.5, 0.5),
    ]
}
