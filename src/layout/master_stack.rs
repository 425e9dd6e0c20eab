use super::Tile;

pub const SYMBOL: &str = "[]=";

// Master column on the left, two stacked tiles on the right.
pub fn tiles() -> Vec<Tile> {
    vec![
        Tile::new(0.0, 0.0, 0.5, 1.0),
        Tile::new(0.5, 0.0, 0.5, 0.5),
        Tile::new(0.5, 0.5, 0.5, 0.5),
    ]
}
