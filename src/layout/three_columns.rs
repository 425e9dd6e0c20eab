use super::Tile;

pub const SYMBOL: &str = "[||]";

// Three equal columns, left to right.
pub fn tiles() -> Vec<Tile> {
    let column_width = 1.0 / 3.0;

    (0..3)
        .map(|column| Tile::new(column as f64 * column_width, 0.0, column_width, 1.0))
        .collect()
}
