use crate::Config;
use crate::errors::ConfigError;
use crate::geometry::Margin;
use crate::layout::{Layout, LayoutType, Tile};
use serde::Deserialize;
use std::collections::HashMap;

fn preprocess_variables(input: &str) -> Result<String, ConfigError> {
    let mut variables: HashMap<String, String> = HashMap::new();
    let mut result = String::new();

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("#DEFINE") {
            let rest = trimmed.strip_prefix("#DEFINE").unwrap().trim();

            if let Some(eq_pos) = rest.find('=') {
                let var_name = rest[..eq_pos].trim();
                let value = rest[eq_pos + 1..].trim().trim_end_matches(',');

                if !var_name.starts_with('$') {
                    return Err(ConfigError::InvalidVariableName(var_name.to_string()));
                }

                variables.insert(var_name.to_string(), value.to_string());
            } else {
                return Err(ConfigError::InvalidDefine(trimmed.to_string()));
            }

            result.push('\n');
        } else {
            let mut processed_line = line.to_string();
            for (var_name, value) in &variables {
                processed_line = processed_line.replace(var_name, value);
            }
            result.push_str(&processed_line);
            result.push('\n');
        }
    }

    for line in result.lines() {
        if let Some(var_start) = line.find('$') {
            let rest = &line[var_start..];
            let var_end = rest[1..]
                .find(|c: char| !c.is_alphanumeric() && c != '_')
                .unwrap_or(rest.len() - 1)
                + 1;
            let undefined_var = &rest[..var_end];
            return Err(ConfigError::UndefinedVariable(undefined_var.to_string()));
        }
    }

    Ok(result)
}

pub fn parse_config(input: &str) -> Result<Config, ConfigError> {
    let preprocessed = preprocess_variables(input)?;
    let config_data: ConfigData = ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(&preprocessed)?;
    config_data_to_config(config_data)
}

#[derive(Debug, Deserialize)]
struct ConfigData {
    gaps_enabled: bool,
    inner_gaps: MarginData,
    outer_gaps: MarginData,

    #[serde(default)]
    default_layout: Option<String>,

    #[serde(default)]
    layouts: Vec<LayoutData>,
}

#[derive(Debug, Deserialize)]
struct MarginData {
    top: u32,
    right: u32,
    bottom: u32,
    left: u32,
}

#[derive(Debug, Deserialize)]
struct LayoutData {
    name: String,
    tiles: Vec<TileData>,
}

#[derive(Debug, Deserialize)]
struct TileData {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    groups: Vec<String>,
}

fn config_data_to_config(data: ConfigData) -> Result<Config, ConfigError> {
    // Built-in presets come first; user layouts are appended after them.
    let mut layouts: Vec<Layout> = LayoutType::all()
        .iter()
        .map(|layout_type| layout_type.build())
        .collect();

    for layout_data in data.layouts {
        let tiles = layout_data
            .tiles
            .into_iter()
            .map(tile_data_to_tile)
            .collect();
        let layout = Layout::new(layout_data.name, tiles);

        let is_duplicate_layout = layouts
            .iter()
            .any(|existing| existing.name == layout.name);
        if is_duplicate_layout {
            return Err(ConfigError::DuplicateLayout(layout.name));
        }

        layout.validate().map_err(|source| ConfigError::InvalidLayout {
            name: layout.name.clone(),
            source,
        })?;

        layouts.push(layout);
    }

    let default_layout = data
        .default_layout
        .unwrap_or_else(|| LayoutType::Halves.as_str().to_string());
    if !layouts.iter().any(|layout| layout.name == default_layout) {
        return Err(ConfigError::UnknownLayout(default_layout));
    }

    Ok(Config {
        gaps_enabled: data.gaps_enabled,
        inner_gaps: margin_data_to_margin(data.inner_gaps),
        outer_gaps: margin_data_to_margin(data.outer_gaps),
        layouts,
        default_layout,
    })
}

fn margin_data_to_margin(data: MarginData) -> Margin {
    Margin {
        top: data.top,
        right: data.right,
        bottom: data.bottom,
        left: data.left,
    }
}

fn tile_data_to_tile(data: TileData) -> Tile {
    Tile::with_groups(data.x, data.y, data.width, data.height, data.groups)
}
