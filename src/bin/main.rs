use anyhow::{Context, Result};
use std::path::PathBuf;

use snaptile::engine::TilingEngine;
use snaptile::geometry::Rect;
use snaptile::layout::LayoutType;
use snaptile::transform;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut custom_config_path: Option<PathBuf> = None;
    let mut work_area = Rect::new(0, 0, 1920, 1080);
    let mut scaling_factor = 1.0;

    let mut index = 1;
    while index < args.len() {
        match args[index].as_str() {
            "--version" => {
                println!("snaptile {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" => {
                print_help();
                return Ok(());
            }
            "--init" => {
                init_config()?;
                return Ok(());
            }
            "--config" => {
                index += 1;
                if let Some(path) = args.get(index) {
                    custom_config_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--area" => {
                index += 1;
                if let Some(value) = args.get(index) {
                    work_area = parse_area(value)?;
                } else {
                    eprintln!("Error: --area requires a WIDTHxHEIGHT argument");
                    std::process::exit(1);
                }
            }
            "--scale" => {
                index += 1;
                if let Some(value) = args.get(index) {
                    scaling_factor = value
                        .parse::<f64>()
                        .with_context(|| format!("Invalid scaling factor: {}", value))?;
                } else {
                    eprintln!("Error: --scale requires a numeric argument");
                    std::process::exit(1);
                }
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                eprintln!("Run 'snaptile --help' for usage");
                std::process::exit(1);
            }
        }
        index += 1;
    }

    let config = load_config(custom_config_path)?;
    let engine = TilingEngine::new(config)?;

    print_previews(&engine, work_area, scaling_factor);

    Ok(())
}

fn print_previews(engine: &TilingEngine, work_area: Rect, scaling_factor: f64) {
    println!(
        "Work area {}x{} at ({}, {}), scale {}",
        work_area.width, work_area.height, work_area.x, work_area.y, scaling_factor
    );

    let config = engine.config();
    for layout in engine.layouts() {
        let symbol = LayoutType::from_str(&layout.name)
            .map(|layout_type| layout_type.symbol())
            .unwrap_or("[*]");
        println!("\n{} {}", symbol, layout.name);

        let previews = transform::compute_previews(
            layout,
            work_area,
            &config.inner_gaps,
            &config.outer_gaps,
            scaling_factor,
        );
        for (tile_index, preview) in previews.iter().enumerate() {
            println!(
                "  tile {}: {}x{} at ({}, {})",
                tile_index,
                preview.rect.width,
                preview.rect.height,
                preview.rect.x,
                preview.rect.y
            );
        }
    }
}

fn parse_area(value: &str) -> Result<Rect> {
    let (width, height) = value
        .split_once('x')
        .with_context(|| format!("Invalid area '{}': expected WIDTHxHEIGHT", value))?;

    let width = width
        .parse::<u32>()
        .with_context(|| format!("Invalid area width: {}", width))?;
    let height = height
        .parse::<u32>()
        .with_context(|| format!("Invalid area height: {}", height))?;

    Ok(Rect::new(0, 0, width, height))
}

fn load_config(custom_path: Option<PathBuf>) -> Result<snaptile::Config> {
    let config_path = if let Some(path) = custom_path {
        path
    } else {
        let config_dir = get_config_path();
        let ron_path = config_dir.join("config.ron");

        if ron_path.exists() {
            ron_path
        } else {
            println!("No config found at {:?}", config_dir);
            println!("Creating default config...");
            init_config()?;
            ron_path
        }
    };

    let config_str =
        std::fs::read_to_string(&config_path).with_context(|| "Failed to read config file")?;

    snaptile::config::parse_config(&config_str).with_context(|| "Failed to parse RON config")
}

fn init_config() -> Result<()> {
    let config_dir = get_config_path();
    std::fs::create_dir_all(&config_dir)?;

    let config_template = include_str!("../../templates/config.ron");
    let config_path = config_dir.join("config.ron");

    std::fs::write(&config_path, config_template)?;

    println!("✓ Config created at {:?}", config_path);
    println!("  Built-in layouts stay available; the file adds gaps and custom layouts");

    Ok(())
}

fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .expect("Could not find config directory")
        .join("snaptile")
}

fn print_help() {
    println!("SNAPTILE - tile layout and snap resolution engine\n");
    println!("USAGE:");
    println!("    snaptile [OPTIONS]\n");
    println!("OPTIONS:");
    println!("    --init              Create default config in ~/.config/snaptile/config.ron");
    println!("    --config <PATH>     Use custom config file");
    println!("    --area <WxH>        Work area to compute previews for (default: 1920x1080)");
    println!("    --scale <FACTOR>    Monitor scaling factor (default: 1.0)");
    println!("    --version           Print version information");
    println!("    --help              Print this help message\n");
    println!("CONFIG:");
    println!("    Location: ~/.config/snaptile/config.ron");
    println!("    Gap margins and extra layouts are read from there;");
    println!("    built-in layouts are always available\n");
}
