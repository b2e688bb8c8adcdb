use anyhow::{Context, Result};
use font_array_generator_config::Config;
use font_array_generator_engine::{GlyphFormat, convert_file};
use std::{env, path::Path, process};

fn glyph_format(config: Config) -> GlyphFormat {
    GlyphFormat {
        filled_marker: config.filled_marker,
        empty_marker: config.empty_marker,
        filled_glyph: config.filled_glyph,
        empty_glyph: config.empty_glyph,
        identifier_prefix: config.identifier_prefix,
    }
}

/// An explicitly named config file must exist; the default one is optional.
fn load_config(explicit: Option<&str>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file '{path}' not found")),
        None => {
            let config = Config::load()?;
            if config.is_some() {
                log::info!("Using config file {}", Config::config_path().display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn run(input: &Path, output: &Path, config_path: Option<&str>) -> Result<()> {
    let format = glyph_format(load_config(config_path)?);
    convert_file(input, output, &format)?;
    println!("Font file '{}' generated successfully", output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    // Arguments after the config file are ignored.
    if args.len() < 3 {
        let program_name = args
            .first()
            .cloned()
            .unwrap_or_else(|| "font-array-generator".to_string());
        eprintln!("Usage: {program_name} <input-file> <output-file> [config-file]");
        process::exit(1);
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);
    if let Err(e) = run(input, output, args.get(3).map(String::as_str)) {
        log::error!("{e:#}");
        process::exit(1);
    }
}
