//! Command-line frontend for the noise map generator: collects the map
//! parameters and a destination, runs the engine, reports elapsed time.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use noisemap_engine::{Generator, MapParams};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Characters that make a file name unusable on common filesystems.
const FORBIDDEN_NAME_CHARS: [char; 8] = ['\\', '/', ':', '*', '?', '<', '>', '|'];

const DEFAULT_NAME: &str = "my_image";

#[derive(Parser, Debug)]
#[command(name = "noisemap", about = "Generate a seeded fractal noise map as a PNG")]
struct Cli {
    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Octave count; higher values add finer detail
    #[arg(long)]
    octaves: Option<u32>,

    /// Seed for the permutation shuffle; omit for a non-reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// RON file holding map parameters; explicit flags override its values
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Directory the image is saved into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// File name stem for the saved image
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,

    /// Replace an existing file instead of appending a timestamp
    #[arg(long)]
    overwrite: bool,
}

impl Cli {
    /// Parameter file first, then flag overrides on top.
    fn resolve_params(&self) -> Result<MapParams> {
        let mut params = match &self.params {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                ron::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => MapParams::default(),
        };

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(octaves) = self.octaves {
            params.octaves = octaves;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }
        Ok(params)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if let Some(bad) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        bail!("invalid file name {name:?}: contains {bad:?}");
    }
    Ok(())
}

/// Resolves the final destination, stepping aside with a timestamp suffix
/// when the target already exists and overwriting wasn't requested.
fn output_target(out_dir: &Path, name: &str, overwrite: bool) -> Result<PathBuf> {
    if !out_dir.is_dir() {
        bail!("invalid output directory: {}", out_dir.display());
    }

    let stem = if name.is_empty() {
        warn!("no file name given, using {DEFAULT_NAME:?}");
        DEFAULT_NAME
    } else {
        name
    };

    let target = out_dir.join(format!("{stem}.png"));
    if target.exists() && !overwrite {
        let stamp = chrono::Local::now().format("-%b-%d-%Y-%H%M%S");
        return Ok(out_dir.join(format!("{stem}{stamp}.png")));
    }
    Ok(target)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    validate_name(&cli.name)?;
    let params = cli.resolve_params()?;

    let mut generator = Generator::new(params)?;
    let target = output_target(&cli.out_dir, &cli.name, cli.overwrite)?;
    generator.set_output_path(&target);

    let params = generator.params();
    info!(
        width = params.width,
        height = params.height,
        octaves = params.octaves,
        seed = ?params.seed,
        "generating noise map"
    );

    let generation = generator.generate();
    info!("generation done in {:.2}s", generation.elapsed.as_secs_f64());

    let saved = generator.save(&generation.raster)?;
    info!(
        path = %saved.display(),
        width = generation.raster.width(),
        height = generation.raster.height(),
        "image saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_with_path_separators_are_rejected() {
        assert!(validate_name("map/../escape").is_err());
        assert!(validate_name("what?").is_err());
        assert!(validate_name("treasure-map_01").is_ok());
    }

    #[test]
    fn empty_name_falls_back_to_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let target = output_target(dir.path(), "", false).unwrap();
        assert_eq!(target, dir.path().join("my_image.png"));
    }

    #[test]
    fn existing_file_gets_a_timestamp_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let first = output_target(dir.path(), "map", false).unwrap();
        fs::write(&first, b"x").unwrap();

        let second = output_target(dir.path(), "map", false).unwrap();
        assert_ne!(first, second);
        assert!(second
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("map-"));

        let overwritten = output_target(dir.path(), "map", true).unwrap();
        assert_eq!(first, overwritten);
    }

    #[test]
    fn flags_override_file_parameters() {
        let cli = Cli {
            width: Some(64),
            height: None,
            octaves: None,
            seed: Some(9),
            params: None,
            out_dir: PathBuf::from("."),
            name: DEFAULT_NAME.to_string(),
            overwrite: false,
        };
        let params = cli.resolve_params().unwrap();
        assert_eq!(params.width, 64);
        assert_eq!(params.height, 100);
        assert_eq!(params.seed, Some(9));
    }

    #[test]
    fn ron_parameters_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("params.ron");
        fs::write(&file, "(width: 32, height: 48, octaves: 4, seed: Some(7))").unwrap();

        let cli = Cli {
            width: None,
            height: None,
            octaves: None,
            seed: None,
            params: Some(file),
            out_dir: PathBuf::from("."),
            name: DEFAULT_NAME.to_string(),
            overwrite: false,
        };
        let params = cli.resolve_params().unwrap();
        assert_eq!((params.width, params.height), (32, 48));
        assert_eq!(params.octaves, 4);
        assert_eq!(params.seed, Some(7));
    }
}
