use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use palette::BitDepth;

mod common;
mod palette;
mod persist;
mod raster;

/// Writes the 1-bit, 2-bit and 8-bit reference palette images.
#[derive(Parser, Debug)]
struct Args {
    /// Directory receiving the images (must already exist)
    #[arg(long, default_value = "assets")]
    out_dir: PathBuf,

    /// Only write the given bit depths (repeatable)
    #[arg(long = "depth", value_enum)]
    depths: Vec<BitDepth>,

    /// Also write each palette's colors as JSON
    #[arg(long)]
    json: bool,
}

/// All depths when none were requested, otherwise the requested ones in
/// ascending order without repeats.
fn resolve_depths(requested: &[BitDepth]) -> Vec<BitDepth> {
    let mut depths = if requested.is_empty() {
        BitDepth::ALL.to_vec()
    } else {
        requested.to_vec()
    };
    depths.sort();
    depths.dedup();
    depths
}

fn run(args: &Args) -> Result<Vec<PathBuf>> {
    resolve_depths(&args.depths)
        .into_iter()
        .map(|depth| persist::export_palette(depth, &args.out_dir, args.json))
        .collect()
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> clap::error::Result<Args> {
        Args::try_parse_from(std::iter::once("retro_palettes").chain(args.iter().copied()))
    }

    #[test_log::test]
    fn no_arguments_selects_every_depth() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("assets"));
        assert!(!args.json);
        assert_eq!(
            resolve_depths(&args.depths),
            vec![BitDepth::One, BitDepth::Two, BitDepth::Eight]
        );
    }

    #[test_log::test]
    fn repeated_depths_are_sorted_and_deduplicated() {
        let args = parse(&["--depth", "8", "--depth", "1", "--depth", "8"]).unwrap();
        assert_eq!(resolve_depths(&args.depths), vec![BitDepth::One, BitDepth::Eight]);
    }

    #[test_log::test]
    fn unknown_depth_is_rejected() {
        assert!(parse(&["--depth", "4"]).is_err());
    }

    #[test_log::test]
    fn run_writes_selected_images_and_sidecars() {
        let dir = std::env::temp_dir().join(format!("retro_palettes-run-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let out_dir = dir.to_str().unwrap();

        let args = parse(&["--out-dir", out_dir, "--depth", "2", "--json"]).unwrap();
        let written = run(&args).unwrap();
        assert_eq!(written, vec![dir.join("2-bit-palette.png")]);
        assert!(dir.join("2-bit-palette.json").is_file());
        assert!(!dir.join("1-bit-palette.png").exists());
        assert!(!dir.join("8-bit-palette.png").exists());

        let args = parse(&["--out-dir", out_dir]).unwrap();
        let written = run(&args).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["1-bit-palette.png", "2-bit-palette.png", "8-bit-palette.png"]);
        assert!(!dir.join("1-bit-palette.json").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
