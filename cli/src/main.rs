mod bmp;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use palrle::{Encoder, Padding};
use structopt::StructOpt;
use tempfile::NamedTempFile;

const OUTPUT_EXTENSION: &str = "cfg";

#[derive(Debug, StructOpt)]
#[structopt(name = "palrle", about = "Encodes the pixels of a bitmap into a palette RLE stream")]
struct Args {
    /// Bitmap to encode; the result is written next to it with a .cfg extension.
    #[structopt(parse(from_os_str))]
    paths: Vec<PathBuf>,
    /// Fail on pixel data that does not fill whole 64-pixel chunks instead of
    /// padding it with transparent pixels.
    #[structopt(long)]
    strict: bool,
}

fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Writes `data` to a temporary file next to `path` and renames it into
/// place, so `path` either holds the full result or is left untouched.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("cannot create a temporary file in {}", dir.display()))?;
    file.write_all(data)?;
    file.persist(path).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

/// Encodes `input` into its sibling `.cfg` file. Returns `None` when the
/// input does not exist.
fn convert(input: &Path, padding: Padding) -> Result<Option<PathBuf>> {
    let raw = match fs::read(input) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err).with_context(|| format!("cannot read {}", input.display())),
    };
    let pixels = bmp::pixel_data(&raw).with_context(|| format!("not a bitmap: {}", input.display()))?;
    let encoded = Encoder::new(pixels)
        .with_padding(padding)
        .encode_to_vec()
        .with_context(|| format!("could not encode {}", input.display()))?;

    let output = output_path(input);
    write_atomic(&output, &encoded)?;
    log::info!("{} -> {} ({} bytes)", input.display(), output.display(), encoded.len());
    Ok(Some(output))
}

fn not_found_message(input: &Path) -> String {
    format!("Could not find file \"{}\". Script terminated.", input.display())
}

/// Converts the single path in `paths`, reporting a missing input on `out`.
/// Any other number of paths is a no-op.
fn run(paths: &[PathBuf], padding: Padding, out: &mut impl Write) -> Result<Option<PathBuf>> {
    let [input] = paths else {
        log::debug!("expected exactly one path, got {}; nothing to do", paths.len());
        return Ok(None);
    };
    let output = convert(input, padding)?;
    if output.is_none() {
        writeln!(out, "{}", not_found_message(input))?;
    }
    Ok(output)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = <Args as StructOpt>::from_args();
    let padding = if args.strict { Padding::Reject } else { Padding::Sentinel };
    run(&args.paths, padding, &mut io::stdout().lock())?;
    Ok(())
}
