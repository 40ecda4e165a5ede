use crate::config::Config;
use crate::error::IconError;
use crate::targets::{self, IconTarget};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::FilterType,
    io::Reader as ImageReader,
    DynamicImage, ImageEncoder, ImageResult,
};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Produce every configured icon from the logo at `config.source`.
///
/// Targets are handled strictly in order and the first failure aborts the
/// run. Icons written before that failure are left in place.
pub fn generate(config: &Config) -> Result<Vec<PathBuf>, IconError> {
    targets::validate(config.targets)?;

    let source = load_source(&config.source)?;
    println!("✓ Original size: {}x{}", source.width(), source.height());

    let source = normalize(source);

    let mut written = Vec::with_capacity(config.targets.len());
    for target in config.targets {
        let resized = resize_to(&source, target);
        let png = encode_png(&resized).map_err(|source| IconError::Encode {
            filename: target.filename.to_string(),
            source,
        })?;
        let path = write_atomic(&config.output_dir, target.filename, &png)?;
        println!("  ✓ Created {} ({})", target.filename, target.dimensions());
        written.push(path);
    }

    Ok(written)
}

pub fn load_source(path: &Path) -> Result<DynamicImage, IconError> {
    if !path.exists() {
        return Err(IconError::NotFound {
            path: path.to_path_buf(),
        });
    }

    println!("📷 Opening logo: {}", path.display());

    let decode_err = |source: image::ImageError| IconError::Decode {
        path: path.to_path_buf(),
        source,
    };

    // Sniff the format from the bytes; the extension is only a fallback.
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)
}

/// Make sure the image carries an alpha channel in RGBA layout.
///
/// 8 and 16 bit RGBA pass through untouched. Everything else, grey+alpha
/// included, becomes RGBA8 with missing alpha set to fully opaque.
pub fn normalize(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgba8(_) | DynamicImage::ImageRgba16(_) => image,
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    }
}

pub fn resize_to(source: &DynamicImage, target: &IconTarget) -> DynamicImage {
    source.resize_exact(target.width, target.height, FilterType::Lanczos3)
}

// Encode image data as PNG with the strongest compression
pub fn encode_png(image: &DynamicImage) -> ImageResult<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(
        image.as_bytes(),
        image.width(),
        image.height(),
        image.color(),
    )?;
    Ok(buf)
}

/// Write `bytes` to `dir/filename` through a temp file in the same directory,
/// so the destination is either the old file or the complete new one.
fn write_atomic(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, IconError> {
    let path = dir.join(filename);
    let write_err = |source: io::Error| IconError::Write {
        path: path.clone(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    match_permissions(tmp.as_file(), &path).map_err(write_err)?;
    tmp.persist(&path).map_err(|e| write_err(e.error))?;

    Ok(path)
}

// Temp files are created owner-only; icons are meant to be served.
#[cfg(unix)]
fn match_permissions(file: &fs::File, dest: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(dest) {
        Ok(existing) => existing.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn match_permissions(_file: &fs::File, _dest: &Path) -> io::Result<()> {
    Ok(())
}
