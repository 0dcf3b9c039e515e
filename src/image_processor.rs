use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Validation and re-encode settings for accepted photos
#[derive(Debug, Clone, Copy)]
pub struct ImageSpec {
    pub max_width: u32,
    pub min_dimension: u32,
    pub quality: u8,
}

/// Why an image was not saved
#[derive(Debug, Error)]
pub enum Rejection {
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("too small ({width}x{height})")]
    TooSmall { width: u32, height: u32 },
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Final dimensions of a saved photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedImage {
    pub width: u32,
    pub height: u32,
}

/// Decode, validate and persist one candidate photo.
///
/// Images below the minimum dimension are rejected (icons and placeholders
/// masquerading as photos). Images wider than the maximum are downscaled
/// proportionally with Lanczos resampling. Accepted images are re-encoded
/// as JPEG at the configured quality. Nothing is written on rejection.
pub async fn save_if_valid(
    bytes: &[u8],
    dest: &Path,
    spec: &ImageSpec,
) -> Result<SavedImage, Rejection> {
    let image = image::load_from_memory(bytes)?;

    let (width, height) = image.dimensions();
    if width < spec.min_dimension || height < spec.min_dimension {
        return Err(Rejection::TooSmall { width, height });
    }

    let image = if width > spec.max_width {
        // Height bound is unconstrained; the width cap drives the ratio
        image.resize(spec.max_width, u32::MAX, FilterType::Lanczos3)
    } else {
        image
    };

    // JPEG has no alpha channel
    let rgb = image.to_rgb8();

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, spec.quality);
    encoder.encode_image(&rgb)?;
    fs::write(dest, &buf).await?;

    Ok(SavedImage {
        width: rgb.width(),
        height: rgb.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;
    use std::path::PathBuf;

    fn spec() -> ImageSpec {
        ImageSpec {
            max_width: 500,
            min_dimension: 100,
            quality: 80,
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([120, 80, 40]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn temp_dest(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("rosterpix-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let dest = dir.join(name);
        let _ = std::fs::remove_file(&dest);
        dest
    }

    #[tokio::test]
    async fn test_undersized_image_is_rejected() {
        let dest = temp_dest("undersized.jpg");
        let err = save_if_valid(&png_bytes(60, 60), &dest, &spec())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Rejection::TooSmall {
                width: 60,
                height: 60
            }
        ));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_wide_image_is_downscaled_to_max_width() {
        let dest = temp_dest("downscaled.jpg");
        let saved = save_if_valid(&png_bytes(1000, 800), &dest, &spec())
            .await
            .unwrap();

        assert_eq!(
            saved,
            SavedImage {
                width: 500,
                height: 400
            }
        );

        let written = std::fs::read(&dest).unwrap();
        assert_eq!(image::guess_format(&written).unwrap(), ImageFormat::Jpeg);
        let reopened = image::load_from_memory(&written).unwrap();
        assert_eq!(reopened.dimensions(), (500, 400));
    }

    #[tokio::test]
    async fn test_small_enough_image_keeps_dimensions() {
        let dest = temp_dest("asis.jpg");
        let saved = save_if_valid(&png_bytes(300, 200), &dest, &spec())
            .await
            .unwrap();

        assert_eq!(
            saved,
            SavedImage {
                width: 300,
                height: 200
            }
        );
    }

    #[tokio::test]
    async fn test_undecodable_bytes_are_rejected() {
        let dest = temp_dest("garbage.jpg");
        let err = save_if_valid(b"definitely not an image", &dest, &spec())
            .await
            .unwrap_err();

        assert!(matches!(err, Rejection::Decode(_)));
        assert!(!dest.exists());
    }
}
