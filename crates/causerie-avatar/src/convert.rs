use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::AvatarError;
use crate::format::AvatarFormat;
use crate::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_QUALITY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarOptions {
    pub format: AvatarFormat,
    /// 1..=100. Ignored by lossless formats.
    pub quality: u8,
    pub max_input_bytes: usize,
    /// Longest allowed side. `None` keeps the natural size.
    pub max_dimension: Option<u32>,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            format: AvatarFormat::default(),
            quality: DEFAULT_QUALITY,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_dimension: None,
        }
    }
}

impl AvatarOptions {
    pub fn validate(&self) -> Result<(), AvatarError> {
        if !(1..=100).contains(&self.quality) {
            return Err(AvatarError::InvalidQuality(self.quality));
        }
        if self.max_dimension == Some(0) {
            return Err(AvatarError::InvalidDimension);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub bytes: Vec<u8>,
    pub format: AvatarFormat,
    pub width: u32,
    pub height: u32,
}

impl Avatar {
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Re-encodes an uploaded avatar. No file means no avatar, not an error.
pub async fn convert_avatar(
    file: Option<Vec<u8>>,
    options: &AvatarOptions,
) -> Result<Option<Avatar>, AvatarError> {
    let Some(data) = file else {
        return Ok(None);
    };
    let options = options.clone();
    let avatar = tokio::task::spawn_blocking(move || encode_avatar(&data, &options))
        .await
        .map_err(|err| AvatarError::Worker {
            message: err.to_string(),
        })??;
    Ok(Some(avatar))
}

pub async fn convert_avatar_file(
    path: Option<&Path>,
    options: &AvatarOptions,
) -> Result<Option<Avatar>, AvatarError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let size = tokio::fs::metadata(path).await?.len();
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    if size > options.max_input_bytes {
        return Err(AvatarError::TooLarge {
            size,
            limit: options.max_input_bytes,
        });
    }
    let data = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "avatar file read");
    convert_avatar(Some(data), options).await
}

/// Decodes `data` (format sniffed from content) and encodes it as
/// `options.format`. Blocking; call from a blocking context.
pub fn encode_avatar(data: &[u8], options: &AvatarOptions) -> Result<Avatar, AvatarError> {
    options.validate()?;
    if data.len() > options.max_input_bytes {
        return Err(AvatarError::TooLarge {
            size: data.len(),
            limit: options.max_input_bytes,
        });
    }

    let _span = tracing::debug_span!(
        "encode_avatar",
        input_bytes = data.len(),
        format = options.format.as_str()
    )
    .entered();

    let mut image = image::load_from_memory(data).map_err(AvatarError::Decode)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "avatar decoded"
    );

    if let Some(max) = options.max_dimension {
        if image.width() > max || image.height() > max {
            image = image.resize(max, max, FilterType::Lanczos3);
            tracing::debug!(
                width = image.width(),
                height = image.height(),
                "avatar downscaled"
            );
        }
    }

    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();
    match options.format {
        AvatarFormat::Jpeg => DynamicImage::ImageRgb8(flatten_onto_white(&image))
            .write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, options.quality)),
        AvatarFormat::Png => image.write_with_encoder(PngEncoder::new(&mut bytes)),
        AvatarFormat::WebP => DynamicImage::ImageRgba8(image.to_rgba8())
            .write_with_encoder(WebPEncoder::new_lossless(&mut bytes)),
    }
    .map_err(AvatarError::Encode)?;

    tracing::debug!(output_bytes = bytes.len(), "avatar encoded");
    Ok(Avatar {
        bytes,
        format: options.format,
        width,
        height,
    })
}

// JPEG has no alpha channel.
fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u16::from(a);
        let blend = |channel: u8| {
            ((u16::from(channel) * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        out.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    out
}
