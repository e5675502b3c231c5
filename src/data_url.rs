//! `data:` URLs for tile pictures
//!
//! Uploaded pictures are embedded directly in the configuration as
//! `data:<mime>;base64,<payload>` so the whole board stays one document.

use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;

/// Largest picture accepted for a tile
pub const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024;

/// Error type for building or reading data URLs
#[derive(Debug, thiserror::Error)]
pub enum DataUrlError {
    #[error("Not a data URL")]
    NotDataUrl,

    #[error("Only base64 data URLs are supported")]
    NotBase64,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Unrecognized image format")]
    UnknownFormat,

    #[error("Image is too large ({size} bytes, limit {limit})")]
    TooLarge { size: usize, limit: usize },
}

/// Decoded `data:` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// MIME type for a sniffed image format
fn mime_for(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Embed raw image bytes as a data URL.
///
/// The format is sniffed from the content, not a file extension, so
/// arbitrary files are rejected.
pub fn encode_image(bytes: &[u8]) -> Result<String, DataUrlError> {
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(DataUrlError::TooLarge {
            size: bytes.len(),
            limit: MAX_IMAGE_BYTES,
        });
    }
    let format = image::guess_format(bytes).map_err(|_| DataUrlError::UnknownFormat)?;
    let payload = general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime_for(format), payload))
}

/// Split a data URL into its MIME type and decoded bytes
pub fn decode(url: &str) -> Result<DataUrl, DataUrlError> {
    let rest = url.strip_prefix("data:").ok_or(DataUrlError::NotDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::NotDataUrl)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(DataUrlError::NotBase64)?;
    let bytes = general_purpose::STANDARD.decode(payload.trim())?;
    Ok(DataUrl {
        mime: mime.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PNG signature followed by an IHDR chunk header; enough for sniffing
    const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 13, b'I', b'H', b'D', b'R',
    ];

    #[test]
    fn test_encode_sniffs_png() {
        let url = encode_image(PNG_HEADER).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        let decoded = decode(&url).unwrap();
        assert_eq!(decoded.mime, "image/png");
        assert_eq!(decoded.bytes, PNG_HEADER);
    }

    #[test]
    fn test_encode_rejects_non_images() {
        assert!(matches!(
            encode_image(b"just some text"),
            Err(DataUrlError::UnknownFormat)
        ));
    }

    #[test]
    fn test_encode_rejects_oversized_input() {
        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(matches!(
            encode_image(&big),
            Err(DataUrlError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_decode_requires_base64_data_url() {
        assert!(matches!(decode("http://x/y.png"), Err(DataUrlError::NotDataUrl)));
        assert!(matches!(
            decode("data:text/plain,hello"),
            Err(DataUrlError::NotBase64)
        ));
        assert!(matches!(
            decode("data:image/png;base64,@@@"),
            Err(DataUrlError::Base64(_))
        ));
    }
}
