use serde::Serialize;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Number of leading bytes inspected when sniffing a file.
pub const HEADER_LEN: u64 = 32;

/// Image formats recognised from their leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Tiff,
    Bmp,
    Webp,
    Pbm,
    Pgm,
    Ppm,
    Rast,
    Xbm,
    Rgb,
    Exr,
}

impl ImageFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Tiff => "TIFF",
            Self::Bmp => "BMP",
            Self::Webp => "WebP",
            Self::Pbm => "PBM",
            Self::Pgm => "PGM",
            Self::Ppm => "PPM",
            Self::Rast => "Sun raster",
            Self::Xbm => "XBM",
            Self::Rgb => "SGI RGB",
            Self::Exr => "OpenEXR",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identify the image format of `header`, the first bytes of a file.
pub fn sniff(header: &[u8]) -> Option<ImageFormat> {
    let netpbm = |kinds: &[u8]| {
        header.len() >= 3
            && header[0] == b'P'
            && kinds.contains(&header[1])
            && b" \t\n\r".contains(&header[2])
    };

    if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageFormat::Jpeg)
    } else if header.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some(ImageFormat::Png)
    } else if header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a") {
        Some(ImageFormat::Gif)
    } else if header.starts_with(b"MM\x00\x2a") || header.starts_with(b"II\x2a\x00") {
        Some(ImageFormat::Tiff)
    } else if header.starts_with(b"BM") {
        Some(ImageFormat::Bmp)
    } else if header.len() >= 12 && header.starts_with(b"RIFF") && &header[8..12] == b"WEBP" {
        Some(ImageFormat::Webp)
    } else if netpbm(b"14") {
        Some(ImageFormat::Pbm)
    } else if netpbm(b"25") {
        Some(ImageFormat::Pgm)
    } else if netpbm(b"36") {
        Some(ImageFormat::Ppm)
    } else if header.starts_with(&[0x59, 0xA6, 0x6A, 0x95]) {
        Some(ImageFormat::Rast)
    } else if header.starts_with(b"#define ") {
        Some(ImageFormat::Xbm)
    } else if header.starts_with(&[0x01, 0xDA]) {
        Some(ImageFormat::Rgb)
    } else if header.starts_with(&[0x76, 0x2F, 0x31, 0x01]) {
        Some(ImageFormat::Exr)
    } else {
        None
    }
}

/// Read the header of the file at `path` back from disk and sniff it.
pub async fn sniff_file(path: &Path) -> std::io::Result<Option<ImageFormat>> {
    let file = File::open(path).await?;
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    file.take(HEADER_LEN).read_to_end(&mut header).await?;
    Ok(sniff(&header))
}
