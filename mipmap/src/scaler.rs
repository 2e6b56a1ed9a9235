use crate::{Error, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

/// Resampling filter used when scaling a source icon.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Triangle => write!(f, "triangle"),
            Self::CatmullRom => write!(f, "catmull-rom"),
            Self::Gaussian => write!(f, "gaussian"),
            Self::Lanczos3 => write!(f, "lanczos3"),
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(filter: &str) -> anyhow::Result<Self> {
        Ok(match filter {
            "nearest" => Self::Nearest,
            "triangle" => Self::Triangle,
            "catmull-rom" => Self::CatmullRom,
            "gaussian" => Self::Gaussian,
            "lanczos3" => Self::Lanczos3,
            _ => anyhow::bail!("unsupported filter {}", filter),
        })
    }
}

/// A decoded source icon that can be encoded at any square size.
pub struct Scaler {
    img: DynamicImage,
    filter: Filter,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingSource(path.to_path_buf()));
        }
        let img = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.decode())
            .map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        let (width, height) = img.dimensions();
        if width != height {
            tracing::warn!(
                "{} is {}x{}, icons will be stretched to square",
                path.display(),
                width,
                height
            );
        }
        Ok(Self::new(img))
    }

    pub fn new(img: DynamicImage) -> Self {
        Self {
            img,
            filter: Filter::default(),
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Drops color channels the source doesn't use so the encoded pngs are
    /// written with the smallest fitting color type.
    pub fn optimize(&mut self) {
        let mut is_grayscale = true;
        let mut is_opaque = true;
        for (_, _, pixel) in self.img.pixels() {
            if pixel[0] != pixel[1] || pixel[1] != pixel[2] {
                is_grayscale = false;
            }
            if pixel[3] != 255 {
                is_opaque = false;
            }
            if !is_grayscale && !is_opaque {
                break;
            }
        }
        match (is_grayscale, is_opaque) {
            (true, true) => self.img = DynamicImage::ImageLuma8(self.img.to_luma8()),
            (true, false) => self.img = DynamicImage::ImageLumaA8(self.img.to_luma_alpha8()),
            (false, true) => self.img = DynamicImage::ImageRgb8(self.img.to_rgb8()),
            (false, false) => {}
        }
    }

    pub fn resize(&self, size: u32) -> DynamicImage {
        self.img.resize_exact(size, size, self.filter.into())
    }

    /// Encodes a `size`x`size` png.
    pub fn encode(&self, size: u32) -> Result<Vec<u8>> {
        let mut bytes = Cursor::new(Vec::new());
        self.resize(size)
            .write_to(&mut bytes, ImageFormat::Png)
            .map_err(|source| Error::Encode { size, source })?;
        Ok(bytes.into_inner())
    }
}
