//! Decoded image input
//!
//! The engine never decodes files. Callers hand over an already decoded
//! raster through [`ImageSource`]; anything the `image` crate can hold in
//! memory works, and `None` models "no photo was taken yet".

use std::borrow::Cow;

use image::{DynamicImage, RgbaImage};

/// Anything that can expose its pixels as 8-bit RGBA
pub trait ImageSource {
    /// Borrow (or convert to) an RGBA raster
    ///
    /// Returns `None` when there is no image. A zero-sized raster is treated
    /// as missing by the pipeline as well.
    fn rgba(&self) -> Option<Cow<'_, RgbaImage>>;
}

impl ImageSource for RgbaImage {
    fn rgba(&self) -> Option<Cow<'_, RgbaImage>> {
        Some(Cow::Borrowed(self))
    }
}

impl ImageSource for DynamicImage {
    fn rgba(&self) -> Option<Cow<'_, RgbaImage>> {
        match self {
            DynamicImage::ImageRgba8(rgba) => Some(Cow::Borrowed(rgba)),
            other => Some(Cow::Owned(other.to_rgba8())),
        }
    }
}

impl<T: ImageSource> ImageSource for Option<T> {
    fn rgba(&self) -> Option<Cow<'_, RgbaImage>> {
        self.as_ref().and_then(ImageSource::rgba)
    }
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn rgba(&self) -> Option<Cow<'_, RgbaImage>> {
        (**self).rgba()
    }
}
