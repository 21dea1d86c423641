// THEORY:
// Resizing is not reimplemented here. The `image` crate already owns a
// rasterizer with a choice of interpolation filters, and this module is only a
// thin layer that decides the target size and forwards the call.
//
// The one piece of logic is the aspect-ratio mode: the source is scaled by the
// smaller of the two axis ratios so the result fits inside the requested box,
// and each side is rounded half up and kept at least one pixel wide.

use image::imageops::{self, FilterType};
use image::{GenericImageView, ImageBuffer, Pixel};

use crate::core_modules::math::round_half_up;
use crate::error::{Error, Result};

/// An owned image with the same pixel type as the one it was resized from.
pub type Resized<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Configuration for [`resize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeConfig {
    /// The interpolation filter handed to the rasterizer.
    pub filter: FilterType,
    /// Fit inside the requested box instead of stretching to it.
    pub keep_aspect_ratio: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            filter: FilterType::Triangle,
            keep_aspect_ratio: false,
        }
    }
}

/// The dimensions [`resize`] will produce for a `source_width x source_height`
/// image asked to become `width x height`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if any of the four dimensions is zero.
pub fn target_dimensions(
    source_width: u32,
    source_height: u32,
    width: u32,
    height: u32,
    keep_aspect_ratio: bool,
) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_argument(
            "size",
            format!("target size must be non-zero, got {width}x{height}"),
        ));
    }
    if source_width == 0 || source_height == 0 {
        return Err(Error::invalid_argument(
            "image",
            format!("cannot resize an empty {source_width}x{source_height} image"),
        ));
    }
    if !keep_aspect_ratio {
        return Ok((width, height));
    }

    let ratio_x = f64::from(width) / f64::from(source_width);
    let ratio_y = f64::from(height) / f64::from(source_height);
    let ratio = ratio_x.min(ratio_y);
    let scale = |side: u32| round_half_up(f64::from(side) * ratio).max(1) as u32;
    Ok((scale(source_width), scale(source_height)))
}

/// Resizes `image` to `width x height`, or to fit inside it when
/// `config.keep_aspect_ratio` is set.
///
/// # Errors
///
/// See [`target_dimensions`].
pub fn resize<I>(image: &I, width: u32, height: u32, config: &ResizeConfig) -> Result<Resized<I::Pixel>>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    let (source_width, source_height) = image.dimensions();
    let (new_width, new_height) = target_dimensions(
        source_width,
        source_height,
        width,
        height,
        config.keep_aspect_ratio,
    )?;
    Ok(imageops::resize(image, new_width, new_height, config.filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn exact_mode_stretches() {
        let img = RgbImage::new(4, 2);
        let out = resize(&img, 2, 2, &ResizeConfig::default()).expect("valid size");
        assert_eq!(out.dimensions(), (2, 2));
    }

    #[test]
    fn aspect_mode_fits_inside_box() {
        let keep = ResizeConfig {
            keep_aspect_ratio: true,
            ..ResizeConfig::default()
        };
        let img = RgbImage::new(400, 200);
        assert_eq!(resize(&img, 100, 100, &keep).expect("valid size").dimensions(), (100, 50));

        assert_eq!(target_dimensions(3, 7, 10, 10, true), Ok((4, 10)));
        assert_eq!(target_dimensions(1000, 1, 10, 10, true), Ok((10, 1)));
    }

    #[test]
    fn aspect_mode_never_exceeds_the_box() {
        for (sw, sh) in [(1, 1), (3, 7), (640, 480), (17, 1031), (999, 2)] {
            for (w, h) in [(1, 1), (5, 9), (100, 30), (1920, 1080)] {
                let (nw, nh) = target_dimensions(sw, sh, w, h, true).expect("non-zero");
                assert!(nw >= 1 && nh >= 1);
                assert!(nw <= w && nh <= h, "{sw}x{sh} into {w}x{h} gave {nw}x{nh}");
            }
        }
    }

    #[test]
    fn nearest_filter_keeps_solid_colors() {
        let img = RgbImage::from_pixel(8, 8, image::Rgb([12, 34, 56]));
        let config = ResizeConfig {
            filter: FilterType::Nearest,
            keep_aspect_ratio: false,
        };
        let out = resize(&img, 3, 5, &config).expect("valid size");
        assert!(out.pixels().all(|p| *p == image::Rgb([12, 34, 56])));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let img = RgbImage::new(4, 4);
        assert!(matches!(
            resize(&img, 0, 4, &ResizeConfig::default()),
            Err(Error::InvalidArgument { name: "size", .. })
        ));
        let empty = RgbImage::new(0, 3);
        assert!(matches!(
            resize(&empty, 2, 2, &ResizeConfig::default()),
            Err(Error::InvalidArgument { name: "image", .. })
        ));
    }
}
