// THEORY:
// The `pixel_buffer` module is the bridge between an image and bulk color
// processing. It reads every pixel of a source once and hands back plain data
// that no longer has anything to do with the source.
//
// Key architectural principles:
// 1.  **Read-only source**: anything that can report a width, a height and the
//     color at `(x, y)` is a `PixelSource`. Every `image::GenericImageView` with
//     8-bit subpixels already is one, so `RgbImage`, `RgbaImage`, `GrayImage`,
//     `DynamicImage` and sub-image views work without conversion.
// 2.  **Two layouts, one mapping**: `extract_grid` is column-major
//     (`grid[x][y]`), `extract_flat` is row-major (`flat[y * width + x]`). They
//     are built by separate loops but always agree on which physical pixel
//     ends up where.
// 3.  **Copies, not views**: `PixelBuffer` owns its colors. Mutating the source
//     afterwards does not affect it, and it needs no cleanup.

use image::{GenericImageView, Pixel};

use crate::core_modules::color::Color;
use crate::error::{Error, Result};

/// A read-only, pixel-addressable image.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// The color at column `x`, row `y`. Callers keep the coordinates in bounds.
    fn pixel(&self, x: u32, y: u32) -> Color;
}

impl<I> PixelSource for I
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from(self.get_pixel(x, y).to_rgb())
    }
}

fn check_coordinate(value: u32, bound: u32) -> Result<()> {
    if value < bound {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange {
            index: value as usize,
            len: bound as usize,
        })
    }
}

/// Bounds-checked read of a single pixel.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] if `x >= width` or `y >= height`.
pub fn pixel_at<S: PixelSource + ?Sized>(source: &S, x: u32, y: u32) -> Result<Color> {
    check_coordinate(x, source.width())?;
    check_coordinate(y, source.height())?;
    Ok(source.pixel(x, y))
}

/// Every pixel of `source` as `grid[x][y]`: the outer index is the column.
pub fn extract_grid<S: PixelSource + ?Sized>(source: &S) -> Vec<Vec<Color>> {
    let (width, height) = (source.width(), source.height());
    let mut grid = Vec::with_capacity(width as usize);
    for x in 0..width {
        let mut column = Vec::with_capacity(height as usize);
        for y in 0..height {
            column.push(source.pixel(x, y));
        }
        grid.push(column);
    }
    grid
}

/// Every pixel of `source` in row-major order, top row first, left to right.
pub fn extract_flat<S: PixelSource + ?Sized>(source: &S) -> Vec<Color> {
    let (width, height) = (source.width(), source.height());
    let mut flat = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            flat.push(source.pixel(x, y));
        }
    }
    flat
}

/// An owned, row-major snapshot of an image's colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Copies every pixel out of `source`.
    pub fn from_image<S: PixelSource + ?Sized>(source: &S) -> Self {
        Self {
            width: source.width(),
            height: source.height(),
            pixels: extract_flat(source),
        }
    }

    /// Wraps row-major colors.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_argument(
                "pixels",
                format!(
                    "expected {expected} colors for {width}x{height}, got {}",
                    pixels.len()
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The colors in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] outside `[0, width) x [0, height)`.
    pub fn get(&self, x: u32, y: u32) -> Result<Color> {
        check_coordinate(x, self.width)?;
        check_coordinate(y, self.height)?;
        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// One slice per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // width 0 means no pixels, so the max(1) never yields a chunk
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// The same colors laid out as `grid[x][y]`.
    pub fn to_grid(&self) -> Vec<Vec<Color>> {
        let width = self.width as usize;
        (0..width)
            .map(|x| self.pixels.iter().skip(x).step_by(width).copied().collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage, RgbaImage};

    /// Every pixel gets a distinct color derived from its coordinates.
    fn coordinate_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| image::Rgb([x as u8, y as u8, (x * 10 + y) as u8]))
    }

    #[test]
    fn grid_and_flat_agree_on_two_by_two() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([0, 255, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        img.put_pixel(1, 1, image::Rgb([9, 9, 9]));

        let grid = extract_grid(&img);
        let flat = extract_flat(&img);

        assert_eq!(flat, vec![
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
            Color::new(9, 9, 9),
        ]);
        for x in 0..2 {
            for y in 0..2 {
                assert_eq!(flat[y * 2 + x], grid[x][y]);
            }
        }
    }

    #[test]
    fn non_square_layouts_are_not_transposed() {
        let img = coordinate_image(3, 2);
        let grid = extract_grid(&img);
        let flat = extract_flat(&img);

        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|column| column.len() == 2));
        assert_eq!(flat.len(), 6);

        for x in 0..3u32 {
            for y in 0..2u32 {
                let expected = Color::new(x as u8, y as u8, (x * 10 + y) as u8);
                assert_eq!(grid[x as usize][y as usize], expected);
                assert_eq!(flat[(y * 3 + x) as usize], expected);
            }
        }
    }

    #[test]
    fn rgba_and_dynamic_images_drop_alpha() {
        let rgba = RgbaImage::from_pixel(1, 1, image::Rgba([10, 20, 30, 0]));
        assert_eq!(extract_flat(&rgba), vec![Color::new(10, 20, 30)]);

        let dynamic = DynamicImage::ImageRgba8(rgba);
        assert_eq!(extract_grid(&dynamic), vec![vec![Color::new(10, 20, 30)]]);
    }

    #[test]
    fn pixel_at_is_bounds_checked() {
        let img = coordinate_image(3, 2);
        assert_eq!(pixel_at(&img, 2, 1), Ok(Color::new(2, 1, 21)));
        assert_eq!(pixel_at(&img, 3, 0), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(pixel_at(&img, 0, 2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn buffer_is_a_copy_of_the_source() {
        let mut img = coordinate_image(3, 2);
        let buffer = PixelBuffer::from_image(&img);
        img.put_pixel(0, 0, image::Rgb([200, 200, 200]));

        assert_eq!(buffer.get(0, 0), Ok(Color::new(0, 0, 0)));
        assert_eq!(buffer.get(1, 1), Ok(Color::new(1, 1, 11)));
        assert_eq!(buffer.get(3, 1), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(buffer.get(0, 5), Err(Error::IndexOutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn buffer_grid_and_rows_match_extractors() {
        let img = coordinate_image(4, 3);
        let buffer = PixelBuffer::from_image(&img);

        assert_eq!(buffer.to_grid(), extract_grid(&img));
        assert_eq!(buffer.pixels(), extract_flat(&img).as_slice());

        let rows: Vec<&[Color]> = buffer.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][1], Color::new(1, 2, 12));
    }

    #[test]
    fn from_pixels_checks_length() {
        let ok = PixelBuffer::from_pixels(2, 1, vec![Color::BLACK, Color::WHITE]).expect("valid buffer");
        assert_eq!(ok.get(1, 0), Ok(Color::WHITE));

        assert!(matches!(
            PixelBuffer::from_pixels(2, 2, vec![Color::BLACK]),
            Err(Error::InvalidArgument { name: "pixels", .. })
        ));
    }

    #[test]
    fn empty_image_yields_empty_views() {
        let img = RgbImage::new(0, 0);
        assert!(extract_grid(&img).is_empty());
        assert!(extract_flat(&img).is_empty());

        let buffer = PixelBuffer::from_image(&img);
        assert_eq!(buffer.rows().count(), 0);
        assert!(buffer.to_grid().is_empty());
    }
}
