//! The raster container.
//!
//! [`Image<T>`] owns one contiguous buffer of `width * height * channels`
//! scalar elements. Pixels are row-major and channel-interleaved:
//!
//! ```text
//! index = x + y * width
//! data:  [c0 c1 c2 | c0 c1 c2 | c0 c1 c2 ...]   <- row 0
//!        [c0 c1 c2 | c0 c1 c2 | c0 c1 c2 ...]   <- row 1
//! ```
//!
//! Pixel `i` starts at element `i * channels`. The channel count comes from
//! the [`PixelFormat`] at construction; [`add_channels`](Image::add_channels)
//! can grow it past the canonical count, after which the format is `None`.
//!
//! # Usage
//!
//! ```rust
//! use rastr_core::{BorderMode, Image, PixelFormat};
//!
//! let mut img = Image::<u8>::filled(4, 3, &[10, 20, 30], PixelFormat::Rgb).unwrap();
//! img.pixel_at_mut(1, 2).copy_from_slice(&[255, 0, 0]);
//!
//! assert_eq!(img.pixel(img.index_of(1, 2)), &[255, 0, 0]);
//! assert_eq!(&*img.pixel_with_border(-5, 2, BorderMode::Clamp), &[10, 20, 30]);
//! assert_eq!(&*img.pixel_with_border(-5, 2, BorderMode::Zero), &[0, 0, 0]);
//! ```
//!
//! # Submodules
//!
//! - `region` - sub-images, padding, append, paste, channel surgery, casts
//! - `analysis` - abs, min/max and average per channel
//!
//! # Dependencies
//!
//! - [`crate::element::Element`] - Scalar type trait
//! - [`crate::border::BorderMode`] - Out-of-bounds sampling policy
//! - [`tracing`] - Diagnostics for silent fallbacks

mod analysis;
mod region;

use crate::{BorderMode, Element, Error, ImageDimension, PixelFormat, Result};
use std::borrow::Cow;

/// Owned raster image with `T` scalar elements.
///
/// # Invariants
///
/// - `data.len() == width * height * channels`
/// - `channels == format.channels()` whenever `format != PixelFormat::None`
///
/// The released (default) image is 0x0 with no channels.
///
/// # Example
///
/// ```rust
/// use rastr_core::{Image, PixelFormat};
///
/// let img = Image::<f32>::new(16, 8, PixelFormat::Rgba);
/// assert_eq!(img.data().len(), 16 * 8 * 4);
/// assert_eq!(img.channels(), 4);
/// ```
#[derive(Clone, PartialEq, Default)]
pub struct Image<T: Element> {
    data: Vec<T>,
    width: u32,
    height: u32,
    channels: usize,
    format: PixelFormat,
}

#[inline]
fn element_count(width: u32, height: u32, channels: usize) -> usize {
    width as usize * height as usize * channels
}

impl<T: Element> Image<T> {
    /// Creates a zero-valued image.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let channels = format.channels();
        Self {
            data: vec![T::zero(); element_count(width, height, channels)],
            width,
            height,
            channels,
            format,
        }
    }

    /// Creates an image where every pixel equals `value`.
    ///
    /// `value` holds one element per channel; extra entries are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelMismatch`] if `value` is shorter than the channel count.
    pub fn filled(width: u32, height: u32, value: &[T], format: PixelFormat) -> Result<Self> {
        let channels = format.channels();
        if value.len() < channels {
            return Err(Error::channel_mismatch(channels, value.len()));
        }
        let count = element_count(width, height, channels);
        let data = if channels == 1 {
            vec![value[0]; count]
        } else {
            let mut data = Vec::with_capacity(count);
            for _ in 0..width as usize * height as usize {
                data.extend_from_slice(&value[..channels]);
            }
            data
        };
        Ok(Self {
            data,
            width,
            height,
            channels,
            format,
        })
    }

    /// Adopts `data` as the pixel buffer.
    ///
    /// # Errors
    ///
    /// [`Error::SizeMismatch`] if `data.len() != width * height * format.channels()`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>, format: PixelFormat) -> Result<Self> {
        Self::from_interleaved(width, height, format.channels(), data).map(|mut img| {
            img.format = format;
            img
        })
    }

    /// Copies `data` into a new image. Same length rule as [`from_vec`](Self::from_vec).
    pub fn from_slice(width: u32, height: u32, data: &[T], format: PixelFormat) -> Result<Self> {
        let channels = format.channels();
        if data.len() != element_count(width, height, channels) {
            return Err(Error::size_mismatch(width, height, channels, data.len()));
        }
        Self::from_vec(width, height, data.to_vec(), format)
    }

    /// Builds an image from `height` row slices of `width * channels` elements each.
    ///
    /// # Errors
    ///
    /// [`Error::SizeMismatch`] if the row count or any row length is wrong.
    pub fn from_rows(width: u32, height: u32, rows: &[&[T]], format: PixelFormat) -> Result<Self> {
        let channels = format.channels();
        let row_len = width as usize * channels;
        let total: usize = rows.iter().map(|r| r.len()).sum();
        if rows.len() != height as usize || rows.iter().any(|r| r.len() != row_len) {
            return Err(Error::size_mismatch(width, height, channels, total));
        }
        Self::from_vec(width, height, rows.concat(), format)
    }

    /// Adopts an interleaved buffer with an explicit channel count.
    ///
    /// The format is derived with [`PixelFormat::from_channels`], so counts
    /// without a display layout (2, 5, ...) are tagged `None`.
    pub fn from_interleaved(width: u32, height: u32, channels: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != element_count(width, height, channels) {
            return Err(Error::size_mismatch(width, height, channels, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            format: PixelFormat::from_channels(channels),
        })
    }

    /// Builds an image from native-endian element bytes.
    ///
    /// When `bytes.len()` is not exactly `width * height * channels * T::BYTES`
    /// the zero-valued image of the requested size is returned.
    pub fn from_raw_bytes(width: u32, height: u32, format: PixelFormat, bytes: &[u8]) -> Self {
        let mut img = Self::new(width, height, format);
        let expected = img.data.len() * T::BYTES;
        if bytes.len() != expected {
            tracing::debug!(
                expected,
                actual = bytes.len(),
                "raw byte length mismatch for {}x{} {}, keeping zeroed image",
                width,
                height,
                format
            );
            return img;
        }
        for (dst, src) in img.data.iter_mut().zip(bytes.chunks_exact(T::BYTES)) {
            *dst = T::from_ne_bytes(src);
        }
        img
    }

    /// Moves the contents out, leaving `self` released (0x0, no channels).
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Drops the buffer and resets to the released state.
    #[inline]
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// Zeroed image of the same shape and format with another element type.
    pub fn create_empty<V: Element>(&self) -> Image<V> {
        Image {
            data: vec![V::zero(); self.data.len()],
            width: self.width,
            height: self.height,
            channels: self.channels,
            format: self.format,
        }
    }

    /// Deep copy; equivalent to `clone()`.
    #[inline]
    pub fn create_deep_copy(&self) -> Self {
        self.clone()
    }

    // ----- Accessors -----

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Elements per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Pixel format tag.
    #[inline]
    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Width and height.
    #[inline]
    pub fn dimension(&self) -> ImageDimension {
        ImageDimension::new(self.width, self.height)
    }

    /// `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole element buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The whole element buffer, mutable. Length cannot change.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the image and returns its buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Retags the image.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelMismatch`] unless `format` is `None` or its channel
    /// count equals the current one.
    pub fn set_pixel_format(&mut self, format: PixelFormat) -> Result<()> {
        if format != PixelFormat::None && format.channels() != self.channels {
            return Err(Error::channel_mismatch(self.channels, format.channels()));
        }
        self.format = format;
        Ok(())
    }

    // ----- Addressing -----

    /// Linear index of `(x, y)`. No bounds check.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// `(x, y)` of a linear index.
    #[inline]
    pub fn position_of(&self, index: usize) -> (u32, u32) {
        let w = (self.width as usize).max(1);
        ((index % w) as u32, (index / w) as u32)
    }

    /// Channels of the pixel at linear `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width * height`.
    #[inline]
    pub fn pixel(&self, index: usize) -> &[T] {
        let start = index * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Mutable channels of the pixel at linear `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width * height`.
    #[inline]
    pub fn pixel_mut(&mut self, index: usize) -> &mut [T] {
        let start = index * self.channels;
        &mut self.data[start..start + self.channels]
    }

    /// Pixel at `index`, or `None` past the end.
    #[inline]
    pub fn get_pixel(&self, index: usize) -> Option<&[T]> {
        let start = index.checked_mul(self.channels)?;
        self.data.get(start..start + self.channels)
    }

    /// Mutable pixel at `index`, or `None` past the end.
    #[inline]
    pub fn get_pixel_mut(&mut self, index: usize) -> Option<&mut [T]> {
        let start = index.checked_mul(self.channels)?;
        self.data.get_mut(start..start + self.channels)
    }

    /// Pixel at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be below [`pixel_count`](Self::pixel_count).
    #[inline]
    pub unsafe fn pixel_unchecked(&self, index: usize) -> &[T] {
        let start = index * self.channels;
        // SAFETY: caller guarantees index < pixel_count, so the range lies in data.
        unsafe { self.data.get_unchecked(start..start + self.channels) }
    }

    /// Pixel at `(x, y)`. Coordinates are not clamped.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls past the end of the buffer.
    #[inline]
    pub fn pixel_at(&self, x: u32, y: u32) -> &[T] {
        self.pixel(self.index_of(x, y))
    }

    /// Mutable pixel at `(x, y)`.
    #[inline]
    pub fn pixel_at_mut(&mut self, x: u32, y: u32) -> &mut [T] {
        let index = self.index_of(x, y);
        self.pixel_mut(index)
    }

    /// Elements of row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[T] {
        let len = self.width as usize * self.channels;
        let start = y as usize * len;
        &self.data[start..start + len]
    }

    /// Mutable elements of row `y`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        let len = self.width as usize * self.channels;
        let start = y as usize * len;
        &mut self.data[start..start + len]
    }

    /// Linear index of a possibly out-of-bounds coordinate under `mode`.
    ///
    /// `None` means the sample is the zero pixel.
    #[inline]
    pub fn border_index(&self, x: i32, y: i32, mode: BorderMode) -> Option<usize> {
        let (x, y) = mode.fold(x, y, self.width, self.height)?;
        Some(self.index_of(x, y))
    }

    /// Pixel at a possibly out-of-bounds coordinate under `mode`.
    ///
    /// Borrows from the image when the coordinate folds inside it; returns an
    /// owned zero pixel for [`BorderMode::Zero`] outside and for empty images.
    pub fn pixel_with_border(&self, x: i32, y: i32, mode: BorderMode) -> Cow<'_, [T]> {
        match self.border_index(x, y, mode) {
            Some(index) => Cow::Borrowed(self.pixel(index)),
            None => Cow::Owned(vec![T::zero(); self.channels]),
        }
    }

    /// Linear indices of the 8 neighbours of `(x, y)`, edge-clamped.
    ///
    /// Order is column-major from the left: NW, W, SW, N, S, NE, E, SE.
    /// `(x, y)` must lie inside a non-empty image.
    pub fn neighbors(&self, x: u32, y: u32) -> [usize; 8] {
        debug_assert!(x < self.width && y < self.height, "neighbors of out-of-bounds pixel");
        let xl = x.saturating_sub(1);
        let xr = (x + 1).min(self.width.saturating_sub(1));
        let yt = y.saturating_sub(1);
        let yb = (y + 1).min(self.height.saturating_sub(1));
        [
            self.index_of(xl, yt),
            self.index_of(xl, y),
            self.index_of(xl, yb),
            self.index_of(x, yt),
            self.index_of(x, yb),
            self.index_of(xr, yt),
            self.index_of(xr, y),
            self.index_of(xr, yb),
        ]
    }

    /// [`neighbors`](Self::neighbors) addressed by linear index.
    #[inline]
    pub fn neighbors_of_index(&self, index: usize) -> [usize; 8] {
        let (x, y) = self.position_of(index);
        self.neighbors(x, y)
    }

    /// The 8 neighbour pixels of `(x, y)` in [`neighbors`](Self::neighbors) order.
    pub fn neighbor_pixels(&self, x: u32, y: u32) -> [&[T]; 8] {
        self.neighbors(x, y).map(|i| self.pixel(i))
    }

    // ----- Values -----

    /// Sets one channel of the pixel at `index`. Out-of-range channels are ignored.
    #[inline]
    pub fn set_value(&mut self, value: T, channel: usize, index: usize) {
        if channel < self.channels {
            self.data[index * self.channels + channel] = value;
        }
    }

    /// Sets one channel of the pixel at `(x, y)`.
    #[inline]
    pub fn set_value_at(&mut self, value: T, channel: usize, x: u32, y: u32) {
        let index = self.index_of(x, y);
        self.set_value(value, channel, index);
    }

    /// Sets one channel from an `f64`, cast into the element range.
    ///
    /// For `u8` the value is truncated and clamped to [0, 255].
    #[inline]
    pub fn set_value_clamped(&mut self, value: f64, channel: usize, index: usize) {
        self.set_value(T::from_f64(value), channel, index);
    }

    /// Sets every element to `value`.
    #[inline]
    pub fn clear(&mut self, value: T) {
        self.data.fill(value);
    }

    // ----- Iteration -----

    /// Iterator over pixels in linear-index order.
    ///
    /// Yields `pixel_count()` slices; a zero-channel image yields empty ones.
    pub fn pixels(&self) -> impl Iterator<Item = &[T]> + '_ {
        let channels = self.channels;
        (0..self.pixel_count()).map(move |index| &self.data[index * channels..(index + 1) * channels])
    }

    /// Calls `f(pixel, index)` for every pixel, mutably, in index order.
    pub fn for_each_pixel<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut [T], usize),
    {
        let channels = self.channels;
        for index in 0..self.pixel_count() {
            f(&mut self.data[index * channels..(index + 1) * channels], index);
        }
    }

    /// Calls `f(pixel, index)` for every pixel in index order.
    pub fn for_each_pixel_ref<F>(&self, mut f: F)
    where
        F: FnMut(&[T], usize),
    {
        for (index, px) in self.pixels().enumerate() {
            f(px, index);
        }
    }

    /// Pairs each pixel with the pixel of `other` at the same index.
    ///
    /// Channel counts may differ; each side sees its own pixel slice.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the pixel counts differ.
    pub fn combine<V, F>(&mut self, other: &Image<V>, mut f: F) -> Result<()>
    where
        V: Element,
        F: FnMut(&mut [T], &[V], usize),
    {
        if self.pixel_count() != other.pixel_count() {
            return Err(Error::dimension_mismatch(
                (self.width, self.height),
                (other.width, other.height),
            ));
        }
        let channels = self.channels;
        let other_channels = other.channels;
        for index in 0..self.pixel_count() {
            let dst = &mut self.data[index * channels..(index + 1) * channels];
            let src = &other.data[index * other_channels..(index + 1) * other_channels];
            f(dst, src, index);
        }
        Ok(())
    }
}

impl<T: Element> std::fmt::Debug for Image<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("format", &self.format)
            .field("data", &T::FORMAT)
            .finish()
    }
}
