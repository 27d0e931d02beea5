//! Region algebra: extraction, padding, composition and channel surgery.

use super::Image;
use crate::{Element, Error, ImageDimension, PixelFormat, Result};

/// Overlap of a `src_w x src_h` paste at `(x, y)` into a `dst_w x dst_h` target.
///
/// Returns `(src_x, src_y, dst_x, dst_y, w, h)`, or `None` when nothing overlaps.
fn paste_window(
    x: i64,
    y: i64,
    (src_w, src_h): (u32, u32),
    (dst_w, dst_h): (u32, u32),
) -> Option<(u32, u32, u32, u32, u32, u32)> {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + src_w as i64).min(dst_w as i64);
    let y1 = (y + src_h as i64).min(dst_h as i64);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((
        (x0 - x) as u32,
        (y0 - y) as u32,
        x0 as u32,
        y0 as u32,
        (x1 - x0) as u32,
        (y1 - y0) as u32,
    ))
}

impl<T: Element> Image<T> {
    /// Copies a `size.w x size.h` window starting at `(x, y)`.
    ///
    /// Negative origins are clamped to 0. Output pixels that would come from
    /// outside the source stay zero, so a window fully outside the image is
    /// all zeros. The result keeps the source format and channel count.
    ///
    /// ```rust
    /// use rastr_core::{Image, ImageDimension, PixelFormat};
    ///
    /// let img = Image::<u8>::from_vec(3, 2, vec![0, 1, 2, 3, 4, 5], PixelFormat::Gray).unwrap();
    /// let sub = img.sub_image(1, 0, ImageDimension::new(3, 2));
    /// assert_eq!(sub.data(), &[1, 2, 0, 4, 5, 0]);
    /// ```
    pub fn sub_image(&self, x: i32, y: i32, size: ImageDimension) -> Self {
        let mut out = Self {
            data: vec![T::zero(); size.pixel_count() * self.channels],
            width: size.w,
            height: size.h,
            channels: self.channels,
            format: self.format,
        };
        let xc = x.max(0) as u32;
        let yc = y.max(0) as u32;
        if xc >= self.width || yc >= self.height {
            return out;
        }
        let copy_w = size.w.min(self.width - xc) as usize * self.channels;
        let copy_h = size.h.min(self.height - yc);
        let src_off = xc as usize * self.channels;
        for j in 0..copy_h {
            let src = &self.row(yc + j)[src_off..src_off + copy_w];
            out.row_mut(j)[..copy_w].copy_from_slice(src);
        }
        out
    }

    /// Returns a copy padded by `border_w` columns and `border_h` rows on each side.
    ///
    /// The border is zero.
    pub fn with_border(&self, border_w: u32, border_h: u32) -> Self {
        let mut out = Self {
            data: Vec::new(),
            width: self.width + 2 * border_w,
            height: self.height + 2 * border_h,
            channels: self.channels,
            format: self.format,
        };
        out.data = vec![T::zero(); out.pixel_count() * self.channels];
        out.set_sub_image(border_w as i32, border_h as i32, self);
        out
    }

    /// Concatenates `other` to the right of this image.
    ///
    /// The result is `w1 + w2` wide and `max(h1, h2)` high; rows missing
    /// from the shorter side are zero.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelMismatch`] if channel counts differ. `self` is left
    /// unchanged and the mismatch is logged.
    pub fn append_right(&mut self, other: &Image<T>) -> Result<()> {
        if self.channels != other.channels {
            tracing::error!(
                left = self.channels,
                right = other.channels,
                "cannot append images with different channel counts"
            );
            return Err(Error::channel_mismatch(self.channels, other.channels));
        }
        let width = self.width + other.width;
        let height = self.height.max(other.height);
        let mut out = Self {
            data: vec![T::zero(); width as usize * height as usize * self.channels],
            width,
            height,
            channels: self.channels,
            format: self.format,
        };
        out.set_sub_image(0, 0, self);
        out.set_sub_image(self.width as i32, 0, other);
        *self = out;
        Ok(())
    }

    /// Pastes `other` with its top-left corner at `(x, y)`.
    ///
    /// The pasted region is clipped to this image; negative offsets are
    /// allowed. With equal channel counts rows are copied whole; otherwise
    /// the leading `min(channels)` channels of each pixel are copied.
    pub fn set_sub_image<V: Element>(&mut self, x: i32, y: i32, other: &Image<V>)
    where
        T: From<V>,
    {
        self.paste(x, y, other, T::from);
    }

    /// [`set_sub_image`](Self::set_sub_image) across element types with the
    /// numeric cast rule of [`Element::cast`].
    pub fn set_sub_image_cast<V: Element>(&mut self, x: i32, y: i32, other: &Image<V>) {
        self.paste(x, y, other, |v: V| v.cast());
    }

    fn paste<V: Element>(&mut self, x: i32, y: i32, other: &Image<V>, conv: impl Fn(V) -> T) {
        let Some((sx, sy, dx, dy, w, h)) = paste_window(
            x as i64,
            y as i64,
            (other.width, other.height),
            (self.width, self.height),
        ) else {
            return;
        };
        let (dc, sc) = (self.channels, other.channels);
        let n = dc.min(sc);
        for j in 0..h {
            let src_row = other.row(sy + j);
            let dst_row = self.row_mut(dy + j);
            let src = &src_row[sx as usize * sc..(sx + w) as usize * sc];
            let dst = &mut dst_row[dx as usize * dc..(dx + w) as usize * dc];
            if dc == sc {
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d = conv(s);
                }
            } else {
                for (dp, sp) in dst.chunks_exact_mut(dc).zip(src.chunks_exact(sc)) {
                    for c in 0..n {
                        dp[c] = conv(sp[c]);
                    }
                }
            }
        }
    }

    /// Grows every pixel by `count` zero channels.
    ///
    /// Existing values keep their channel positions. The format becomes
    /// [`PixelFormat::None`] since the count no longer matches a layout.
    pub fn add_channels(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let old = self.channels;
        let new = old + count;
        let mut data = vec![T::zero(); self.pixel_count() * new];
        if old > 0 {
            for (dst, src) in data.chunks_exact_mut(new).zip(self.data.chunks_exact(old)) {
                dst[..old].copy_from_slice(src);
            }
        }
        self.data = data;
        self.channels = new;
        self.format = PixelFormat::None;
    }

    /// Swaps two channels in every pixel. No-op if either is out of range.
    pub fn swap_channels(&mut self, c0: usize, c1: usize) {
        if c0 >= self.channels || c1 >= self.channels || c0 == c1 {
            return;
        }
        for px in self.data.chunks_exact_mut(self.channels) {
            px.swap(c0, c1);
        }
    }

    /// Extracts one channel as a gray image, or `None` if out of range.
    pub fn create_from_channel(&self, channel: usize) -> Option<Image<T>> {
        if channel >= self.channels {
            return None;
        }
        let data = self
            .data
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .copied()
            .collect();
        Some(Image {
            data,
            width: self.width,
            height: self.height,
            channels: 1,
            format: PixelFormat::Gray,
        })
    }

    /// Element-wise cast to another element type, without rescaling.
    ///
    /// `f32 -> u8` truncates and clamps to [0, 255]; `u8 -> f32` keeps the
    /// numeric value (255 stays 255.0).
    pub fn create_as<V: Element>(&self) -> Image<V> {
        Image {
            data: self.data.iter().map(|&v| v.cast()).collect(),
            width: self.width,
            height: self.height,
            channels: self.channels,
            format: self.format,
        }
    }
}
