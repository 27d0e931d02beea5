//! Matrix-style views for native image libraries.
//!
//! Computer-vision libraries describe a buffer as `rows x cols` with a type
//! code combining element depth and channel count (`CV_8UC3`, `CV_32FC1`).
//! This module exposes an [`Image`] in that shape without depending on any
//! such library: callers hand the slice and [`MatType::code`] to their
//! binding of choice.
//!
//! - [`MatView`] / [`MatViewMut`] - borrow the image buffer, no copy
//! - [`Mat`] - owning deep copy
//! - [`Image::from_mat`] - copies a (possibly row-padded) matrix into an image
//!
//! Only layouts the receiving side understands are exported: `u8` images
//! must be Gray, Rgb or Rgba; `f32` images may additionally be Xyz, CieLuv
//! or Hsv. Anything else is rejected with [`Error::UnsupportedFormat`].
//!
//! ```rust
//! use rastr_core::{Image, PixelFormat};
//! use rastr_core::interop::{Depth, MatType};
//!
//! let img = Image::<u8>::new(640, 480, PixelFormat::Rgb);
//! let view = img.as_mat().unwrap();
//! assert_eq!((view.rows, view.cols), (480, 640));
//! assert_eq!(view.mat_type, MatType { depth: Depth::U8, channels: 3 });
//! assert_eq!(view.mat_type.code(), 16); // CV_8UC3
//! ```

use crate::{Element, Error, Image, PixelFormat, Result};

/// Element depth of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// 8-bit unsigned.
    U8,
    /// 32-bit float.
    F32,
}

impl Depth {
    /// Depth code as used by OpenCV (`CV_8U = 0`, `CV_32F = 5`).
    #[inline]
    pub const fn code(&self) -> i32 {
        match self {
            Depth::U8 => 0,
            Depth::F32 => 5,
        }
    }
}

/// Depth plus channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatType {
    /// Element depth.
    pub depth: Depth,
    /// Channels per element.
    pub channels: usize,
}

impl MatType {
    /// Combined type code: `depth + (channels - 1) * 8`.
    #[inline]
    pub const fn code(&self) -> i32 {
        self.depth.code() + ((self.channels as i32 - 1) << 3)
    }
}

/// Element types with a matrix depth.
pub trait InteropElement: Element {
    /// Matrix depth of this element type.
    const DEPTH: Depth;
}

impl InteropElement for u8 {
    const DEPTH: Depth = Depth::U8;
}

impl InteropElement for f32 {
    const DEPTH: Depth = Depth::F32;
}

/// Borrowed matrix view, rows optionally padded.
#[derive(Debug, Clone, Copy)]
pub struct MatView<'a, T> {
    /// Row count (image height).
    pub rows: usize,
    /// Column count (image width).
    pub cols: usize,
    /// Depth and channels.
    pub mat_type: MatType,
    /// Elements between row starts (`>= cols * channels`).
    pub step: usize,
    /// Backing elements.
    pub data: &'a [T],
}

impl<'a, T: InteropElement> MatView<'a, T> {
    /// Wraps foreign data.
    ///
    /// # Errors
    ///
    /// [`Error::SizeMismatch`] if `step` is shorter than a row or `data`
    /// cannot hold `rows` rows.
    pub fn new(rows: usize, cols: usize, channels: usize, step: usize, data: &'a [T]) -> Result<Self> {
        let row_len = cols * channels;
        let needed = if rows == 0 { 0 } else { (rows - 1) * step + row_len };
        if step < row_len || data.len() < needed {
            return Err(Error::size_mismatch(cols as u32, rows as u32, channels, data.len()));
        }
        Ok(Self {
            rows,
            cols,
            mat_type: MatType {
                depth: T::DEPTH,
                channels,
            },
            step,
            data,
        })
    }

    /// Elements of row `r`, padding excluded.
    #[inline]
    pub fn row(&self, r: usize) -> &'a [T] {
        let start = r * self.step;
        &self.data[start..start + self.cols * self.mat_type.channels]
    }

    /// Whether rows follow each other without padding.
    #[inline]
    pub fn is_continuous(&self) -> bool {
        self.step == self.cols * self.mat_type.channels
    }
}

/// Mutably borrowed matrix view of an image.
#[derive(Debug)]
pub struct MatViewMut<'a, T> {
    /// Row count (image height).
    pub rows: usize,
    /// Column count (image width).
    pub cols: usize,
    /// Depth and channels.
    pub mat_type: MatType,
    /// Backing elements, contiguous.
    pub data: &'a mut [T],
}

/// Owning matrix copy of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct Mat<T> {
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
    /// Depth and channels.
    pub mat_type: MatType,
    /// Contiguous elements.
    pub data: Vec<T>,
}

impl<T: InteropElement> Mat<T> {
    /// Borrows this matrix as a view.
    pub fn view(&self) -> MatView<'_, T> {
        MatView {
            rows: self.rows,
            cols: self.cols,
            mat_type: self.mat_type,
            step: self.cols * self.mat_type.channels,
            data: &self.data,
        }
    }
}

fn exportable<T: InteropElement>(format: PixelFormat) -> bool {
    match T::DEPTH {
        Depth::U8 => matches!(format, PixelFormat::Gray | PixelFormat::Rgb | PixelFormat::Rgba),
        Depth::F32 => matches!(
            format,
            PixelFormat::Gray
                | PixelFormat::Rgb
                | PixelFormat::Rgba
                | PixelFormat::Xyz
                | PixelFormat::CieLuv
                | PixelFormat::Hsv
        ),
    }
}

fn mat_type_of<T: InteropElement>(img: &Image<T>) -> Result<MatType> {
    let format = img.pixel_format();
    if !exportable::<T>(format) {
        tracing::warn!(%format, depth = ?T::DEPTH, "pixel format has no matrix equivalent");
        return Err(Error::unsupported_format(format!("{} {}", T::FORMAT, format)));
    }
    Ok(MatType {
        depth: T::DEPTH,
        channels: img.channels(),
    })
}

impl<T: InteropElement> Image<T> {
    /// Borrows the buffer as a matrix view.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedFormat`] for layouts the depth cannot express.
    pub fn as_mat(&self) -> Result<MatView<'_, T>> {
        let mat_type = mat_type_of(self)?;
        Ok(MatView {
            rows: self.height() as usize,
            cols: self.width() as usize,
            mat_type,
            step: self.width() as usize * self.channels(),
            data: self.data(),
        })
    }

    /// Mutably borrows the buffer as a matrix view.
    pub fn as_mat_mut(&mut self) -> Result<MatViewMut<'_, T>> {
        let mat_type = mat_type_of(self)?;
        Ok(MatViewMut {
            rows: self.height() as usize,
            cols: self.width() as usize,
            mat_type,
            data: self.data_mut(),
        })
    }

    /// Copies the buffer into an owning matrix.
    pub fn to_mat(&self) -> Result<Mat<T>> {
        let view = self.as_mat()?;
        Ok(Mat {
            rows: view.rows,
            cols: view.cols,
            mat_type: view.mat_type,
            data: view.data.to_vec(),
        })
    }

    /// Copies a matrix into a new image.
    ///
    /// The format is derived from the channel count (1 Gray, 3 Rgb,
    /// 4 Rgba, anything else None). Row padding is dropped.
    pub fn from_mat(mat: &MatView<'_, T>) -> Result<Self> {
        let channels = mat.mat_type.channels;
        let data = if mat.is_continuous() {
            mat.data[..mat.rows * mat.step].to_vec()
        } else {
            let mut data = Vec::with_capacity(mat.rows * mat.cols * channels);
            for r in 0..mat.rows {
                data.extend_from_slice(mat.row(r));
            }
            data
        };
        Image::from_interleaved(mat.cols as u32, mat.rows as u32, channels, data)
    }
}
