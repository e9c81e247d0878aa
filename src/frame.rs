use crate::{ConvertError, PixelFormat};

/// Read-only YUV source frame.
///
/// Wraps a packed buffer in one of the YUV [`PixelFormat`]s and resolves its
/// plane layout and 4:2:0 chroma sub sampling, so the per-pixel kernels only
/// ever see plain samples and never do sub sampling arithmetic themselves.
#[derive(Debug, Clone, Copy)]
pub struct YuvFrame<'a> {
    format: PixelFormat,
    buf: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> YuvFrame<'a> {
    /// Wrap a packed YUV buffer.
    ///
    /// Dimensions must be non-zero and even since all supported layouts sub
    /// sample chroma in 2x2 blocks.
    ///
    /// # Panics
    ///
    /// If `format` is not one of the YUV pixel formats
    pub fn new(
        format: PixelFormat,
        buf: &'a [u8],
        width: usize,
        height: usize,
    ) -> Result<Self, ConvertError> {
        assert!(format.is_yuv(), "YuvFrame requires a YUV pixel format");

        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(ConvertError::InvalidDimensions);
        }

        let expected = format.buffer_size(width, height);
        if buf.len() < expected {
            return Err(ConvertError::BufferTooSmall {
                expected,
                got: buf.len(),
            });
        }

        Ok(Self {
            format,
            buf,
            width,
            height,
        })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Luma sample at the given pixel coordinate
    #[inline]
    pub fn luma(&self, x: usize, y: usize) -> u8 {
        self.buf[y * self.width + x]
    }

    /// Chroma samples `(u, v)` at the given pixel coordinate.
    ///
    /// Every supported layout stores one chroma pair per 2x2 luma block, so
    /// the four pixels of a block share the returned pair.
    #[inline]
    pub fn chroma(&self, x: usize, y: usize) -> (u8, u8) {
        let luma_size = self.width * self.height;
        let chroma_size = luma_size / 4;
        let offset = (y / 2) * (self.width / 2) + (x / 2);

        match self.format {
            PixelFormat::NV21 => {
                // Interleaved plane, V before U
                let vu = luma_size + offset * 2;
                (self.buf[vu + 1], self.buf[vu])
            }
            PixelFormat::YV12 => {
                let v = self.buf[luma_size + offset];
                let u = self.buf[luma_size + chroma_size + offset];
                (u, v)
            }
            PixelFormat::I420 => {
                let u = self.buf[luma_size + offset];
                let v = self.buf[luma_size + chroma_size + offset];
                (u, v)
            }
            _ => unreachable!("checked in YuvFrame::new"),
        }
    }
}
