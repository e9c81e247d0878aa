/// Supported pixel formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// Y plane followed by an interleaved V/U plane, 4:2:0 sub sampling, 8 bits per sample
    NV21,

    /// Y, V and U planes, 4:2:0 sub sampling, 8 bits per sample
    YV12,

    /// Y, U and V planes, 4:2:0 sub sampling, 8 bits per sample
    I420,

    /// Single greyscale plane, 8 bits per pixel
    GREY,

    /// Single RGBA interleaved plane
    RGBA,

    /// Single RGB interleaved plane
    RGB,

    /// Single plane of packed 16 bit 5:6:5 RGB words
    RGB565,
}

impl PixelFormat {
    /// Calculate the required buffer size given the [`PixelFormat`] self and image dimensions (in pixel width, height).
    ///
    /// The size is the amount of primitives, which is `u16` for [`PixelFormat::RGB565`] and
    /// `u8` for every other format.
    pub fn buffer_size(self, width: usize, height: usize) -> usize {
        match self {
            PixelFormat::NV21 | PixelFormat::YV12 | PixelFormat::I420 => {
                (width * height * 12).div_ceil(8)
            }
            PixelFormat::GREY | PixelFormat::RGB565 => width * height,
            PixelFormat::RGBA => width * height * 4,
            PixelFormat::RGB => width * height * 3,
        }
    }

    /// All YUV formats carry one chroma pair per 2x2 luma block
    pub(crate) fn is_yuv(self) -> bool {
        matches!(
            self,
            PixelFormat::NV21 | PixelFormat::YV12 | PixelFormat::I420
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sizes() {
        assert_eq!(PixelFormat::NV21.buffer_size(640, 480), 640 * 480 * 3 / 2);
        assert_eq!(PixelFormat::YV12.buffer_size(640, 480), 640 * 480 * 3 / 2);
        assert_eq!(PixelFormat::I420.buffer_size(640, 480), 640 * 480 * 3 / 2);
        assert_eq!(PixelFormat::GREY.buffer_size(640, 480), 640 * 480);
        assert_eq!(PixelFormat::RGBA.buffer_size(640, 480), 640 * 480 * 4);
        assert_eq!(PixelFormat::RGB.buffer_size(640, 480), 640 * 480 * 3);
        assert_eq!(PixelFormat::RGB565.buffer_size(640, 480), 640 * 480);
    }
}
