//! Per-pixel conversion kernels.
//!
//! Every function in this module is pure and stateless and touches exactly
//! one pixel, so callers may apply them to the pixels of a frame in any
//! order, or in parallel. The whole-frame loops live in the `convert_*`
//! functions of the crate root.

/// Greyscale value of a YUV pixel, which is its luma sample masked to 8 bits.
#[inline]
pub fn luma_to_grey(y: u8) -> u8 {
    y
}

/// Convert one YUV sample triple to an RGBA pixel.
///
/// Channels are computed in `f32` and narrowed to `u8` by truncating towards
/// zero and keeping the low 8 bits. Out of range channels therefore wrap
/// instead of clamping: `(255, 128, 255)` yields a red channel of 177, not
/// 255. Alpha is always fully opaque.
#[inline]
pub fn yuv_to_rgba(y: u8, u: u8, v: u8) -> [u8; 4] {
    let y = f32::from(y);
    let u = f32::from(u) - 128.0;
    let v = f32::from(v) - 128.0;

    let r = y + 1.402 * v;
    let g = y - 0.344136 * u - 0.714136 * v;
    let b = y + 1.772 * u;

    [wrap_to_u8(r), wrap_to_u8(g), wrap_to_u8(b), 255]
}

#[inline]
fn wrap_to_u8(value: f32) -> u8 {
    value as i64 as u8
}

/// Pack one RGBA pixel into a 16 bit RGB565 word.
///
/// Bit layout is 5 bits red (15..=11), 6 bits green (10..=5) and 5 bits
/// blue (4..=0). The shifts and masks select the low order bits of each
/// channel. Alpha is dropped.
#[inline]
pub fn rgba_to_rgb565([r, g, b, _a]: [u8; 4]) -> u16 {
    let r = (u16::from(r) << 11) & 0xF800;
    let g = (u16::from(g) << 5) & 0x07E0;
    let b = u16::from(b) & 0x001F;

    r | g | b
}

/// Split a packed RGB565 word into two bytes, high byte first, for
/// serialization into byte oriented buffers.
#[inline]
pub fn rgb565_to_bytes(packed: u16) -> [u8; 2] {
    packed.to_be_bytes()
}

/// Drop the alpha channel of one RGBA pixel.
#[inline]
pub fn rgba_to_rgb([r, g, b, _a]: [u8; 4]) -> [u8; 3] {
    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_is_luma() {
        for y in 0..=255u8 {
            assert_eq!(luma_to_grey(y), y & 0xFF);
        }
    }

    #[test]
    fn neutral_chroma_is_achromatic() {
        for y in 0..=255u8 {
            assert_eq!(yuv_to_rgba(y, 128, 128), [y, y, y, 255]);
        }
    }

    #[test]
    fn standard_white_and_black_luma() {
        assert_eq!(yuv_to_rgba(235, 128, 128), [235, 235, 235, 255]);
        assert_eq!(yuv_to_rgba(16, 128, 128), [16, 16, 16, 255]);
    }

    #[test]
    fn overflowing_red_wraps() {
        // R = 255 + 1.402 * 127 = 433.05, truncated to 433, wrapped to 177
        let [r, _, _, a] = yuv_to_rgba(255, 128, 255);
        assert_eq!(r, 177);
        assert_eq!(a, 255);
    }

    #[test]
    fn negative_blue_wraps() {
        // B = 0 + 1.772 * -128 = -226.8, truncated to -226, wrapped to 30
        let [_, _, b, _] = yuv_to_rgba(0, 0, 128);
        assert_eq!(b, 30);
    }

    #[test]
    fn rgb565_field_extraction() {
        for c in [0u8, 1, 7, 8, 31, 32, 127, 128, 200, 255] {
            let packed = rgba_to_rgb565([c, 0, 0, 255]);
            assert_eq!((packed >> 11) & 0x1F, u16::from(c) & 0x1F);
            assert_eq!(packed & 0x07FF, 0);

            let packed = rgba_to_rgb565([0, c, 0, 255]);
            assert_eq!((packed >> 5) & 0x3F, u16::from(c) & 0x3F);
            assert_eq!(packed & 0xF81F, 0);

            let packed = rgba_to_rgb565([0, 0, c, 255]);
            assert_eq!(packed & 0x001F, u16::from(c) & 0x1F);
            assert_eq!(packed & 0xFFE0, 0);
        }
    }

    #[test]
    fn rgb565_ignores_alpha() {
        assert_eq!(
            rgba_to_rgb565([12, 34, 56, 0]),
            rgba_to_rgb565([12, 34, 56, 255])
        );
    }

    #[test]
    fn rgb565_byte_split_is_big_endian() {
        assert_eq!(rgb565_to_bytes(0xF81F), [0xF8, 0x1F]);
        assert_eq!(rgb565_to_bytes(0x07E0), [0x07, 0xE0]);
    }

    #[test]
    fn rgb_strips_alpha() {
        assert_eq!(rgba_to_rgb([1, 2, 3, 200]), [1, 2, 3]);
    }
}
