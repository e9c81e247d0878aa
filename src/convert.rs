use crate::{ConvertError, PixelFormat, YuvFrame, kernel};

/// Convert a YUV frame into a single greyscale plane
pub fn convert_to_grey(src: &YuvFrame<'_>, dst: &mut [u8]) -> Result<(), ConvertError> {
    let expected = PixelFormat::GREY.buffer_size(src.width(), src.height());
    let dst = checked_slice_mut(dst, expected)?;

    grey_rows(src, dst, 0);

    Ok(())
}

/// Convert a YUV frame into an interleaved RGBA buffer
pub fn convert_to_rgba(src: &YuvFrame<'_>, dst: &mut [u8]) -> Result<(), ConvertError> {
    let expected = PixelFormat::RGBA.buffer_size(src.width(), src.height());
    let dst = checked_slice_mut(dst, expected)?;

    rgba_rows(src, dst, 0);

    Ok(())
}

/// Pack an interleaved RGBA buffer into RGB565 words
pub fn convert_rgba_to_rgb565(
    src: &[u8],
    dst: &mut [u16],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    let src = checked_slice(src, PixelFormat::RGBA.buffer_size(width, height))?;
    let dst = checked_slice_mut(dst, PixelFormat::RGB565.buffer_size(width, height))?;

    rgb565_pixels(src, dst);

    Ok(())
}

/// Strip the alpha channel of an interleaved RGBA buffer
pub fn convert_rgba_to_rgb(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    let src = checked_slice(src, PixelFormat::RGBA.buffer_size(width, height))?;
    let dst = checked_slice_mut(dst, PixelFormat::RGB.buffer_size(width, height))?;

    rgb_pixels(src, dst);

    Ok(())
}

/// Fill `dst` with the greyscale values of the rows starting at `y0`.
///
/// `dst` must hold complete rows.
pub(crate) fn grey_rows(src: &YuvFrame<'_>, dst: &mut [u8], y0: usize) {
    let width = src.width();

    for (dy, row) in dst.chunks_exact_mut(width).enumerate() {
        let y = y0 + dy;

        for (x, out) in row.iter_mut().enumerate() {
            *out = kernel::luma_to_grey(src.luma(x, y));
        }
    }
}

/// Fill `dst` with the RGBA pixels of the rows starting at `y0`.
///
/// `dst` must hold complete rows.
pub(crate) fn rgba_rows(src: &YuvFrame<'_>, dst: &mut [u8], y0: usize) {
    let width = src.width();

    for (dy, row) in dst.chunks_exact_mut(width * 4).enumerate() {
        let y = y0 + dy;

        for (x, out) in row.chunks_exact_mut(4).enumerate() {
            let (u, v) = src.chroma(x, y);

            out.copy_from_slice(&kernel::yuv_to_rgba(src.luma(x, y), u, v));
        }
    }
}

pub(crate) fn rgb565_pixels(src: &[u8], dst: &mut [u16]) {
    for (px, out) in src.chunks_exact(4).zip(dst.iter_mut()) {
        *out = kernel::rgba_to_rgb565([px[0], px[1], px[2], px[3]]);
    }
}

pub(crate) fn rgb_pixels(src: &[u8], dst: &mut [u8]) {
    for (px, out) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        out.copy_from_slice(&kernel::rgba_to_rgb([px[0], px[1], px[2], px[3]]));
    }
}

pub(crate) fn checked_slice<T>(buf: &[T], expected: usize) -> Result<&[T], ConvertError> {
    if buf.len() < expected {
        return Err(ConvertError::BufferTooSmall {
            expected,
            got: buf.len(),
        });
    }

    Ok(&buf[..expected])
}

pub(crate) fn checked_slice_mut<T>(
    buf: &mut [T],
    expected: usize,
) -> Result<&mut [T], ConvertError> {
    if buf.len() < expected {
        return Err(ConvertError::BufferTooSmall {
            expected,
            got: buf.len(),
        });
    }

    Ok(&mut buf[..expected])
}
