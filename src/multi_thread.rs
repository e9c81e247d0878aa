use crate::{ConvertError, PixelFormat, YuvFrame, convert};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::{ParallelSlice, ParallelSliceMut};

/// Multi threaded version of [`convert_to_grey`](crate::convert_to_grey)
pub fn convert_to_grey_multi_thread(
    src: &YuvFrame<'_>,
    dst: &mut [u8],
) -> Result<(), ConvertError> {
    let threads = num_cpus::get();

    if threads == 1 {
        return convert::convert_to_grey(src, dst);
    }

    let expected = PixelFormat::GREY.buffer_size(src.width(), src.height());
    let dst = convert::checked_slice_mut(dst, expected)?;

    let rows = band_rows(src.height(), threads);

    dst.par_chunks_mut(rows * src.width())
        .enumerate()
        .for_each(|(band, dst)| convert::grey_rows(src, dst, band * rows));

    Ok(())
}

/// Multi threaded version of [`convert_to_rgba`](crate::convert_to_rgba)
pub fn convert_to_rgba_multi_thread(
    src: &YuvFrame<'_>,
    dst: &mut [u8],
) -> Result<(), ConvertError> {
    let threads = num_cpus::get();

    if threads == 1 {
        return convert::convert_to_rgba(src, dst);
    }

    let expected = PixelFormat::RGBA.buffer_size(src.width(), src.height());
    let dst = convert::checked_slice_mut(dst, expected)?;

    let rows = band_rows(src.height(), threads);

    dst.par_chunks_mut(rows * src.width() * 4)
        .enumerate()
        .for_each(|(band, dst)| convert::rgba_rows(src, dst, band * rows));

    Ok(())
}

/// Multi threaded version of [`convert_rgba_to_rgb565`](crate::convert_rgba_to_rgb565)
pub fn convert_rgba_to_rgb565_multi_thread(
    src: &[u8],
    dst: &mut [u16],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    let threads = num_cpus::get();

    if threads == 1 {
        return convert::convert_rgba_to_rgb565(src, dst, width, height);
    }

    let src = convert::checked_slice(src, PixelFormat::RGBA.buffer_size(width, height))?;
    let dst = convert::checked_slice_mut(dst, PixelFormat::RGB565.buffer_size(width, height))?;

    if dst.is_empty() {
        return Ok(());
    }

    let pixels = band_rows(height, threads) * width;

    src.par_chunks(pixels * 4)
        .zip(dst.par_chunks_mut(pixels))
        .for_each(|(src, dst)| convert::rgb565_pixels(src, dst));

    Ok(())
}

/// Multi threaded version of [`convert_rgba_to_rgb`](crate::convert_rgba_to_rgb)
pub fn convert_rgba_to_rgb_multi_thread(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    let threads = num_cpus::get();

    if threads == 1 {
        return convert::convert_rgba_to_rgb(src, dst, width, height);
    }

    let src = convert::checked_slice(src, PixelFormat::RGBA.buffer_size(width, height))?;
    let dst = convert::checked_slice_mut(dst, PixelFormat::RGB.buffer_size(width, height))?;

    if dst.is_empty() {
        return Ok(());
    }

    let pixels = band_rows(height, threads) * width;

    src.par_chunks(pixels * 4)
        .zip(dst.par_chunks_mut(pixels * 3))
        .for_each(|(src, dst)| convert::rgb_pixels(src, dst));

    Ok(())
}

/// Rows per band when splitting `height` rows over `threads` workers.
///
/// The last band may be shorter, the callers only require whole rows.
fn band_rows(height: usize, threads: usize) -> usize {
    height.div_ceil(threads).max(1)
}
