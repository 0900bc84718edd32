//! Second-derivative edge response for the saliency map.

use crate::raster::RasterImage;

/// Absolute 3×3 Laplacian response of a single-channel image.
///
/// Kernel `[[0,1,0],[1,-4,1],[0,1,0]]` with reflect-101 border handling
/// (the border pixel's missing neighbor mirrors across it, excluding the
/// border sample itself).
pub(crate) fn laplacian_magnitude(gray: &RasterImage) -> Vec<f64> {
    debug_assert_eq!(gray.channels, 1);

    let w = gray.width as i64;
    let h = gray.height as i64;
    let stride = w as usize;
    let mut response = Vec::with_capacity(gray.pixel_count());

    for y in 0..h {
        let up = reflect_101(y - 1, h) * stride;
        let down = reflect_101(y + 1, h) * stride;
        let row = y as usize * stride;
        for x in 0..w {
            let left = reflect_101(x - 1, w);
            let right = reflect_101(x + 1, w);
            let center = gray.data[row + x as usize] as f64;
            let sum = gray.data[up + x as usize] as f64
                + gray.data[down + x as usize] as f64
                + gray.data[row + left] as f64
                + gray.data[row + right] as f64;
            response.push((sum - 4.0 * center).abs());
        }
    }
    response
}

/// Mirror an out-of-range index back into [0, n) without repeating the
/// border sample. Degenerates to 0 for single-sample axes.
#[inline]
fn reflect_101(i: i64, n: i64) -> usize {
    if n == 1 {
        return 0;
    }
    if i < 0 {
        (-i) as usize
    } else if i >= n {
        (2 * n - 2 - i) as usize
    } else {
        i as usize
    }
}
