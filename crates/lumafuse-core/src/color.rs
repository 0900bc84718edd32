//! Pixel-level color conversions
//!
//! Provides the conversions the weight-map and recombination stages need:
//! Rec.601 luma, HSV decomposition, and a CIE L*a*b* (D65) round trip.
//! 8-bit sample values are mapped straight onto [0, 1] before conversion,
//! the same convention the rest of the pipeline uses.

// =============================================================================
// Rec.601 luma
// =============================================================================

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Rec.601 luma of an 8-bit RGB pixel, rounded to the nearest 8-bit value.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32 + 0.5) as u8
}

// =============================================================================
// RGB -> HSV
// =============================================================================

/// HSV color representation
/// - H (hue): 0.0-360.0 degrees
/// - S (saturation): 0.0-1.0
/// - V (value): 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Convert RGB to HSV.
///
/// Input: RGB values in range 0.0-1.0.
/// Saturation of a black pixel (max channel 0) is defined as 0.
#[inline]
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let r = r.clamp(0.0, 1.0);
    let g = g.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;

    if delta < 1e-6 {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if (max - r).abs() < 1e-6 {
        let mut h = (g - b) / delta;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < 1e-6 {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    Hsv { h: h % 360.0, s, v }
}

// =============================================================================
// RGB <-> LAB (D65 illuminant, sRGB primaries)
// =============================================================================

/// LAB color representation (CIE L*a*b*)
/// - L: 0.0-100.0 (lightness)
/// - a: approximately -128 to +128 (green-red axis)
/// - b: approximately -128 to +128 (blue-yellow axis)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// D65 standard illuminant reference white point
const D65_X: f32 = 0.95047;
const D65_Y: f32 = 1.00000;
const D65_Z: f32 = 1.08883;

/// sRGB to XYZ matrix (D65)
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ to sRGB matrix (D65)
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

const LAB_DELTA: f32 = 6.0 / 29.0;

/// Forward LAB companding function
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_DELTA * LAB_DELTA * LAB_DELTA {
        t.cbrt()
    } else {
        t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0
    }
}

/// Inverse LAB companding function
#[inline]
fn lab_f_inv(t: f32) -> f32 {
    if t > LAB_DELTA {
        t * t * t
    } else {
        3.0 * LAB_DELTA * LAB_DELTA * (t - 4.0 / 29.0)
    }
}

/// Convert RGB to CIE LAB (D65 illuminant).
///
/// Input: RGB values in range 0.0-1.0.
/// Output: LAB where L is 0-100, a and b are approximately -128 to +128.
#[inline]
pub fn rgb_to_lab(r: f32, g: f32, b: f32) -> Lab {
    let r = r.max(0.0);
    let g = g.max(0.0);
    let b = b.max(0.0);

    let x = RGB_TO_XYZ[0][0] * r + RGB_TO_XYZ[0][1] * g + RGB_TO_XYZ[0][2] * b;
    let y = RGB_TO_XYZ[1][0] * r + RGB_TO_XYZ[1][1] * g + RGB_TO_XYZ[1][2] * b;
    let z = RGB_TO_XYZ[2][0] * r + RGB_TO_XYZ[2][1] * g + RGB_TO_XYZ[2][2] * b;

    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIE LAB back to RGB (D65 illuminant).
///
/// Output values may fall outside 0.0-1.0 for out-of-gamut colors; callers
/// clip before quantizing to 8-bit.
#[inline]
pub fn lab_to_rgb(lab: Lab) -> (f32, f32, f32) {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let x = D65_X * lab_f_inv(fx);
    let y = D65_Y * lab_f_inv(fy);
    let z = D65_Z * lab_f_inv(fz);

    let r = XYZ_TO_RGB[0][0] * x + XYZ_TO_RGB[0][1] * y + XYZ_TO_RGB[0][2] * z;
    let g = XYZ_TO_RGB[1][0] * x + XYZ_TO_RGB[1][1] * y + XYZ_TO_RGB[1][2] * z;
    let b = XYZ_TO_RGB[2][0] * x + XYZ_TO_RGB[2][1] * y + XYZ_TO_RGB[2][2] * z;

    (r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_of_neutral_gray_is_identity() {
        for v in [0u8, 1, 50, 128, 254, 255] {
            assert_eq!(luma_u8(v, v, v), v);
        }
    }

    #[test]
    fn hsv_saturation_of_gray_is_zero() {
        for v in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(rgb_to_hsv(v, v, v).s, 0.0);
        }
    }

    #[test]
    fn hsv_saturation_of_pure_red_is_one() {
        let hsv = rgb_to_hsv(1.0, 0.0, 0.0);
        assert!((hsv.s - 1.0).abs() < 1e-6);
        assert!((hsv.v - 1.0).abs() < 1e-6);
        assert!(hsv.h.abs() < 1e-3);
    }

    #[test]
    fn lab_of_white_is_l100() {
        let lab = rgb_to_lab(1.0, 1.0, 1.0);
        assert!((lab.l - 100.0).abs() < 0.1, "L of white: {}", lab.l);
        assert!(lab.a.abs() < 0.1);
        assert!(lab.b.abs() < 0.1);
    }

    #[test]
    fn lab_roundtrip_preserves_rgb() {
        let cases = [
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (0.5, 0.25, 0.75),
            (0.9, 0.1, 0.1),
            (100.0 / 255.0, 150.0 / 255.0, 200.0 / 255.0),
        ];
        for (r, g, b) in cases {
            let (r2, g2, b2) = lab_to_rgb(rgb_to_lab(r, g, b));
            assert!((r - r2).abs() < 1e-3, "r {} -> {}", r, r2);
            assert!((g - g2).abs() < 1e-3, "g {} -> {}", g, g2);
            assert!((b - b2).abs() < 1e-3, "b {} -> {}", b, b2);
        }
    }
}
