//! Distance metrics for nearest-color matching.
//!
//! A metric scores the dissimilarity of two colors; lower is more similar.
//! Metrics run only on colors the resolver already classified as opaque
//! input, so the built-in implementations ignore the alpha channel.

use crate::color::Color;

/// Dissimilarity scoring between two colors.
///
/// Implementations must be deterministic and total: the same pair of
/// colors always produces the same finite score. Symmetry is not
/// required. Lower scores mean more similar colors.
pub trait DistanceMetric {
    /// Score the dissimilarity between `a` and `b`. Lower is closer.
    fn distance(&self, a: Color, b: Color) -> f64;
}

/// Squared Euclidean distance over the R, G, B channels.
///
/// The square root is omitted; it does not change which palette entry is
/// nearest. Alpha is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanRgb;

impl DistanceMetric for EuclideanRgb {
    #[inline]
    fn distance(&self, a: Color, b: Color) -> f64 {
        let dr = a.r as f64 - b.r as f64;
        let dg = a.g as f64 - b.g as f64;
        let db = a.b as f64 - b.b as f64;
        dr * dr + dg * dg + db * db
    }
}

/// CIE76 color difference (ΔE*76): Euclidean distance in CIE L*a*b*.
///
/// Each color is converted sRGB → linear RGB → XYZ (D65) → L*a*b*, then
/// scored by straight Euclidean distance in Lab space. Perceptually far
/// better behaved than RGB distance on photographic content, at the cost
/// of two cube roots per comparison. Alpha is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CieLab76;

impl DistanceMetric for CieLab76 {
    fn distance(&self, a: Color, b: Color) -> f64 {
        let (l1, a1, b1) = rgb_to_lab(a.r, a.g, a.b);
        let (l2, a2, b2) = rgb_to_lab(b.r, b.g, b.b);

        let dl = l1 - l2;
        let da = a1 - a2;
        let db = b1 - b2;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// Convert 8-bit sRGB channels to CIE L*a*b* under the D65 illuminant.
fn rgb_to_lab(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    fn srgb_to_linear(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    let rl = srgb_to_linear(r);
    let gl = srgb_to_linear(g);
    let bl = srgb_to_linear(b);

    // Linear RGB to XYZ (sRGB matrix)
    let x = rl * 0.4124564 + gl * 0.3575761 + bl * 0.1804375;
    let y = rl * 0.2126729 + gl * 0.7151522 + bl * 0.0721750;
    let z = rl * 0.0193339 + gl * 0.1191920 + bl * 0.9503041;

    // XYZ to Lab, D65 white point
    const XN: f64 = 0.95047;
    const YN: f64 = 1.00000;
    const ZN: f64 = 1.08883;

    fn f(t: f64) -> f64 {
        if t > 0.008856 {
            t.powf(1.0 / 3.0)
        } else {
            7.787 * t + 16.0 / 116.0
        }
    }

    let fx = f(x / XN);
    let fy = f(y / YN);
    let fz = f(z / ZN);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);
    (l, a, b)
}
