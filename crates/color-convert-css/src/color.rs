//! Canonical color value and color-space conversions.
//!
//! A [`Color`] stores gamma-encoded sRGB components plus alpha as `f64`. Components are **not**
//! clamped: colors parsed from wide-gamut notations (OKLCH) may fall outside `0.0..=1.0`, and are
//! only normalized into the sRGB gamut when rendered to an sRGB-based notation.
//!
//! OKLab matrices follow <https://bottosson.github.io/posts/oklab/>.

/// A color in extended (unclamped) sRGB with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red, gamma-encoded. `0.0..=1.0` inside the sRGB gamut.
    pub r: f64,
    /// Green, gamma-encoded.
    pub g: f64,
    /// Blue, gamma-encoded.
    pub b: f64,
    /// Alpha in `0.0..=1.0`.
    pub alpha: f64,
}

/// Cylindrical HSL coordinates: hue in degrees, saturation and lightness in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `0.0..360.0`.
    pub h: f64,
    /// Saturation, `0.0..=1.0`.
    pub s: f64,
    /// Lightness, `0.0..=1.0`.
    pub l: f64,
}

/// OKLab coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    /// Perceptual lightness.
    pub l: f64,
    /// Green/red axis.
    pub a: f64,
    /// Blue/yellow axis.
    pub b: f64,
}

/// OKLCH coordinates (cylindrical OKLab).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    /// Perceptual lightness, `0.0..=1.0`.
    pub l: f64,
    /// Chroma, `>= 0`.
    pub c: f64,
    /// Hue in degrees, `0.0..360.0`. Zero for achromatic colors.
    pub h: f64,
}

const ACHROMATIC_EPSILON: f64 = 1e-9;

fn decode_component(c: f64) -> f64 {
    let magnitude = c.abs();
    let linear = if magnitude <= 0.04045 {
        magnitude / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4)
    };
    linear.copysign(c)
}

fn encode_component(c: f64) -> f64 {
    let magnitude = c.abs();
    let encoded = if magnitude <= 0.003_130_8 {
        magnitude * 12.92
    } else {
        1.055 * magnitude.powf(1.0 / 2.4) - 0.055
    };
    encoded.copysign(c)
}

/// Normalize an angle in degrees into `0.0..360.0`.
pub fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from gamma-encoded sRGB components and alpha.
    pub const fn new(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: f64::from(rgba[0]) / 255.0,
            g: f64::from(rgba[1]) / 255.0,
            b: f64::from(rgba[2]) / 255.0,
            alpha: f64::from(rgba[3]) / 255.0,
        }
    }

    /// Quantize to 8-bit channels after clamping into the sRGB gamut.
    pub fn to_rgba8(self) -> [u8; 4] {
        let clamped = self.clamp_to_gamut();
        let q = |c: f64| (c * 255.0).round() as u8;
        [q(clamped.r), q(clamped.g), q(clamped.b), q(clamped.alpha)]
    }

    /// Returns `true` if all color channels lie inside `0.0..=1.0`.
    pub fn in_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Clamp every channel (and alpha) into `0.0..=1.0`.
    pub fn clamp_to_gamut(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// Return a copy with a different alpha.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Linear-light sRGB channels.
    pub fn to_linear(self) -> [f64; 3] {
        [
            decode_component(self.r),
            decode_component(self.g),
            decode_component(self.b),
        ]
    }

    /// Build a color from linear-light sRGB channels.
    pub fn from_linear(lin: [f64; 3], alpha: f64) -> Self {
        Self {
            r: encode_component(lin[0]),
            g: encode_component(lin[1]),
            b: encode_component(lin[2]),
            alpha,
        }
    }

    /// Build a color from HSL coordinates.
    pub fn from_hsl(hsl: Hsl, alpha: f64) -> Self {
        let h = normalize_hue(hsl.h);
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = chroma * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());
        let (r1, g1, b1) = match h_prime as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;

        Self {
            r: r1 + m,
            g: g1 + m,
            b: b1 + m,
            alpha,
        }
    }

    /// HSL coordinates of the gamut-clamped color.
    pub fn to_hsl(self) -> Hsl {
        let c = self.clamp_to_gamut();
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta.abs() < ACHROMATIC_EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let h = if max == c.r {
            60.0 * ((c.g - c.b) / delta).rem_euclid(6.0)
        } else if max == c.g {
            60.0 * ((c.b - c.r) / delta + 2.0)
        } else {
            60.0 * ((c.r - c.g) / delta + 4.0)
        };
        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        Hsl {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            l,
        }
    }

    /// OKLab coordinates. Out-of-gamut colors are converted without clamping.
    pub fn to_oklab(self) -> OkLab {
        let [r, g, b] = self.to_linear();

        let l = (0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b).cbrt();
        let m = (0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b).cbrt();
        let s = (0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b).cbrt();

        OkLab {
            l: 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s,
            a: 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s,
            b: 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s,
        }
    }

    /// Build a color from OKLab coordinates.
    pub fn from_oklab(lab: OkLab, alpha: f64) -> Self {
        let l_ = lab.l + 0.396_337_777_4 * lab.a + 0.215_803_757_3 * lab.b;
        let m_ = lab.l - 0.105_561_345_8 * lab.a - 0.063_854_172_8 * lab.b;
        let s_ = lab.l - 0.089_484_177_5 * lab.a - 1.291_485_548_0 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        Self::from_linear(
            [
                4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
                -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
                -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
            ],
            alpha,
        )
    }

    /// OKLCH coordinates. Hue is `0` when chroma is (numerically) zero.
    pub fn to_oklch(self) -> OkLch {
        let lab = self.to_oklab();
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = if c < ACHROMATIC_EPSILON {
            0.0
        } else {
            normalize_hue(lab.b.atan2(lab.a).to_degrees())
        };
        OkLch { l: lab.l, c, h }
    }

    /// Build a color from OKLCH coordinates.
    pub fn from_oklch(lch: OkLch, alpha: f64) -> Self {
        let h = lch.h.to_radians();
        Self::from_oklab(
            OkLab {
                l: lch.l,
                a: lch.c * h.cos(),
                b: lch.c * h.sin(),
            },
            alpha,
        )
    }

    /// Largest absolute per-channel difference (including alpha).
    pub fn max_channel_difference(self, other: Color) -> f64 {
        [
            self.r - other.r,
            self.g - other.g,
            self.b - other.b,
            self.alpha - other.alpha,
        ]
        .iter()
        .fold(0.0_f64, |acc, d| acc.max(d.abs()))
    }

    /// Returns `true` if every channel differs by at most `tolerance`.
    pub fn approx_eq(self, other: Color, tolerance: f64) -> bool {
        self.max_channel_difference(other) <= tolerance
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn test_transfer_function_round_trip() {
        for c in [0.0, 0.002, 0.2, 0.5, 0.99, 1.0, -0.3, 1.2] {
            let back = encode_component(decode_component(c));
            assert!(close(back, c, 1e-12), "{c} -> {back}");
        }
    }

    #[test]
    fn test_hsl_primary_red() {
        let hsl = Color::new(1.0, 0.0, 0.0, 1.0).to_hsl();
        assert!(close(hsl.h, 0.0, 1e-9));
        assert!(close(hsl.s, 1.0, 1e-9));
        assert!(close(hsl.l, 0.5, 1e-9));
    }

    #[test]
    fn test_hsl_round_trip() {
        let original = Color::new(0.2, 0.6, 0.9, 1.0);
        let back = Color::from_hsl(original.to_hsl(), 1.0);
        assert!(original.approx_eq(back, 1e-9));
    }

    #[test]
    fn test_white_has_zero_chroma_and_hue() {
        let lch = Color::new(1.0, 1.0, 1.0, 1.0).to_oklch();
        assert!(close(lch.l, 1.0, 1e-4));
        assert!(lch.c < 1e-4);
    }

    #[test]
    fn test_red_oklch_hue_near_29_degrees() {
        let lch = Color::new(1.0, 0.0, 0.0, 1.0).to_oklch();
        assert!(close(lch.l, 0.628, 1e-3), "l = {}", lch.l);
        assert!(close(lch.c, 0.2577, 1e-3), "c = {}", lch.c);
        assert!(close(lch.h, 29.23, 0.1), "h = {}", lch.h);
    }

    #[test]
    fn test_oklch_round_trip_keeps_out_of_gamut_values() {
        let lch = OkLch {
            l: 0.7,
            c: 0.35,
            h: 150.0,
        };
        let color = Color::from_oklch(lch, 1.0);
        assert!(!color.in_gamut());

        let back = color.to_oklch();
        assert!(close(back.l, lch.l, 1e-6));
        assert!(close(back.c, lch.c, 1e-6));
        assert!(close(back.h, lch.h, 1e-4));
    }

    #[test]
    fn test_normalize_hue_wraps() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
    }
}
