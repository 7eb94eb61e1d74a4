use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color, one byte per channel.
///
/// Invariant:
/// - channels are independent; `rgb` is NOT premultiplied by `a`.
///
/// Rationale:
/// - the gradient contract is specified per byte channel and rasterized
///   output must be exactly reproducible on readback
/// - matches the RGBA8 layout of the surface pixel buffer, so a `Color`
///   can be bit-cast into it without conversion.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Packs into `0xAABBGGRR` (little-endian RGBA byte order).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Per-channel linear interpolation between `self` and `other`.
    ///
    /// Each channel is interpolated independently, rounded to nearest, and
    /// clamped to `[0, 255]`. `t` outside `[0, 1]` is clamped, so the result
    /// never extrapolates.
    #[must_use]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let ch = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: ch(self.a, other.a),
        }
    }

    /// Source-over blend of `self` on top of `dst`.
    ///
    /// `coverage` scales the source alpha (0 = keep `dst`, 255 = full
    /// `self`); the raster surface uses it for anti-aliased edges.
    /// Fully covered opaque sources replace `dst` bit-exactly.
    #[must_use]
    pub fn over(self, dst: Color, coverage: u8) -> Color {
        if coverage == 0 {
            return dst;
        }
        let sa = (self.a as u32 * coverage as u32 + 127) / 255;
        if sa >= 255 {
            return self;
        }
        if sa == 0 {
            return dst;
        }
        let inv = 255 - sa;
        let ch = |s: u8, d: u8| -> u8 { ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8 };
        Color {
            r: ch(self.r, dst.r),
            g: ch(self.g, dst.g),
            b: ch(self.b, dst.b),
            a: ch(255, dst.a),
        }
    }
}
