//! Density ramp lookup
//!
//! Glyphs are ordered from visually sparse (space) to visually dense (@).

/// Density ramp, darkest first
pub const DENSITY_RAMP: &[u8; 92] =
    b" `.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";

/// Ramp index for an intensity value
///
/// Quantizes `intensity` into `DENSITY_RAMP.len()` equal buckets. The result
/// is clamped to the last index so the brightest value can never step past
/// the end of the ramp.
pub fn density_index(intensity: u8) -> usize {
    let index = intensity as usize * DENSITY_RAMP.len() / 256;
    index.min(DENSITY_RAMP.len() - 1)
}

/// Ramp glyph for an intensity value
pub fn density_char(intensity: u8) -> char {
    DENSITY_RAMP[density_index(intensity)] as char
}
