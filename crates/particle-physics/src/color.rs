//! Per-type display colors
//!
//! Each type gets a hue evenly spaced around the color wheel at fixed
//! saturation and lightness. Channels are the plain HSL conversion, handed to
//! the renderer as-is.

use crate::constants::{TYPE_LIGHTNESS, TYPE_SATURATION};

/// RGB color for particle type `ty` out of `type_count` types
pub fn type_color(ty: usize, type_count: usize) -> [f32; 3] {
    hsl_to_rgb(type_hue(ty, type_count), TYPE_SATURATION, TYPE_LIGHTNESS)
}

/// Hue of type `ty` as a fraction of a full turn, in [0, 1)
pub fn type_hue(ty: usize, type_count: usize) -> f32 {
    ty as f32 / type_count as f32
}

/// HSL to RGB. `hue` is in turns and wraps, saturation and lightness clamp to [0, 1].
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(1.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let q = 2.0 * l - p;

    [
        hue_to_channel(q, p, h + 1.0 / 3.0),
        hue_to_channel(q, p, h),
        hue_to_channel(q, p, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(low: f32, high: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        low + (high - low) * 6.0 * t
    } else if t < 0.5 {
        high
    } else if t < 2.0 / 3.0 {
        low + (high - low) * 6.0 * (2.0 / 3.0 - t)
    } else {
        low
    }
}
