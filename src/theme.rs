//! Dark palette with neon accents, shared by the renderer and effects.

use macroquad::color::Color;

pub const BACKGROUND: Color = Color::new(0.06, 0.06, 0.10, 1.0);
pub const GRID: Color = Color::new(0.10, 0.10, 0.14, 1.0);
pub const SNAKE_HEAD: Color = Color::new(0.20, 1.0, 0.59, 1.0);
pub const BODY_FRONT: Color = Color::new(0.16, 0.78, 0.47, 1.0);
pub const BODY_BACK: Color = Color::new(0.08, 0.39, 0.24, 1.0);
pub const FOOD: Color = Color::new(1.0, 0.39, 0.47, 1.0);
pub const SPECIAL_FOOD: Color = Color::new(1.0, 0.84, 0.0, 1.0);
pub const TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const TEXT_SHADOW: Color = Color::new(0.39, 0.39, 0.39, 1.0);
pub const GAME_OVER: Color = Color::new(1.0, 0.20, 0.20, 1.0);
pub const PAUSE: Color = Color::new(1.0, 0.78, 0.20, 1.0);

/// Linear interpolation between two colors, `t` in [0, 1].
pub fn lerp(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = Color::new(0.0, 0.2, 0.4, 1.0);
        let b = Color::new(1.0, 0.8, 0.6, 1.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        let mid = lerp(a, b, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn lerp_clamps_out_of_range_t() {
        let a = Color::new(0.0, 0.0, 0.0, 1.0);
        let b = Color::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(lerp(a, b, -2.0), a);
        assert_eq!(lerp(a, b, 3.0), b);
    }
}
