// ============================================
// Animation Components - Чистые данные (ECS)
// ============================================

use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// Состояние анимации спрайта
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationState {
    RunLeft,
    RunRight,
    JumpLeft,
    JumpRight,
    Stand,
}

impl AnimationState {
    /// Имя состояния в аниматоре
    pub fn name(&self) -> &'static str {
        match self {
            AnimationState::RunLeft => "RunLeft",
            AnimationState::RunRight => "RunRight",
            AnimationState::JumpLeft => "JumpLeft",
            AnimationState::JumpRight => "JumpRight",
            AnimationState::Stand => "Stand",
        }
    }
}

/// Цвет RGBA без ограничения диапазона
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Умножает все четыре канала, включая альфу
impl Mul<f32> for Rgba {
    type Output = Rgba;

    fn mul(self, k: f32) -> Rgba {
        Rgba::new(self.r * k, self.g * k, self.b * k, self.a * k)
    }
}

/// Двухцветный градиент стартового цвета частиц
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TintRange {
    pub min: Rgba,
    pub max: Rgba,
}

/// Цвет поверхности под персонажем, пересчитывается каждый кадр
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundColorSample {
    pub base_color: Rgba,
}

impl GroundColorSample {
    /// Диапазон `[base * min_factor, base * max_factor]`
    pub fn tint_range(&self, min_factor: f32, max_factor: f32) -> TintRange {
        TintRange {
            min: self.base_color * min_factor,
            max: self.base_color * max_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_range_scales_all_channels() {
        let sample = GroundColorSample { base_color: Rgba::new(0.5, 1.0, 0.0, 1.0) };
        let range = sample.tint_range(0.5, 2.0);

        assert_eq!(range.min, Rgba::new(0.25, 0.5, 0.0, 0.5));
        assert_eq!(range.max, Rgba::new(1.0, 2.0, 0.0, 2.0));
    }

    #[test]
    fn test_state_names() {
        assert_eq!(AnimationState::JumpRight.name(), "JumpRight");
        assert_eq!(AnimationState::Stand.name(), "Stand");
    }
}
