// ============================================
// Ground Sampler - Цвет поверхности под персонажем
// ============================================
// Короткий луч вниз. Промах, триггер или поверхность без цвета
// - обычная ветка, не ошибка: оттенок просто не меняется.


use ultraviolet::Vec2;

use super::components::{GroundColorSample, Rgba};

/// Результат луча вниз
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeHit {
    pub is_trigger: bool,
    /// None = поверхность без цвета
    pub color: Option<Rgba>,
}

/// Геометрический запрос к сцене
pub trait GroundProbe {
    fn cast_down(&self, origin: Vec2, length: f32) -> Option<ProbeHit>;
}

/// Сэмплер цвета земли
#[derive(Clone, Copy, Debug)]
pub struct GroundSampler {
    pub probe_length: f32,
}

impl GroundSampler {
    pub fn new(probe_length: f32) -> Self {
        Self { probe_length }
    }

    pub fn sample(&self, probe: &dyn GroundProbe, origin: Vec2) -> Option<GroundColorSample> {
        let hit = probe.cast_down(origin, self.probe_length)?;
        if hit.is_trigger {
            return None;
        }
        hit.color.map(|base_color| GroundColorSample { base_color })
    }
}
