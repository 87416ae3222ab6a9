// ============================================
// Particle System - Интенсивность и оттенок частиц
// ============================================

use ultraviolet::Vec3;

use crate::feedback::animation::{move_towards, ParticleEmitter, TintRange};

/// Масштаб всплеска приземления: скорость удара [lo, hi] -> [0, 1]
pub fn land_burst_scale(impact_speed: f32, range: [f32; 2]) -> f32 {
    let [lo, hi] = range;
    if hi == lo {
        return 0.0;
    }
    ((impact_speed - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Частицы движения растут вместе с |input.x|
pub fn move_particles_system(moving: &mut dyn ParticleEmitter, input_x: f32, ease_rate: f32, dt: f32) {
    let target = Vec3::one() * input_x.abs();
    let eased = move_towards(moving.local_scale(), target, ease_rate * dt);
    moving.set_local_scale(eased);
}

/// Применить текущий оттенок земли (если он уже известен)
pub fn tint_emitter(emitter: &mut dyn ParticleEmitter, tint: Option<TintRange>) {
    if let Some(range) = tint {
        emitter.set_start_color(range);
    }
}
