// ============================================
// Idle System - "Дыхание" персонажа в покое
// ============================================
// Сжатие/растяжение с сохранением объёма: X делится, Y умножается.

use ultraviolet::Vec3;

use crate::feedback::animation::VisualTarget;
use crate::feedback::core::IdleScaleSettings;

/// Масштаб в покое в момент `time`
pub fn idle_scale(base: Vec3, idle: &IdleScaleSettings, time: f32) -> Vec3 {
    let scale_y = (time * idle.frequency).sin() * idle.amplitude + idle.offset;
    Vec3::new(base.x / scale_y, base.y * scale_y, base.z)
}

/// Линейно сдвинуть `current` к `target` не дальше `max_delta`, без перелёта
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.mag();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + delta / distance * max_delta
}

/// В покое на земле - дыхание, иначе плавный возврат к базовому масштабу
pub fn idle_system(
    body: &mut dyn VisualTarget,
    grounded: bool,
    input_x: f32,
    base: Vec3,
    idle: &IdleScaleSettings,
    ease_rate: f32,
    run_threshold: f32,
    time: f32,
    dt: f32,
) {
    if grounded && input_x.abs() < run_threshold {
        body.set_local_scale(idle_scale(base, idle, time));
    } else {
        let eased = move_towards(body.local_scale(), base, ease_rate * dt);
        body.set_local_scale(eased);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::animation::HeadlessBody;
    use ultraviolet::Vec2;

    #[test]
    fn test_idle_scale_at_phase_zero() {
        let idle = IdleScaleSettings::default();
        let base = Vec3::new(2.0, 3.0, 1.0);

        let scale = idle_scale(base, &idle, 0.0);

        assert_eq!(scale, Vec3::new(2.0 / 0.95, 3.0 * 0.95, 1.0));
    }

    #[test]
    fn test_idle_scale_peak() {
        let idle = IdleScaleSettings { frequency: 1.0, amplitude: 0.05, offset: 0.95 };
        let scale = idle_scale(Vec3::one(), &idle, std::f32::consts::FRAC_PI_2);
        assert!((scale.y - 1.0).abs() < 1e-6);
        assert!((scale.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_move_towards_clamps() {
        let from = Vec3::new(0.0, 0.0, 0.0);
        let to = Vec3::new(3.0, 4.0, 0.0);

        let step = move_towards(from, to, 1.0);
        assert!((step.mag() - 1.0).abs() < 1e-6);
        assert!((step.x - 0.6).abs() < 1e-6);

        assert_eq!(move_towards(from, to, 10.0), to);
        assert_eq!(move_towards(to, to, 0.0), to);
    }

    #[test]
    fn test_running_eases_back_to_base() {
        let body = HeadlessBody::new(Vec2::zero(), Vec3::new(1.5, 1.0, 1.0));
        let mut target = body.clone();
        let idle = IdleScaleSettings::default();

        idle_system(&mut target, true, 0.8, Vec3::one(), &idle, 2.0, 0.1, 0.0, 0.1);
        assert!((body.scale().x - 1.3).abs() < 1e-6);

        idle_system(&mut target, true, 0.8, Vec3::one(), &idle, 2.0, 0.1, 0.1, 0.5);
        assert_eq!(body.scale(), Vec3::one());
    }

    #[test]
    fn test_airborne_never_breathes() {
        let body = HeadlessBody::new(Vec2::zero(), Vec3::one());
        let mut target = body.clone();

        idle_system(&mut target, false, 0.0, Vec3::one(), &IdleScaleSettings::default(), 2.0, 0.1, 0.0, 0.016);

        assert_eq!(body.scale(), Vec3::one());
    }
}
