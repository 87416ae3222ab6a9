// ============================================
// Animation Rig - Интерфейсы визуальных бэкендов
// ============================================

use ultraviolet::{Vec2, Vec3};

use super::components::TintRange;

/// Эмиттер частиц
pub trait ParticleEmitter {
    fn play(&mut self);
    fn stop(&mut self);
    fn set_start_color(&mut self, range: TintRange);
    fn local_scale(&self) -> Vec3;
    fn set_local_scale(&mut self, scale: Vec3);
}

/// Аниматор спрайта: выбор состояния по имени
pub trait SpriteAnimator {
    fn play(&mut self, state: &str);
}

/// Корень визуала персонажа
pub trait VisualTarget {
    fn position(&self) -> Vec2;
    fn local_scale(&self) -> Vec3;
    fn set_local_scale(&mut self, scale: Vec3);
}

/// Эмиттеры персонажа
pub struct ParticleRig {
    pub jump: Box<dyn ParticleEmitter>,
    pub launch: Box<dyn ParticleEmitter>,
    /// Непрерывные частицы движения
    pub moving: Box<dyn ParticleEmitter>,
    pub land: Box<dyn ParticleEmitter>,
}

/// Всё визуальное, чем управляет контроллер анимации
pub struct AnimationRig {
    pub animator: Box<dyn SpriteAnimator>,
    pub body: Box<dyn VisualTarget>,
    pub particles: ParticleRig,
}
