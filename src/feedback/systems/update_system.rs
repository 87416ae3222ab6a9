// ============================================
// Update System - Покадровое обновление
// ============================================
// Порядок кадра:
//   1. begin_frame - часы кадра
//   2. контроллер движения шлёт события (синхронно)
//   3. update - покадровая часть видит уже обновлённое `grounded`

use crate::feedback::animation::AnimationState;
use crate::feedback::core::{FeedbackResources, FrameTime};

/// Система обновления обратной связи
pub struct UpdateSystem;

impl UpdateSystem {
    /// Начать кадр
    pub fn begin_frame(resources: &mut FeedbackResources, dt: f32) -> FrameTime {
        resources.clock.advance(dt)
    }

    /// Покадровая часть (после событий этого кадра)
    pub fn update(resources: &mut FeedbackResources) -> AnimationState {
        resources.animation.borrow_mut().update(&resources.events)
    }

    /// Отписать контроллеры и освободить звук
    pub fn shutdown(resources: &mut FeedbackResources) {
        resources.animation.borrow_mut().detach(&mut resources.events);

        let mut sound = resources.sound.borrow_mut();
        sound.detach(&mut resources.events);
        sound.teardown();
    }
}
