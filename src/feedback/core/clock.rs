// ============================================
// Frame Clock - Время текущего кадра
// ============================================
// Один кадр = одно значение времени, как у игрового цикла.
// События внутри кадра видят то же время, что и покадровое обновление.

use std::cell::Cell;
use std::rc::Rc;

/// Время кадра: с начала игры и длительность кадра
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub time: f32,
    pub dt: f32,
}

impl FrameTime {
    pub fn new(time: f32, dt: f32) -> Self {
        Self { time, dt }
    }
}

/// Разделяемые часы кадра (однопоточные).
///
/// Хост двигает часы раз в кадр, контроллеры только читают.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    current: Rc<Cell<FrameTime>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начать новый кадр
    pub fn advance(&self, dt: f32) -> FrameTime {
        let prev = self.current.get();
        let next = FrameTime::new(prev.time + dt, dt);
        self.current.set(next);
        next
    }

    /// Выставить время напрямую (перемотка, тесты)
    pub fn set(&self, frame: FrameTime) {
        self.current.set(frame);
    }

    pub fn now(&self) -> f32 {
        self.current.get().time
    }

    pub fn frame(&self) -> FrameTime {
        self.current.get()
    }
}
