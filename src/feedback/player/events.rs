// ============================================
// Player Events - Интерфейс источника событий
// ============================================

use std::cell::RefCell;
use std::rc::Weak;

use ultraviolet::Vec2;

/// Ввод игрока за текущий кадр, компоненты примерно в [-1, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput(pub Vec2);

impl Default for FrameInput {
    fn default() -> Self {
        Self(Vec2::zero())
    }
}

impl FrameInput {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Горизонтальная составляющая
    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }
}

/// Смена контакта с землёй.
///
/// `impact_speed` имеет смысл только при `is_grounded == true`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundedChanged {
    pub is_grounded: bool,
    pub impact_speed: f32,
}

impl GroundedChanged {
    pub fn landed(impact_speed: f32) -> Self {
        Self { is_grounded: true, impact_speed: impact_speed.max(0.0) }
    }

    pub fn left_ground() -> Self {
        Self { is_grounded: false, impact_speed: 0.0 }
    }
}

/// Подписчик на дискретные события игрока
pub trait PlayerEventListener {
    fn on_jumped(&mut self);
    fn on_grounded_changed(&mut self, event: GroundedChanged);
}

/// Идентификатор подписки
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Push-контракт: регистрация подписчиков.
///
/// Источник хранит слабые ссылки и не продлевает жизнь подписчика.
pub trait PlayerEventNotifier {
    fn subscribe(&mut self, listener: Weak<RefCell<dyn PlayerEventListener>>) -> SubscriptionId;

    /// Возвращает false если подписки уже нет
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Pull-контракт: ввод текущего кадра
pub trait FrameInputSampler {
    fn frame_input(&self) -> FrameInput;
}

impl FrameInputSampler for FrameInput {
    fn frame_input(&self) -> FrameInput {
        *self
    }
}
