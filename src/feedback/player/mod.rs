// ============================================
// Player Module - Источник событий игрока
// ============================================
// Два разных контракта: push-события (прыжок, земля)
// и pull-выборка ввода раз в кадр. Не смешиваются.

mod events;
mod hub;

pub use events::*;
pub use hub::PlayerEvents;
