// ============================================
// Feedback Module - Обратная связь движения игрока
// ============================================
// Источник событий игрока -> {звук, анимация} -> бэкенды.
// Контроллеры не общаются друг с другом.

pub mod player;
pub mod audio;
pub mod animation;

pub mod core;
pub mod systems;
