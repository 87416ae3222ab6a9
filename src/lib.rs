// ============================================
// Platformer Feedback - Звук, анимация и частицы
// ============================================
// Переводит события движения игрока (прыжок, касание земли, ввод)
// в звуковые сигналы, выбор анимации и всплески частиц.

pub mod feedback;

pub use feedback::core::{FeedbackConfig, FeedbackError, FeedbackResources, FrameClock, FrameTime, Result};
pub use feedback::player::{FrameInput, GroundedChanged, PlayerEvents};
pub use feedback::audio::SoundFeedback;
pub use feedback::animation::AnimationFeedback;
pub use feedback::systems::{InitSystem, UpdateSystem};
