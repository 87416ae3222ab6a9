// ============================================
// Core Module - Основные компоненты и ресурсы
// ============================================

mod error;
mod config;
mod clock;
mod resources;

pub use error::{FeedbackError, Result};
pub use config::{FeedbackConfig, SoundSettings, AnimationSettings, IdleScaleSettings, CONFIG_ENV};
pub use clock::{FrameClock, FrameTime};
pub use resources::{DynSoundFeedback, FeedbackResources};
