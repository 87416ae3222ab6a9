// ============================================
// Resources - Общие ресурсы обратной связи
// ============================================
// Корень композиции: единственный владелец контроллеров.
// Один экземпляр каждого контроллера гарантируется владением.

use std::cell::RefCell;
use std::rc::Rc;

use super::clock::FrameClock;
use super::config::FeedbackConfig;
use crate::feedback::animation::AnimationFeedback;
use crate::feedback::audio::{AudioBackend, SoundFeedback};
use crate::feedback::player::PlayerEvents;

/// Звуковой контроллер с выбранным во время запуска бэкендом
pub type DynSoundFeedback = SoundFeedback<Box<dyn AudioBackend>>;

/// Все ресурсы обратной связи в одном месте
pub struct FeedbackResources {
    pub config: FeedbackConfig,

    // Timing
    pub clock: FrameClock,

    // Player event source
    pub events: PlayerEvents,

    // Controllers
    pub sound: Rc<RefCell<DynSoundFeedback>>,
    pub animation: Rc<RefCell<AnimationFeedback>>,
}
