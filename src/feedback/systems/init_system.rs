// ============================================
// Init System - Сборка ресурсов обратной связи
// ============================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::feedback::animation::{AnimationFeedback, AnimationRig, GroundProbe};
use crate::feedback::audio::{AudioBackend, HeadlessAudio, KiraBackend, SoundFeedback};
use crate::feedback::core::{FeedbackConfig, FeedbackResources, FrameClock, SoundSettings};
use crate::feedback::player::PlayerEvents;

/// Система инициализации
pub struct InitSystem;

impl InitSystem {
    /// Звуковой бэкенд: kira, а без звукового устройства - headless
    pub fn create_audio_backend(settings: &SoundSettings) -> Box<dyn AudioBackend> {
        match KiraBackend::new(settings.music_fade_out) {
            Ok(backend) => Box::new(backend),
            Err(e) => {
                log::warn!("{}; falling back to headless audio", e);
                Box::new(HeadlessAudio::new())
            }
        }
    }

    /// Создать ресурсы и подписать оба контроллера на источник событий
    pub fn create_resources(
        config: FeedbackConfig,
        audio: Box<dyn AudioBackend>,
        rig: AnimationRig,
        probe: Box<dyn GroundProbe>,
    ) -> FeedbackResources {
        let clock = FrameClock::new();
        let mut events = PlayerEvents::new();

        let sound = SoundFeedback::init(audio, config.sound.clone(), clock.clone(), Some(&mut events));

        let animation = Rc::new(RefCell::new(AnimationFeedback::new(
            rig,
            probe,
            config.animation.clone(),
            clock.clone(),
        )));
        AnimationFeedback::attach(&animation, &mut events);

        log::info!("Feedback resources ready ({} listeners)", events.listener_count());

        FeedbackResources {
            config,
            clock,
            events,
            sound,
            animation,
        }
    }
}
