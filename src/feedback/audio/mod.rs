// ============================================
// Audio Module - Звуковая обратная связь
// ============================================
// Два логических канала: фоновая музыка и звук прыжка/приземления.
// Приземление с кулдауном, прыжок без.

mod components;
mod resources;
mod backend;
mod headless;
mod kira_backend;
mod systems;

pub use components::*;
pub use resources::*;
pub use backend::AudioBackend;
pub use headless::{AudioCall, HeadlessAudio};
pub use kira_backend::KiraBackend;
pub use systems::*;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::feedback::core::{FeedbackError, FrameClock, SoundSettings};
use crate::feedback::player::{GroundedChanged, PlayerEventListener, PlayerEventNotifier, SubscriptionId};

/// Контроллер звуковой обратной связи - фасад для звуковых подсистем
pub struct SoundFeedback<B: AudioBackend> {
    backend: B,
    settings: SoundSettings,
    clock: FrameClock,
    state: ControllerState,
    instances: SoundInstances,
    cooldown: SoundCooldown,
    subscription: Option<SubscriptionId>,
}

impl<B: AudioBackend + 'static> SoundFeedback<B> {
    /// Создать контроллер и подписать его на источник.
    ///
    /// Без источника контроллер выключен на всё время жизни:
    /// ресурсы не захватываются, подписок нет.
    pub fn init(
        backend: B,
        settings: SoundSettings,
        clock: FrameClock,
        source: Option<&mut dyn PlayerEventNotifier>,
    ) -> Rc<RefCell<Self>> {
        let cooldown = SoundCooldown::new(settings.land_cooldown);
        let mut controller = Self {
            backend,
            settings,
            clock,
            state: ControllerState::Disabled,
            instances: SoundInstances::new(),
            cooldown,
            subscription: None,
        };

        let Some(source) = source else {
            let err = FeedbackError::MissingCollaborator("player event source");
            log::error!("{}: sound feedback disabled", err);
            return Rc::new(RefCell::new(controller));
        };

        controller.acquire();
        let this = Rc::new(RefCell::new(controller));
        Self::attach(&this, source);
        this
    }

    /// Подписаться на события (активация)
    pub fn attach(this: &Rc<RefCell<Self>>, source: &mut dyn PlayerEventNotifier) {
        let mut controller = this.borrow_mut();
        if controller.state != ControllerState::Active || controller.subscription.is_some() {
            return;
        }
        let weak = Rc::downgrade(this);
        let listener: Weak<RefCell<dyn PlayerEventListener>> = weak;
        controller.subscription = Some(source.subscribe(listener));
    }

    fn acquire(&mut self) {
        if self.settings.enable_background_music {
            self.instances.music = start_music(&mut self.backend, &self.settings.events.music);
        }
        self.instances.jump = match self.backend.create_instance(&self.settings.events.jump) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Jump cue unavailable: {}", e);
                None
            }
        };
        self.state = ControllerState::Active;
        log::info!("Sound feedback initialized (music: {})", self.instances.music.is_some());
    }
}

impl<B: AudioBackend> SoundFeedback<B> {
    /// Отписаться от событий (деактивация)
    pub fn detach(&mut self, source: &mut dyn PlayerEventNotifier) {
        if let Some(id) = self.subscription.take() {
            source.unsubscribe(id);
        }
    }

    /// Прыжок: перезапустить звук прыжка
    pub fn on_jump(&mut self) {
        if !self.is_active() {
            return;
        }
        restart_jump_cue(&mut self.backend, self.instances.jump);
    }

    /// Прямой вызов звука прыжка
    pub fn play_jump_sound(&mut self) {
        self.on_jump();
    }

    pub fn on_grounded_changed(&mut self, event: GroundedChanged) {
        if !self.is_active() {
            return;
        }
        land_system(
            &mut self.backend,
            &self.settings.events.land,
            &mut self.cooldown,
            self.instances.jump,
            event,
            self.settings.land_impact_threshold,
            self.clock.now(),
        );
    }

    /// Прямой вызов звука приземления (внешний триггер).
    /// Возвращает true если звук сработал.
    pub fn play_land_sound(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        play_land(&mut self.backend, &self.settings.events.land, &mut self.cooldown, self.clock.now())
    }

    /// Освободить ресурсы. Повторный вызов ничего не делает.
    pub fn teardown(&mut self) {
        if self.state != ControllerState::Active {
            return;
        }
        release_instance(&mut self.backend, &mut self.instances.music, StopMode::AllowFadeOut);
        release_instance(&mut self.backend, &mut self.instances.jump, StopMode::Immediate);
        self.state = ControllerState::TornDown;
        log::info!("Sound feedback torn down");
    }

    pub fn is_active(&self) -> bool {
        self.state == ControllerState::Active
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Подписан и активен. После teardown подписка ещё держится до detach,
    /// но события уже ничего не делают.
    pub fn is_attached(&self) -> bool {
        self.is_active() && self.subscription.is_some()
    }

    pub fn cooldown(&self) -> &SoundCooldown {
        &self.cooldown
    }

    pub fn instances(&self) -> &SoundInstances {
        &self.instances
    }
}

impl<B: AudioBackend> PlayerEventListener for SoundFeedback<B> {
    fn on_jumped(&mut self) {
        self.on_jump();
    }

    fn on_grounded_changed(&mut self, event: GroundedChanged) {
        SoundFeedback::on_grounded_changed(self, event);
    }
}

impl<B: AudioBackend> Drop for SoundFeedback<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::core::FrameTime;
    use crate::feedback::player::PlayerEvents;

    fn setup(settings: SoundSettings) -> (HeadlessAudio, FrameClock, PlayerEvents, Rc<RefCell<SoundFeedback<HeadlessAudio>>>) {
        let audio = HeadlessAudio::new();
        let clock = FrameClock::new();
        let mut events = PlayerEvents::new();
        let sound = SoundFeedback::init(audio.clone(), settings, clock.clone(), Some(&mut events));
        (audio, clock, events, sound)
    }

    fn count(audio: &HeadlessAudio, pred: impl Fn(&AudioCall) -> bool) -> usize {
        audio.journal().iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn test_init_starts_music_and_creates_jump() {
        let (audio, _clock, events, sound) = setup(SoundSettings::default());
        let sound = sound.borrow();

        let music = sound.instances().music.unwrap();
        let jump = sound.instances().jump.unwrap();
        assert!(audio.is_playing(music));
        assert!(!audio.is_playing(jump));
        assert!(sound.is_attached());
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn test_music_toggle_off() {
        let settings = SoundSettings { enable_background_music: false, ..Default::default() };
        let (audio, _clock, _events, sound) = setup(settings);

        assert_eq!(sound.borrow().instances().music, None);
        assert_eq!(audio.live_instances(), 1);
    }

    #[test]
    fn test_missing_source_disables_controller() {
        let audio = HeadlessAudio::new();
        let sound = SoundFeedback::init(audio.clone(), SoundSettings::default(), FrameClock::new(), None);

        {
            let mut s = sound.borrow_mut();
            assert_eq!(s.state(), ControllerState::Disabled);
            s.on_jump();
            s.on_grounded_changed(GroundedChanged::landed(30.0));
            assert!(!s.play_land_sound());
            s.teardown();
        }
        drop(sound);

        assert!(audio.journal().is_empty());
    }

    #[test]
    fn test_attach_after_disabled_does_not_subscribe() {
        let audio = HeadlessAudio::new();
        let mut events = PlayerEvents::new();
        let sound = SoundFeedback::init(audio, SoundSettings::default(), FrameClock::new(), None);

        SoundFeedback::attach(&sound, &mut events);

        assert!(!sound.borrow().is_attached());
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_events_drive_jump_and_land() {
        let (audio, clock, mut events, sound) = setup(SoundSettings::default());
        let jump = sound.borrow().instances().jump.unwrap();
        let land = SoundEvents::default().land.path;

        clock.set(FrameTime::new(1.0, 0.016));
        events.emit_jumped();
        assert!(audio.is_playing(jump));

        events.emit_grounded_changed(GroundedChanged::left_ground());
        events.emit_grounded_changed(GroundedChanged::landed(18.0));

        assert!(!audio.is_playing(jump));
        assert_eq!(audio.one_shot_count(&land), 1);
        assert_eq!(sound.borrow().cooldown().last_trigger, Some(1.0));
    }

    #[test]
    fn test_rapid_jumps_restart_every_time() {
        let (audio, _clock, mut events, sound) = setup(SoundSettings::default());
        let jump = sound.borrow().instances().jump.unwrap();

        for _ in 0..3 {
            events.emit_jumped();
        }

        assert_eq!(count(&audio, |c| *c == AudioCall::Start(jump)), 3);
        assert_eq!(count(&audio, |c| *c == AudioCall::Stop(jump, StopMode::Immediate)), 3);
    }

    #[test]
    fn test_play_land_sound_twice_within_cooldown() {
        let (audio, clock, _events, sound) = setup(SoundSettings::default());
        let land = SoundEvents::default().land.path;

        clock.set(FrameTime::new(2.0, 0.016));
        assert!(sound.borrow_mut().play_land_sound());
        clock.set(FrameTime::new(2.05, 0.05));
        assert!(!sound.borrow_mut().play_land_sound());

        assert_eq!(audio.one_shot_count(&land), 1);
    }

    #[test]
    fn test_detach_stops_callbacks() {
        let (audio, _clock, mut events, sound) = setup(SoundSettings::default());
        sound.borrow_mut().detach(&mut events);
        audio.clear_journal();

        events.emit_jumped();
        events.emit_grounded_changed(GroundedChanged::landed(25.0));

        assert!(audio.journal().is_empty());
        assert!(!sound.borrow().is_attached());
    }

    #[test]
    fn test_teardown_releases_once() {
        let (audio, _clock, _events, sound) = setup(SoundSettings::default());
        let music = sound.borrow().instances().music.unwrap();
        let jump = sound.borrow().instances().jump.unwrap();

        sound.borrow_mut().teardown();
        sound.borrow_mut().teardown();
        drop(sound);

        let journal = audio.journal();
        assert!(journal.contains(&AudioCall::Stop(music, StopMode::AllowFadeOut)));
        assert!(journal.contains(&AudioCall::Stop(jump, StopMode::Immediate)));
        assert_eq!(count(&audio, |c| matches!(c, AudioCall::Release(_))), 2);
        assert_eq!(audio.live_instances(), 0);
    }

    #[test]
    fn test_teardown_reports_detached_and_detach_still_unsubscribes() {
        let (audio, _clock, mut events, sound) = setup(SoundSettings::default());

        sound.borrow_mut().teardown();
        assert!(!sound.borrow().is_attached());
        assert_eq!(events.listener_count(), 1);

        audio.clear_journal();
        events.emit_jumped();
        assert!(audio.journal().is_empty());

        sound.borrow_mut().detach(&mut events);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_drop_releases_resources() {
        let (audio, _clock, mut events, sound) = setup(SoundSettings::default());
        drop(sound);

        assert_eq!(audio.live_instances(), 0);
        events.emit_jumped();
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_failed_jump_instance_is_tolerated() {
        let audio = HeadlessAudio::new();
        audio.mark_missing(SoundEvents::default().jump.path);
        let mut events = PlayerEvents::new();
        let sound = SoundFeedback::init(audio.clone(), SoundSettings::default(), FrameClock::new(), Some(&mut events));

        events.emit_jumped();
        events.emit_grounded_changed(GroundedChanged::landed(30.0));
        sound.borrow_mut().teardown();

        assert_eq!(sound.borrow().instances().jump, None);
        assert_eq!(audio.one_shot_count(&SoundEvents::default().land.path), 1);
        assert_eq!(audio.live_instances(), 0);
    }
}
