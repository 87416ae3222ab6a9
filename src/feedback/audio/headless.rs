// ============================================
// Headless Audio - Бэкенд без звукового устройства
// ============================================
// Ведёт журнал вызовов. Для серверов, CI и тестов.
// Клоны разделяют одно состояние.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::backend::AudioBackend;
use super::components::{InstanceHandle, StopMode};
use super::resources::EventRef;
use crate::feedback::core::{FeedbackError, Result};

/// Запись журнала
#[derive(Clone, Debug, PartialEq)]
pub enum AudioCall {
    Create(InstanceHandle, String),
    Start(InstanceHandle),
    Stop(InstanceHandle, StopMode),
    Release(InstanceHandle),
    OneShot(String),
}

#[derive(Default)]
struct HeadlessState {
    next_handle: u64,
    live: HashSet<InstanceHandle>,
    playing: HashSet<InstanceHandle>,
    missing_events: HashSet<String>,
    journal: Vec<AudioCall>,
}

#[derive(Clone, Default)]
pub struct HeadlessAudio {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Событие с таким путём будет "не найдено"
    pub fn mark_missing(&self, path: impl Into<String>) {
        self.state.borrow_mut().missing_events.insert(path.into());
    }

    pub fn journal(&self) -> Vec<AudioCall> {
        self.state.borrow().journal.clone()
    }

    pub fn clear_journal(&self) {
        self.state.borrow_mut().journal.clear();
    }

    /// Сколько раз проиграли one-shot с этим путём
    pub fn one_shot_count(&self, path: &str) -> usize {
        self.state
            .borrow()
            .journal
            .iter()
            .filter(|c| matches!(c, AudioCall::OneShot(p) if p == path))
            .count()
    }

    pub fn live_instances(&self) -> usize {
        self.state.borrow().live.len()
    }

    pub fn is_playing(&self, handle: InstanceHandle) -> bool {
        self.state.borrow().playing.contains(&handle)
    }

    fn check_event(state: &HeadlessState, event: &EventRef) -> Result<()> {
        if state.missing_events.contains(&event.path) {
            return Err(FeedbackError::UnknownEvent(event.path.clone()));
        }
        Ok(())
    }
}

impl AudioBackend for HeadlessAudio {
    fn create_instance(&mut self, event: &EventRef) -> Result<InstanceHandle> {
        let mut state = self.state.borrow_mut();
        Self::check_event(&state, event)?;

        state.next_handle += 1;
        let handle = InstanceHandle(state.next_handle);
        state.live.insert(handle);
        state.journal.push(AudioCall::Create(handle, event.path.clone()));
        log::debug!("[headless] create {:?} for {}", handle, event.path);
        Ok(handle)
    }

    fn start(&mut self, handle: InstanceHandle) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.live.contains(&handle) {
            return Err(FeedbackError::InvalidHandle(handle));
        }
        state.playing.insert(handle);
        state.journal.push(AudioCall::Start(handle));
        Ok(())
    }

    fn stop(&mut self, handle: InstanceHandle, mode: StopMode) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.live.contains(&handle) {
            return Err(FeedbackError::InvalidHandle(handle));
        }
        state.playing.remove(&handle);
        state.journal.push(AudioCall::Stop(handle, mode));
        Ok(())
    }

    fn release(&mut self, handle: InstanceHandle) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.live.remove(&handle) {
            return Err(FeedbackError::InvalidHandle(handle));
        }
        state.playing.remove(&handle);
        state.journal.push(AudioCall::Release(handle));
        Ok(())
    }

    fn is_valid(&self, handle: InstanceHandle) -> bool {
        self.state.borrow().live.contains(&handle)
    }

    fn play_one_shot(&mut self, event: &EventRef) -> Result<()> {
        let mut state = self.state.borrow_mut();
        Self::check_event(&state, event)?;
        state.journal.push(AudioCall::OneShot(event.path.clone()));
        log::debug!("[headless] one-shot {}", event.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_invalidates_handle() {
        let mut audio = HeadlessAudio::new();
        let handle = audio.create_instance(&EventRef::new("jump.wav")).unwrap();
        assert!(audio.is_valid(handle));

        audio.release(handle).unwrap();

        assert!(!audio.is_valid(handle));
        assert!(matches!(audio.release(handle), Err(FeedbackError::InvalidHandle(_))));
        assert!(matches!(audio.start(handle), Err(FeedbackError::InvalidHandle(_))));
    }

    #[test]
    fn test_missing_event_fails_creation() {
        let mut audio = HeadlessAudio::new();
        audio.mark_missing("music.ogg");

        assert!(matches!(
            audio.create_instance(&EventRef::looped("music.ogg")),
            Err(FeedbackError::UnknownEvent(_))
        ));
        assert_eq!(audio.live_instances(), 0);
    }

    #[test]
    fn test_clones_share_journal() {
        let audio = HeadlessAudio::new();
        let mut backend = audio.clone();
        backend.play_one_shot(&EventRef::new("land.wav")).unwrap();

        assert_eq!(audio.one_shot_count("land.wav"), 1);
    }
}
