// ============================================
// Kira Backend - Реальное воспроизведение через kira
// ============================================

use std::collections::HashMap;
use std::time::Duration;

use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
};

use super::backend::AudioBackend;
use super::components::{InstanceHandle, StopMode};
use super::resources::EventRef;
use crate::feedback::core::{FeedbackError, Result};

/// Экземпляр события: данные + текущее воспроизведение
struct KiraInstance {
    data: StaticSoundData,
    playing: Option<StaticSoundHandle>,
}

pub struct KiraBackend {
    manager: AudioManager,
    /// Загруженные файлы по пути
    cache: HashMap<String, StaticSoundData>,
    instances: HashMap<InstanceHandle, KiraInstance>,
    next_handle: u64,
    fade_out: Duration,
}

impl KiraBackend {
    pub fn new(fade_out_secs: f32) -> Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| FeedbackError::Backend(format!("Failed to create audio manager: {:?}", e)))?;

        log::info!("Kira audio backend initialized");

        Ok(Self {
            manager,
            cache: HashMap::new(),
            instances: HashMap::new(),
            next_handle: 0,
            fade_out: Duration::from_secs_f32(fade_out_secs.max(0.0)),
        })
    }

    /// Загрузить (или взять из кэша) звук события
    fn load(&mut self, event: &EventRef) -> Result<StaticSoundData> {
        if let Some(data) = self.cache.get(&event.path) {
            return Ok(data.clone());
        }

        let data = StaticSoundData::from_file(&event.path)
            .map_err(|e| FeedbackError::UnknownEvent(format!("{}: {:?}", event.path, e)))?;
        log::info!("Loaded sound: {}", event.path);

        let data = if event.looping {
            data.with_settings(StaticSoundSettings::new().loop_region(..))
        } else {
            data
        };
        self.cache.insert(event.path.clone(), data.clone());
        Ok(data)
    }

    fn tween_for(&self, mode: StopMode) -> Tween {
        let duration = match mode {
            StopMode::Immediate => Duration::ZERO,
            StopMode::AllowFadeOut => self.fade_out,
        };
        Tween {
            duration,
            ..Default::default()
        }
    }
}

impl AudioBackend for KiraBackend {
    fn create_instance(&mut self, event: &EventRef) -> Result<InstanceHandle> {
        let data = self.load(event)?;
        self.next_handle += 1;
        let handle = InstanceHandle(self.next_handle);
        self.instances.insert(handle, KiraInstance { data, playing: None });
        Ok(handle)
    }

    fn start(&mut self, handle: InstanceHandle) -> Result<()> {
        let immediate = self.tween_for(StopMode::Immediate);
        let instance = self
            .instances
            .get_mut(&handle)
            .ok_or(FeedbackError::InvalidHandle(handle))?;

        if let Some(mut previous) = instance.playing.take() {
            let _ = previous.stop(immediate);
        }
        let sound = self
            .manager
            .play(instance.data.clone())
            .map_err(|e| FeedbackError::Backend(format!("Failed to play sound: {:?}", e)))?;
        instance.playing = Some(sound);
        Ok(())
    }

    fn stop(&mut self, handle: InstanceHandle, mode: StopMode) -> Result<()> {
        let tween = self.tween_for(mode);
        let instance = self
            .instances
            .get_mut(&handle)
            .ok_or(FeedbackError::InvalidHandle(handle))?;

        if let Some(mut sound) = instance.playing.take() {
            let _ = sound.stop(tween);
        }
        Ok(())
    }

    fn release(&mut self, handle: InstanceHandle) -> Result<()> {
        // Уже остановленный звук с fade-out доигрывает затухание сам
        self.instances
            .remove(&handle)
            .map(|_| ())
            .ok_or(FeedbackError::InvalidHandle(handle))
    }

    fn is_valid(&self, handle: InstanceHandle) -> bool {
        self.instances.contains_key(&handle)
    }

    fn play_one_shot(&mut self, event: &EventRef) -> Result<()> {
        let data = self.load(event)?;
        self.manager
            .play(data)
            .map(|_| ())
            .map_err(|e| FeedbackError::Backend(format!("Failed to play one-shot: {:?}", e)))
    }
}
