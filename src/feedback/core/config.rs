// ============================================
// Feedback Config - Data-Driven из JSON
// ============================================
// Все параметры имеют значения по умолчанию,
// JSON может переопределить любую часть.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{FeedbackError, Result};
use crate::feedback::audio::SoundEvents;

/// Переменная окружения с путём к конфигу
pub const CONFIG_ENV: &str = "FEEDBACK_CONFIG";

/// Полная конфигурация обратной связи
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub sound: SoundSettings,
    pub animation: AnimationSettings,
}

/// Настройки звука
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    pub events: SoundEvents,
    /// Минимальный интервал между звуками приземления (сек)
    pub land_cooldown: f32,
    pub enable_background_music: bool,
    /// Скорость удара, выше которой звучит приземление
    pub land_impact_threshold: f32,
    /// Длина затухания музыки при остановке с fade-out (сек)
    pub music_fade_out: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            events: SoundEvents::default(),
            land_cooldown: 0.1,
            enable_background_music: true,
            land_impact_threshold: 5.0,
            music_fade_out: 1.0,
        }
    }
}

/// Idle "дыхание": scaleY = sin(t * frequency) * amplitude + offset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleScaleSettings {
    pub frequency: f32,
    pub amplitude: f32,
    pub offset: f32,
}

impl Default for IdleScaleSettings {
    fn default() -> Self {
        Self {
            frequency: 2.0,
            amplitude: 0.05,
            offset: 0.95,
        }
    }
}

/// Настройки анимации и частиц
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub base_scale: [f32; 3],
    pub idle: IdleScaleSettings,
    /// Скорость move-toward для масштабов (единиц/сек)
    pub ease_rate: f32,
    /// |input.x| выше порога = бег, ниже = стойка
    pub run_threshold: f32,
    pub ground_probe_length: f32,
    /// Скорость удара -> масштаб всплеска приземления [0, 1]
    pub land_impact_range: [f32; 2],
    pub tint_min_factor: f32,
    pub tint_max_factor: f32,
    /// false = играть состояние только при его смене
    pub reapply_state_every_tick: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            base_scale: [1.0, 1.0, 1.0],
            idle: IdleScaleSettings::default(),
            ease_rate: 2.0,
            run_threshold: 0.1,
            ground_probe_length: 2.0,
            land_impact_range: [0.0, 40.0],
            tint_min_factor: 0.9,
            tint_max_factor: 1.2,
            reapply_state_every_tick: false,
        }
    }
}

impl FeedbackConfig {
    /// Загрузить конфиг из JSON строки
    pub fn load_from_json(json: &str) -> Result<Self> {
        let config: FeedbackConfig = serde_json::from_str(json)
            .map_err(|e| FeedbackError::Config(format!("Failed to parse JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Загрузить конфиг из файла
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| FeedbackError::Config(format!("Failed to read file: {}", e)))?;
        Self::load_from_json(&content)
    }

    /// Загрузить или взять значения по умолчанию
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path.as_ref()) {
            Ok(config) => {
                log::info!("Loaded feedback config from {}", path.as_ref().display());
                config
            }
            Err(e) => {
                log::warn!("Using default feedback config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let sound = &self.sound;
        if sound.land_cooldown < 0.0 {
            return Err(FeedbackError::Config("land_cooldown must be >= 0".into()));
        }
        if sound.music_fade_out < 0.0 {
            return Err(FeedbackError::Config("music_fade_out must be >= 0".into()));
        }

        let anim = &self.animation;
        if anim.ease_rate < 0.0 {
            return Err(FeedbackError::Config("ease_rate must be >= 0".into()));
        }
        if anim.ground_probe_length < 0.0 {
            return Err(FeedbackError::Config("ground_probe_length must be >= 0".into()));
        }
        // scaleY делит base_scale.x, поэтому минимум синусоиды должен быть > 0
        if anim.idle.offset - anim.idle.amplitude.abs() <= 0.0 {
            return Err(FeedbackError::Config(
                "idle offset must exceed amplitude so scale stays positive".into(),
            ));
        }
        let [lo, hi] = anim.land_impact_range;
        if hi <= lo {
            return Err(FeedbackError::Config(format!(
                "land_impact_range is empty: [{}, {}]",
                lo, hi
            )));
        }
        Ok(())
    }
}
