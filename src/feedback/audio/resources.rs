// ============================================
// Audio Resources - Ссылки на события и хэндлы
// ============================================

use serde::{Deserialize, Serialize};

use super::components::InstanceHandle;

/// Ссылка на звуковое событие.
///
/// Для kira `path` - путь к файлу.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRef {
    pub path: String,
    pub looping: bool,
}

impl EventRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), looping: false }
    }

    pub fn looped(path: impl Into<String>) -> Self {
        Self { path: path.into(), looping: true }
    }
}

impl Default for EventRef {
    fn default() -> Self {
        Self::new("")
    }
}

/// Звуковые события платформера
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundEvents {
    pub music: EventRef,
    pub jump: EventRef,
    pub land: EventRef,
}

impl Default for SoundEvents {
    fn default() -> Self {
        Self {
            music: EventRef::looped("assets/music/background.ogg"),
            jump: EventRef::new("assets/sfx/jump.wav"),
            land: EventRef::new("assets/sfx/land.wav"),
        }
    }
}

/// Экземпляры, которыми владеет контроллер звука.
///
/// `None` = не создан или уже освобождён; `take()` при освобождении
/// исключает повторный release.
#[derive(Debug, Default)]
pub struct SoundInstances {
    pub music: Option<InstanceHandle>,
    pub jump: Option<InstanceHandle>,
}

impl SoundInstances {
    pub fn new() -> Self {
        Self::default()
    }
}
