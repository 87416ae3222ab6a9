// ============================================
// Errors - Ошибки подсистем обратной связи
// ============================================
// Все ошибки локальны: контроллеры их логируют и продолжают работу.

use thiserror::Error;

use crate::feedback::audio::InstanceHandle;

#[derive(Debug, Error)]
pub enum FeedbackError {
    /// Не найден обязательный соавтор (источник событий игрока)
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// Хэндл не создан или уже освобождён
    #[error("invalid sound instance handle {0:?}")]
    InvalidHandle(InstanceHandle),

    /// Бэкенд не знает такого события
    #[error("unknown sound event '{0}'")]
    UnknownEvent(String),

    #[error("audio backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;
