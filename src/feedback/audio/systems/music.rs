// ============================================
// Music System - Фоновая музыка и освобождение
// ============================================

use crate::feedback::audio::{AudioBackend, EventRef, InstanceHandle, StopMode};

/// Создать и запустить фоновую музыку
pub fn start_music<B: AudioBackend + ?Sized>(audio: &mut B, music: &EventRef) -> Option<InstanceHandle> {
    let handle = match audio.create_instance(music) {
        Ok(handle) => handle,
        Err(e) => {
            log::warn!("Background music unavailable: {}", e);
            return None;
        }
    };
    if let Err(e) = audio.start(handle) {
        log::warn!("Failed to start background music: {}", e);
    }
    Some(handle)
}

/// Остановить и освободить экземпляр.
///
/// Хэндл забирается из слота, поэтому повторный вызов ничего не делает.
/// Невалидный хэндл молча пропускается.
pub fn release_instance<B: AudioBackend + ?Sized>(
    audio: &mut B,
    slot: &mut Option<InstanceHandle>,
    mode: StopMode,
) {
    let Some(handle) = slot.take() else {
        return;
    };
    if !audio.is_valid(handle) {
        return;
    }

    if let Err(e) = audio.stop(handle, mode) {
        log::warn!("Failed to stop {:?}: {}", handle, e);
    }
    if let Err(e) = audio.release(handle) {
        log::warn!("Failed to release {:?}: {}", handle, e);
    }
}
