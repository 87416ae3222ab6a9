// ============================================
// Jump System - Звук прыжка
// ============================================

use crate::feedback::audio::{AudioBackend, InstanceHandle, StopMode};

/// Перезапустить звук прыжка с начала.
///
/// Без кулдауна: быстрые повторные прыжки каждый раз перезапускают звук.
pub fn restart_jump_cue<B: AudioBackend + ?Sized>(audio: &mut B, jump: Option<InstanceHandle>) {
    let Some(handle) = jump else {
        return;
    };
    if !audio.is_valid(handle) {
        return;
    }

    if let Err(e) = audio.stop(handle, StopMode::Immediate) {
        log::warn!("Failed to stop jump cue: {}", e);
    }
    if let Err(e) = audio.start(handle) {
        log::warn!("Failed to start jump cue: {}", e);
    }
}
