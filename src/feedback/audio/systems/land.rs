// ============================================
// Land System - Звук приземления
// ============================================

use crate::feedback::audio::{AudioBackend, EventRef, InstanceHandle, SoundCooldown, StopMode};
use crate::feedback::player::GroundedChanged;

/// Приземление из события смены контакта с землёй.
///
/// Звук только если `is_grounded`, удар сильнее порога и кулдаун прошёл.
/// Приземление важнее прыжка: звук прыжка обрывается.
/// Возвращает true если звук сработал.
pub fn land_system<B: AudioBackend + ?Sized>(
    audio: &mut B,
    land: &EventRef,
    cooldown: &mut SoundCooldown,
    jump: Option<InstanceHandle>,
    event: GroundedChanged,
    impact_threshold: f32,
    now: f32,
) -> bool {
    // NaN не проходит порог
    if !event.is_grounded || !(event.impact_speed > impact_threshold) {
        return false;
    }
    if !cooldown.is_ready(now) {
        log::debug!("Land sound suppressed by cooldown at t={:.3}", now);
        return false;
    }

    if let Some(handle) = jump.filter(|h| audio.is_valid(*h)) {
        if let Err(e) = audio.stop(handle, StopMode::Immediate) {
            log::warn!("Failed to stop jump cue before landing: {}", e);
        }
    }
    play_land(audio, land, cooldown, now)
}

/// Прямой вызов звука приземления: тот же кулдаун, звук прыжка не трогаем
pub fn play_land<B: AudioBackend + ?Sized>(
    audio: &mut B,
    land: &EventRef,
    cooldown: &mut SoundCooldown,
    now: f32,
) -> bool {
    if !cooldown.try_trigger(now) {
        return false;
    }
    if let Err(e) = audio.play_one_shot(land) {
        log::warn!("Failed to play land sound: {}", e);
    }
    log::debug!("Land sound at t={:.3}", now);
    true
}
