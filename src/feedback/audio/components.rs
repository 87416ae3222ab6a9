// ============================================
// Audio Components - Чистые данные (ECS)
// ============================================

/// Хэндл экземпляра звукового события в бэкенде
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceHandle(pub u64);

/// Режим остановки экземпляра
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopMode {
    /// Жёсткая отмена без затухания
    Immediate,
    /// С затуханием (только фоновая музыка при завершении)
    AllowFadeOut,
}

/// Кулдаун звука приземления.
///
/// Звук разрешён только если `now - last_trigger >= duration`.
/// До первого срабатывания ограничения нет.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundCooldown {
    pub last_trigger: Option<f32>,
    pub duration: f32,
}

impl SoundCooldown {
    pub fn new(duration: f32) -> Self {
        Self {
            last_trigger: None,
            duration: duration.max(0.0),
        }
    }

    /// Прошёл ли кулдаун к моменту `now`
    pub fn is_ready(&self, now: f32) -> bool {
        match self.last_trigger {
            Some(last) => now - last >= self.duration,
            None => true,
        }
    }

    /// Если готов - зафиксировать срабатывание
    pub fn try_trigger(&mut self, now: f32) -> bool {
        if !self.is_ready(now) {
            return false;
        }
        self.last_trigger = Some(now);
        true
    }
}

/// Состояние контроллера звука
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// Источник событий не найден - ничего не делаем
    Disabled,
    Active,
    /// Ресурсы освобождены
    TornDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_trigger_always_allowed() {
        let mut cooldown = SoundCooldown::new(0.1);
        assert!(cooldown.try_trigger(0.0));
    }

    #[test]
    fn test_cooldown_boundary_is_inclusive() {
        let mut cooldown = SoundCooldown::new(0.5);
        assert!(cooldown.try_trigger(1.0));
        assert!(!cooldown.try_trigger(1.25));
        assert!(cooldown.try_trigger(1.5));
        assert_eq!(cooldown.last_trigger, Some(1.5));
    }

    #[test]
    fn test_suppressed_trigger_keeps_timestamp() {
        let mut cooldown = SoundCooldown::new(0.1);
        cooldown.try_trigger(2.0);
        cooldown.try_trigger(2.05);
        assert_eq!(cooldown.last_trigger, Some(2.0));
    }
}
