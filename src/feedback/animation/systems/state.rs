// ============================================
// State System - Выбор состояния анимации
// ============================================

use crate::feedback::animation::{AnimationState, SpriteAnimator};

/// Выбрать состояние по (на земле, куда смотрит, ввод по X).
///
/// Направление меняется только при ненулевом вводе, иначе остаётся прежним.
pub fn select_state(grounded: bool, facing_right: &mut bool, input_x: f32, run_threshold: f32) -> AnimationState {
    if input_x != 0.0 {
        *facing_right = input_x > 0.0;
    }

    if !grounded {
        if *facing_right { AnimationState::JumpRight } else { AnimationState::JumpLeft }
    } else if input_x.abs() > run_threshold {
        if *facing_right { AnimationState::RunRight } else { AnimationState::RunLeft }
    } else {
        AnimationState::Stand
    }
}

/// Передать состояние аниматору.
///
/// Без `reapply` повторное то же состояние не отправляется,
/// чтобы аниматор не перезапускал клип каждый кадр.
pub fn apply_state(
    animator: &mut dyn SpriteAnimator,
    state: AnimationState,
    current: &mut Option<AnimationState>,
    reapply: bool,
) -> bool {
    if !reapply && *current == Some(state) {
        return false;
    }
    if *current != Some(state) {
        log::debug!("Animation state -> {}", state.name());
    }
    animator.play(state.name());
    *current = Some(state);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::animation::HeadlessAnimator;

    #[test]
    fn test_airborne_right() {
        let mut facing = true;
        assert_eq!(select_state(false, &mut facing, 0.3, 0.1), AnimationState::JumpRight);
    }

    #[test]
    fn test_small_input_stands_but_turns() {
        let mut facing = true;
        assert_eq!(select_state(true, &mut facing, -0.05, 0.1), AnimationState::Stand);
        assert!(!facing);
    }

    #[test]
    fn test_run_left() {
        let mut facing = true;
        assert_eq!(select_state(true, &mut facing, -0.5, 0.1), AnimationState::RunLeft);
    }

    #[test]
    fn test_facing_is_sticky_on_zero_input() {
        let mut facing = true;
        select_state(true, &mut facing, -0.8, 0.1);
        assert_eq!(select_state(false, &mut facing, 0.0, 0.1), AnimationState::JumpLeft);
        assert_eq!(select_state(true, &mut facing, 0.0, 0.1), AnimationState::Stand);
        assert!(!facing);
    }

    #[test]
    fn test_same_state_guard() {
        let animator = HeadlessAnimator::new();
        let mut sink = animator.clone();
        let mut current = None;

        assert!(apply_state(&mut sink, AnimationState::Stand, &mut current, false));
        assert!(!apply_state(&mut sink, AnimationState::Stand, &mut current, false));
        assert!(apply_state(&mut sink, AnimationState::RunRight, &mut current, false));

        assert_eq!(animator.history(), vec!["Stand", "RunRight"]);
    }

    #[test]
    fn test_reapply_every_tick() {
        let animator = HeadlessAnimator::new();
        let mut sink = animator.clone();
        let mut current = None;

        apply_state(&mut sink, AnimationState::Stand, &mut current, true);
        apply_state(&mut sink, AnimationState::Stand, &mut current, true);

        assert_eq!(animator.history().len(), 2);
    }
}
