// ============================================
// Audio Systems - Логика (ECS)
// ============================================

mod jump;
mod land;
mod music;

pub use jump::restart_jump_cue;
pub use land::{land_system, play_land};
pub use music::{start_music, release_instance};
