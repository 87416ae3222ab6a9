// ============================================
// Animation Systems - Логика (ECS)
// ============================================

mod state;
mod idle;
mod particles;

pub use state::{select_state, apply_state};
pub use idle::{idle_scale, move_towards, idle_system};
pub use particles::{land_burst_scale, move_particles_system, tint_emitter};
