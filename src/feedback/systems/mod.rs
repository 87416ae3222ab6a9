// ============================================
// Systems Module - ECS-подобные системы
// ============================================

mod init_system;
mod update_system;

pub use init_system::InitSystem;
pub use update_system::UpdateSystem;
