// ============================================
// Audio Backend - Интерфейс звукового движка
// ============================================
// Синхронный fire-and-forget. Ошибки возвращаются,
// контроллер сам решает что с ними делать.

use super::components::{InstanceHandle, StopMode};
use super::resources::EventRef;
use crate::feedback::core::Result;

pub trait AudioBackend {
    /// Создать экземпляр события (не запущен)
    fn create_instance(&mut self, event: &EventRef) -> Result<InstanceHandle>;

    /// Запустить с начала. Уже играющий экземпляр перезапускается.
    fn start(&mut self, handle: InstanceHandle) -> Result<()>;

    fn stop(&mut self, handle: InstanceHandle, mode: StopMode) -> Result<()>;

    /// Освободить экземпляр; после этого хэндл невалиден
    fn release(&mut self, handle: InstanceHandle) -> Result<()>;

    fn is_valid(&self, handle: InstanceHandle) -> bool;

    /// Одноразовое проигрывание без хэндла
    fn play_one_shot(&mut self, event: &EventRef) -> Result<()>;
}

impl<T: AudioBackend + ?Sized> AudioBackend for Box<T> {
    fn create_instance(&mut self, event: &EventRef) -> Result<InstanceHandle> {
        (**self).create_instance(event)
    }

    fn start(&mut self, handle: InstanceHandle) -> Result<()> {
        (**self).start(handle)
    }

    fn stop(&mut self, handle: InstanceHandle, mode: StopMode) -> Result<()> {
        (**self).stop(handle, mode)
    }

    fn release(&mut self, handle: InstanceHandle) -> Result<()> {
        (**self).release(handle)
    }

    fn is_valid(&self, handle: InstanceHandle) -> bool {
        (**self).is_valid(handle)
    }

    fn play_one_shot(&mut self, event: &EventRef) -> Result<()> {
        (**self).play_one_shot(event)
    }
}
