// ============================================
// Player Events Hub - Однопоточная доставка событий
// ============================================
// События доставляются синхронно, без очереди,
// в порядке подписки.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::events::{
    FrameInput, FrameInputSampler, GroundedChanged, PlayerEventListener, PlayerEventNotifier,
    SubscriptionId,
};

type ListenerRef = Weak<RefCell<dyn PlayerEventListener>>;

/// Источник событий игрока для хоста: контроллер движения
/// вызывает `emit_*`, обратная связь подписывается.
pub struct PlayerEvents {
    listeners: Vec<(SubscriptionId, ListenerRef)>,
    next_id: u64,
    input: FrameInput,
}

impl PlayerEvents {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
            input: FrameInput::default(),
        }
    }

    /// Обновить ввод кадра (вызывает контроллер движения)
    pub fn set_frame_input(&mut self, input: FrameInput) {
        self.input = input;
    }

    /// Прыжок начат
    pub fn emit_jumped(&mut self) {
        for listener in self.live_listeners() {
            match listener.try_borrow_mut() {
                Ok(mut l) => l.on_jumped(),
                Err(_) => log::warn!("Jumped skipped: listener is busy (re-entrant delivery)"),
            }
        }
    }

    /// Смена контакта с землёй
    pub fn emit_grounded_changed(&mut self, event: GroundedChanged) {
        for listener in self.live_listeners() {
            match listener.try_borrow_mut() {
                Ok(mut l) => l.on_grounded_changed(event),
                Err(_) => log::warn!("GroundedChanged skipped: listener is busy (re-entrant delivery)"),
            }
        }
    }

    /// Количество живых подписчиков
    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|(_, l)| l.strong_count() > 0).count()
    }

    /// Собрать живых подписчиков, мёртвые выкинуть
    fn live_listeners(&mut self) -> Vec<Rc<RefCell<dyn PlayerEventListener>>> {
        self.listeners.retain(|(_, l)| l.strong_count() > 0);
        self.listeners.iter().filter_map(|(_, l)| l.upgrade()).collect()
    }
}

impl Default for PlayerEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerEventNotifier for PlayerEvents {
    fn subscribe(&mut self, listener: ListenerRef) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl FrameInputSampler for PlayerEvents {
    fn frame_input(&self) -> FrameInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        jumps: u32,
        grounded: Vec<GroundedChanged>,
    }

    impl PlayerEventListener for Counter {
        fn on_jumped(&mut self) {
            self.jumps += 1;
        }

        fn on_grounded_changed(&mut self, event: GroundedChanged) {
            self.grounded.push(event);
        }
    }

    fn subscribe(hub: &mut PlayerEvents, counter: &Rc<RefCell<Counter>>) -> SubscriptionId {
        let weak = Rc::downgrade(counter);
        let listener: Weak<RefCell<dyn PlayerEventListener>> = weak;
        hub.subscribe(listener)
    }

    #[test]
    fn test_events_reach_subscribers() {
        let mut hub = PlayerEvents::new();
        let counter = Rc::new(RefCell::new(Counter::default()));
        subscribe(&mut hub, &counter);

        hub.emit_jumped();
        hub.emit_grounded_changed(GroundedChanged::landed(12.0));

        let c = counter.borrow();
        assert_eq!(c.jumps, 1);
        assert_eq!(c.grounded, vec![GroundedChanged::landed(12.0)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut hub = PlayerEvents::new();
        let counter = Rc::new(RefCell::new(Counter::default()));
        let id = subscribe(&mut hub, &counter);

        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        hub.emit_jumped();

        assert_eq!(counter.borrow().jumps, 0);
    }

    #[test]
    fn test_dropped_listener_is_pruned() {
        let mut hub = PlayerEvents::new();
        let counter = Rc::new(RefCell::new(Counter::default()));
        subscribe(&mut hub, &counter);
        assert_eq!(hub.listener_count(), 1);

        drop(counter);
        hub.emit_jumped();

        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_landed_clamps_negative_speed() {
        assert_eq!(GroundedChanged::landed(-3.0).impact_speed, 0.0);
    }
}
