// ============================================
// Animation Module - Анимация и частицы персонажа
// ============================================
// Каждый кадр строго по порядку:
//   цвет земли -> состояние анимации -> дыхание -> частицы движения.
// События (прыжок, земля) обрабатываются отдельно, по факту.

mod components;
mod rig;
mod ground;
mod headless;
mod systems;

pub use components::*;
pub use rig::*;
pub use ground::*;
pub use headless::*;
pub use systems::*;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ultraviolet::Vec3;

use crate::feedback::core::{AnimationSettings, FrameClock};
use crate::feedback::player::{
    FrameInputSampler, GroundedChanged, PlayerEventListener, PlayerEventNotifier, SubscriptionId,
};

/// Контроллер анимационной обратной связи
pub struct AnimationFeedback {
    rig: AnimationRig,
    probe: Box<dyn GroundProbe>,
    sampler: GroundSampler,
    settings: AnimationSettings,
    base_scale: Vec3,
    clock: FrameClock,

    grounded: bool,
    facing_right: bool,
    /// Последний известный оттенок земли
    tint: Option<TintRange>,
    /// Последнее отправленное аниматору состояние
    current_state: Option<AnimationState>,
    subscription: Option<SubscriptionId>,
}

impl AnimationFeedback {
    pub fn new(
        rig: AnimationRig,
        probe: Box<dyn GroundProbe>,
        settings: AnimationSettings,
        clock: FrameClock,
    ) -> Self {
        let [x, y, z] = settings.base_scale;
        Self {
            rig,
            probe,
            sampler: GroundSampler::new(settings.ground_probe_length),
            base_scale: Vec3::new(x, y, z),
            settings,
            clock,
            grounded: false,
            facing_right: true,
            tint: None,
            current_state: None,
            subscription: None,
        }
    }

    /// Активация: подписка на события и запуск частиц движения
    pub fn attach(this: &Rc<RefCell<Self>>, source: &mut dyn PlayerEventNotifier) {
        let mut controller = this.borrow_mut();
        if controller.subscription.is_some() {
            return;
        }
        let weak = Rc::downgrade(this);
        let listener: Weak<RefCell<dyn PlayerEventListener>> = weak;
        controller.subscription = Some(source.subscribe(listener));
        controller.rig.particles.moving.play();
    }

    /// Деактивация: отписка и остановка частиц движения
    pub fn detach(&mut self, source: &mut dyn PlayerEventNotifier) {
        if let Some(id) = self.subscription.take() {
            source.unsubscribe(id);
            self.rig.particles.moving.stop();
        }
    }

    /// Покадровое обновление
    pub fn update(&mut self, input: &dyn FrameInputSampler) -> AnimationState {
        let frame = self.clock.frame();
        let input_x = input.frame_input().x();

        // 1. Цвет земли
        self.detect_ground_color();

        // 2. Состояние анимации
        let state = select_state(self.grounded, &mut self.facing_right, input_x, self.settings.run_threshold);
        apply_state(
            self.rig.animator.as_mut(),
            state,
            &mut self.current_state,
            self.settings.reapply_state_every_tick,
        );

        // 3. Дыхание в покое
        idle_system(
            self.rig.body.as_mut(),
            self.grounded,
            input_x,
            self.base_scale,
            &self.settings.idle,
            self.settings.ease_rate,
            self.settings.run_threshold,
            frame.time,
            frame.dt,
        );

        // 4. Частицы движения
        move_particles_system(self.rig.particles.moving.as_mut(), input_x, self.settings.ease_rate, frame.dt);

        log::trace!("anim tick t={:.3} x={:.2} state={}", frame.time, input_x, state.name());
        state
    }

    /// Прыжок: всплеск только с земли (двойной прыжок в воздухе без частиц)
    pub fn on_jumped(&mut self) {
        if !self.grounded {
            return;
        }
        let particles = &mut self.rig.particles;
        tint_emitter(particles.jump.as_mut(), self.tint);
        tint_emitter(particles.launch.as_mut(), self.tint);
        particles.jump.play();
    }

    pub fn on_grounded_changed(&mut self, event: GroundedChanged) {
        self.grounded = event.is_grounded;

        if event.is_grounded {
            self.detect_ground_color();
            let burst = land_burst_scale(event.impact_speed, self.settings.land_impact_range);
            let particles = &mut self.rig.particles;
            tint_emitter(particles.land.as_mut(), self.tint);
            particles.moving.play();
            particles.land.set_local_scale(Vec3::one() * burst);
            particles.land.play();
        } else {
            self.rig.particles.moving.stop();
        }
    }

    /// Луч вниз; при неудаче оттенок не меняется
    fn detect_ground_color(&mut self) {
        let origin = self.rig.body.position();
        let Some(sample) = self.sampler.sample(self.probe.as_ref(), origin) else {
            return;
        };
        let range = sample.tint_range(self.settings.tint_min_factor, self.settings.tint_max_factor);
        if self.tint != Some(range) {
            log::debug!("Ground tint -> {:?}", sample.base_color);
        }
        self.tint = Some(range);
        self.rig.particles.moving.set_start_color(range);
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn current_state(&self) -> Option<AnimationState> {
        self.current_state
    }

    pub fn tint(&self) -> Option<TintRange> {
        self.tint
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

impl PlayerEventListener for AnimationFeedback {
    fn on_jumped(&mut self) {
        AnimationFeedback::on_jumped(self);
    }

    fn on_grounded_changed(&mut self, event: GroundedChanged) {
        AnimationFeedback::on_grounded_changed(self, event);
    }
}

impl Drop for AnimationFeedback {
    fn drop(&mut self) {
        if self.subscription.take().is_some() {
            self.rig.particles.moving.stop();
        }
    }
}
