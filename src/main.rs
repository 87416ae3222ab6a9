// ============================================
// Feedback Demo - Скриптовый забег без окна
// ============================================
// Простой контроллер движения шлёт события,
// обратная связь реагирует. Всё видно в логе (RUST_LOG=debug).

use std::env;
use std::thread;
use std::time::Duration;

use ultraviolet::{Vec2, Vec3};

use platformer_feedback::feedback::animation::{
    AnimationRig, AnimationState, HeadlessAnimator, HeadlessBody, HeadlessEmitter, ParticleRig, Platform,
    Rgba, SurfaceMap,
};
use platformer_feedback::feedback::core::CONFIG_ENV;
use platformer_feedback::{FeedbackConfig, FrameInput, GroundedChanged, InitSystem, PlayerEvents, UpdateSystem};

/// Константы движения
const GRAVITY: f32 = 40.0;
const JUMP_VELOCITY: f32 = 14.0;
const MOVE_SPEED: f32 = 6.0;

const FRAME_DT: f32 = 1.0 / 60.0;
const DEMO_SECONDS: f32 = 6.0;

/// Игрок-заглушка: только то, что нужно для событий
struct ScriptedPlayer {
    position: Vec2,
    velocity: Vec2,
    on_ground: bool,
}

impl ScriptedPlayer {
    fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zero(),
            on_ground: false,
        }
    }

    fn step(&mut self, input: FrameInput, jump: bool, map: &SurfaceMap, events: &mut PlayerEvents, dt: f32) {
        events.set_frame_input(input);
        self.velocity.x = input.x() * MOVE_SPEED;

        if jump && self.on_ground {
            self.velocity.y = JUMP_VELOCITY;
            self.on_ground = false;
            events.emit_jumped();
            events.emit_grounded_changed(GroundedChanged::left_ground());
        } else if !self.on_ground {
            self.velocity.y -= GRAVITY * dt;
        }

        let ground = map.ground_below(self.position);
        self.position += self.velocity * dt;

        match ground {
            Some(top) if !self.on_ground && self.velocity.y <= 0.0 && self.position.y <= top => {
                let impact = -self.velocity.y;
                self.position.y = top;
                self.velocity.y = 0.0;
                self.on_ground = true;
                events.emit_grounded_changed(GroundedChanged::landed(impact));
            }
            _ if self.on_ground && map.ground_below(self.position) != Some(self.position.y) => {
                // Сошли с края платформы
                self.on_ground = false;
                events.emit_grounded_changed(GroundedChanged::left_ground());
            }
            _ => {}
        }
    }
}

/// Ввод по сценарию: (x, прыжок в этом кадре)
fn scripted_input(time: f32, prev_time: f32) -> (FrameInput, bool) {
    let crossed = |mark: f32| prev_time < mark && time >= mark;
    let x = match time {
        t if t < 1.0 => 0.0,
        t if t < 3.5 => 1.0,
        t if t < 4.2 => -1.0,
        _ => 0.0,
    };
    (FrameInput::new(x, 0.0), crossed(2.5) || crossed(4.2))
}

fn main() {
    env_logger::init();

    let config = match env::var(CONFIG_ENV) {
        Ok(path) => FeedbackConfig::load_or_default(path),
        Err(_) => FeedbackConfig::default(),
    };

    let stone = Rgba::new(0.5, 0.5, 0.52, 1.0);
    let moss = Rgba::new(0.3, 0.6, 0.25, 1.0);
    let map = SurfaceMap::new()
        .with(Platform::solid(-20.0, 8.0, 0.0, stone))
        .with(Platform::solid(8.0, 40.0, -1.0, moss));

    let animator = HeadlessAnimator::new();
    let land = HeadlessEmitter::new();
    let jump = HeadlessEmitter::new();
    let body = HeadlessBody::new(Vec2::new(0.0, 3.0), Vec3::one());
    let rig = AnimationRig {
        animator: Box::new(animator.clone()),
        body: Box::new(body.clone()),
        particles: ParticleRig {
            jump: Box::new(jump.clone()),
            launch: Box::new(HeadlessEmitter::new()),
            moving: Box::new(HeadlessEmitter::new()),
            land: Box::new(land.clone()),
        },
    };

    let audio = InitSystem::create_audio_backend(&config.sound);
    let mut resources = InitSystem::create_resources(config, audio, rig, Box::new(map.clone()));
    let mut player = ScriptedPlayer::new(Vec2::new(0.0, 3.0));

    let mut last_state: Option<AnimationState> = None;
    let mut prev_time = 0.0;
    let frames = (DEMO_SECONDS / FRAME_DT) as u32;

    for _ in 0..frames {
        let frame = UpdateSystem::begin_frame(&mut resources, FRAME_DT);
        let (input, jump_pressed) = scripted_input(frame.time, prev_time);
        prev_time = frame.time;

        player.step(input, jump_pressed, &map, &mut resources.events, frame.dt);
        body.set_position(player.position);

        let state = UpdateSystem::update(&mut resources);
        if last_state != Some(state) {
            log::info!("t={:.2} pos=({:.2}, {:.2}) -> {}", frame.time, player.position.x, player.position.y, state.name());
            last_state = Some(state);
        }

        thread::sleep(Duration::from_secs_f32(FRAME_DT));
    }

    UpdateSystem::shutdown(&mut resources);

    log::info!(
        "Done: {} animation changes, {} jump bursts, {} land bursts",
        animator.history().len(),
        jump.snapshot().play_count,
        land.snapshot().play_count,
    );
}
