// ============================================
// Headless Rig - Визуал без рендера
// ============================================
// Хранит то, что увидел бы игрок. Клоны разделяют состояние,
// поэтому хост может читать эмиттер после передачи в контроллер.

use std::cell::RefCell;
use std::rc::Rc;

use ultraviolet::{Vec2, Vec3};

use super::components::{Rgba, TintRange};
use super::ground::{GroundProbe, ProbeHit};
use super::rig::{ParticleEmitter, SpriteAnimator, VisualTarget};

/// Наблюдаемое состояние эмиттера
#[derive(Clone, Debug, PartialEq)]
pub struct EmitterState {
    pub playing: bool,
    pub play_count: u32,
    pub stop_count: u32,
    pub start_color: Option<TintRange>,
    pub scale: Vec3,
}

impl Default for EmitterState {
    fn default() -> Self {
        Self {
            playing: false,
            play_count: 0,
            stop_count: 0,
            start_color: None,
            scale: Vec3::one(),
        }
    }
}

#[derive(Clone, Default)]
pub struct HeadlessEmitter {
    state: Rc<RefCell<EmitterState>>,
}

impl HeadlessEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> EmitterState {
        self.state.borrow().clone()
    }
}

impl ParticleEmitter for HeadlessEmitter {
    fn play(&mut self) {
        let mut state = self.state.borrow_mut();
        state.playing = true;
        state.play_count += 1;
    }

    fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.playing = false;
        state.stop_count += 1;
    }

    fn set_start_color(&mut self, range: TintRange) {
        self.state.borrow_mut().start_color = Some(range);
    }

    fn local_scale(&self) -> Vec3 {
        self.state.borrow().scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.state.borrow_mut().scale = scale;
    }
}

/// Аниматор с историей вызовов play
#[derive(Clone, Default)]
pub struct HeadlessAnimator {
    played: Rc<RefCell<Vec<String>>>,
}

impl HeadlessAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl SpriteAnimator for HeadlessAnimator {
    fn play(&mut self, state: &str) {
        self.played.borrow_mut().push(state.to_string());
    }
}

#[derive(Clone, Copy, Debug)]
struct BodyState {
    position: Vec2,
    scale: Vec3,
}

/// Корень персонажа: позиция задаётся хостом, масштаб - контроллером
#[derive(Clone)]
pub struct HeadlessBody {
    state: Rc<RefCell<BodyState>>,
}

impl HeadlessBody {
    pub fn new(position: Vec2, scale: Vec3) -> Self {
        Self {
            state: Rc::new(RefCell::new(BodyState { position, scale })),
        }
    }

    pub fn set_position(&self, position: Vec2) {
        self.state.borrow_mut().position = position;
    }

    pub fn scale(&self) -> Vec3 {
        self.state.borrow().scale
    }
}

impl VisualTarget for HeadlessBody {
    fn position(&self) -> Vec2 {
        self.state.borrow().position
    }

    fn local_scale(&self) -> Vec3 {
        self.state.borrow().scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.state.borrow_mut().scale = scale;
    }
}

/// Горизонтальная платформа
#[derive(Clone, Copy, Debug)]
pub struct Platform {
    pub min_x: f32,
    pub max_x: f32,
    pub top: f32,
    pub color: Option<Rgba>,
    pub is_trigger: bool,
}

impl Platform {
    pub fn solid(min_x: f32, max_x: f32, top: f32, color: Rgba) -> Self {
        Self { min_x, max_x, top, color: Some(color), is_trigger: false }
    }
}

/// Простейшая 2D сцена из платформ
#[derive(Clone, Debug, Default)]
pub struct SurfaceMap {
    platforms: Vec<Platform>,
}

impl SurfaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Высота ближайшей поверхности под точкой (для хоста-симуляции)
    pub fn ground_below(&self, origin: Vec2) -> Option<f32> {
        self.nearest_below(origin, f32::INFINITY, true).map(|p| p.top)
    }

    fn nearest_below(&self, origin: Vec2, length: f32, solid_only: bool) -> Option<&Platform> {
        self.platforms
            .iter()
            .filter(|p| !(solid_only && p.is_trigger))
            .filter(|p| origin.x >= p.min_x && origin.x <= p.max_x)
            .filter(|p| p.top <= origin.y && origin.y - p.top <= length)
            .max_by(|a, b| a.top.total_cmp(&b.top))
    }
}

impl GroundProbe for SurfaceMap {
    fn cast_down(&self, origin: Vec2, length: f32) -> Option<ProbeHit> {
        self.nearest_below(origin, length, false).map(|p| ProbeHit {
            is_trigger: p.is_trigger,
            color: p.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STONE: Rgba = Rgba::new(0.5, 0.5, 0.52, 1.0);
    const MOSS: Rgba = Rgba::new(0.2, 0.5, 0.2, 1.0);

    #[test]
    fn test_probe_hits_nearest_platform() {
        let map = SurfaceMap::new()
            .with(Platform::solid(-10.0, 10.0, 0.0, STONE))
            .with(Platform::solid(0.0, 2.0, 1.0, MOSS));

        let hit = map.cast_down(Vec2::new(1.0, 1.5), 2.0).unwrap();
        assert_eq!(hit.color, Some(MOSS));

        let hit = map.cast_down(Vec2::new(-5.0, 1.5), 2.0).unwrap();
        assert_eq!(hit.color, Some(STONE));
    }

    #[test]
    fn test_probe_respects_length() {
        let map = SurfaceMap::new().with(Platform::solid(-10.0, 10.0, 0.0, STONE));

        assert!(map.cast_down(Vec2::new(0.0, 2.5), 2.0).is_none());
        assert_eq!(map.ground_below(Vec2::new(0.0, 2.5)), Some(0.0));
    }

    #[test]
    fn test_trigger_is_reported_not_skipped() {
        let map = SurfaceMap::new()
            .with(Platform::solid(-10.0, 10.0, 0.0, STONE))
            .with(Platform { min_x: -1.0, max_x: 1.0, top: 0.5, color: Some(MOSS), is_trigger: true });

        let hit = map.cast_down(Vec2::new(0.0, 1.0), 2.0).unwrap();
        assert!(hit.is_trigger);
        assert_eq!(map.ground_below(Vec2::new(0.0, 1.0)), Some(0.0));
    }
}
