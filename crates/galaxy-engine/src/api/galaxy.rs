use glam::Vec2;

use crate::api::config::GalaxyConfig;
use crate::api::types::TaskRecord;
use crate::components::orb::Orb;
use crate::components::particle::Particle;
use crate::components::star::{Star, StarKind};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::theme::{Theme, ThemeName};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::draw::{DrawCommand, DrawList};

/// Pointer position used when there is no pointer. Far enough outside any
/// viewport that no orb is ever within repel range.
pub const POINTER_OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Where a galaxy is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, background not seeded yet.
    Created,
    /// Frames advance and draw.
    Running,
    /// Shut down; frames are no-ops.
    Stopped,
}

/// Scene controller: owns every live entity, the pointer, the theme
/// selection and the viewport, and is the only thing that changes which
/// entities exist.
///
/// Orbs carry no task identity. Completing a task retires a random orb,
/// so the engine needs no task-to-orb index.
pub struct Galaxy {
    config: GalaxyConfig,
    scene: Scene,
    rng: Rng,
    viewport: Vec2,
    pointer: Vec2,
    theme: ThemeName,
    lifecycle: Lifecycle,
}

impl Galaxy {
    pub fn new(config: GalaxyConfig, width: f32, height: f32, seed: u64) -> Self {
        Self {
            scene: Scene::with_star_cap(config.max_achievement_stars),
            config,
            rng: Rng::new(seed),
            viewport: Vec2::new(width.max(0.0), height.max(0.0)),
            pointer: POINTER_OFFSCREEN,
            theme: ThemeName::Dark,
            lifecycle: Lifecycle::Created,
        }
    }

    /// Seed the decorative background and start accepting frames.
    /// Only the first call has any effect.
    pub fn initialize(&mut self) {
        if self.lifecycle != Lifecycle::Created {
            log::warn!("galaxy: initialize called while {:?}, ignoring", self.lifecycle);
            return;
        }
        for _ in 0..self.config.decorative_stars {
            let pos = self.random_point();
            let star = Star::spawn(pos, StarKind::Decorative, &self.config, &mut self.rng);
            self.scene.add_star(star);
        }
        self.lifecycle = Lifecycle::Running;
        log::info!(
            "galaxy: initialized {}x{} with {} background stars",
            self.viewport.x,
            self.viewport.y,
            self.config.decorative_stars
        );
    }

    /// Record new viewport dimensions. Existing entities keep their
    /// positions; orbs outside the new bounds bounce back on their own.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        self.pointer = if pos.is_finite() { pos } else { POINTER_OFFSCREEN };
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = POINTER_OFFSCREEN;
    }

    /// Switch palettes from the next frame on. Unknown names mean dark.
    pub fn set_theme(&mut self, name: &str) {
        self.set_theme_name(ThemeName::parse(name));
    }

    pub fn set_theme_name(&mut self, name: ThemeName) {
        self.theme = name;
    }

    /// Rebuild orbs and achievement stars from scratch: one orb per
    /// incomplete task, one star per completed task, in list order.
    /// Decorative stars and in-flight particles are kept.
    pub fn sync(&mut self, tasks: &[TaskRecord]) {
        self.scene.clear_task_entities();
        for task in tasks {
            if task.completed {
                let pos = self.random_point();
                self.add_achievement_star(pos);
            } else {
                self.add_task_visual();
            }
        }
        log::debug!(
            "galaxy: synced {} tasks -> {} orbs, {} stars",
            tasks.len(),
            self.scene.orbs().len(),
            self.scene.stars().len()
        );
    }

    /// One more orb for a freshly created task.
    pub fn add_task_visual(&mut self) {
        let orb = Orb::spawn(self.viewport, &self.config, &mut self.rng);
        self.scene.add_orb(orb);
    }

    /// Turn a random orb into a star with a particle burst.
    /// With no orbs, a star appears at the viewport center instead.
    pub fn complete_task_visual(&mut self) {
        let count = self.scene.orbs().len();
        if count == 0 {
            log::debug!("galaxy: completion with no orbs, placing star at center");
            self.add_achievement_star(self.viewport * 0.5);
            return;
        }

        let index = self.rng.next_index(count);
        if let Some(orb) = self.scene.remove_orb(index) {
            for _ in 0..self.config.burst_size {
                let particle = Particle::spawn(orb.pos, &self.config, &mut self.rng);
                self.scene.add_particle(particle);
            }
            self.add_achievement_star(orb.pos);
        }
    }

    /// Apply every queued host notification.
    pub fn apply_input(&mut self, input: &mut InputQueue) {
        for event in input.drain() {
            match event {
                InputEvent::PointerMove { x, y } => self.set_pointer(x, y),
                InputEvent::PointerLeave => self.clear_pointer(),
                InputEvent::Resize { width, height } => self.resize(width, height),
                InputEvent::Theme(name) => self.set_theme_name(name),
            }
        }
    }

    /// Advance the simulation one tick: orbs drift, bounce and dodge the
    /// pointer; particles fade and expire.
    pub fn step(&mut self) {
        let pointer = self.pointer;
        let viewport = self.viewport;
        for orb in self.scene.orbs_mut() {
            orb.step(pointer, viewport, &self.config);
        }
        self.scene.step_particles(self.config.particle_fade);
    }

    /// Paint the current state back to front: background, stars, orbs, particles.
    pub fn draw(&self, list: &mut DrawList, now_ms: f64) {
        let theme = self.theme();
        let (width, height) = (self.viewport.x, self.viewport.y);

        list.push(DrawCommand::Clear { width, height });
        list.push(DrawCommand::VerticalGradient {
            width,
            height,
            top: theme.background.top,
            bottom: theme.background.bottom,
        });
        for star in self.scene.stars() {
            star.draw(list, theme, now_ms, &self.config);
        }
        for orb in self.scene.orbs() {
            orb.draw(list, theme, &self.config);
        }
        for particle in self.scene.particles() {
            particle.draw(list, self.config.particle_radius);
        }
    }

    /// One refresh: `ticks` simulation steps (as granted by the host's
    /// frame clock, possibly zero) followed by a full redraw into a cleared list.
    /// Does nothing unless the galaxy is running.
    pub fn frame(&mut self, ticks: u32, list: &mut DrawList, now_ms: f64) {
        if !self.is_running() {
            return;
        }
        for _ in 0..ticks {
            self.step();
        }
        list.clear();
        self.draw(list, now_ms);
    }

    /// Stop for good. Entities are dropped and later frames are no-ops.
    pub fn shutdown(&mut self) {
        if self.lifecycle == Lifecycle::Stopped {
            return;
        }
        self.lifecycle = Lifecycle::Stopped;
        self.scene = Scene::with_star_cap(self.config.max_achievement_stars);
        log::info!("galaxy: shut down");
    }

    fn add_achievement_star(&mut self, pos: Vec2) {
        let star = Star::spawn(pos, StarKind::Achievement, &self.config, &mut self.rng);
        self.scene.add_star(star);
    }

    fn random_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.next_f32() * self.viewport.x,
            self.rng.next_f32() * self.viewport.y,
        )
    }

    // -- Introspection --

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    pub fn theme_name(&self) -> ThemeName {
        self.theme
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme.theme()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn orbs(&self) -> &[Orb] {
        self.scene.orbs()
    }

    pub fn stars(&self) -> &[Star] {
        self.scene.stars()
    }

    pub fn particles(&self) -> &[Particle] {
        self.scene.particles()
    }

    pub fn orb_count(&self) -> usize {
        self.scene.orbs().len()
    }

    pub fn star_count(&self) -> usize {
        self.scene.stars().len()
    }

    pub fn particle_count(&self) -> usize {
        self.scene.particles().len()
    }
}
