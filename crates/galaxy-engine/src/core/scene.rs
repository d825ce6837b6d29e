use crate::components::orb::Orb;
use crate::components::particle::Particle;
use crate::components::star::{Star, StarKind};

/// Flat storage for the three live entity collections.
/// Collections are unordered; removal swaps the last element into the hole.
pub struct Scene {
    orbs: Vec<Orb>,
    stars: Vec<Star>,
    particles: Vec<Particle>,
    /// Optional cap on achievement stars (decorative stars are exempt).
    max_achievement_stars: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_star_cap(None)
    }

    /// Create a scene that keeps at most `cap` achievement stars.
    pub fn with_star_cap(cap: Option<usize>) -> Self {
        Self {
            orbs: Vec::with_capacity(64),
            stars: Vec::with_capacity(128),
            particles: Vec::with_capacity(64),
            max_achievement_stars: cap,
        }
    }

    pub fn add_orb(&mut self, orb: Orb) {
        self.orbs.push(orb);
    }

    /// Remove the orb at `index`. Returns the removed orb if the index was valid.
    pub fn remove_orb(&mut self, index: usize) -> Option<Orb> {
        if index < self.orbs.len() {
            Some(self.orbs.swap_remove(index))
        } else {
            None
        }
    }

    /// Add a star, evicting the oldest achievement star if over the cap.
    pub fn add_star(&mut self, star: Star) {
        let is_achievement = star.kind == StarKind::Achievement;
        self.stars.push(star);
        if !is_achievement {
            return;
        }
        if let Some(cap) = self.max_achievement_stars {
            if self.achievement_star_count() > cap {
                // Stars are appended, so the first achievement star is the oldest.
                if let Some(oldest) = self.stars.iter().position(|s| s.kind == StarKind::Achievement) {
                    self.stars.remove(oldest);
                }
            }
        }
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Drop every orb and achievement star. Decorative stars and
    /// in-flight particles are untouched.
    pub fn clear_task_entities(&mut self) {
        self.orbs.clear();
        self.stars.retain(|s| s.kind == StarKind::Decorative);
    }

    /// Step every particle with `fade`, dropping those that expired.
    pub fn step_particles(&mut self, fade: f32) {
        self.particles.retain_mut(|p| p.step(fade));
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn orbs_mut(&mut self) -> &mut [Orb] {
        &mut self.orbs
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn achievement_star_count(&self) -> usize {
        self.stars
            .iter()
            .filter(|s| s.kind == StarKind::Achievement)
            .count()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
