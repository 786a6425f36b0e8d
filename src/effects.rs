//! Short-lived particle bursts for food pickups. Cosmetic only.

use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};
use macroquad::rand::gen_range;
use macroquad::shapes::draw_circle;

const PARTICLE_LIFE: f32 = 30.0;
const GRAVITY: f32 = 0.3;
const SHRINK: f32 = 0.1;

struct Particle {
    pos: Vec2,
    vel: Vec2,
    life: f32,
    radius: f32,
    color: Color,
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Scatter `count` particles outward from `center`.
    pub fn burst(&mut self, center: Vec2, color: Color, count: usize) {
        for _ in 0..count {
            let angle = gen_range(0.0, std::f32::consts::TAU);
            let speed = gen_range(2.0, 6.0);
            self.particles.push(Particle {
                pos: center,
                vel: vec2(angle.cos(), angle.sin()) * speed,
                life: PARTICLE_LIFE,
                radius: gen_range(2.0, 5.0),
                color,
            });
        }
    }

    /// One tick of particle physics: drift, gravity, shrink, expire.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += GRAVITY;
            p.life -= 1.0;
            p.radius = (p.radius - SHRINK).max(1.0);
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn draw(&self) {
        for p in &self.particles {
            let mut color = p.color;
            color.a = p.life / PARTICLE_LIFE;
            draw_circle(p.pos.x, p.pos.y, p.radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn burst_adds_the_requested_count() {
        let mut system = ParticleSystem::new();
        system.burst(vec2(100.0, 100.0), theme::FOOD, 10);
        assert_eq!(system.len(), 10);
        system.burst(vec2(50.0, 50.0), theme::SPECIAL_FOOD, 20);
        assert_eq!(system.len(), 30);
    }

    #[test]
    fn particles_expire_after_their_lifetime() {
        let mut system = ParticleSystem::new();
        system.burst(vec2(0.0, 0.0), theme::FOOD, 5);
        for _ in 0..(PARTICLE_LIFE as usize) {
            system.update();
        }
        assert_eq!(system.len(), 0);
    }

    #[test]
    fn gravity_pulls_particles_down() {
        let mut system = ParticleSystem::new();
        system.burst(vec2(0.0, 0.0), theme::FOOD, 8);
        let before: Vec<f32> = system.particles.iter().map(|p| p.vel.y).collect();
        system.update();
        for (p, vy) in system.particles.iter().zip(before) {
            assert!(p.vel.y > vy);
        }
    }

    #[test]
    fn clear_drops_everything() {
        let mut system = ParticleSystem::new();
        system.burst(vec2(0.0, 0.0), theme::FOOD, 12);
        system.clear();
        assert_eq!(system.len(), 0);
    }
}
