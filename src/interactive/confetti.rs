//! Win celebration overlay
//!
//! A single burst of falling particles. Positions are kept in unit
//! coordinates so the burst does not need to know the terminal size until it
//! is drawn.

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

/// Particles per burst
const PARTICLES: usize = 240;
/// Hard stop so a burst never outlives a few seconds
const MAX_FRAMES: u32 = 180;
const GRAVITY: f32 = 0.0009;

const GLYPHS: [char; 6] = ['*', '•', '▪', '✦', '+', '~'];
const COLORS: [Color; 7] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
];

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: char,
    color: Color,
}

#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    frame: u32,
}

impl Confetti {
    /// Launch a burst from above the top edge
    pub fn burst<R: Rng>(rng: &mut R) -> Self {
        let particles = (0..PARTICLES)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(-0.6..0.0),
                vx: rng.random_range(-0.004..0.004),
                vy: rng.random_range(0.004..0.012),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: COLORS[rng.random_range(0..COLORS.len())],
            })
            .collect();

        Self {
            particles,
            frame: 0,
        }
    }

    /// Advance one frame; particles that leave the screen are not recycled
    pub fn tick(&mut self) {
        self.frame += 1;
        for p in &mut self.particles {
            p.vy += GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
        }
        self.particles
            .retain(|p| p.y <= 1.0 && (-0.1..=1.1).contains(&p.x));
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.particles.is_empty() || self.frame >= MAX_FRAMES
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        for p in &self.particles {
            if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let x = area.x + (p.x * f32::from(area.width)) as u16;
            let y = area.y + (p.y * f32::from(area.height)) as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(p.glyph).set_fg(p.color);
            }
        }
    }
}
