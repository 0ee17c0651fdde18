//! Randomized style parameters for the decorative particle and data-stream
//! fields. Generic over the RNG so layouts are reproducible under a seed.

use crate::constants::{PARTICLE_COLORS, PARTICLE_STAGGER};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleStyle {
    pub left_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub color: &'static str,
    /// When the particle gets its `active` class.
    pub activate_after: Duration,
}

impl ParticleStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Self {
        Self {
            left_pct: rng.gen::<f64>() * 100.0,
            size_px: rng.gen::<f64>() * 4.0 + 2.0,
            duration_s: rng.gen::<f64>() * 10.0 + 10.0,
            delay_s: rng.gen::<f64>() * 15.0,
            color: PARTICLE_COLORS.choose(rng).copied().unwrap_or(PARTICLE_COLORS[0]),
            activate_after: PARTICLE_STAGGER * index as u32,
        }
    }

    /// Inline style declarations, as (property, value) pairs.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("left", format!("{}%", self.left_pct)),
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("background", self.color.to_owned()),
            (
                "box-shadow",
                format!("0 0 10px {c}, 0 0 20px {c}", c = self.color),
            ),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataLineStyle {
    pub left_pct: f64,
    pub height_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl DataLineStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen::<f64>() * 100.0,
            height_px: rng.gen::<f64>() * 100.0 + 50.0,
            duration_s: rng.gen::<f64>() * 5.0 + 5.0,
            delay_s: rng.gen::<f64>() * 8.0,
        }
    }

    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("left", format!("{}%", self.left_pct)),
            ("height", format!("{}px", self.height_px)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }
}

pub fn particle_field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ParticleStyle> {
    (0..count).map(|i| ParticleStyle::random(rng, i)).collect()
}

pub fn data_stream<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<DataLineStyle> {
    (0..count).map(|_| DataLineStyle::random(rng)).collect()
}
