//! Cosmetic parameters for the page background and the contribution heatmap.
//!
//! Nothing here is backed by data; every call produces a fresh random layout.

use rand::Rng;
use serde::Serialize;

pub const HEATMAP_DAYS: usize = 365;
pub const HEATMAP_LEVELS: u8 = 4;
const HEATMAP_WEEKS: usize = 53;

const LEVEL_CLASSES: [&str; HEATMAP_LEVELS as usize] = ["level-0", "level-1", "level-2", "level-3"];

pub const PARTICLE_COUNT: usize = 20;
const SNIPPETS: [&str; 5] = ["<div>", "const", "{...}", "[]", "()"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub level: u8,
    pub class: &'static str,
    pub week_break: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub left: String,
    pub top: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeSnippet {
    pub text: &'static str,
    pub left: u32,
    pub delay: u32,
}

pub fn contribution_heatmap<R: Rng + ?Sized>(rng: &mut R) -> Vec<HeatmapCell> {
    (0..HEATMAP_DAYS)
        .map(|index| {
            let level = rng.gen_range(0..HEATMAP_LEVELS);
            HeatmapCell {
                level,
                class: LEVEL_CLASSES[level as usize],
                week_break: index % HEATMAP_WEEKS == HEATMAP_WEEKS - 1,
            }
        })
        .collect()
}

pub fn heatmap_legend() -> Vec<&'static str> {
    LEVEL_CLASSES.to_vec()
}

pub fn particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: format!("{:.1}", rng.gen_range(0.0..100.0)),
            top: format!("{:.1}", rng.gen_range(0.0..100.0)),
            duration: format!("{:.2}", 3.0 + rng.gen_range(0.0..2.0)),
        })
        .collect()
}

pub fn code_snippets() -> Vec<CodeSnippet> {
    SNIPPETS
        .into_iter()
        .enumerate()
        .map(|(i, text)| CodeSnippet {
            text,
            left: 10 + i as u32 * 20,
            delay: i as u32 * 2,
        })
        .collect()
}
