//! Palette tables and the periodic color selection.
//!
//! Fifteen candidate backgrounds, each index-paired with a sweep accent.
//! Selection picks one pair and derives the foreground through the
//! legibility hook, which stands in for a host display capability and is
//! replaceable for testing.

use rand::Rng;

/// RGB color for face elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Integer Rec. 601 luma, 0..=255.
    fn luma(self) -> u32 {
        (299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)) / 1000
    }
}

/// Background candidates.
pub const BACKGROUNDS: [Color; 15] = [
    Color::new(0x55, 0x55, 0x55), // dark gray
    Color::new(0xAA, 0xAA, 0xAA), // light gray
    Color::new(0x55, 0x00, 0x00), // bulgarian rose
    Color::new(0xAA, 0x00, 0x00), // dark candy apple red
    Color::new(0x00, 0x00, 0x55), // oxford blue
    Color::new(0x55, 0x00, 0x55), // imperial purple
    Color::new(0xAA, 0x55, 0x00), // windsor tan
    Color::new(0xFF, 0x55, 0x55), // sunset orange
    Color::new(0xAA, 0x00, 0xFF), // vivid violet
    Color::new(0x00, 0xAA, 0xFF), // vivid cerulean
    Color::new(0x55, 0xFF, 0xAA), // medium aquamarine
    Color::new(0xFF, 0xAA, 0xAA), // melon
    Color::new(0xFF, 0x55, 0x00), // orange
    Color::new(0xFF, 0xAA, 0x00), // chrome yellow
    Color::new(0xFF, 0xAA, 0x55), // rajah
];

/// Sweep accents, index-paired 1:1 with `BACKGROUNDS`.
pub const ACCENTS: [Color; 15] = [
    Color::new(0xAA, 0xAA, 0xAA), // light gray
    Color::new(0x55, 0x55, 0x55), // dark gray
    Color::new(0xFF, 0x55, 0x55), // sunset orange
    Color::new(0xFF, 0xAA, 0xAA), // melon
    Color::new(0x00, 0xAA, 0xFF), // vivid cerulean
    Color::new(0xAA, 0x00, 0xFF), // vivid violet
    Color::new(0xFF, 0xAA, 0x00), // chrome yellow
    Color::new(0x55, 0x00, 0x00), // bulgarian rose
    Color::new(0x55, 0x00, 0x55), // imperial purple
    Color::new(0x00, 0x00, 0x55), // oxford blue
    Color::new(0x00, 0x55, 0x00), // dark green
    Color::new(0xAA, 0x00, 0x00), // dark candy apple red
    Color::new(0xAA, 0x55, 0x00), // windsor tan
    Color::new(0x55, 0x55, 0x00), // army green
    Color::new(0xAA, 0x55, 0x00), // windsor tan
];

/// Host legibility capability: maps a background to whichever canonical
/// foreground reads better on it. Its result is authoritative for all text
/// and stroke coloring.
pub type LegibilityFn = fn(Color) -> Color;

/// Default legibility rule: black on bright backgrounds, white on dark ones.
pub fn legible_over(background: Color) -> Color {
    if background.luma() >= 128 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// The color set active until the next scheduled reselection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
}

/// Deterministic selection: `seed` picks the background/accent pair, the
/// legibility rule derives the foreground.
pub fn select_seeded(seed: u64, legible: LegibilityFn) -> Palette {
    let k = (seed % BACKGROUNDS.len() as u64) as usize;
    let background = BACKGROUNDS[k];
    Palette {
        background,
        foreground: legible(background),
        accent: ACCENTS[k],
    }
}

/// Production selection, seeded from thread-local entropy.
pub fn select_random(legible: LegibilityFn) -> Palette {
    select_seeded(rand::rng().random::<u64>(), legible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_index_aligned() {
        assert_eq!(BACKGROUNDS.len(), ACCENTS.len());
        for seed in 0..BACKGROUNDS.len() as u64 {
            let palette = select_seeded(seed, legible_over);
            let k = seed as usize;
            assert_eq!(palette.background, BACKGROUNDS[k]);
            assert_eq!(palette.accent, ACCENTS[k]);
        }
    }

    #[test]
    fn same_seed_same_palette() {
        let a = select_seeded(0xDEAD_BEEF, legible_over);
        let b = select_seeded(0xDEAD_BEEF, legible_over);
        assert_eq!(a, b);
    }

    #[test]
    fn seed_wraps_modulo_table_length() {
        let n = BACKGROUNDS.len() as u64;
        assert_eq!(select_seeded(3, legible_over), select_seeded(3 + n, legible_over));
    }

    #[test]
    fn foreground_is_always_canonical() {
        for seed in 0..BACKGROUNDS.len() as u64 {
            let fg = select_seeded(seed, legible_over).foreground;
            assert!(fg == Color::WHITE || fg == Color::BLACK);
        }
    }

    #[test]
    fn legibility_flips_with_brightness() {
        assert_eq!(legible_over(Color::new(0x00, 0x00, 0x55)), Color::WHITE);
        assert_eq!(legible_over(Color::new(0xFF, 0xAA, 0x55)), Color::BLACK);
    }

    #[test]
    fn custom_legibility_rule_is_authoritative() {
        fn always_white(_: Color) -> Color {
            Color::WHITE
        }
        for seed in 0..BACKGROUNDS.len() as u64 {
            assert_eq!(select_seeded(seed, always_white).foreground, Color::WHITE);
        }
    }

    #[test]
    fn random_selection_draws_from_the_tables() {
        let palette = select_random(legible_over);
        let k = BACKGROUNDS
            .iter()
            .position(|&c| c == palette.background)
            .unwrap();
        assert_eq!(palette.accent, ACCENTS[k]);
    }
}
