// Bedwars prestige tiers.
//
// Every 100 stars is one tier with its own display color; from 3000 stars on
// all levels share the last tier.

use image::Rgba;

pub const TIER_WIDTH: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prestige {
    index: usize,
}

const GREY: [u8; 3] = [170, 170, 170];
const WHITE: [u8; 3] = [255, 255, 255];
const GOLD: [u8; 3] = [255, 170, 0];
const AQUA: [u8; 3] = [85, 255, 255];
const GREEN: [u8; 3] = [0, 255, 0];
const BLUE: [u8; 3] = [85, 85, 255];
const RED: [u8; 3] = [255, 85, 85];
const PINK: [u8; 3] = [255, 85, 255];
const PURPLE: [u8; 3] = [170, 0, 170];
const YELLOW: [u8; 3] = [255, 255, 85];
const LIGHT_GREEN: [u8; 3] = [85, 255, 85];
const DARK_RED: [u8; 3] = [170, 0, 0];
const BROWN: [u8; 3] = [170, 85, 0];

/// Tier names and colors, one entry per 100 stars starting at 0.
const TIERS: [(&str, [u8; 3]); 31] = [
    ("Stone", GREY),
    ("Iron", WHITE),
    ("Gold", GOLD),
    ("Diamond", AQUA),
    ("Emerald", GREEN),
    ("Sapphire", BLUE),
    ("Ruby", RED),
    ("Crystal", PINK),
    ("Opal", BLUE),
    ("Amethyst", PURPLE),
    ("Rainbow", PINK),
    ("Iron Prime", WHITE),
    ("Gold Prime", GOLD),
    ("Diamond Prime", AQUA),
    ("Emerald Prime", GREEN),
    ("Sapphire Prime", BLUE),
    ("Ruby Prime", RED),
    ("Crystal Prime", PINK),
    ("Opal Prime", BLUE),
    ("Amethyst Prime", PURPLE),
    ("Mirror", GREY),
    ("Light", YELLOW),
    ("Dawn", GOLD),
    ("Dusk", PURPLE),
    ("Air", GREY),
    ("Wind", LIGHT_GREEN),
    ("Nebula", DARK_RED),
    ("Thunder", YELLOW),
    ("Earth", BROWN),
    ("Water", BLUE),
    ("Fire", RED),
];

impl Prestige {
    pub fn for_level(level: u32) -> Self {
        let index = ((level / TIER_WIDTH) as usize).min(TIERS.len() - 1);
        Prestige { index }
    }

    pub fn name(&self) -> &'static str {
        TIERS[self.index].0
    }

    pub fn rgb(&self) -> [u8; 3] {
        TIERS[self.index].1
    }

    pub fn color(&self) -> Rgba<u8> {
        let [r, g, b] = self.rgb();
        Rgba([r, g, b, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_is_stone() {
        let p = Prestige::for_level(0);
        assert_eq!(p.name(), "Stone");
        assert_eq!(p.rgb(), [170, 170, 170]);
    }

    #[test]
    fn test_tier_boundaries_are_half_open() {
        assert_eq!(Prestige::for_level(99).name(), "Stone");
        assert_eq!(Prestige::for_level(100).name(), "Iron");
        assert_eq!(Prestige::for_level(199).name(), "Iron");
        assert_eq!(Prestige::for_level(2999).name(), "Water");
        assert_eq!(Prestige::for_level(3000).name(), "Fire");
    }

    #[test]
    fn test_step_function() {
        for level in (0..4000).step_by(7) {
            assert_eq!(
                Prestige::for_level(level),
                Prestige::for_level(level - level % TIER_WIDTH)
            );
        }
    }

    #[test]
    fn test_terminal_tier_collapses() {
        assert_eq!(Prestige::for_level(3050), Prestige::for_level(3000));
        assert_eq!(Prestige::for_level(u32::MAX), Prestige::for_level(3000));
    }

    #[test]
    fn test_gold_tier_color() {
        let p = Prestige::for_level(250);
        assert_eq!(p.name(), "Gold");
        assert_eq!(p.color(), Rgba([255, 170, 0, 255]));
    }

    #[test]
    fn test_reference_colors() {
        let expected: [(u32, [u8; 3]); 8] = [
            (800, [85, 85, 255]),
            (1000, [255, 85, 255]),
            (2100, [255, 255, 85]),
            (2200, [255, 170, 0]),
            (2500, [85, 255, 85]),
            (2600, [170, 0, 0]),
            (2800, [170, 85, 0]),
            (3000, [255, 85, 85]),
        ];
        for (level, rgb) in expected {
            assert_eq!(Prestige::for_level(level).rgb(), rgb, "level {}", level);
        }
    }
}
