use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Raw Bedwars counters from the Hypixel `stats.Bedwars` object. Counters the
/// API leaves out (a player who never lost a bed has no `beds_lost_bedwars`)
/// read as zero; every other key in that object is ignored.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct StatBlock {
    #[serde(rename = "wins_bedwars")]
    pub wins: u64,
    #[serde(rename = "losses_bedwars")]
    pub losses: u64,
    #[serde(rename = "final_kills_bedwars")]
    pub final_kills: u64,
    #[serde(rename = "final_deaths_bedwars")]
    pub final_deaths: u64,
    #[serde(rename = "beds_broken_bedwars")]
    pub beds_broken: u64,
    #[serde(rename = "beds_lost_bedwars")]
    pub beds_lost: u64,
}

/// `numerator / max(denominator, 1)` rounded to two decimals, ties to even.
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    let value = numerator as f64 / denominator.max(1) as f64;
    (value * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio(pub f64);

impl Display for Ratio {
    // Always shows a fractional part: 2.0, 1.33
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:?}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRatios {
    pub wlr: Ratio,
    pub fkdr: Ratio,
    pub bblr: Ratio,
}

impl DerivedRatios {
    pub fn from_stats(stats: &StatBlock) -> Self {
        DerivedRatios {
            wlr: Ratio(ratio(stats.wins, stats.losses)),
            fkdr: Ratio(ratio(stats.final_kills, stats.final_deaths)),
            bblr: Ratio(ratio(stats.beds_broken, stats.beds_lost)),
        }
    }
}

/// Everything one `/bw` reply is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedwarsProfile {
    pub uuid: String,
    /// Name as the user typed it.
    pub name: String,
    pub level: u32,
    pub stats: StatBlock,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario_a() -> StatBlock {
        StatBlock {
            wins: 10,
            losses: 5,
            final_kills: 20,
            final_deaths: 4,
            beds_broken: 15,
            beds_lost: 3,
        }
    }

    #[test]
    fn test_ratio_zero_over_zero() {
        assert_eq!(ratio(0, 0), 0.0);
    }

    #[test]
    fn test_ratio_zero_denominator_yields_numerator() {
        assert_eq!(ratio(37, 0), 37.0);
    }

    #[test]
    fn test_ratio_rounds_to_two_decimals() {
        assert_eq!(ratio(4, 3), 1.33);
        assert_eq!(ratio(2, 3), 0.67);
    }

    #[test]
    fn test_ratio_ties_round_to_even() {
        assert_eq!(ratio(1, 8), 0.12);
        assert_eq!(ratio(5, 8), 0.62);
        assert_eq!(ratio(3, 8), 0.38);
        assert_eq!(ratio(7, 8), 0.88);
    }

    #[test]
    fn test_ratios_always_finite() {
        for (n, d) in [(0, 0), (u64::MAX, 0), (1, u64::MAX), (123_456, 7)] {
            let r = ratio(n, d);
            assert!(r.is_finite());
            assert!(r >= 0.0);
        }
    }

    #[test]
    fn test_scenario_a_ratios() {
        let ratios = DerivedRatios::from_stats(&scenario_a());
        assert_eq!(ratios.wlr, Ratio(2.0));
        assert_eq!(ratios.fkdr, Ratio(5.0));
        assert_eq!(ratios.bblr, Ratio(5.0));
    }

    #[test]
    fn test_no_losses_wlr_is_wins() {
        let stats = StatBlock {
            wins: 42,
            losses: 0,
            ..StatBlock::default()
        };
        assert_eq!(DerivedRatios::from_stats(&stats).wlr, Ratio(42.0));
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(Ratio(2.0).to_string(), "2.0");
        assert_eq!(Ratio(1.33).to_string(), "1.33");
        assert_eq!(Ratio(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let stats: StatBlock = serde_json::from_value(json!({
            "wins_bedwars": 3,
            "coins": 1000,
            "Experience": 5120
        }))
        .unwrap();
        assert_eq!(
            stats,
            StatBlock {
                wins: 3,
                ..StatBlock::default()
            }
        );
    }
}
