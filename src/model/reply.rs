// Discord-independent shape of the `/bw` reply embed.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::bedwars::{BedwarsProfile, DerivedRatios};
use crate::util::message;

/// Discord's "dark grey" embed color.
pub const EMBED_COLOR: u32 = 0x607D8B;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: impl ToString, inline: bool) -> Self {
        EmbedField {
            name: name.to_string(),
            value: value.to_string(),
            inline,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatsReply {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    /// `attachment://` reference to the rendered card.
    pub image: String,
    pub footer: String,
}

impl StatsReply {
    /// Lay out the embed: the level on its own row, then three rows of three
    /// inline fields (kills/beds/wins, deaths/beds lost/losses, ratios).
    pub fn compose<Tz>(profile: &BedwarsProfile, card_filename: &str, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let stats = &profile.stats;
        let ratios = DerivedRatios::from_stats(stats);

        let fields = vec![
            EmbedField::new(message::EMBED_LEVEL_FIELD, format!(" {} ", profile.level), false),
            EmbedField::new("Final Kills", stats.final_kills, true),
            EmbedField::new("Beds Broken", stats.beds_broken, true),
            EmbedField::new("Wins", stats.wins, true),
            EmbedField::new("Final Deaths", stats.final_deaths, true),
            EmbedField::new("Beds Lost", stats.beds_lost, true),
            EmbedField::new("Losses", stats.losses, true),
            EmbedField::new("FKDR", ratios.fkdr, true),
            EmbedField::new("BBLR", ratios.bblr, true),
            EmbedField::new("WLR", ratios.wlr, true),
        ];

        StatsReply {
            title: format!(" {}'s Bedwars Statistics ", profile.name),
            color: EMBED_COLOR,
            fields,
            image: format!("attachment://{}", card_filename),
            footer: format!("{}{}", message::EMBED_FOOTER_PREFIX, now.format("%H:%M")),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
