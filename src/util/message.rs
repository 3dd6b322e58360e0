pub static MESSAGE_PLAYER_NOT_FOUND: &str = "Player not found!";
pub static MESSAGE_STATS_UNAVAILABLE: &str = "Error while retrieving Hypixel data!";
pub static MESSAGE_STATS_UNSUCCESSFUL: &str = "Error while retrieving data!";
pub static MESSAGE_RENDER_FAILED: &str = "Error while rendering stats card!";
pub static MESSAGE_ERROR_PREFIX: &str = "An error occurred: ";

pub static EMBED_LEVEL_FIELD: &str = "Overall Bedwars Level";
pub static EMBED_FOOTER_PREFIX: &str = "Today at ";

pub fn error_occurred(detail: &str) -> String {
    format!("{}{}", MESSAGE_ERROR_PREFIX, detail)
}

pub fn latency(millis: u128) -> String {
    format!("Bot latency is {}ms", millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_keeps_raw_detail() {
        assert_eq!(error_occurred("boom"), "An error occurred: boom");
    }

    #[test]
    fn latency_message_in_millis() {
        assert_eq!(latency(42), "Bot latency is 42ms");
    }
}
