use reqwest::header;

pub static USER_AGENT: &str = concat!("bedwars-stats-bot/", env!("CARGO_PKG_VERSION"));
pub static ACCEPT: &str = "application/json";
pub static CACHE_CONTROL: &str = "no-cache";
pub static HYPIXEL_KEY_HEADER: &str = "API-Key";

pub fn get_common_header() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));
    headers.insert(header::CACHE_CONTROL, header::HeaderValue::from_static(CACHE_CONTROL));
    headers
}

/// Client shared by the identity and stats resolvers.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .default_headers(get_common_header())
        .build()
}
