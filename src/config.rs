/// Per-character delay of the hero typewriter, in milliseconds.
pub const TYPE_CHAR_DELAY_MS: u32 = 45;
/// Pause between poem lines, in milliseconds.
pub const TYPE_LINE_DELAY_MS: u32 = 700;

/// How long the newsletter success banner stays visible.
pub const NEWSLETTER_BANNER_MS: u32 = 3_000;

/// Vertical scroll offset past which the floating scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 200.0;

/// The four-line poem typed out in the hero section.
pub const HERO_POEM: [&str; 4] = [
    "Trạng Code ngồi bên cửa sổ,",
    "Nắng vàng rơi trên trang thơ,",
    "Mùa hè BTEC rực rỡ,",
    "Mở lối truyền thống, hiện đại hòa mơ.",
];

/// Footer social icons map to fixed destinations, opened in a new tab.
/// Unknown keys are ignored by the caller.
pub fn social_url(key: &str) -> Option<&'static str> {
    match key {
        "facebook" => Some("https://facebook.com/fptbtec"),
        "youtube" => Some("https://youtube.com"),
        "tiktok" => Some("https://tiktok.com"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_social_keys_resolve() {
        assert_eq!(social_url("facebook"), Some("https://facebook.com/fptbtec"));
        assert!(social_url("youtube").is_some());
        assert!(social_url("tiktok").is_some());
    }

    #[test]
    fn unknown_social_key_is_none() {
        assert_eq!(social_url("myspace"), None);
        assert_eq!(social_url(""), None);
    }
}
