use log::Level;

/// Host serving every photo on both pages.
pub const ASSET_HOST: &str = "https://images.unsplash.com";

/// Scroll offset (px) from which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// How long the before/after slider keeps its mount transition (ms).
pub const SLIDER_INTRO_MS: u32 = 1200;

pub const CONTACT_EMAIL: &str = "contact@zinebmoudden.com";
pub const CONTACT_PHONE: &str = "+212 6 XX XX XX XX";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
fn image_quality() -> u8 {
    60
}

#[cfg(not(debug_assertions))]
fn image_quality() -> u8 {
    80
}

/// Full URL of a photo on the asset host, resized to `width` px.
pub fn asset_url(photo_id: &str, width: u32) -> String {
    format!("{}/{}?w={}&q={}", ASSET_HOST, photo_id, width, image_quality())
}

/// `mailto:` link to the studio inbox with a pre-filled subject line.
pub fn mailto(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url_points_at_host() {
        let url = asset_url("photo-1519741497674-611481863552", 800);
        assert!(url.starts_with("https://images.unsplash.com/photo-1519741497674-611481863552?w=800&q="));
    }

    #[test]
    fn test_mailto_encodes_subject() {
        let link = mailto("Réserver un appel");
        assert_eq!(
            link,
            "mailto:contact@zinebmoudden.com?subject=R%C3%A9server%20un%20appel"
        );
    }
}
