//! External links
//!
//! Native builds hand the URL to the system browser. In the browser build
//! there is no popup API without wasm-bindgen (which clashes with the
//! macroquad JS bundle), so the URL is written to the console instead.

use macroquad::logging::{info, warn};

/// Only web URLs leave the app
pub fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

pub fn open_external(url: &str) {
    if !is_web_url(url) {
        warn!("Refusing to open non-web link: {}", url);
        return;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Opening {}", url);
        if let Err(e) = webbrowser::open(url) {
            warn!("Failed to open browser ({}). Please visit:\n{}", e, url);
        }
    }

    #[cfg(target_arch = "wasm32")]
    info!("Link: {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("https://www.youtube.com/embed/T2XLLKnBQ3U"));
        assert!(is_web_url("http://kaboochy.itch.io"));
        assert!(!is_web_url("file:///etc/passwd"));
        assert!(!is_web_url("assets/media/project_kaos.png"));
    }
}
