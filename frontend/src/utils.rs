use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return "http://localhost:3000".to_string();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/api/config" -> "http://localhost:3000/api/config")
pub fn api_url(path: &str) -> String {
    format!("{}{}", get_base_url(), path)
}

/// Current viewport width in CSS pixels, 0 when unknown
pub fn viewport_width() -> u32 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(0)
}

/// Format seconds-since-update as a short relative label
pub fn format_age(secs: i64) -> String {
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{} min ago", secs / 60)
    } else if secs < 86400 {
        format!("{} h ago", secs / 3600)
    } else {
        format!("{} days ago", secs / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(5), "just now");
        assert_eq!(format_age(125), "2 min ago");
        assert_eq!(format_age(7200), "2 h ago");
        assert_eq!(format_age(200_000), "2 days ago");
    }
}
