//! Lookup tables mapping payload keys to presentation assets.
//!
//! Pure and stateless; unmatched icon keys resolve to no icon and unmatched
//! cities fall back to the default background.

pub const DEFAULT_BACKGROUND: &str = "morning";

pub fn icon_asset(key: &str) -> Option<&'static str> {
    match key.to_lowercase().as_str() {
        "sunny" | "sun" => Some("sun"),
        "partly cloudy" => Some("partly_cloudy"),
        "cloudy" => Some("cloudy"),
        "rain" => Some("rain"),
        "snow" => Some("snow"),
        "high winds" => Some("high_winds"),
        "storms" => Some("storms"),
        _ => None,
    }
}

pub fn icon_glyph(asset: &str) -> &'static str {
    match asset {
        "sun" => "\u{2600}",
        "partly_cloudy" => "\u{26C5}",
        "cloudy" => "\u{2601}",
        "rain" => "\u{1F327}",
        "snow" => "\u{2744}",
        "high_winds" => "\u{1F32C}",
        "storms" => "\u{26C8}",
        _ => " ",
    }
}

pub fn background_asset(city: &str) -> &'static str {
    match city.to_uppercase().as_str() {
        "PHILADELPHIA" => "philadelphia",
        "NEW YORK" => "newyork",
        "DALLAS" => "dallas",
        "SAN DIEGO" => "sandiego",
        "SEATTLE" => "seattle",
        _ => DEFAULT_BACKGROUND,
    }
}

#[test]
fn test_icon_asset() {
    assert_eq!(icon_asset("Sunny"), Some("sun"));
    assert_eq!(icon_asset("sun"), Some("sun"));
    assert_eq!(icon_asset("SUN"), Some("sun"));
    assert_eq!(icon_asset("Partly Cloudy"), Some("partly_cloudy"));
    assert_eq!(icon_asset("hail"), None);
}

#[test]
fn test_background_asset() {
    assert_eq!(background_asset("Philadelphia"), "philadelphia");
    assert_eq!(background_asset("NEW YORK"), "newyork");
    assert_eq!(background_asset("san diego"), "sandiego");
    assert_eq!(background_asset("Madison"), DEFAULT_BACKGROUND);
}
