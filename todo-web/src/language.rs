use std::collections::HashMap;

/// Language selected when the browser gives no better hint.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Translation bundles keyed by language code.
pub fn translations() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("en", include_str!("../translations/en.json")),
        ("es", include_str!("../translations/es.json")),
    ])
}
