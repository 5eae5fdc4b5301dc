//! One-time page setup for the third-party browser libraries: the
//! reveal-on-scroll animations (AOS) and the testimonial carousel (Swiper).
//!
//! The scripts themselves load from CDN tags in the document shell. A
//! library that failed to load leaves the page static but readable, so a
//! missing global is logged and skipped rather than treated as fatal.

use serde::Serialize;

/// Configuration handed to `AOS.init`.
#[derive(Debug, Clone, Serialize)]
pub struct RevealConfig {
    /// Entrance animation duration in milliseconds.
    pub duration: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { duration: 800 }
    }
}

/// Configuration handed to the Swiper constructor. Field names follow the
/// library's option names once serialized.
#[derive(Debug, Clone, Serialize)]
pub struct CarouselConfig {
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay: AutoplayConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoplayConfig {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationConfig {
    pub el: &'static str,
    pub clickable: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            looped: true,
            autoplay: AutoplayConfig {
                delay: 3000,
                disable_on_interaction: false,
            },
            pagination: PaginationConfig {
                el: ".swiper-pagination",
                clickable: true,
            },
        }
    }
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Swiper;

        #[wasm_bindgen(constructor)]
        pub fn new(container: &str, config: &JsValue) -> Swiper;

        #[wasm_bindgen(js_namespace = AOS, js_name = init)]
        pub fn aos_init(config: &JsValue);
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, thiserror::Error)]
enum ConfigError {
    #[error("could not serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("config was rejected by the page runtime")]
    Rejected,
}

#[cfg(feature = "hydrate")]
fn to_js<T: Serialize>(config: &T) -> Result<wasm_bindgen::JsValue, ConfigError> {
    let json = serde_json::to_string(config)?;
    js_sys::JSON::parse(&json).map_err(|_| ConfigError::Rejected)
}

#[cfg(feature = "hydrate")]
fn has_global(name: &str) -> bool {
    js_sys::Reflect::has(&js_sys::global(), &wasm_bindgen::JsValue::from_str(name))
        .unwrap_or(false)
}

/// Wires up the third-party libraries exactly once per page load. Safe to
/// call from any number of mount effects; listener teardown stays with the
/// reactive scopes that own the listeners.
#[cfg(feature = "hydrate")]
pub fn init_page_effects() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        init_reveal();
        init_carousel();
    });
}

#[cfg(feature = "hydrate")]
fn init_reveal() {
    if !has_global("AOS") {
        log::warn!("AOS did not load; entrance animations are disabled");
        return;
    }
    match to_js(&RevealConfig::default()) {
        Ok(config) => js::aos_init(&config),
        Err(err) => log::error!("reveal setup skipped: {err}"),
    }
}

#[cfg(feature = "hydrate")]
fn init_carousel() {
    if !has_global("Swiper") {
        log::warn!("Swiper did not load; testimonials render as a static list");
        return;
    }
    match to_js(&CarouselConfig::default()) {
        Ok(config) => {
            let _carousel = js::Swiper::new(".swiper", &config);
        }
        Err(err) => log::error!("carousel setup skipped: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn carousel_config_uses_the_library_option_names() {
        let value = serde_json::to_value(CarouselConfig::default()).unwrap();
        assert_eq!(value["loop"], json!(true));
        assert_eq!(value["autoplay"]["delay"], json!(3000));
        assert_eq!(value["autoplay"]["disableOnInteraction"], json!(false));
        assert_eq!(value["pagination"]["el"], json!(".swiper-pagination"));
        assert_eq!(value["pagination"]["clickable"], json!(true));
    }

    #[test]
    fn reveal_config_sets_the_animation_duration() {
        let value = serde_json::to_value(RevealConfig::default()).unwrap();
        assert_eq!(value, json!({ "duration": 800 }));
    }
}
