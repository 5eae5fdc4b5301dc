//! Scroll-position-driven active-section state for the navigation bar.
//!
//! The derived-state computation is a plain function over a list of section
//! offsets so it can be tested without a viewport; the reactive glue around
//! it only exists in the browser.

use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

/// Pixels above a section's top at which it becomes the active section,
/// compensating for the sticky navigation bar.
pub const SCROLL_OFFSET_PX: f64 = 80.0;

/// The last section in document order whose top, less [`SCROLL_OFFSET_PX`],
/// sits at or above the scroll position. `None` when the viewport is above
/// every section threshold.
pub fn compute_active_section(
    scroll_y: f64,
    offsets: &[(&'static str, f64)],
) -> Option<&'static str> {
    let mut current = None;
    for (id, top) in offsets {
        if scroll_y >= top - SCROLL_OFFSET_PX {
            current = Some(*id);
        }
    }
    current
}

/// Derives the active section id from the window scroll position.
///
/// Evaluates once at mount and again on every scroll or resize; the
/// underlying listeners are registered once and removed with the owning
/// reactive scope. Server rendering sees no viewport and yields `None`.
pub fn use_active_section() -> Memo<Option<&'static str>> {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { width, .. } = use_window_size();
    Memo::new(move |_| {
        // Resizing reflows the sections, so re-measure then too
        width.track();
        compute_active_section(scroll_y.get(), &section_offsets())
    })
}

/// Measures the top offset of each navigable section, skipping any that
/// cannot be found in the document.
#[cfg(feature = "hydrate")]
fn section_offsets() -> Vec<(&'static str, f64)> {
    use super::content::NAV_LINKS;

    NAV_LINKS
        .iter()
        .filter_map(|link| match section_top(link.id) {
            Ok(top) => Some((link.id, top)),
            Err(err) => {
                log::warn!("skipping section in scroll scan: {err}");
                None
            }
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
fn section_offsets() -> Vec<(&'static str, f64)> {
    Vec::new()
}

#[cfg(feature = "hydrate")]
#[derive(Debug, thiserror::Error)]
enum SectionError {
    #[error("document is not available")]
    NoDocument,
    #[error("no element with id `{0}`")]
    Missing(&'static str),
    #[error("element `{0}` is not an HTML element")]
    NotHtml(&'static str),
}

#[cfg(feature = "hydrate")]
fn section_top(id: &'static str) -> Result<f64, SectionError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(SectionError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or(SectionError::Missing(id))?;
    let element = element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| SectionError::NotHtml(id))?;
    Ok(element.offset_top() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets() -> Vec<(&'static str, f64)> {
        vec![
            ("header", 0.0),
            ("about", 600.0),
            ("skills", 1200.0),
            ("services", 1800.0),
        ]
    }

    #[test]
    fn zero_scroll_activates_header_when_its_threshold_is_not_positive() {
        assert_eq!(compute_active_section(0.0, &offsets()), Some("header"));
    }

    #[test]
    fn none_is_active_above_every_threshold() {
        let below_fold = vec![("about", 600.0), ("skills", 1200.0)];
        assert_eq!(compute_active_section(0.0, &below_fold), None);
    }

    #[test]
    fn crossing_a_threshold_switches_the_active_section() {
        let threshold = 1200.0 - SCROLL_OFFSET_PX;
        assert_eq!(
            compute_active_section(threshold - 1.0, &offsets()),
            Some("about")
        );
        assert_eq!(compute_active_section(threshold, &offsets()), Some("skills"));
        assert_eq!(
            compute_active_section(threshold + 1.0, &offsets()),
            Some("skills")
        );
    }

    #[test]
    fn deep_scroll_keeps_the_last_section_active() {
        assert_eq!(
            compute_active_section(1_000_000.0, &offsets()),
            Some("services")
        );
    }

    #[test]
    fn no_sections_means_no_active_id() {
        assert_eq!(compute_active_section(500.0, &[]), None);
    }
}
