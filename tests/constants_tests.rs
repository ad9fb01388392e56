// Host-side tests for the web frontend's page hooks and timings.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(SEND_DELAY_MS > 0);
    assert!(NOTIFICATION_SLIDE_IN_DELAY_MS > 0);
    // a toast must finish sliding in before it can be dismissed
    assert!(INVALID_NOTIFICATION_MS > NOTIFICATION_SLIDE_IN_DELAY_MS + NOTIFICATION_EXIT_MS);
    assert!(SENT_NOTIFICATION_MS > NOTIFICATION_SLIDE_IN_DELAY_MS + NOTIFICATION_EXIT_MS);
    // validation errors stay up longer than the success message
    assert!(INVALID_NOTIFICATION_MS > SENT_NOTIFICATION_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_in_observer_settings() {
    assert!(FADE_IN_THRESHOLD > 0.0 && FADE_IN_THRESHOLD < 1.0);
    assert_eq!(FADE_IN_ROOT_MARGIN.split_whitespace().count(), 4);
    assert!(FADE_IN_CSS.contains(&format!(".{FADE_IN_CLASS} ")));
    assert!(FADE_IN_CSS.contains(&format!(".{FADE_IN_VISIBLE_CLASS} ")));
}

#[test]
fn fade_in_covers_project_cards() {
    let selectors: Vec<&str> = FADE_IN_SELECTOR.split(',').map(str::trim).collect();
    assert!(selectors.contains(&PROJECT_CARD_SELECTOR));
    assert_eq!(selectors.len(), 3);
}

#[test]
fn notifications_start_offscreen() {
    assert!(NOTIFICATION_STYLE.contains(&format!("transform: {NOTIFICATION_HIDDEN_TRANSFORM};")));
    assert_ne!(NOTIFICATION_HIDDEN_TRANSFORM, NOTIFICATION_SHOWN_TRANSFORM);
    // the container ignores clicks, the toasts take them
    assert!(NOTIFICATION_CONTAINER_STYLE.contains("pointer-events: none;"));
    assert!(NOTIFICATION_STYLE.contains("pointer-events: auto;"));
}

#[test]
fn selectors_are_well_formed() {
    for id in [
        CANVAS_ID,
        CURSOR_DOT_ID,
        MOBILE_TOGGLE_ID,
        CONTACT_FORM_ID,
        BACK_TO_TOP_ID,
        NOTIFICATION_CONTAINER_ID,
    ] {
        assert!(!id.is_empty() && !id.starts_with('#'), "{id}");
    }
    for class_selector in [
        CURSOR_TRAIL_SELECTOR,
        NAV_LINK_SELECTOR,
        NAV_MENU_SELECTOR,
        FILTER_BUTTON_SELECTOR,
        PROJECT_CARD_SELECTOR,
    ] {
        assert!(class_selector.starts_with('.'), "{class_selector}");
    }
    assert!(QUALITY_ATTRIBUTE.starts_with("data-"));
    assert!(FILTER_ATTRIBUTE.starts_with("data-"));
    assert!(CATEGORY_ATTRIBUTE.starts_with("data-"));
}

#[test]
fn project_chart_series_line_up() {
    assert_eq!(CHART_LABELS.len(), CHART_VALUES.len());
    assert_eq!(CHART_COLORS.len(), CHART_VALUES.len());
    assert_eq!(CHART_VALUES.iter().sum::<u32>(), 23);
    for color in CHART_COLORS.iter().chain([&CHART_BORDER_COLOR, &CHART_LEGEND_COLOR]) {
        assert!(color.starts_with('#') && color.len() == 7, "{color}");
    }
    assert!(!CHART_CANVAS_ID.is_empty() && !CHART_CANVAS_ID.starts_with('#'));
}
