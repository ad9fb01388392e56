use field_core::page::NotificationKind;
use web_sys as web;

use crate::constants::{
    NOTIFICATION_CONTAINER_ID, NOTIFICATION_CONTAINER_STYLE, NOTIFICATION_EXIT_MS,
    NOTIFICATION_HIDDEN_TRANSFORM, NOTIFICATION_SHOWN_TRANSFORM, NOTIFICATION_SLIDE_IN_DELAY_MS,
    NOTIFICATION_STYLE,
};
use crate::dom;

/// Create the fixed toast container unless the page already provides one.
pub fn ensure_container(document: &web::Document) {
    if document.get_element_by_id(NOTIFICATION_CONTAINER_ID).is_some() {
        return;
    }
    let (Ok(container), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    container.set_id(NOTIFICATION_CONTAINER_ID);
    _ = container.set_attribute("style", NOTIFICATION_CONTAINER_STYLE);
    _ = body.append_child(&container);
}

/// Slide a toast into the notification container. A `duration_ms` of 0
/// keeps it on screen.
pub fn show(document: &web::Document, message: &str, kind: NotificationKind, duration_ms: i32) {
    let Some(container) = document.get_element_by_id(NOTIFICATION_CONTAINER_ID) else {
        return;
    };
    let el = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("[notify] create failed: {:?}", e);
            return;
        }
    };
    el.set_class_name(kind.css_class());
    _ = el.set_attribute("style", NOTIFICATION_STYLE);
    el.set_text_content(Some(message));
    if container.append_child(&el).is_err() {
        return;
    }

    let entering = el.clone();
    dom::set_timeout(NOTIFICATION_SLIDE_IN_DELAY_MS, move || {
        dom::set_style(&entering, "transform", NOTIFICATION_SHOWN_TRANSFORM);
    });

    if duration_ms > 0 {
        dom::set_timeout(duration_ms, move || {
            dom::set_style(&el, "transform", NOTIFICATION_HIDDEN_TRANSFORM);
            dom::set_timeout(NOTIFICATION_EXIT_MS, move || el.remove());
        });
    }
}
