//! Portfolio page behaviour around the hero: navigation, mobile menu,
//! project filter, contact form, project chart, back-to-top and scroll
//! reveal.
//!
//! The rules live in `field_core::page`; this module reads the DOM and
//! applies their results.

use field_core::page::{
    active_section, back_to_top_visible, nav_href_matches, nav_scroll_target, project_matches,
    validation_message, ContactForm, NotificationKind, SectionBounds,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::chart;
use crate::constants::*;
use crate::dom;
use crate::frame;
use crate::notify;

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

pub fn wire_page(window: &web::Window, document: &web::Document) {
    wire_navigation(window, document);
    wire_mobile_menu(document);
    wire_project_filter(document);
    wire_contact_form(document);
    wire_back_to_top(window, document);
    chart::wire_project_chart(document);
    wire_scroll_reveal(document);
    wire_smooth_scrolling(document);
}

/// Coalesce scroll events into at most one `handler` call per animation frame.
fn on_scroll_frame(window: &web::Window, handler: impl Fn() + 'static) {
    let handler = Rc::new(handler);
    let ticking = Rc::new(Cell::new(false));
    dom::listen(window, "scroll", move |_| {
        if ticking.replace(true) {
            return;
        }
        let handler = handler.clone();
        let ticking = ticking.clone();
        frame::next_frame(move || {
            handler();
            ticking.set(false);
        });
    });
}

fn section_bounds(sections: &[web::Element]) -> Vec<SectionBounds> {
    sections
        .iter()
        .filter_map(|s| s.dyn_ref::<web::HtmlElement>())
        .map(|s| SectionBounds {
            id: s.id(),
            offset_top: s.offset_top() as f64,
            height: s.offset_height() as f64,
        })
        .collect()
}

fn wire_navigation(window: &web::Window, document: &web::Document) {
    let links = Rc::new(dom::query_all(document, NAV_LINK_SELECTOR));
    let sections = dom::query_all(document, SECTION_SELECTOR);

    let update = {
        let links = links.clone();
        move || {
            // offsets move with layout, so they are read on every update
            let bounds = section_bounds(&sections);
            let current = active_section(dom::scroll_y(), &bounds);
            for link in links.iter() {
                let href = link.get_attribute("href").unwrap_or_default();
                _ = link
                    .class_list()
                    .toggle_with_force(ACTIVE_CLASS, nav_href_matches(&href, current));
            }
        }
    };
    update();
    on_scroll_frame(window, update);

    let document = document.clone();
    for link in links.iter() {
        let href = link.get_attribute("href").unwrap_or_default();
        let document = document.clone();
        dom::listen(link, "click", move |ev| {
            if !href.starts_with('#') {
                return;
            }
            ev.prevent_default();
            let target = document
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|t| t.dyn_into::<web::HtmlElement>().ok());
            if let Some(target) = target {
                dom::smooth_scroll_to(nav_scroll_target(target.offset_top() as f64));
            }
        });
    }
}

fn wire_mobile_menu(document: &web::Document) {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(MOBILE_TOGGLE_ID),
        document.query_selector(NAV_MENU_SELECTOR).ok().flatten(),
    ) else {
        return;
    };

    {
        let (t, m) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            _ = m.class_list().toggle(OPEN_CLASS);
            _ = t.class_list().toggle(OPEN_CLASS);
        });
    }

    dom::listen(document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside = |el: &web::Element| target.as_ref().is_some_and(|n| el.contains(Some(n)));
        if !inside(&toggle) && !inside(&menu) {
            _ = menu.class_list().remove_1(OPEN_CLASS);
            _ = toggle.class_list().remove_1(OPEN_CLASS);
        }
    });
}

fn wire_project_filter(document: &web::Document) {
    let buttons = Rc::new(dom::query_all(document, FILTER_BUTTON_SELECTOR));
    let cards = Rc::new(dom::query_all(document, PROJECT_CARD_SELECTOR));

    for button in buttons.iter() {
        let (buttons, cards, this) = (buttons.clone(), cards.clone(), button.clone());
        dom::listen(button, "click", move |_| {
            let filter = this.get_attribute(FILTER_ATTRIBUTE).unwrap_or_default();
            for b in buttons.iter() {
                _ = b.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = this.class_list().add_1(ACTIVE_CLASS);

            for card in cards.iter() {
                let categories = card.get_attribute(CATEGORY_ATTRIBUTE).unwrap_or_default();
                let show = project_matches(&filter, &categories);
                _ = card.class_list().toggle_with_force(HIDDEN_CLASS, !show);
                if show {
                    dom::set_style(card, "animation", CARD_REVEAL_ANIMATION);
                }
            }
        });
    }
}

fn form_value(data: &web::FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

fn wire_contact_form(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };

    let document = document.clone();
    let form_for_submit = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let form = &form_for_submit;
        let Ok(data) = web::FormData::new_with_form(form) else {
            return;
        };
        let contact = ContactForm {
            name: form_value(&data, "name"),
            email: form_value(&data, "email"),
            subject: form_value(&data, "subject"),
            message: form_value(&data, "message"),
        };
        if let Err(errors) = contact.validate() {
            notify::show(
                &document,
                &validation_message(&errors),
                NotificationKind::Error,
                INVALID_NOTIFICATION_MS,
            );
            return;
        }

        let Some(button) = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok())
        else {
            return;
        };
        let original_label = button.text_content();
        button.set_text_content(Some(SENDING_LABEL));
        button.set_disabled(true);

        let (document, form) = (document.clone(), form.clone());
        dom::set_timeout(SEND_DELAY_MS, move || {
            notify::show(
                &document,
                SENT_MESSAGE,
                NotificationKind::Success,
                SENT_NOTIFICATION_MS,
            );
            form.reset();
            button.set_text_content(original_label.as_deref());
            button.set_disabled(false);
        });
    });
}

fn wire_back_to_top(window: &web::Window, document: &web::Document) {
    let Some(button) = document.get_element_by_id(BACK_TO_TOP_ID) else {
        return;
    };
    {
        let button = button.clone();
        on_scroll_frame(window, move || {
            _ = button
                .class_list()
                .toggle_with_force(HIDDEN_CLASS, !back_to_top_visible(dom::scroll_y()));
        });
    }
    dom::listen(&button, "click", |_| dom::smooth_scroll_to(0.0));
}

fn wire_scroll_reveal(document: &web::Document) {
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(FADE_IN_CSS));
        if let Some(head) = document.head() {
            _ = head.append_child(&style);
        }
    }

    let on_entries = |entries: js_sys::Array, _observer: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                _ = entry.target().class_list().add_1(FADE_IN_VISIBLE_CLASS);
            }
        }
    };
    let callback = Closure::wrap(Box::new(on_entries) as Box<ObserverCallback>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(FADE_IN_THRESHOLD));
    options.set_root_margin(FADE_IN_ROOT_MARGIN);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[page] scroll reveal unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();

    for el in dom::query_all(document, FADE_IN_SELECTOR) {
        _ = el.class_list().add_1(FADE_IN_CLASS);
        observer.observe(&el);
    }
}

fn wire_smooth_scrolling(document: &web::Document) {
    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let document = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::listen(&link, "click", move |ev| {
            if href == "#" {
                return;
            }
            if let Some(target) = document.query_selector(&href).ok().flatten() {
                ev.prevent_default();
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
