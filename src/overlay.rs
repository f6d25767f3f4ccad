use crate::dom;
use web_sys as web;

const LOADING_ID: &str = "loading-overlay";
const INTRO_ID: &str = "intro-overlay";
const FOCUS_ID: &str = "focus-overlay";
const FATAL_ID: &str = "fatal-overlay";

#[inline]
fn show_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn show_loading(document: &web::Document) {
    show_by_id(document, LOADING_ID);
}

pub fn hide_loading(document: &web::Document) {
    hide_by_id(document, LOADING_ID);
}

pub fn show_intro(document: &web::Document) {
    show_by_id(document, INTRO_ID);
}

pub fn hide_intro(document: &web::Document) {
    hide_by_id(document, INTRO_ID);
}

/// Fill and reveal the focus panel for the selected item. The link row is
/// hidden for items without an external destination.
pub fn show_focus(
    document: &web::Document,
    title: &str,
    caption: &str,
    external_link: Option<&str>,
) {
    if let Some(el) = document.get_element_by_id("focus-title") {
        el.set_text_content(Some(title));
    }
    if let Some(el) = document.get_element_by_id("focus-caption") {
        el.set_text_content(Some(caption));
    }
    if let Some(el) = document.get_element_by_id("focus-link") {
        match external_link {
            Some(url) => {
                _ = el.set_attribute("href", url);
                _ = el.set_attribute("style", "");
            }
            None => {
                _ = el.set_attribute("style", "display:none");
            }
        }
    }
    show_by_id(document, FOCUS_ID);
}

pub fn hide_focus(document: &web::Document) {
    hide_by_id(document, FOCUS_ID);
}

/// Full-screen failure panel with a reload affordance. Only shown for
/// unrecoverable startup errors.
pub fn show_fatal(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id("fatal-message") {
        el.set_text_content(Some(message));
    }
    dom::add_click_listener(document, "fatal-reload", || {
        if let Some(w) = web::window() {
            _ = w.location().reload();
        }
    });
    show_by_id(document, FATAL_ID);
}
