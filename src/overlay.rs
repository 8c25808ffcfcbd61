use crate::constants::{STATUS_LABEL_ID, TITLE_OVERLAY_ID, TOGGLE_BUTTON_ID, TOGGLE_LABEL_ID};
use crate::dom;
use tree_core::TreeState;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TITLE_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TITLE_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(TITLE_OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Button caption, status line and a `formed`/`chaos` class on the button.
pub fn sync_controls(document: &web::Document, state: TreeState) {
    dom::set_text(document, TOGGLE_LABEL_ID, state.button_label());
    dom::set_text(document, STATUS_LABEL_ID, state.status_label());
    if let Some(el) = document.get_element_by_id(TOGGLE_BUTTON_ID) {
        let cl = el.class_list();
        let (on, off) = match state {
            TreeState::Formed => ("formed", "chaos"),
            TreeState::Chaos => ("chaos", "formed"),
        };
        _ = cl.remove_1(off);
        _ = cl.add_1(on);
    }
}
