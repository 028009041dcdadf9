use crate::core::{MotionTables, Params};
use crate::panel::Panel;
use std::cell::RefCell;
use std::rc::Rc;
use super::keymap::{action_for_key, captures_keys, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared state the global shortcuts act on.
pub struct KeyWiring {
    pub params: Rc<RefCell<Params>>,
    pub paused: Rc<RefCell<bool>>,
    pub motion: Rc<RefCell<MotionTables>>,
    pub panel: Rc<Panel>,
    pub canvas: web::HtmlCanvasElement,
}

/// Keys typed into text-like panel widgets belong to the widget.
fn is_form_target(ev: &web::KeyboardEvent) -> bool {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return false;
    };
    let input_type = el.get_attribute("type").unwrap_or_default();
    captures_keys(&el.tag_name(), &input_type)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyWiring) {
    if is_form_target(ev) {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::TogglePanel => {
            w.panel.toggle(&w.params.borrow());
            ev.prevent_default();
        }
        KeyAction::TogglePause => {
            let mut p = w.paused.borrow_mut();
            *p = !*p;
            log::info!("[keys] {}", if *p { "paused" } else { "resumed" });
            ev.prevent_default();
        }
        KeyAction::RegenerateRandomMotion => {
            let mut m = w.motion.borrow_mut();
            if m.is_generated() {
                m.regenerate();
                log::info!("[keys] random motion regenerated");
            } else {
                log::info!("[keys] random motion not drawn yet");
            }
        }
        KeyAction::ToggleFullscreen => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    _ = w.canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        KeyAction::ExitFullscreen => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                }
            }
        }
    }
}

pub fn wire_global_keydown(w: KeyWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
