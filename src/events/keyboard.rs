use crate::core::{CarouselState, Nav};
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys step the selection; other keys pass through untouched.
pub fn wire_keydown(state: &Rc<RefCell<CarouselState>>) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let state = state.clone();
    Ok(EventListener::new_with_options(
        &window,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &web::Event| {
            let Some(ev) = event.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            let Some(nav) = Nav::from_key(&ev.key()) else {
                return;
            };
            ev.prevent_default();
            let selected = state.borrow_mut().navigate(nav);
            log::info!("[keys] {:?} -> card {}", nav, selected);
        },
    ))
}
