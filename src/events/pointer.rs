use crate::core::CarouselState;
use crate::dom;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedState = Rc<RefCell<CarouselState>>;

/// Mouse and touch dragging. Presses start on the canvas; moves and
/// releases are tracked on the window so a drag may leave the canvas.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    state: &SharedState,
) -> anyhow::Result<Vec<EventListener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Ok(vec![
        wire_mousedown(canvas, state),
        wire_mousemove(&window, state),
        wire_release(&window, "mouseup", canvas, state),
        wire_touchstart(canvas, state),
        wire_touchmove(canvas, state),
        wire_release(canvas, "touchend", canvas, state),
        wire_release(canvas, "touchcancel", canvas, state),
    ])
}

fn wire_mousedown(canvas: &web::HtmlCanvasElement, state: &SharedState) -> EventListener {
    let state = state.clone();
    let canvas_cursor = canvas.clone();
    EventListener::new_with_options(
        canvas,
        "mousedown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &web::Event| {
            let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            ev.prevent_default();
            state
                .borrow_mut()
                .pointer_down(ev.client_x() as f32, js_sys::Date::now());
            set_cursor(&canvas_cursor, "grabbing");
        },
    )
}

fn wire_mousemove(window: &web::Window, state: &SharedState) -> EventListener {
    let state = state.clone();
    EventListener::new(window, "mousemove", move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        state
            .borrow_mut()
            .pointer_move(ev.client_x() as f32, js_sys::Date::now());
    })
}

fn wire_touchstart(canvas: &web::HtmlCanvasElement, state: &SharedState) -> EventListener {
    let state = state.clone();
    EventListener::new(canvas, "touchstart", move |event: &web::Event| {
        if let Some(x) = first_touch_x(event) {
            state.borrow_mut().pointer_down(x, js_sys::Date::now());
        }
    })
}

fn wire_touchmove(canvas: &web::HtmlCanvasElement, state: &SharedState) -> EventListener {
    let state = state.clone();
    // Non-passive so the page does not scroll under a swipe.
    EventListener::new_with_options(
        canvas,
        "touchmove",
        EventListenerOptions::enable_prevent_default(),
        move |event: &web::Event| {
            if let Some(x) = first_touch_x(event) {
                event.prevent_default();
                state.borrow_mut().pointer_move(x, js_sys::Date::now());
            }
        },
    )
}

fn wire_release(
    target: &web::EventTarget,
    event_type: &'static str,
    canvas: &web::HtmlCanvasElement,
    state: &SharedState,
) -> EventListener {
    let state = state.clone();
    let canvas = canvas.clone();
    EventListener::new(target, event_type, move |_: &web::Event| {
        let released = {
            let mut s = state.borrow_mut();
            let track = s.track_position();
            s.pointer_up().map(|index| (index, track))
        };
        if let Some((index, track)) = released {
            log::info!("[drag] {} at track {:.2} -> card {}", event_type, track, index);
            set_cursor(&canvas, "grab");
        }
    })
}

#[inline]
fn first_touch_x(event: &web::Event) -> Option<f32> {
    let ev = event.dyn_ref::<web::TouchEvent>()?;
    ev.touches().get(0).map(|t| t.client_x() as f32)
}

#[inline]
fn set_cursor(el: &web::HtmlElement, cursor: &str) {
    _ = el.style().set_property("cursor", cursor);
}

/// Keep the canvas backing store in step with its CSS size.
pub fn wire_window_resize(canvas: &web::HtmlCanvasElement) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas = canvas.clone();
    Ok(EventListener::new(&window, "resize", move |_: &web::Event| {
        if let Some((w, h)) = dom::sync_canvas_backing_size(&canvas) {
            log::debug!("[resize] canvas {}x{}", w, h);
        }
    }))
}
