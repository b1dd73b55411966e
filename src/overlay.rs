use crate::constants::{INSTRUCTIONS_TEXT, PARTICLE_COUNT};
use crate::core::CarouselState;
use crate::dom;
use gloo::events::EventListener;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const ROOT_STYLE: &str = "position:absolute; inset:0; pointer-events:none; z-index:10;";
const NAV_STYLE: &str = "position:absolute; top:32px; left:50%; transform:translateX(-50%); \
    display:flex; align-items:center; gap:12px; padding:12px 24px; border-radius:9999px; \
    background:rgba(0,0,0,0.2); backdrop-filter:blur(12px); \
    border:1px solid rgba(255,255,255,0.1); pointer-events:auto;";
const SEPARATOR_STYLE: &str =
    "width:24px; height:2px; border-radius:9999px; background:rgba(255,255,255,0.2);";
const DOT_BASE_STYLE: &str = "width:12px; height:12px; padding:0; border:none; \
    border-radius:9999px; cursor:pointer; transition:all 500ms;";
const DOT_ACTIVE_STYLE: &str =
    "background:#ffffff; transform:scale(1.5); box-shadow:0 0 12px rgba(255,255,255,0.5);";
const DOT_IDLE_STYLE: &str = "background:rgba(255,255,255,0.4);";
const INSTRUCTIONS_STYLE: &str = "position:absolute; bottom:32px; left:50%; \
    transform:translateX(-50%); padding:12px 24px; border-radius:9999px; \
    background:rgba(0,0,0,0.2); backdrop-filter:blur(12px); \
    border:1px solid rgba(255,255,255,0.1); color:rgba(255,255,255,0.7); \
    font:500 14px system-ui, -apple-system, sans-serif; white-space:nowrap;";
const PULSE_KEYFRAMES: &str =
    "@keyframes carousel-pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }";

/// DOM chrome drawn over the canvas: navigation dots, the instructions pill
/// and decorative particles.
pub struct Overlay {
    root: web::HtmlElement,
    dots: Vec<web::HtmlElement>,
    active: Option<usize>,
    _listeners: Vec<EventListener>,
}

impl Overlay {
    pub fn build(
        document: &web::Document,
        container: &web::Element,
        state: &Rc<RefCell<CarouselState>>,
    ) -> anyhow::Result<Self> {
        let root = dom::append_styled(document, container, "div", ROOT_STYLE)?;

        let style = document.create_element("style").map_err(dom::js_err)?;
        style.set_text_content(Some(PULSE_KEYFRAMES));
        root.append_child(&style).map_err(dom::js_err)?;

        let nav = dom::append_styled(document, &root, "div", NAV_STYLE)?;
        let card_count = state.borrow().card_count();
        let mut dots = Vec::with_capacity(card_count);
        let mut listeners = Vec::with_capacity(card_count);
        for index in 0..card_count {
            if index > 0 {
                dom::append_styled(document, &nav, "div", SEPARATOR_STYLE)?;
            }
            let dot = dom::append_styled(document, &nav, "button", DOT_BASE_STYLE)?;
            dot.set_attribute("aria-label", &format!("Show card {}", index + 1))
                .map_err(dom::js_err)?;
            let state = state.clone();
            listeners.push(EventListener::new(&dot, "click", move |_: &web::Event| {
                let selected = state.borrow_mut().select(index);
                log::info!("[dots] selected {}", selected);
            }));
            dots.push(dot);
        }

        let instructions = dom::append_styled(document, &root, "div", INSTRUCTIONS_STYLE)?;
        instructions.set_text_content(Some(INSTRUCTIONS_TEXT));

        let mut rng = rand::thread_rng();
        for _ in 0..PARTICLE_COUNT {
            let style = format!(
                "position:absolute; width:4px; height:4px; border-radius:9999px; \
                 background:rgba(255,255,255,0.2); left:{:.2}%; top:{:.2}%; \
                 animation:carousel-pulse {:.2}s ease-in-out {:.2}s infinite;",
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 100.0,
                2.0 + rng.gen::<f64>() * 3.0,
                rng.gen::<f64>() * 3.0,
            );
            dom::append_styled(document, &root, "div", &style)?;
        }

        let mut overlay = Self {
            root,
            dots,
            active: None,
            _listeners: listeners,
        };
        overlay.set_active(state.borrow().selected_index());
        Ok(overlay)
    }

    /// Highlight dot `index`; a no-op when it is already active.
    pub fn set_active(&mut self, index: usize) {
        if self.active == Some(index) {
            return;
        }
        for (i, dot) in self.dots.iter().enumerate() {
            let look = if i == index {
                DOT_ACTIVE_STYLE
            } else {
                DOT_IDLE_STYLE
            };
            _ = dot.set_attribute("style", &format!("{DOT_BASE_STYLE} {look}"));
        }
        self.active = Some(index);
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        dom::detach(&self.root);
    }
}
