#![cfg(target_arch = "wasm32")]
use crate::core::{CarouselState, PhysicsParams, CARDS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod texture;

const CANVAS_STYLE: &str =
    "display:block; width:100%; height:100%; cursor:grab; touch-action:none; user-select:none;";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-carousel starting");
    Ok(())
}

/// A carousel mounted into a page element. Dropping or unmounting it stops
/// the frame loop, removes every listener and detaches its DOM.
#[wasm_bindgen]
pub struct Carousel {
    state: Rc<RefCell<CarouselState>>,
    canvas: web::HtmlCanvasElement,
    listeners: Vec<gloo::events::EventListener>,
    frame_loop: frame::FrameLoop,
}

#[wasm_bindgen]
impl Carousel {
    #[wasm_bindgen(js_name = selectedIndex)]
    pub fn selected_index(&self) -> usize {
        self.state.borrow().selected_index()
    }

    /// Select card `index` (clamped); the track eases there over later frames.
    pub fn select(&self, index: usize) -> usize {
        self.state.borrow_mut().select(index)
    }

    #[wasm_bindgen(js_name = selectedLink)]
    pub fn selected_link(&self) -> String {
        let index = self.state.borrow().selected_index();
        CARDS
            .get(index)
            .map(|card| card.link.to_string())
            .unwrap_or_default()
    }

    pub fn unmount(self) {
        log::info!("[mount] unmounting carousel");
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        self.listeners.clear();
        dom::detach(&self.canvas);
    }
}

/// Build the carousel inside the element with id `container_id`.
#[wasm_bindgen]
pub async fn mount(container_id: String) -> Result<Carousel, JsValue> {
    mount_in(&container_id).await.map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{e:#}"))
    })
}

async fn mount_in(container_id: &str) -> anyhow::Result<Carousel> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;

    let canvas: web::HtmlCanvasElement =
        dom::append_styled(&document, &container, "canvas", CANVAS_STYLE)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    match assemble(&document, &container, &canvas).await {
        Ok(carousel) => {
            log::info!(
                "[mount] carousel mounted in #{} with {} cards",
                container_id,
                CARDS.len()
            );
            Ok(carousel)
        }
        Err(e) => {
            dom::detach(&canvas);
            Err(e)
        }
    }
}

async fn assemble(
    document: &web::Document,
    container: &web::Element,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<Carousel> {
    dom::sync_canvas_backing_size(canvas);

    let state = Rc::new(RefCell::new(CarouselState::new(
        CARDS.len(),
        PhysicsParams::default(),
    )));
    let overlay = overlay::Overlay::build(document, container, &state)?;

    let textures = texture::card_textures(document, &CARDS);
    let gpu = frame::init_gpu(canvas, &textures).await;

    let mut listeners = events::wire_pointer_handlers(canvas, &state)?;
    listeners.push(events::wire_keydown(&state)?);
    listeners.push(events::wire_window_resize(canvas)?);

    let frame_loop = frame::start_loop(frame::FrameContext::new(
        state.clone(),
        gpu,
        canvas.clone(),
        overlay,
    ));

    Ok(Carousel {
        state,
        canvas: canvas.clone(),
        listeners,
        frame_loop,
    })
}
