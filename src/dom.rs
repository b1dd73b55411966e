use crate::constants::MAX_PIXEL_RATIO;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio (capped). Returns the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<(u32, u32)> {
    let w = web::window()?;
    let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Some((w_px, h_px))
}

/// Create an element with an inline style and append it to `parent`.
pub fn append_styled(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    style: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_attribute("style", style).map_err(js_err)?;
    parent.append_child(&el).map_err(js_err)?;
    Ok(el)
}

/// Detach `el` from its parent, if it still has one.
#[inline]
pub fn detach(el: &web::Element) {
    el.remove();
}
