use crate::constants::{CANVAS_ID, CANVAS_STYLE};
use heart_core::{Release, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn container_element(document: &web::Document, element_id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))
}

/// Read the canvas CSS box and the (capped) device pixel ratio.
pub fn read_viewport(canvas: &web::HtmlCanvasElement, max_pixel_ratio: f64) -> Viewport {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(rect.width(), rect.height(), dpr, max_pixel_ratio)
}

/// Match the canvas backing store to its CSS size times the capped pixel ratio.
/// A zero-sized box is kept at zero; the renderer skips drawing in that case.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_pixel_ratio: f64) -> Viewport {
    let vp = read_viewport(canvas, max_pixel_ratio);
    let (w, h) = vp.pixel_size();
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    vp
}

/// A canvas appended to a host container; released by removing it from the DOM.
pub struct AttachedCanvas {
    canvas: web::HtmlCanvasElement,
}

impl AttachedCanvas {
    pub fn attach(document: &web::Document, container: &web::Element) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas.set_id(CANVAS_ID);
        _ = canvas.set_attribute("style", CANVAS_STYLE);
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
        Ok(Self { canvas })
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Release for AttachedCanvas {
    fn release(&mut self) {
        self.canvas.remove();
    }
}

/// Window `resize` listener keeping the canvas backing size in sync.
pub struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn install(canvas: &web::HtmlCanvasElement, max_pixel_ratio: f64) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            let vp = sync_canvas_backing_size(&canvas_resize, max_pixel_ratio);
            log::debug!("[resize] {:?}", vp.pixel_size());
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add resize listener: {:?}", e))?;
        Ok(Self { window, closure })
    }
}

impl Release for ResizeListener {
    fn release(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}
