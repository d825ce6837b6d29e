//! DOM glue: the full-viewport canvas, input listeners and the
//! self-rescheduling `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use galaxy_engine::{GalaxyConfig, InputEvent, Renderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::Canvas2dRenderer;
use crate::runner::GalaxyRunner;

const CANVAS_ID: &str = "galaxy-canvas";

/// Fixed, full-viewport, behind the UI, never intercepting clicks.
const CANVAS_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("z-index", "0"),
    ("pointer-events", "none"),
];

type FrameCallback = Closure<dyn FnMut(f64)>;
type ListenerCallback = Closure<dyn FnMut(Event)>;

/// State shared between the host, its listeners and the frame callback.
struct Surface {
    runner: GalaxyRunner,
    renderer: Canvas2dRenderer,
    /// Pending animation frame request, if any.
    frame_id: Option<i32>,
}

impl Surface {
    /// Simulate and paint one refresh. Returns false once the galaxy stopped.
    fn paint(&mut self, timestamp_ms: f64) -> bool {
        let now_ms = js_sys::Date::now();
        let Some(frame) = self.runner.frame(timestamp_ms, now_ms) else {
            return false;
        };
        if let Err(err) = self.renderer.render(frame) {
            log::warn!("galaxy: canvas rejected a draw call: {err:?}");
        }
        true
    }

    fn resize(&mut self, window: &Window) {
        let (width, height) = viewport_size(window);
        self.renderer.resize(width as u32, height as u32);
        self.runner.push_input(InputEvent::Resize { width, height });
    }
}

/// One galaxy attached to the page.
///
/// Created by [`GalaxyHost::attach`]; [`GalaxyHost::shutdown`] (or dropping
/// the host) cancels the frame loop, removes every listener and detaches
/// the canvas.
pub struct GalaxyHost {
    window: Window,
    surface: Rc<RefCell<Surface>>,
    /// The frame callback reschedules itself through this slot. Emptying it
    /// breaks the reference cycle and stops the loop.
    frame_callback: Rc<RefCell<Option<FrameCallback>>>,
    listeners: Vec<(&'static str, ListenerCallback)>,
    attached: bool,
}

impl GalaxyHost {
    /// Insert the canvas behind the page content, seed the galaxy, register
    /// input listeners and start the frame loop.
    pub fn attach(config: GalaxyConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_id(CANVAS_ID);
        let style = canvas.style();
        for (property, value) in CANVAS_STYLE {
            style.set_property(property, value)?;
        }
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        body.prepend_with_node_1(&canvas)?;

        let (width, height) = viewport_size(&window);
        let mut renderer = Canvas2dRenderer::new(canvas, ctx);
        renderer.resize(width as u32, height as u32);

        let seed = js_sys::Date::now() as u64;
        let mut runner = GalaxyRunner::new(config, width, height, seed);
        runner.init();
        log::info!("galaxy: canvas attached ({} backend)", renderer.backend());

        let mut host = Self {
            window,
            surface: Rc::new(RefCell::new(Surface {
                runner,
                renderer,
                frame_id: None,
            })),
            frame_callback: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
            attached: true,
        };
        host.listen()?;
        host.start_loop()?;
        Ok(host)
    }

    /// Run `f` against the runner (task-store calls, introspection).
    pub fn with_runner<R>(&self, f: impl FnOnce(&mut GalaxyRunner) -> R) -> R {
        f(&mut self.surface.borrow_mut().runner)
    }

    /// Re-read the window size, for hosts that resize without a `resize` event.
    pub fn resize(&self) {
        self.surface.borrow_mut().resize(&self.window);
    }

    fn listen(&mut self) -> Result<(), JsValue> {
        let surface = Rc::clone(&self.surface);
        let window = self.window.clone();
        self.add_listener(
            "resize",
            ListenerCallback::new(move |_event: Event| {
                surface.borrow_mut().resize(&window);
            }),
        )?;

        let surface = Rc::clone(&self.surface);
        self.add_listener(
            "mousemove",
            ListenerCallback::new(move |event: Event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    surface.borrow_mut().runner.push_input(InputEvent::PointerMove {
                        x: mouse.client_x() as f32,
                        y: mouse.client_y() as f32,
                    });
                }
            }),
        )?;

        let surface = Rc::clone(&self.surface);
        self.add_listener(
            "mouseout",
            ListenerCallback::new(move |event: Event| {
                // No related target: the pointer left the window itself.
                let left_window = event
                    .dyn_ref::<MouseEvent>()
                    .is_some_and(|mouse| mouse.related_target().is_none());
                if left_window {
                    surface.borrow_mut().runner.push_input(InputEvent::PointerLeave);
                }
            }),
        )?;
        Ok(())
    }

    fn add_listener(&mut self, kind: &'static str, callback: ListenerCallback) -> Result<(), JsValue> {
        self.window
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.listeners.push((kind, callback));
        Ok(())
    }

    fn start_loop(&mut self) -> Result<(), JsValue> {
        let surface = Rc::clone(&self.surface);
        let window = self.window.clone();
        let slot = Rc::clone(&self.frame_callback);

        let callback = FrameCallback::new(move |timestamp: f64| {
            let mut state = surface.borrow_mut();
            state.frame_id = None;
            if !state.paint(timestamp) {
                return;
            }
            // Reschedule only after this frame's work is done.
            if let Some(next) = slot.borrow().as_ref() {
                match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    Ok(id) => state.frame_id = Some(id),
                    Err(err) => log::error!("galaxy: could not schedule next frame: {err:?}"),
                }
            }
        });

        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.surface.borrow_mut().frame_id = Some(id);
        *self.frame_callback.borrow_mut() = Some(callback);
        Ok(())
    }

    /// Halt the frame loop, deregister listeners and remove the canvas.
    /// Safe to call more than once.
    pub fn shutdown(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        if let Some(id) = self.surface.borrow_mut().frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("galaxy: cancel_animation_frame failed: {err:?}");
            }
        }
        self.frame_callback.borrow_mut().take();

        for (kind, callback) in self.listeners.drain(..) {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            {
                log::warn!("galaxy: could not remove {kind} listener: {err:?}");
            }
        }

        let mut state = self.surface.borrow_mut();
        state.runner.shutdown();
        state.renderer.canvas().remove();
        log::info!("galaxy: detached");
    }
}

impl Drop for GalaxyHost {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Window inner size in CSS pixels. Zero when the browser reports nothing usable.
fn viewport_size(window: &Window) -> (f32, f32) {
    let read = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    };
    (read(window.inner_width()), read(window.inner_height()))
}
