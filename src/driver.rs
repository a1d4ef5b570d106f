//! requestAnimationFrame loop driver.
//!
//! A [`FrameLoop`] owns the frame closure and every input listener it registered.
//! Dropping it cancels the pending frame and removes the listeners, so stopping
//! the loop is just letting the value go out of scope.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};
use yew::NodeRef;

use crate::engine::Game;
use crate::render::Surface;
use crate::state::{is_game_key, to_field, typed_into_text_field};

/// A DOM event listener that deregisters itself on drop.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    pub fn new<F>(target: &EventTarget, event: &'static str, f: F) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameLoop {
    window: Window,
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    callback: FrameCallback,
    _listeners: Vec<ListenerGuard>,
}

fn context_2d(canvas_ref: &NodeRef) -> Option<CanvasRenderingContext2d> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    if !canvas.is_connected() {
        return None;
    }
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Option<i32> {
    let cb = callback.borrow();
    let cb = cb.as_ref()?;
    window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl FrameLoop {
    /// Register input listeners and schedule the first frame.
    pub fn start(canvas_ref: NodeRef, game: Rc<RefCell<Game>>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let canvas = canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| JsValue::from_str("canvas not mounted"))?;

        game.borrow_mut().state.input.release_all();
        let listeners = Self::listen(&window, &canvas, &game)?;

        let raf_id = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let window_loop = window.clone();
            let raf_id = raf_id.clone();
            let running = running.clone();
            let callback_loop = callback.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
                if !running.get() {
                    return;
                }
                {
                    let mut g = game.borrow_mut();
                    match context_2d(&canvas_ref) {
                        Some(mut ctx) => g.frame(now_ms, Some(&mut ctx as &mut dyn Surface)),
                        None => g.frame(now_ms, None),
                    };
                }
                if running.get() {
                    raf_id.set(request_frame(&window_loop, &callback_loop));
                }
            }) as Box<dyn FnMut(f64)>));
        }
        raf_id.set(request_frame(&window, &callback));
        log::info!("frame loop started");

        Ok(Self {
            window,
            raf_id,
            running,
            callback,
            _listeners: listeners,
        })
    }

    fn listen(
        window: &Window,
        canvas: &HtmlCanvasElement,
        game: &Rc<RefCell<Game>>,
    ) -> Result<Vec<ListenerGuard>, JsValue> {
        let mut guards = Vec::with_capacity(5);

        let g = game.clone();
        guards.push(ListenerGuard::new(window, "keydown", move |e| {
            // chat box keeps its spaces and arrows
            if typed_into_text_field(&e) {
                return;
            }
            if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                let key = e.key();
                if is_game_key(&key) {
                    e.prevent_default();
                }
                g.borrow_mut().state.input.press(&key);
            }
        })?);

        let g = game.clone();
        // released even inside a text field, in case focus moved while held
        guards.push(ListenerGuard::new(window, "keyup", move |e| {
            if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                g.borrow_mut().state.input.release(&e.key());
            }
        })?);

        let g = game.clone();
        let c = canvas.clone();
        guards.push(ListenerGuard::new(canvas, "mousemove", move |e| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                let r = c.get_bounding_client_rect();
                let (x, y) = to_field(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    r.left(),
                    r.top(),
                    r.width(),
                    r.height(),
                );
                g.borrow_mut().state.input.point(x, y);
            }
        })?);

        let g = game.clone();
        guards.push(ListenerGuard::new(canvas, "mousedown", move |_e| {
            g.borrow_mut().state.input.mouse_down = true;
        })?);

        // released anywhere, not just over the canvas
        let g = game.clone();
        guards.push(ListenerGuard::new(window, "mouseup", move |_e| {
            g.borrow_mut().state.input.mouse_down = false;
        })?);

        Ok(guards)
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // break the closure's reference to its own cell
        self.callback.borrow_mut().take();
        log::info!("frame loop stopped");
    }
}
