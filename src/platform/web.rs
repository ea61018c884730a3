//! Browser frame driver

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Call `frame(time_ms)` on every animation frame while it returns true
pub fn animation_loop<F>(frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(window) = web_sys::window() else {
        log::error!("No window; animation loop not started");
        return;
    };
    let closure = Closure::once(move |time: f64| {
        let keep_going = {
            let mut f = frame.borrow_mut();
            (&mut *f)(time)
        };
        if keep_going {
            animation_loop(frame);
        }
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
