use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Calls `callback` once the window has stopped resizing for `delay_ms`.
///
/// Dragging a window edge fires dozens of resize events per second; every
/// new event pushes the pending call back, so the chart is redrawn once per
/// gesture rather than once per event.
///
/// Returns `None` outside a browser window. The listener is removed when the
/// returned value is dropped, together with any pending call.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with((), move |_| {
///     let listener = on_resize_settled(150, move || redraw());
///     move || drop(listener)
/// });
/// ```
pub fn on_resize_settled<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = callback.clone();
        // Replacing the handle drops (and so cancels) the previous timeout
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
