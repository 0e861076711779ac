//! Browser timer backing the controls' auto-hide.

use gloo_timers::callback::Timeout;

use crate::core::Timer;

/// [`Timer`] over `setTimeout`. Dropping the handle clears the timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}
