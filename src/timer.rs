use gloo_timers::callback::Timeout;

/// Something that can run a callback once after a delay.
///
/// Dropping the returned handle cancels the callback if it has not fired yet.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` through gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}
