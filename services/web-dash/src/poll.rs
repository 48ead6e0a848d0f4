// services/web-dash/src/poll.rs
//
// Fixed-interval polling tied to component lifetime
//

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;

/// Alert stats refresh cadence.
pub const ALERT_POLL_MS: u32 = 30_000;
/// Reorder suggestion refresh cadence.
pub const REORDER_POLL_MS: u32 = 60_000;

/// Run `tick` immediately and then every `interval_ms`, until the
/// calling component unmounts. The loop checks its liveness flag after
/// every sleep, so a disposed view never receives another update.
pub fn start_polling(interval_ms: u32, tick: impl Fn() + 'static) {
    let alive = Rc::new(Cell::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.set(false));
    }

    tick();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if !alive.get() {
                break;
            }
            tick();
        }
    });
}
