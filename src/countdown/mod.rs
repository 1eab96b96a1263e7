use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;


pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Receives the events of a [`Countdown`].
pub trait CountdownListener: Send + Sync + 'static {
    fn on_tick(&self, seconds_left: u64) -> impl Future<Output = ()> + Send;

    fn on_expired(&self) -> impl Future<Output = ()> + Send;
}

/// Per-round timer. Ticks once per [`TICK_INTERVAL`] with the number of seconds left and
/// notifies the listener when it reaches zero.
///
/// Dropping a `Countdown` cancels it, so replacing the one stored next to a session is enough
/// to guarantee that only the newest countdown of that session is running.
#[derive(Debug)]
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    pub fn start<L: CountdownListener>(duration_secs: u64, listener: L) -> Self {
        let handle = tokio::spawn(async move {
            for seconds_left in (0..duration_secs).rev() {
                tokio::time::sleep(TICK_INTERVAL).await;
                listener.on_tick(seconds_left).await;
            }
            listener.on_expired().await;
        });
        Self { handle }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
