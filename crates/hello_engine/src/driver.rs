use std::time::Duration;

use hello_core::{Msg, PageViewModel};
use page_logging::{page_debug, page_info};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::PageRuntime;

/// Drives `runtime` on wall-clock time.
///
/// Sleeps until the next timer deadline, forwards messages from `inbox`, and
/// calls `render` whenever the view changed. Returns once the inbox is closed
/// and no timers remain, or when `shutdown` fires; shutdown cancels every
/// reveal job first so nothing keeps typing afterwards.
pub async fn run_realtime<R>(
    mut runtime: PageRuntime,
    mut inbox: mpsc::UnboundedReceiver<Msg>,
    shutdown: CancellationToken,
    mut render: R,
) -> PageRuntime
where
    R: FnMut(&PageViewModel),
{
    let origin = Instant::now();
    let virtual_origin = runtime.now_ms();
    let mut inbox_open = true;

    if let Some(view) = runtime.take_dirty_view() {
        render(&view);
    }

    loop {
        if !inbox_open && runtime.next_deadline().is_none() {
            page_debug!("page idle, stopping realtime driver");
            break;
        }
        let wake_at = runtime
            .next_deadline()
            .map(|deadline| origin + Duration::from_millis(deadline - virtual_origin));

        tokio::select! {
            _ = shutdown.cancelled() => {
                page_info!("shutdown requested, cancelling animations");
                runtime.dispatch(Msg::CancelAnimations);
                if let Some(view) = runtime.take_dirty_view() {
                    render(&view);
                }
                break;
            }
            msg = inbox.recv(), if inbox_open => match msg {
                Some(msg) => {
                    runtime.advance_to(virtual_now(origin, virtual_origin));
                    runtime.dispatch(msg);
                }
                None => inbox_open = false,
            },
            _ = sleep_until(wake_at) => {}
        }

        runtime.advance_to(virtual_now(origin, virtual_origin));
        if let Some(view) = runtime.take_dirty_view() {
            render(&view);
        }
    }

    runtime
}

fn virtual_now(origin: Instant, virtual_origin: u64) -> u64 {
    let elapsed = u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX);
    virtual_origin.saturating_add(elapsed)
}

async fn sleep_until(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
