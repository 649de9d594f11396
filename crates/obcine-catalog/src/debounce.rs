//! Channel-based debouncing of rapidly-changing values.

use std::time::Duration;

use tokio::sync::mpsc;

/// Create a debounced channel pair.
///
/// Values sent on the returned sender are forwarded to the receiver only
/// after no newer value has arrived for `delay`. A newer value supersedes
/// the pending one and restarts the timer; the superseded value is never
/// forwarded. Dropping either endpoint stops the worker task and discards
/// any pending value, so nothing fires after teardown.
pub fn debounce_channel<T: Send + 'static>(
    delay: Duration,
) -> (mpsc::UnboundedSender<T>, mpsc::UnboundedReceiver<T>) {
    let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
    let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();

    tokio::spawn(async move {
        let mut pending: Option<T> = None;
        loop {
            match pending.take() {
                Some(value) => {
                    tokio::select! {
                        next = in_rx.recv() => match next {
                            // Newer value wins; the timer restarts on the
                            // next loop iteration.
                            Some(newer) => pending = Some(newer),
                            // Sender dropped: the pending value never fires.
                            None => break,
                        },
                        _ = tokio::time::sleep(delay) => {
                            if out_tx.send(value).is_err() {
                                // Receiver dropped, nothing left to notify.
                                break;
                            }
                        }
                    }
                }
                None => match in_rx.recv().await {
                    Some(first) => pending = Some(first),
                    None => break,
                },
            }
        }
    });

    (in_tx, out_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;
    use tokio_test::assert_ok;

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_of_burst_commits() {
        let (tx, mut rx) = debounce_channel(DELAY);
        assert_ok!(tx.send("a"));
        assert_ok!(tx.send("aj"));
        assert_ok!(tx.send("ajd"));

        advance(Duration::from_millis(301)).await;
        assert_eq!(rx.recv().await, Some("ajd"));
        // The intermediates were never observable.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_value_restarts_quiet_window() {
        let (tx, mut rx) = debounce_channel(DELAY);
        assert_ok!(tx.send(1));
        advance(Duration::from_millis(200)).await;
        assert_ok!(tx.send(2));
        advance(Duration::from_millis(200)).await;

        // 400 ms elapsed overall, but the last value has only been quiet
        // for 200 ms.
        assert!(rx.try_recv().is_err());
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_quiet_windows_each_commit() {
        let (tx, mut rx) = debounce_channel(DELAY);
        assert_ok!(tx.send("bled"));
        advance(Duration::from_millis(301)).await;
        assert_eq!(rx.recv().await, Some("bled"));

        assert_ok!(tx.send("bovec"));
        advance(Duration::from_millis(301)).await;
        assert_eq!(rx.recv().await, Some("bovec"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sender_discards_pending_value() {
        let (tx, mut rx) = debounce_channel(DELAY);
        assert_ok!(tx.send("pending"));
        drop(tx);

        // The channel closes without the pending value ever firing.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_stops_worker() {
        let (tx, rx) = debounce_channel(DELAY);
        drop(rx);
        assert_ok!(tx.send("ignored"));
        // Let the worker receive the value and arm its sleep timer before we
        // advance the paused clock, so the advance actually elapses the timer.
        tokio::task::yield_now().await;
        advance(Duration::from_millis(301)).await;
        tokio::task::yield_now().await;

        // The failed forward stopped the worker, which closes the input.
        assert!(tx.is_closed());
    }
}
