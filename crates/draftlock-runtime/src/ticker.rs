use crate::config::Config;
use crate::controller::LockController;
use draftlock_store::DocumentStore;
use draftlock_types::epoch_ms_now;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

/// Control messages into the ticker thread. Delivered on the same channel
/// that paces ticks, so ordering between controls and ticks is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerControl {
    /// Surface hidden: stop ticking, keep running.
    Suspend,
    /// Surface visible again: re-anchor, persist, resume ticking.
    Resume,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Unlocked,
    NoActiveDocument,
    Requested,
}

/// Events out of the ticker thread, in the order they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerEvent {
    Tick { remaining_ms: i64 },
    /// The one-shot lock transition fired on this tick.
    Unlocked,
    Suspended,
    Resumed { remaining_ms: i64 },
    Stopped { reason: StopReason },
}

/// The single cancellable countdown task for a watch surface.
///
/// The worker thread owns the [`DocumentStore`] for its lifetime, so every
/// document mutation during a watch happens on one thread. Each tick
/// re-resolves the active document by id; a document deleted or swapped since
/// the last tick is detected at that point and no mutation lands on a stale
/// handle. The ticker stops itself once the lock expires or the active
/// document disappears.
pub struct LockTicker {
    tx: Sender<TickerControl>,
    rx: Receiver<TickerEvent>,
    handle: Option<JoinHandle<()>>,
}

impl LockTicker {
    pub fn spawn(store: DocumentStore, config: Config) -> std::io::Result<Self> {
        let (tx_ctl, rx_ctl) = channel();
        let (tx_evt, rx_evt) = channel();

        let handle = std::thread::Builder::new()
            .name("lock-ticker".to_string())
            .spawn(move || {
                let mut store = store;
                run_loop(&mut store, &config, &rx_ctl, &tx_evt);
            })?;

        Ok(Self {
            tx: tx_ctl,
            rx: rx_evt,
            handle: Some(handle),
        })
    }

    pub fn events(&self) -> &Receiver<TickerEvent> {
        &self.rx
    }

    pub fn suspend(&self) {
        let _ = self.tx.send(TickerControl::Suspend);
    }

    pub fn resume(&self) {
        let _ = self.tx.send(TickerControl::Resume);
    }

    /// Stop the worker and wait for it to finish its final persist.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.tx.send(TickerControl::Stop);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for LockTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_loop(
    store: &mut DocumentStore,
    config: &Config,
    rx_ctl: &Receiver<TickerControl>,
    tx_evt: &Sender<TickerEvent>,
) {
    let interval = Duration::from_millis(config.tick_interval_ms.max(1));
    let mut controller = LockController::new(store, config);
    let mut suspended = false;
    let mut last_tick = epoch_ms_now();

    loop {
        match rx_ctl.recv_timeout(interval) {
            Ok(TickerControl::Stop) => {
                let _ = tx_evt.send(TickerEvent::Stopped {
                    reason: StopReason::Requested,
                });
                break;
            }
            Ok(TickerControl::Suspend) => {
                if !suspended {
                    suspended = true;
                    let _ = tx_evt.send(TickerEvent::Suspended);
                }
            }
            Ok(TickerControl::Resume) => {
                if !suspended {
                    continue;
                }
                suspended = false;
                let now = epoch_ms_now();
                last_tick = now;
                match controller.resume_after_hidden(now) {
                    Some(remaining_ms) => {
                        let _ = tx_evt.send(TickerEvent::Resumed { remaining_ms });
                        if remaining_ms == 0 {
                            let _ = tx_evt.send(TickerEvent::Stopped {
                                reason: StopReason::Unlocked,
                            });
                            break;
                        }
                    }
                    None => {
                        let _ = tx_evt.send(TickerEvent::Stopped {
                            reason: StopReason::NoActiveDocument,
                        });
                        break;
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if suspended {
                    continue;
                }
                let now = epoch_ms_now();
                let delta = now - last_tick;
                last_tick = now;

                controller.accrue_active(delta);
                match controller.tick_active(now) {
                    Some(report) => {
                        let _ = tx_evt.send(TickerEvent::Tick {
                            remaining_ms: report.remaining_ms,
                        });
                        if report.unlocked_now {
                            let _ = tx_evt.send(TickerEvent::Unlocked);
                        }
                        if report.remaining_ms == 0 {
                            let _ = tx_evt.send(TickerEvent::Stopped {
                                reason: StopReason::Unlocked,
                            });
                            break;
                        }
                    }
                    None => {
                        let _ = tx_evt.send(TickerEvent::Stopped {
                            reason: StopReason::NoActiveDocument,
                        });
                        break;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn ticker_fixture(lock_duration_ms: i64) -> (TempDir, LockTicker) {
        let dir = TempDir::new().unwrap();
        let mut store = DocumentStore::open(dir.path()).unwrap();
        store
            .create_document("draft", epoch_ms_now(), lock_duration_ms)
            .unwrap();
        let config = Config {
            lock_duration_ms,
            tick_interval_ms: 10,
            ..Config::default()
        };
        let ticker = LockTicker::spawn(store, config).unwrap();
        (dir, ticker)
    }

    fn drain_until_stopped(ticker: &LockTicker) -> Vec<TickerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = ticker.events().recv_timeout(Duration::from_secs(5)) {
            let stopped = matches!(event, TickerEvent::Stopped { .. });
            events.push(event);
            if stopped {
                break;
            }
        }
        events
    }

    #[test]
    fn test_ticker_runs_to_unlock_and_stops() {
        let (dir, ticker) = ticker_fixture(80);
        let events = drain_until_stopped(&ticker);

        assert!(events.contains(&TickerEvent::Unlocked));
        assert_eq!(
            events.last(),
            Some(&TickerEvent::Stopped {
                reason: StopReason::Unlocked
            })
        );

        // Ticks are non-increasing.
        let ticks: Vec<i64> = events
            .iter()
            .filter_map(|e| match e {
                TickerEvent::Tick { remaining_ms } => Some(*remaining_ms),
                _ => None,
            })
            .collect();
        assert!(ticks.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(ticks.last(), Some(&0));

        // The worker persisted the unlock before exiting.
        drop(ticker);
        let reloaded = DocumentStore::open(dir.path()).unwrap();
        let doc = reloaded.active_document().unwrap();
        assert!(!doc.lock_active);
        assert_eq!(doc.remaining_ms, 0);
    }

    #[test]
    fn test_suspend_pauses_ticking_and_resume_reports_remaining() {
        let (_dir, ticker) = ticker_fixture(60_000);

        // Let at least one tick land, then suspend.
        ticker
            .events()
            .recv_timeout(Duration::from_secs(5))
            .expect("first tick");
        ticker.suspend();

        let mut saw_suspended = false;
        while let Ok(event) = ticker.events().recv_timeout(Duration::from_millis(500)) {
            if event == TickerEvent::Suspended {
                saw_suspended = true;
                break;
            }
        }
        assert!(saw_suspended);

        // No ticks while suspended.
        assert!(
            ticker
                .events()
                .recv_timeout(Duration::from_millis(100))
                .is_err()
        );

        ticker.resume();
        let resumed = ticker
            .events()
            .recv_timeout(Duration::from_secs(5))
            .expect("resume event");
        match resumed {
            TickerEvent::Resumed { remaining_ms } => {
                assert!(remaining_ms > 0 && remaining_ms <= 60_000)
            }
            other => panic!("expected Resumed, got {:?}", other),
        }

        ticker.stop();
    }

    #[test]
    fn test_stop_is_acknowledged() {
        let (_dir, ticker) = ticker_fixture(60_000);
        let _ = ticker.tx.send(TickerControl::Stop);

        let mut saw_requested_stop = false;
        while let Ok(event) = ticker.events().recv_timeout(Duration::from_secs(5)) {
            if let TickerEvent::Stopped { reason } = event {
                saw_requested_stop = reason == StopReason::Requested;
                break;
            }
        }
        assert!(saw_requested_stop);
    }
}
