//! The toast queue runner
//!
//! One runner displays toasts one at a time: the highest-priority pending
//! toast is promoted to the display slot, torn down when its duration
//! elapses, and replaced by the next. All state lives in a single worker
//! task; the cloneable [`ToastRunner`] handle funnels submissions and
//! cancellation through a bounded command channel, so list mutation and the
//! display transition are serialized without a lock.
//!
//! The runner is an explicitly constructed service rather than a process-wide
//! ambient singleton: build one per process, keep it for the process
//! lifetime, and hand references to callers.

use std::sync::Arc;

use toast_overlay_config::ToastsConfig;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::time::{Duration, Instant, sleep_until};
use tracing::{debug, error, warn};

use crate::constants::CHANNEL_BUFFER_SIZE;
use crate::duration::ToastDuration;
use crate::render::Renderer;
use crate::state::PendingQueue;
use crate::toast::Toast;

#[derive(Debug)]
enum Command {
    Add(Toast),
    CancelAll,
}

/// Handle to a running toast queue.
///
/// Cheap to clone; all clones feed the same worker. Submission never blocks:
/// commands that cannot be queued are logged and dropped. The worker exits
/// once every handle is dropped, tearing down whatever is displayed.
#[derive(Debug, Clone)]
pub struct ToastRunner {
    tx: mpsc::Sender<Command>,
}

impl ToastRunner {
    /// Spawn a runner with default configuration.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self::with_config(renderer, ToastsConfig::default())
    }

    /// Spawn a runner with the given configuration.
    pub fn with_config(renderer: Arc<dyn Renderer>, config: ToastsConfig) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let worker = Worker {
            renderer,
            pending: PendingQueue::new(config.max_pending as usize),
            current: None,
            config,
            rx,
        };
        tokio::spawn(worker.run());
        Self { tx }
    }

    /// Queue a toast for display.
    ///
    /// Returns immediately; the display happens on the worker.
    pub fn add(&self, toast: Toast) {
        self.send(Command::Add(toast));
    }

    /// Clear the pending list and dismiss the displayed toast, if any.
    pub fn cancel_all(&self) {
        self.send(Command::CancelAll);
    }

    fn send(&self, command: Command) {
        match self.tx.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Full(command)) => {
                warn!(?command, "runner command channel full, dropping command");
            }
            Err(TrySendError::Closed(command)) => {
                error!(?command, "runner worker is gone, dropping command");
            }
        }
    }
}

struct Displayed {
    toast: Toast,
    deadline: Instant,
}

struct Worker {
    renderer: Arc<dyn Renderer>,
    pending: PendingQueue,
    current: Option<Displayed>,
    config: ToastsConfig,
    rx: mpsc::Receiver<Command>,
}

impl Worker {
    async fn run(mut self) {
        loop {
            let deadline = self.current.as_ref().map(|displayed| displayed.deadline);
            tokio::select! {
                command = self.rx.recv() => match command {
                    Some(Command::Add(toast)) => self.admit(toast),
                    Some(Command::CancelAll) => self.cancel_all(),
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.expire();
                }
            }
        }

        // All handles dropped; tear down whatever is still on screen.
        if let Some(displayed) = self.current.take() {
            self.renderer.detach(&displayed.toast);
        }
    }

    /// Insert a toast into the pending list and, when nothing is displayed,
    /// promote the head of the list immediately.
    ///
    /// Promotion happens on arrival: a toast submitted while the runner is
    /// idle takes the slot even if a higher-priority one arrives a moment
    /// later. Priority only orders toasts that are pending together.
    fn admit(&mut self, toast: Toast) {
        if !self.pending.insert(toast) {
            return;
        }
        if self.current.is_none() {
            self.promote_next();
        }
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
        if let Some(displayed) = self.current.take() {
            debug!(view = displayed.toast.view().id(), "cancelling displayed toast");
            self.renderer.detach(&displayed.toast);
        }
    }

    fn expire(&mut self) {
        if let Some(displayed) = self.current.take() {
            debug!(view = displayed.toast.view().id(), "toast expired");
            self.renderer.detach(&displayed.toast);
        }
        self.promote_next();
    }

    /// Move the highest-priority pending toast to the display slot.
    ///
    /// A toast whose attach fails is skipped; any permission fallback is the
    /// renderer's job, the runner just advances to the next entry.
    fn promote_next(&mut self) {
        while let Some(toast) = self.pending.pop() {
            match self.renderer.attach(&toast) {
                Ok(()) => {
                    let duration = self.resolve_duration(toast.duration());
                    debug!(
                        view = toast.view().id(),
                        priority = toast.priority(),
                        duration_ms = duration.as_millis() as u64,
                        pending = self.pending.len(),
                        "displaying toast"
                    );
                    self.current = Some(Displayed {
                        toast,
                        deadline: Instant::now() + duration,
                    });
                    return;
                }
                Err(err) => {
                    warn!(
                        view = toast.view().id(),
                        error = %err,
                        "failed to display toast, skipping"
                    );
                }
            }
        }
    }

    fn resolve_duration(&self, duration: ToastDuration) -> Duration {
        let millis = match duration {
            ToastDuration::Short => self.config.short_timeout_ms,
            ToastDuration::Long => self.config.long_timeout_ms,
        };
        Duration::from_millis(u64::from(millis))
    }
}
