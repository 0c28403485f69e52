//! A dedicated worker thread that runs submitted closures one at a time, in order.
//!
//! Used for work that must stay on a single thread, such as calls into a host that is
//! not thread-safe, while callers keep running elsewhere.

use std::any::Any;
use std::io;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::thread::{self, JoinHandle, ThreadId};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace, warn};

type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutorError {
    #[error("executor is shut down")]
    Closed,
    #[error("task panicked: {0}")]
    Panicked(String),
}

/// Pending result of a submitted task.
#[derive(Debug)]
pub struct TaskHandle<T> {
    rx: oneshot::Receiver<Result<T, ExecutorError>>,
}

impl<T> TaskHandle<T> {
    pub async fn wait(self) -> Result<T, ExecutorError> {
        self.rx.await.unwrap_or(Err(ExecutorError::Closed))
    }

    /// Blocks the current thread until the task finishes.
    ///
    /// Must not be called from inside an async runtime.
    pub fn blocking_wait(self) -> Result<T, ExecutorError> {
        self.rx.blocking_recv().unwrap_or(Err(ExecutorError::Closed))
    }
}

#[derive(Debug)]
pub struct SingleThreadExecutor {
    tx: Option<mpsc::UnboundedSender<Job>>,
    worker: Option<JoinHandle<()>>,
    worker_id: ThreadId,
}

impl SingleThreadExecutor {
    /// Starts the worker thread.
    pub fn spawn(name: impl Into<String>) -> io::Result<Self> {
        let name = name.into();
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();

        let worker = thread::Builder::new().name(name.clone()).spawn(move || {
            debug!(thread = %name, "executor started");
            while let Some(job) = rx.blocking_recv() {
                job();
            }
            debug!(thread = %name, "executor stopped");
        })?;

        Ok(Self {
            tx: Some(tx),
            worker_id: worker.thread().id(),
            worker: Some(worker),
        })
    }

    /// Queues `f` behind every task submitted before it.
    pub fn submit<F, T>(&self, f: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (result_tx, rx) = oneshot::channel();
        let job: Job = Box::new(move || {
            let result = catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
                let message = panic_message(payload.as_ref());
                warn!(%message, "executor task panicked");
                ExecutorError::Panicked(message)
            });
            if result_tx.send(result).is_err() {
                trace!("executor result dropped by caller");
            }
        });

        // A job that never reaches the worker drops its sender, which reads as `Closed`.
        let queued = self.tx.as_ref().is_some_and(|tx| tx.send(job).is_ok());
        if !queued {
            debug!("task submitted to a closed executor");
        }
        TaskHandle { rx }
    }

    /// Runs `f` on the worker and blocks until it returns.
    ///
    /// Called from the worker itself, `f` runs inline instead of deadlocking.
    pub fn run<F, T>(&self, f: F) -> Result<T, ExecutorError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        if thread::current().id() == self.worker_id {
            return catch_unwind(AssertUnwindSafe(f))
                .map_err(|payload| ExecutorError::Panicked(panic_message(payload.as_ref())));
        }
        self.submit(f).blocking_wait()
    }

    pub fn is_running(&self) -> bool {
        self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Closes the queue and waits for the worker to drain it.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.thread().id() == thread::current().id() {
                return;
            }
            if worker.join().is_err() {
                warn!("executor thread exited abnormally");
            }
        }
    }
}

impl Drop for SingleThreadExecutor {
    fn drop(&mut self) {
        self.close();
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
