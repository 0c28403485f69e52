//! Pass generations: starting a new review pass supersedes every earlier one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::oneshot;

use crate::ReviewResult;

/// Identifies one review pass; checked between candidates so stale work stops early.
#[derive(Debug, Clone)]
pub struct PassToken {
    current: Arc<AtomicU64>,
    issued: u64,
}

impl PassToken {
    /// A token no other pass can supersede.
    pub fn detached() -> Self {
        Self {
            current: Arc::new(AtomicU64::new(0)),
            issued: 0,
        }
    }

    pub fn is_superseded(&self) -> bool {
        self.current.load(Ordering::Acquire) != self.issued
    }
}

/// Shared generation counter handing out [`PassToken`]s.
#[derive(Debug, Clone, Default)]
pub(crate) struct Generations(Arc<AtomicU64>);

impl Generations {
    /// Issues a token for a new pass, superseding all earlier ones.
    pub(crate) fn next(&self) -> PassToken {
        let issued = self.0.fetch_add(1, Ordering::AcqRel) + 1;
        PassToken {
            current: Arc::clone(&self.0),
            issued,
        }
    }
}

/// Result of a spawned review pass.
#[derive(Debug)]
pub struct PassHandle {
    rx: oneshot::Receiver<ReviewResult>,
    token: PassToken,
}

impl PassHandle {
    pub(crate) fn new(rx: oneshot::Receiver<ReviewResult>, token: PassToken) -> Self {
        Self { rx, token }
    }

    /// Resolves to `None` when the pass was superseded before it finished.
    pub async fn wait(self) -> Option<ReviewResult> {
        self.rx.await.ok()
    }

    /// Blocking form of [`PassHandle::wait`]; must not be called from an async runtime.
    pub fn blocking_wait(self) -> Option<ReviewResult> {
        self.rx.blocking_recv().ok()
    }

    pub fn is_superseded(&self) -> bool {
        self.token.is_superseded()
    }

    pub fn token(&self) -> &PassToken {
        &self.token
    }
}
