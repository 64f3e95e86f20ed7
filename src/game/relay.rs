//! Networking seam: outbound move broadcast and the inbound move funnel.
//!
//! Board and piece state are mutated only on the host's update thread. A move
//! arriving on a network receive thread is therefore never applied directly;
//! the transport pushes it onto a [`RemoteQueue`] and the host drains the
//! queue at one fixed point per frame with [`Match::pump_remote`].

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use super::state::Match;
use super::types::{Coord, MoveRequest, PieceType};

/// Outbound side of the networking collaborator.
pub trait MoveRelay {
    /// Broadcast a locally executed move. Fire-and-forget.
    fn notify_local_move(&self, from_notation: &str, to_notation: &str);

    fn is_connected(&self) -> bool {
        true
    }
}

/// An opponent move received from the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteMove {
    pub from: Coord,
    pub to: Coord,
    pub promotion: Option<PieceType>,
}

/// Thread-safe inbound move queue, cloned into the receive callback.
#[derive(Clone, Default)]
pub struct RemoteQueue {
    inner: Arc<Mutex<VecDeque<RemoteMove>>>,
}

impl RemoteQueue {
    #[must_use]
    pub fn new() -> Self {
        RemoteQueue::default()
    }

    /// Called from the transport's receive thread.
    pub fn push(&self, mv: RemoteMove) {
        self.inner.lock().push_back(mv);
    }

    /// Take everything queued so far.
    #[must_use]
    pub fn drain(&self) -> Vec<RemoteMove> {
        self.inner.lock().drain(..).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Match {
    /// Drain queued opponent moves and apply them as remote executions.
    ///
    /// Returns how many were applied successfully. Remote moves skip the
    /// relay re-broadcast.
    pub fn pump_remote(&mut self, queue: &RemoteQueue) -> usize {
        let mut applied = 0;
        for mv in queue.drain() {
            let mut req = MoveRequest::new(mv.from, mv.to).from_remote();
            req.promotion = mv.promotion;
            if self.execute(&req) {
                applied += 1;
            }
        }
        applied
    }
}
