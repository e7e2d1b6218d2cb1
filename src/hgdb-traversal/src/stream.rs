//! Lazy, cancellable traversal stream.
//!
//! A [`TraversalStream`] moves a [`DepthFirst`] cursor onto a Tokio task. The
//! task waits for the single slot of its channel to be free before it steps
//! the cursor, so at most one computed node is pending for the consumer.
//!
//! Cancellation is cooperative: a `watch` flag that the producer checks before
//! every step and races against every hand-off.

use std::pin::Pin;
use std::task::{Context, Poll};

use common_error::{HgError, HgResult, ensure};
use futures::stream::Stream;
use hgdb_core::NodeId;
use log::{debug, trace};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::cursor::DepthFirst;
use crate::source::AdjacencySource;

// ============================================================================
// Cancellation
// ============================================================================

/// Handle for cancelling a background traversal.
#[derive(Debug)]
pub struct CancellationHandle {
    cancel_tx: watch::Sender<bool>,
}

impl CancellationHandle {
    /// Create a new cancellation handle and the receiver the producer watches.
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { cancel_tx: tx }, rx)
    }

    /// Signal cancellation. Signalling twice has no further effect.
    pub fn cancel(&self) {
        self.cancel_tx.send_replace(true);
    }

    /// Check if cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }
}

// ============================================================================
// TraversalStream
// ============================================================================

/// Post-order (or pre-order) traversal delivered as a [`Stream`] of nodes.
///
/// The stream yields exactly the sequence the underlying cursor would, in the
/// same order. After [`close`](Self::close) it yields nothing more, even if the
/// producer had already handed over the next node.
///
/// Dropping the stream closes it, so the producer task never outlives its
/// consumer by more than one step.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use futures::StreamExt;
/// use hgdb_core::Hypergraph;
/// use hgdb_traversal::{DepthFirst, SharedHypergraph, TraversalStream};
/// use parking_lot::RwLock;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut hg = Hypergraph::new();
/// let g = hg.create_root("g");
/// let a = hg.create_child(g, "a").unwrap();
/// let b = hg.create_adjacent_child(a, "b").unwrap();
///
/// let shared: SharedHypergraph = Arc::new(RwLock::new(hg));
/// let stream = TraversalStream::spawn(DepthFirst::new(shared, a).unwrap()).unwrap();
/// assert_eq!(stream.collect::<Vec<_>>().await, vec![b, a]);
/// # });
/// ```
pub struct TraversalStream {
    receiver: mpsc::Receiver<NodeId>,
    cancel: CancellationHandle,
    producer: Option<JoinHandle<usize>>,
    closed: bool,
}

impl TraversalStream {
    /// Move `cursor` onto a background task and stream its output.
    ///
    /// Must be called from within a Tokio runtime; outside of one an
    /// `InternalError` is returned.
    pub fn spawn<G>(cursor: DepthFirst<G>) -> HgResult<Self>
    where
        G: AdjacencySource + Send + 'static,
    {
        ensure!(
            common_runtime::in_runtime(),
            InternalError: "traversal stream from {} needs a Tokio runtime",
            cursor.start()
        );

        let (sender, receiver) = mpsc::channel(1);
        let (cancel, cancel_rx) = CancellationHandle::new();
        let producer = common_runtime::spawn(produce(cursor, sender, cancel_rx));

        Ok(Self {
            receiver,
            cancel,
            producer: Some(producer),
            closed: false,
        })
    }

    /// Stop the traversal.
    ///
    /// Signals the producer, discards anything it already handed over, and
    /// makes every later poll return `None`. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.cancel.cancel();
        self.receiver.close();
        debug!("traversal stream closed");
    }

    /// Check if the stream was closed by the consumer.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close the stream and wait for the producer task to stop.
    ///
    /// Returns how many nodes the producer handed to the channel. When the
    /// stream was consumed to the end this is the length of the traversal.
    pub async fn join(mut self) -> HgResult<usize> {
        self.close();
        match self.producer.take() {
            Some(producer) => producer
                .await
                .map_err(|e| HgError::cancelled(format!("traversal task aborted: {e}"))),
            None => Ok(0),
        }
    }

    /// Receive the next node from synchronous code.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context, like
    /// `tokio::sync::mpsc::Receiver::blocking_recv`.
    pub fn blocking_next(&mut self) -> Option<NodeId> {
        if self.closed {
            return None;
        }
        self.receiver.blocking_recv()
    }
}

impl Stream for TraversalStream {
    type Item = NodeId;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.closed {
            return Poll::Ready(None);
        }
        self.receiver.poll_recv(cx)
    }
}

impl Drop for TraversalStream {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for TraversalStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraversalStream")
            .field("closed", &self.closed)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// Producer loop: wait for the slot, step the cursor, hand the node over.
///
/// The cursor only advances once the previous node has been taken, so writers
/// on a shared graph are seen by every step after the last received node.
async fn produce<G>(
    mut cursor: DepthFirst<G>,
    sender: mpsc::Sender<NodeId>,
    mut cancel_rx: watch::Receiver<bool>,
) -> usize
where
    G: AdjacencySource,
{
    let mut handed_off = 0;
    loop {
        let permit = tokio::select! {
            biased;
            _ = cancel_rx.changed() => break,
            permit = sender.reserve() => match permit {
                Ok(permit) => permit,
                Err(_) => break,
            },
        };

        let cancelled = *cancel_rx.borrow_and_update();
        if cancelled {
            break;
        }
        let Some(node) = cursor.next_node() else {
            break;
        };
        permit.send(node);
        handed_off += 1;
        trace!("handed off {node}");
    }
    debug!(
        "traversal from {} stopped after {handed_off} nodes",
        cursor.start()
    );
    handed_off
}

impl<G> DepthFirst<G>
where
    G: AdjacencySource + Send + 'static,
{
    /// Continue this traversal on a background task as a [`TraversalStream`].
    pub fn into_stream(self) -> HgResult<TraversalStream> {
        TraversalStream::spawn(self)
    }
}
