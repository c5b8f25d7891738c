//! Producer channels.
//!
//! A [`Channel`] is the receiving end of a `crossbeam-channel` queue of
//! values. The source closes when every [`Producer`] has been dropped; a
//! walk drains it until then.

use crossbeam_channel::{Receiver, Sender};

use crate::Value;

/// Sending end of a [`Channel`]. Dropping every producer closes the channel.
pub type Producer = Sender<Value>;

/// Closable, sequential source of values.
///
/// Cloning a `Channel` clones the handle, not the queued items: clones
/// compete for the same items.
///
/// # Example
///
/// ```rust
/// use std::thread;
/// use leafwalk_value::{Channel, Value};
///
/// let (tx, channel) = Channel::bounded(0);
/// thread::spawn(move || {
///     tx.send(Value::from("Manchester")).unwrap();
///     tx.send(Value::from("Leeds")).unwrap();
/// });
///
/// let received: Vec<_> = channel.iter().filter_map(|v| v.as_text().map(String::from)).collect();
/// assert_eq!(received, vec!["Manchester", "Leeds"]);
/// ```
#[derive(Debug, Clone)]
pub struct Channel {
    rx: Receiver<Value>,
}

impl Channel {
    /// Creates a channel holding at most `capacity` undelivered items.
    ///
    /// A capacity of zero makes every send a rendezvous with a receive.
    pub fn bounded(capacity: usize) -> (Producer, Channel) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (tx, Channel { rx })
    }

    /// Creates a channel with no capacity limit.
    pub fn unbounded() -> (Producer, Channel) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (tx, Channel { rx })
    }

    /// Wraps an existing receiver.
    pub fn from_receiver(rx: Receiver<Value>) -> Self {
        Self { rx }
    }

    /// Blocks until the next item arrives.
    ///
    /// Returns `None` once the channel is closed and drained.
    #[inline]
    pub fn recv(&self) -> Option<Value> {
        self.rx.recv().ok()
    }

    /// Returns a blocking iterator that ends when the channel closes.
    pub fn iter(&self) -> crossbeam_channel::Iter<'_, Value> {
        self.rx.iter()
    }

    /// Number of items queued and not yet received.
    #[inline]
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl From<Receiver<Value>> for Channel {
    fn from(rx: Receiver<Value>) -> Self {
        Self::from_receiver(rx)
    }
}
