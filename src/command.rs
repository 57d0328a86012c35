//! Control commands delivered to a running strip from other contexts.
//!
//! A bounded queue built on `critical-section` and `heapless::Deque`, safe
//! to feed from threads or interrupt handlers while the strip loop drains
//! it between ticks.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::stream::StreamId;

/// Commands the queue holds before the strip loop drains them.
pub const COMMAND_QUEUE_DEPTH: usize = 8;

/// Instruction for a running strip, handled at the next tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the blocking run loop after the current tick.
    Stop,
    /// Restore the pixels a stream had before it was blacked out.
    PowerOn(StreamId),
    /// Black a stream out, remembering its pixels.
    PowerOff(StreamId),
}

/// A bounded, thread-safe command queue.
///
/// Declared as a `static` so the [`CommandSender`] and [`CommandReceiver`]
/// handles can be copied freely across contexts.
pub struct CommandChannel {
    inner: Mutex<RefCell<Deque<Command, COMMAND_QUEUE_DEPTH>>>,
}

impl CommandChannel {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Sender handle. Multiple senders share the same queue.
    #[must_use]
    pub const fn sender(&'static self) -> CommandSender {
        CommandSender { channel: self }
    }

    /// Receiver handle for the strip loop.
    #[must_use]
    pub const fn receiver(&'static self) -> CommandReceiver {
        CommandReceiver { channel: self }
    }

    /// Enqueues a command, handing it back when the queue is full.
    ///
    /// # Errors
    ///
    /// Returns `Err(command)` if the queue already holds
    /// [`COMMAND_QUEUE_DEPTH`] commands.
    pub fn try_send(&self, command: Command) -> Result<(), Command> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command)
        })
    }

    /// Dequeues the oldest command, if any.
    pub fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl Default for CommandChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Copyable sender half of a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandSender {
    channel: &'static CommandChannel,
}

impl CommandSender {
    /// Enqueues a command, handing it back when the queue is full.
    ///
    /// # Errors
    ///
    /// Returns `Err(command)` if the queue is full.
    pub fn try_send(&self, command: Command) -> Result<(), Command> {
        self.channel.try_send(command)
    }
}

/// Copyable receiver half of a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandReceiver {
    channel: &'static CommandChannel,
}

impl CommandReceiver {
    /// Dequeues the oldest command, if any.
    pub fn try_receive(&self) -> Option<Command> {
        self.channel.try_receive()
    }
}
