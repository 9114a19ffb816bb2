//! External interface contract (§6.1): the shape of a CAN frame source.
//!
//! Concrete endpoints — a live CAN socket, a USB-CAN serial adapter, a
//! log-file player pacing delivery by timestamp — are thin adapters that
//! live outside this crate. This module defines only the contract they
//! implement to hand frames to the pipeline.
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::can_id::CanId;

/// A CAN frame exactly as received from the wire, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Full 29-bit extended identifier.
    pub id: u32,
    /// Data Length Code, 0 to 8.
    pub length: u8,
    pub data: [u8; 8],
}

impl From<Frame> for CanFrame {
    fn from(frame: Frame) -> Self {
        CanFrame {
            id: CanId(frame.id),
            data: frame.data,
            len: frame.length as usize,
        }
    }
}

/// Cooperative cancellation signal handed to an endpoint's `run` loop
/// (§5 "Cancellation"). Cloning shares the same flag; `cancel` is idempotent
/// and safe to call from any context that can reach a clone.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Callback an endpoint invokes once per frame it reads.
pub type FrameHandler = Box<dyn FnMut(Frame)>;

/// Contract every frame source implements (§6.1). The core never calls
/// these itself; it is implemented by the out-of-scope endpoint adapters
/// and driven by whatever wires an endpoint to a [`crate::pipeline::Pipeline`].
pub trait Endpoint {
    type Error;

    /// Install the callback invoked for every frame read.
    fn set_handler(&mut self, handler: FrameHandler);

    /// Drive the endpoint until `cancel` is set or the input is exhausted.
    /// Endpoint reads and replay pacing are the only operations in this
    /// crate's surface allowed to block.
    fn run(&mut self, cancel: &CancelToken) -> Result<(), Self::Error>;
}
