//! Decode-side pipeline wiring (§2): `CAN frame -> Classifier -> Assembler ->
//! Dispatcher -> Subscribers`. This is the only stateful piece that ties the
//! stateless classifier and dispatcher functions to the assembler's sequence
//! map and the subscription registry.
//!
//! The symmetric encode path (`Typed value -> Encoder -> Fragmenter -> CAN
//! frame`) has no equivalent state to own — it is the
//! [`crate::protocol::transport::traits::pgn_sender::PgnSender`] extension
//! trait instead.
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::error::AssembleError;
use crate::io::Frame;
use crate::protocol::classifier;
use crate::protocol::dispatcher;
use crate::protocol::messages::Value;
use crate::protocol::packet::Packet;
use crate::protocol::subscription::SubscriptionRegistry;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::fast_packet::assembler::{AssembleOutcome, FastPacketAssembler};

/// Owns the reassembly sequence map and the subscriber registry; stateless
/// classification and dispatch are plain functions called along the way.
pub struct Pipeline<M: RawMutex> {
    assembler: FastPacketAssembler,
    subscriptions: SubscriptionRegistry<M>,
}

impl<M: RawMutex> Pipeline<M> {
    pub fn new() -> Self {
        Self {
            assembler: FastPacketAssembler::new(),
            subscriptions: SubscriptionRegistry::new(),
        }
    }

    /// Subscriber registry, exposed so callers can subscribe/unsubscribe
    /// before or while frames are flowing.
    pub fn subscriptions(&self) -> &SubscriptionRegistry<M> {
        &self.subscriptions
    }

    /// Feed one frame through the pipeline. `timestamp` is the caller's
    /// monotonic tick (§5: the core never reads a clock itself). Returns the
    /// dispatched value, if this frame produced one — a pending fast-packet
    /// fragment, or a duplicate/stray continuation frame, produces none.
    pub fn process_frame(&mut self, frame: Frame, timestamp: u64) -> Option<Value> {
        let can_frame: CanFrame = frame.into();
        let packet = classifier::classify(&can_frame, timestamp);

        // The classifier only ever produces fast=true alongside complete=false
        // and an empty error list; a non-fast or already-rejected packet goes
        // straight to dispatch without touching the sequence map.
        if !packet.fast || !packet.errors.is_empty() {
            return Some(self.dispatch_and_publish(&packet));
        }

        match self
            .assembler
            .process_frame(packet.info.source, packet.info.pgn, &can_frame.data)
        {
            AssembleOutcome::Pending => None,
            AssembleOutcome::Complete(message) => {
                let mut completed = packet;
                completed.data.copy_from_slice(&message.payload[..message.len]);
                completed.complete = true;
                Some(self.dispatch_and_publish(&completed))
            }
            // A completed-but-holed sequence still needs to surface as an
            // Unknown (§4.7); a duplicate or stray continuation just resets
            // the sequence with no packet to report.
            AssembleOutcome::Warning(AssembleError::Sparse) => {
                let mut holed = packet;
                holed.complete = false;
                Some(self.dispatch_and_publish(&holed))
            }
            AssembleOutcome::Warning(_) => None,
        }
    }

    fn dispatch_and_publish(&self, packet: &Packet) -> Value {
        let value = dispatcher::dispatch(packet);
        self.subscriptions.dispatch(&value);
        value
    }
}

impl<M: RawMutex> Default for Pipeline<M> {
    fn default() -> Self {
        Self::new()
    }
}
