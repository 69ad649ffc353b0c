//! Inbound notification classification
//!
//! The client delivers loosely-typed "generic value" notifications. This
//! module normalizes their actor/recipient order and turns them into the
//! closed [`ObservedEvent`] set the rest of the observer matches on.

mod dispatcher;
mod event;
mod notification;
pub mod value_id;

#[cfg(test)]
mod dispatcher_tests;

pub use dispatcher::EventDispatcher;
pub use event::{DamageKind, Milestone, MilestoneKind, ObservedEvent};
pub use notification::{CanonicalValue, Payload, RawNotification};
