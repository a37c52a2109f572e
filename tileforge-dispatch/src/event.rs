//! Event contract consumed by the dispatcher.

/// Opaque event-type discriminant.
///
/// Matches the integer event types exposed by common windowing/input
/// toolkits; the dispatcher only compares kinds for equality and
/// attaches no meaning to particular values.
pub type EventKind = u32;

/// Anything the dispatcher can route.
///
/// The surrounding input toolkit supplies the concrete event type; the
/// dispatcher needs nothing from it beyond a kind discriminant.
pub trait Event {
    /// The event's kind discriminant.
    fn kind(&self) -> EventKind;
}
