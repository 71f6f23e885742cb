//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// value objects with the same values are the same value. `StayRange` is the
/// canonical example in this domain: a stay from the 3rd to the 5th is the
/// same stay no matter which booking carries it.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
