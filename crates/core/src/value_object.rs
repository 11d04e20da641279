//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// value objects with the same values are the same value. To "modify" one,
/// build a new one. `Totals { subtotal, tax_amount, total }` is the canonical
/// example in this workspace; `Invoice` is not (it has identity).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
