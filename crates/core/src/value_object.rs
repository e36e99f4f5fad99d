//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** and are **immutable**: two values with
/// the same attributes are equal, and "changing" one means building a new one.
///
/// Example:
/// - `Money(15795)` is a value object
/// - `Customer { id: CustomerId(...), name: "..." }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
