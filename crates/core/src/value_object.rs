//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attribute values are the same value. To "modify" one,
/// create a new one. `LocalizedName { primary: "Tomatoes", .. }` is a value
/// object; an `InventoryItem` with an `ItemId` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
