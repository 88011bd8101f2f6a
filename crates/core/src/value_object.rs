//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** and are **immutable**: two instances
/// with the same attributes are interchangeable, and "changing" one means
/// building a new one.
///
/// - **Value object**: `Money { amount: 100, currency: USD }`. Converting it
///   to GBP yields a new `Money`.
/// - **Entity**: `Person { id: PersonId(..), .. }`. The same person after a
///   birthday is still the same person.
///
/// Pay structures are values too: a raise on a `Job` swaps its `PayType`
/// for a new one rather than editing the old one in place.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// enum PayType {
///     Hourly(f64),
///     Salary(i64),
/// }
///
/// impl ValueObject for PayType {}
///
/// assert_eq!(PayType::Salary(50_000), PayType::Salary(50_000));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
