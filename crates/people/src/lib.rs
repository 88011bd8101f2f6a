//! People domain module (persons and families).
//!
//! Persons are shared through [`PersonRef`] handles so that spouses can point
//! at each other. The spouse link is weak: a family owns its members, a
//! marriage does not.

pub mod family;
pub mod person;

pub use family::{Family, MIN_PARENT_AGE};
pub use person::{MIN_MARRIAGE_AGE, MIN_WORKING_AGE, Person, PersonRef};
