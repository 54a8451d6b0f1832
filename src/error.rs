//! Errors describing defects in a slot name list.
//!
//! The slot protocol itself never fails; these errors only come out of
//! [`SlotNames::validate`](crate::slots::SlotNames::validate) and
//! [`try_with_slots`](crate::slots::try_with_slots).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Slot name at position {0} is empty")]
    EmptyName(usize),

    #[error("Slot '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("Slots '{first}' and '{second}' both map to accessor '{accessor}'")]
    CasingCollision {
        first: String,
        second: String,
        accessor: String,
    },
}
