//! Domain Policies
//!
//! Business rules that govern which stored data is acceptable.
//! These are pure functions that operate on domain entities.

mod item_validation;

pub use item_validation::{
    validate_items, ValidationError, Violation, MAX_MENU_NAME_LEN, MAX_NAMED_URL_LEN,
    MAX_TITLE_LEN, MAX_URL_LEN,
};
