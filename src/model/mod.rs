//! Data models for items.
//!
//! - [`Item`]: The persisted record
//! - [`NewItem`]: Fields for creating an item
//! - [`ItemPatch`]: Partial update of an existing item

mod item;

pub use item::{Item, ItemPatch, NewItem};
