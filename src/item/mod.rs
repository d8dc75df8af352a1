//! Item Module
//!
//! The inventory item record stored by the item codecs.
//!
//! ## Structural Form
//! An item converts to and from a generic YAML mapping. Both item codecs use
//! this mapping as the unit they embed in their documents:
//! ```text
//! type: DIAMOND_SWORD      # required, non-empty
//! amount: 3                # omitted when 1
//! meta:                    # omitted when empty
//!   display-name: Excalibur
//!   lore: [first line, second line]
//! ```
//! Unknown keys are ignored when reading.

mod stack;

pub use stack::{Item, DISPLAY_NAME, ERROR_ITEM_LABEL, ERROR_ITEM_TYPE, MAX_META_DEPTH};
