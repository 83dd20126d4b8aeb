//! Pure data structures: menu items and the orders that aggregate them.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;
