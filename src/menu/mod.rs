//! Menu persistence: a flat JSON object mapping item name to price.
//!
//! ```text
//! {"Spring Rolls":5.0,"Grilled Chicken":15.0,"Soda":2.0,"Wine":10.0}
//! ```
//!
//! The format carries no category, so a reloaded order is made of
//! [`ItemKind::Generic`](crate::model::ItemKind::Generic) items and no longer
//! gets the beverage discount. Names are keys: a repeated name keeps its first
//! position and its last price.

pub mod error;

pub use error::*;

use crate::model::{MenuItem, Order};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

impl Order {
    /// Builds the `{name: price}` object for the current items, in encounter order.
    pub fn to_menu(&self) -> Map<String, Value> {
        let mut menu = Map::new();
        for item in self.items() {
            menu.insert(item.name().to_owned(), Value::from(item.price()));
        }
        menu
    }

    /// Builds an order of generic items from a `{name: price}` object.
    pub fn from_menu(menu: Map<String, Value>) -> Result<Self, MenuError> {
        let mut order = Order::new();
        for (name, value) in menu {
            let Some(price) = value.as_f64() else {
                return Err(MenuError::InvalidPrice { name, value });
            };
            order.add_item(MenuItem::generic(name, price));
        }
        Ok(order)
    }

    /// Serializes the menu to any writer.
    pub fn write_menu<W: Write>(&self, writer: W) -> Result<(), MenuError> {
        serde_json::to_writer(writer, &self.to_menu())?;
        Ok(())
    }

    /// Reads a menu from any reader into a new order.
    pub fn read_menu<R: Read>(reader: R) -> Result<Self, MenuError> {
        let menu: Map<String, Value> = serde_json::from_reader(reader)?;
        Self::from_menu(menu)
    }

    /// Saves the menu to `path`, replacing any existing content.
    ///
    /// Not atomic: a failure part-way can leave the file truncated.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_menu(&self, path: impl AsRef<Path>) -> Result<(), MenuError> {
        let path = path.as_ref();
        let bytes = serde_json::to_vec(&self.to_menu())?;

        let mut file = File::create(path).map_err(|e| MenuError::io(path, e))?;
        file.write_all(&bytes).map_err(|e| MenuError::io(path, e))?;

        info!(items = self.len(), "Menu saved");
        Ok(())
    }

    /// Loads a menu from `path` into a new order of generic items.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_menu(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        debug!("Opening menu");
        let file = File::open(path).map_err(|e| MenuError::io(path, e))?;

        let order = Self::read_menu(BufReader::new(file))?;
        info!(items = order.len(), "Menu loaded");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_keep_first_position_and_last_price() {
        let order: Order = [
            MenuItem::beverage("Tea", 3.0),
            MenuItem::main_course("Burger", 8.5),
            MenuItem::beverage("Tea", 4.0),
        ]
        .into_iter()
        .collect();

        let mut buf = Vec::new();
        order.write_menu(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), r#"{"Tea":4.0,"Burger":8.5}"#);
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let err = Order::read_menu(r#"{"Tea":"three"}"#.as_bytes()).unwrap_err();
        match err {
            MenuError::InvalidPrice { name, .. } => assert_eq!(name, "Tea"),
            other => panic!("Expected InvalidPrice, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_is_a_parse_error() {
        let err = Order::read_menu("[1, 2, 3]".as_bytes()).unwrap_err();
        assert!(matches!(err, MenuError::Json(_)));
    }
}
