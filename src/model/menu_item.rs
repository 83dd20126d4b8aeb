use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Multiplier applied to a beverage when its order also contains a main course.
pub const BEVERAGE_DISCOUNT_FACTOR: f64 = 0.9;

/// Category of a [`MenuItem`], which decides how it is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Appetizer,
    MainCourse,
    Beverage,
    /// Category unknown, e.g. an item reloaded from a saved menu.
    Generic,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ItemKind::Appetizer => "appetizer",
            ItemKind::MainCourse => "main course",
            ItemKind::Beverage => "beverage",
            ItemKind::Generic => "item",
        };
        f.write_str(label)
    }
}

/// Order-level facts an item needs to work out its contribution.
///
/// Computed fresh by the order on every total calculation; items never store it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingContext {
    pub has_main_course: bool,
}

/// A priceable entry on an order.
///
/// The category is an [`ItemKind`] tag, so an [`Order`](crate::model::Order) holds
/// any mix of items in one sequence.
///
/// The name is fixed at construction. The price can be read and changed at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: f64,
    kind: ItemKind,
}

impl MenuItem {
    /// Creates a new item of the given category.
    ///
    /// # Arguments
    /// * `kind` - Pricing category
    /// * `name` - Display name, also the key in a saved menu
    /// * `price` - Unit price (not validated)
    pub fn new(kind: ItemKind, name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            kind,
        }
    }

    pub fn appetizer(name: impl Into<String>, price: f64) -> Self {
        Self::new(ItemKind::Appetizer, name, price)
    }

    pub fn main_course(name: impl Into<String>, price: f64) -> Self {
        Self::new(ItemKind::MainCourse, name, price)
    }

    pub fn beverage(name: impl Into<String>, price: f64) -> Self {
        Self::new(ItemKind::Beverage, name, price)
    }

    pub fn generic(name: impl Into<String>, price: f64) -> Self {
        Self::new(ItemKind::Generic, name, price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is_main_course(&self) -> bool {
        self.kind == ItemKind::MainCourse
    }

    /// Amount this item adds to an order total.
    ///
    /// Beverages are discounted by [`BEVERAGE_DISCOUNT_FACTOR`] when the context
    /// reports a main course; every other category ignores the context.
    pub fn calculate_total_price(&self, context: &PricingContext) -> f64 {
        match self.kind {
            ItemKind::Beverage if context.has_main_course => self.price * BEVERAGE_DISCOUNT_FACTOR,
            ItemKind::Appetizer | ItemKind::MainCourse | ItemKind::Beverage | ItemKind::Generic => {
                self.price
            }
        }
    }
}
