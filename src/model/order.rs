use crate::model::{MenuItem, PricingContext};
use tracing::debug;

/// A customer order: an ordered sequence of [`MenuItem`]s.
///
/// Insertion order is kept and duplicate names are allowed. Index-based
/// mutations ignore out-of-range indices instead of failing; they return the
/// displaced item so callers who care can tell the two cases apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    items: Vec<MenuItem>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item to the end of the order.
    pub fn add_item(&mut self, item: MenuItem) {
        debug!(name = item.name(), kind = %item.kind(), price = item.price(), "add_item");
        self.items.push(item);
    }

    /// Replaces the item at `index`.
    ///
    /// Returns the replaced item, or `None` (leaving the order untouched) when
    /// `index` is out of range.
    pub fn update_item(&mut self, index: usize, new_item: MenuItem) -> Option<MenuItem> {
        match self.items.get_mut(index) {
            Some(slot) => {
                debug!(index, name = new_item.name(), "update_item");
                Some(std::mem::replace(slot, new_item))
            }
            None => {
                debug!(index, len = self.items.len(), "update_item ignored: index out of range");
                None
            }
        }
    }

    /// Removes the item at `index`.
    ///
    /// Returns the removed item, or `None` (leaving the order untouched) when
    /// `index` is out of range.
    pub fn delete_item(&mut self, index: usize) -> Option<MenuItem> {
        if index < self.items.len() {
            let removed = self.items.remove(index);
            debug!(index, name = removed.name(), "delete_item");
            Some(removed)
        } else {
            debug!(index, len = self.items.len(), "delete_item ignored: index out of range");
            None
        }
    }

    /// True if any current item is a main course.
    pub fn has_main_course(&self) -> bool {
        self.items.iter().any(MenuItem::is_main_course)
    }

    /// Sums every item's contribution.
    ///
    /// The main-course check runs once over the current items and applies to
    /// all beverages, so a second main course does not compound the discount.
    pub fn calculate_total_price(&self) -> f64 {
        let context = PricingContext {
            has_main_course: self.has_main_course(),
        };

        self.items
            .iter()
            .map(|item| item.calculate_total_price(&context))
            .sum()
    }
}

impl FromIterator<MenuItem> for Order {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
