//! Demo driver: builds an order, round-trips it through `menu.json`, then
//! queues the reloaded order and pays for it.

use restaurant_recipe::lifecycle::setup_tracing;
use restaurant_recipe::model::{MenuItem, Order};
use restaurant_recipe::restaurant::Restaurant;
use tracing::info;

const MENU_PATH: &str = "menu.json";

fn main() -> Result<(), String> {
    setup_tracing();

    let mut restaurant = Restaurant::new();

    let mut order = Order::new();
    order.add_item(MenuItem::appetizer("Spring Rolls", 5.00));
    order.add_item(MenuItem::main_course("Grilled Chicken", 15.00));
    order.add_item(MenuItem::beverage("Soda", 2.00));
    order.add_item(MenuItem::beverage("Wine", 10.00));
    info!(total = order.calculate_total_price(), "Order built");

    let span = tracing::info_span!("menu_round_trip");
    let loaded = span.in_scope(|| -> Result<Order, String> {
        order.save_menu(MENU_PATH).map_err(|e| e.to_string())?;
        Order::load_menu(MENU_PATH).map_err(|e| e.to_string())
    })?;

    restaurant.add_order(loaded);
    restaurant.process_next_order().map_err(|e| e.to_string())?;

    info!("Demo completed");
    Ok(())
}
