//! # Restaurant Recipe
//!
//! > **A small restaurant ordering workflow.**
//!
//! Menu items are priced by category, orders aggregate them into a total, a
//! payment reports that total, and the restaurant processes a FIFO queue of
//! orders one at a time. Everything is synchronous and single-threaded.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - [`MenuItem`](model::MenuItem) with its [`ItemKind`](model::ItemKind) tag.
//!   Beverages get 10% off when the order also has a main course.
//! - [`Order`](model::Order): add, update and delete by index (out-of-range
//!   indices are ignored), and [`calculate_total_price`](model::Order::calculate_total_price).
//!
//! ### 2. Persistence ([`menu`])
//! [`Order::save_menu`](model::Order::save_menu) and
//! [`Order::load_menu`](model::Order::load_menu) use a flat JSON
//! `{name: price}` object. Categories are not saved, so reloaded items are
//! generic and undiscounted.
//!
//! ### 3. Checkout ([`payment`], [`restaurant`])
//! - [`Payment`](payment::Payment) totals one order and emits
//!   `Processing payment for total amount: $X.XX`.
//! - [`Restaurant`](restaurant::Restaurant) queues orders and processes the oldest
//!   one per call, or emits `No orders to process.` when empty.
//!
//! ### 4. Setup ([`lifecycle`])
//! [`setup_tracing`](lifecycle::setup_tracing) for `RUST_LOG`-filtered logs.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo, with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod payment;
pub mod restaurant;
