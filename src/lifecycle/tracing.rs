//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter filtered by the
//! `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Order mutations**: `add_item`, `update_item`, `delete_item` at `debug`,
//!   including indices that were ignored because they were out of range
//! - **Menu persistence**: a `save_menu` / `load_menu` span carrying the file path
//! - **Payments**: a `report_to` span with the item count and the unrounded total
//! - **Queue processing**: a `process_next_order` span with the pending count
//!
//! Payment report lines are *not* log events. They are written to the
//! restaurant's report sink (stdout by default) whatever `RUST_LOG` says.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only the report lines
//! cargo run
//!
//! # Spans and totals
//! RUST_LOG=info cargo run
//!
//! # Every item mutation
//! RUST_LOG=restaurant_recipe=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo prints something like:
//!
//! ```text
//! INFO save_menu{path=menu.json}: Menu saved items=4
//! INFO load_menu{path=menu.json}: Menu loaded items=4
//! INFO process_next_order{pending=1}:report_to{items=4}: Processing payment total=32.0
//! Processing payment for total amount: $32.00
//! INFO process_next_order{pending=1}: Order processed remaining=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
