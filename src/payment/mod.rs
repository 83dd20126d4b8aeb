//! Payment: totals one order and reports the amount.

pub mod error;
pub mod sink;

pub use error::*;
pub use sink::*;

use crate::model::Order;
use tracing::{info, instrument};

/// Wraps one order for the duration of a single payment.
#[derive(Debug, Clone, Copy)]
pub struct Payment<'a> {
    order: &'a Order,
}

impl<'a> Payment<'a> {
    pub fn new(order: &'a Order) -> Self {
        Self { order }
    }

    /// The order total, unrounded.
    pub fn total(&self) -> f64 {
        self.order.calculate_total_price()
    }

    /// Computes the total and prints the payment line to stdout.
    pub fn process_payment(&self) -> Result<(), PaymentError> {
        self.report_to(&mut StdoutSink)
    }

    /// Computes the total and emits the payment line to `sink`.
    ///
    /// The amount is rounded to two decimals for display only.
    #[instrument(skip_all, fields(items = self.order.len()))]
    pub fn report_to<S: ReportSink + ?Sized>(&self, sink: &mut S) -> Result<(), PaymentError> {
        let total = self.total();
        info!(total, "Processing payment");
        sink.emit(&format_payment_line(total))?;
        Ok(())
    }
}

/// The human-readable payment line, with exactly two decimals.
pub fn format_payment_line(total: f64) -> String {
    format!("Processing payment for total amount: ${total:.2}")
}
