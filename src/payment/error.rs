//! Error types for payment processing.

use thiserror::Error;

/// Errors that can occur while processing a payment.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The report line could not be written to its sink.
    #[error("Payment report failed: {0}")]
    Report(#[from] std::io::Error),
}
