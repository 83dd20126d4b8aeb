//! The restaurant front of house: a FIFO queue of orders paid one at a time.

use crate::model::Order;
use crate::payment::{Payment, PaymentError, ReportSink, StdoutSink};
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

/// Line emitted when [`Restaurant::process_next_order`] finds the queue empty.
pub const NO_ORDERS_NOTICE: &str = "No orders to process.";

/// Holds pending orders and drives them through [`Payment`] in arrival order.
///
/// Report lines go to the sink `S`, standard output by default. Use
/// [`Restaurant::with_sink`] to capture them instead.
///
/// # Example
///
/// ```
/// use restaurant_recipe::model::{MenuItem, Order};
/// use restaurant_recipe::restaurant::Restaurant;
///
/// let mut order = Order::new();
/// order.add_item(MenuItem::main_course("Grilled Chicken", 15.0));
/// order.add_item(MenuItem::beverage("Soda", 2.0));
///
/// let mut restaurant = Restaurant::with_sink(Vec::<String>::new());
/// restaurant.add_order(order);
/// restaurant.process_next_order().unwrap();
///
/// assert_eq!(restaurant.sink()[0], "Processing payment for total amount: $16.80");
/// ```
#[derive(Debug, Default)]
pub struct Restaurant<S: ReportSink = StdoutSink> {
    orders: VecDeque<Order>,
    sink: S,
}

impl Restaurant {
    /// Creates a restaurant that reports to standard output.
    pub fn new() -> Self {
        Self::with_sink(StdoutSink)
    }
}

impl<S: ReportSink> Restaurant<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            orders: VecDeque::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of orders waiting to be processed.
    pub fn pending(&self) -> usize {
        self.orders.len()
    }

    pub fn is_idle(&self) -> bool {
        self.orders.is_empty()
    }

    /// Queues an order behind every order already waiting.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push_back(order);
        debug!(pending = self.orders.len(), "Order queued");
    }

    /// Takes the oldest order and processes its payment.
    ///
    /// An empty queue is not an error: the notice line is emitted instead.
    /// The dequeued order is dropped afterwards and never re-enters the queue.
    #[instrument(skip_all, fields(pending = self.orders.len()))]
    pub fn process_next_order(&mut self) -> Result<(), PaymentError> {
        let Some(order) = self.orders.pop_front() else {
            info!("Queue empty");
            self.sink.emit(NO_ORDERS_NOTICE)?;
            return Ok(());
        };

        Payment::new(&order).report_to(&mut self.sink)?;
        info!(remaining = self.orders.len(), "Order processed");
        Ok(())
    }
}
