use restaurant_recipe::model::{MenuItem, Order};
use restaurant_recipe::payment::{Payment, PaymentError};
use restaurant_recipe::restaurant::{Restaurant, NO_ORDERS_NOTICE};

fn single(item: MenuItem) -> Order {
    [item].into_iter().collect()
}

#[test]
fn test_empty_queue_emits_notice_without_error() {
    let mut restaurant = Restaurant::with_sink(Vec::<String>::new());

    restaurant.process_next_order().expect("empty queue is not an error");
    restaurant.process_next_order().expect("still not an error");

    assert_eq!(restaurant.sink(), &[NO_ORDERS_NOTICE, NO_ORDERS_NOTICE]);
}

#[test]
fn test_orders_are_processed_in_arrival_order() {
    let mut restaurant = Restaurant::with_sink(Vec::<String>::new());
    restaurant.add_order(single(MenuItem::appetizer("A", 5.00)));
    restaurant.add_order(single(MenuItem::appetizer("B", 7.25)));
    assert_eq!(restaurant.pending(), 2);

    restaurant.process_next_order().unwrap();
    assert_eq!(restaurant.pending(), 1);
    restaurant.process_next_order().unwrap();
    restaurant.process_next_order().unwrap();

    assert!(restaurant.is_idle());
    assert_eq!(
        restaurant.sink(),
        &[
            "Processing payment for total amount: $5.00",
            "Processing payment for total amount: $7.25",
            NO_ORDERS_NOTICE,
        ]
    );
}

#[test]
fn test_end_to_end_dinner() {
    let mut order = Order::new();
    order.add_item(MenuItem::appetizer("Spring Rolls", 5.00));
    order.add_item(MenuItem::main_course("Grilled Chicken", 15.00));
    order.add_item(MenuItem::beverage("Soda", 2.00));
    order.add_item(MenuItem::beverage("Wine", 10.00));

    let mut lines: Vec<String> = Vec::new();
    let mut restaurant = Restaurant::with_sink(&mut lines);
    restaurant.add_order(order);
    restaurant.process_next_order().unwrap();
    drop(restaurant);

    assert_eq!(lines, ["Processing payment for total amount: $30.80"]);
}

#[test]
fn test_reloaded_order_pays_full_price() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");

    let mut order = Order::new();
    order.add_item(MenuItem::appetizer("Spring Rolls", 5.00));
    order.add_item(MenuItem::main_course("Grilled Chicken", 15.00));
    order.add_item(MenuItem::beverage("Soda", 2.00));
    order.add_item(MenuItem::beverage("Wine", 10.00));
    order.save_menu(&path).unwrap();

    let mut restaurant = Restaurant::with_sink(Vec::<String>::new());
    restaurant.add_order(Order::load_menu(&path).unwrap());
    restaurant.process_next_order().unwrap();

    assert_eq!(restaurant.sink(), &["Processing payment for total amount: $32.00"]);
}

#[test]
fn test_payment_total_matches_order() {
    let order: Order = [MenuItem::main_course("Steak", 20.00), MenuItem::beverage("Wine", 10.00)]
        .into_iter()
        .collect();

    let payment = Payment::new(&order);
    assert!((payment.total() - 29.00).abs() < 1e-9);
    assert!((payment.total() - order.calculate_total_price()).abs() < f64::EPSILON);
}

#[test]
fn test_report_failure_is_propagated() {
    struct ClosedPipe;
    impl restaurant_recipe::payment::ReportSink for ClosedPipe {
        fn emit(&mut self, _line: &str) -> std::io::Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }
    }

    let order = single(MenuItem::generic("Tea", 3.0));
    let err = Payment::new(&order).report_to(&mut ClosedPipe).unwrap_err();
    assert!(matches!(err, PaymentError::Report(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
}
