mod common;

use chrono::Utc;
use common::gated::GatedOrderApi;
use order_entry::clients::mock::MockOrderApi;
use order_entry::model::{Customer, CustomerId, Order, OrderId, OrderStatus, Product};
use order_entry::screen::ScreenActor;
use order_entry::shell;
use rust_decimal::Decimal;
use tokio::io::BufReader;
use tokio::sync::watch;

/// Drives the command loop from a script and returns everything it printed.
async fn run_script(mock: &MockOrderApi, script: &str) -> String {
    let (actor, client) = ScreenActor::new(8);
    let handle = tokio::spawn(actor.run(mock.clone(), Customer::default()));

    let mut output = Vec::new();
    shell::run(&client, BufReader::new(script.as_bytes()), &mut output, "R$")
        .await
        .unwrap();

    drop(client);
    handle.await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_scripted_order_is_submitted() {
    let mock = MockOrderApi::new();
    mock.expect_list_products()
        .return_ok(vec![Product::new(1, "Notebook", Decimal::from(10))]);
    mock.expect_list_orders().return_ok(Vec::new());
    mock.expect_create_order().return_ok(Order {
        id: OrderId(1),
        customer_id: CustomerId(1),
        order_date: Utc::now(),
        total_amount: Decimal::from(20),
        status: OrderStatus::Pending,
        items: Vec::new(),
    });

    let text = run_script(&mock, "select 1\nqty 2\nadd\nsubmit\nquit\n").await;

    assert!(text.contains("Notebook - R$ 10.00"));
    assert!(text.contains("R$ 20.00"));
    assert!(text.contains("* Order created successfully"));
    assert_eq!(mock.created_orders()[0].total_amount, Decimal::from(20));
    mock.verify();
}

#[tokio::test]
async fn test_bad_input_is_reported_and_loop_continues() {
    let mock = MockOrderApi::new();
    mock.expect_list_products().return_ok(Vec::new());
    mock.expect_list_orders().return_ok(Vec::new());

    // No trailing quit: end of input also ends the loop.
    let text = run_script(&mock, "bogus\nselect x\nqty\nhelp\n").await;

    assert!(text.contains("Unknown command: bogus"));
    assert!(text.contains("Invalid product id: x"));
    assert!(text.contains("Missing argument for `qty`"));
    assert!(text.contains("select <id>"));
    mock.verify();
}

#[tokio::test]
async fn test_loading_frame_is_drawn_before_screen() {
    let mock = MockOrderApi::new();
    mock.expect_list_products().return_ok(Vec::new());
    mock.expect_list_orders().return_ok(Vec::new());

    let text = run_script(&mock, "quit\n").await;

    assert!(text.starts_with("Loading...\n"));
    let loading = text.find("Loading...").unwrap();
    let screen = text.find("== New Order ==").unwrap();
    assert!(loading < screen);
    assert_eq!(text.matches("Loading...").count(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_in_flight_submit_is_drawn() {
    let mock = MockOrderApi::new();
    mock.expect_list_products()
        .return_ok(vec![Product::new(1, "Notebook", Decimal::from(10))]);
    mock.expect_list_orders().return_ok(Vec::new());
    mock.expect_create_order().return_ok(Order {
        id: OrderId(1),
        customer_id: CustomerId(1),
        order_date: Utc::now(),
        total_amount: Decimal::from(10),
        status: OrderStatus::Pending,
        items: Vec::new(),
    });
    let api = GatedOrderApi::new(mock.clone());
    let gate = api.gate();

    let (actor, client) = ScreenActor::new(8);
    let mut updates: watch::Receiver<_> = client.subscribe();
    let handle = tokio::spawn(actor.run(api, Customer::default()));

    let mut output = Vec::new();
    let release = async {
        updates.wait_for(|s| s.submitting).await.unwrap();
        gate.notify_one();
    };
    let script = "select 1\nadd\nsubmit\nquit\n";
    let (result, ()) = tokio::join!(
        shell::run(&client, BufReader::new(script.as_bytes()), &mut output, "R$"),
        release,
    );
    result.unwrap();

    drop(client);
    handle.await.unwrap();

    let text = String::from_utf8(output).unwrap();
    let in_flight = text.find("[Submitting... (disabled)]").unwrap();
    let done = text.find("* Order created successfully").unwrap();
    assert!(in_flight < done);
    mock.verify();
}
