mod common;

use common::Harness;
use std::time::Duration;
use subpanel::api::endpoints;
use subpanel::ui::controller::{Destination, LifecycleEvent, ScreenController, ScreenEffect};
use subpanel::ui::screens::dashboard::{DashboardIntent, DashboardScreen};
use subpanel::ui::screens::Usage;

fn script_backend(harness: &Harness) {
    harness.transport.respond(
        endpoints::GET_SUBSCRIBE,
        200,
        r#"{"data":{"u":100,"d":150,"transfer_enable":1000,"expired_at":1767225600,
            "subscribe_url":"https://sub.example/s/1"}}"#,
    );
    harness
        .transport
        .respond(endpoints::GET_USER_INFO, 200, r#"{"data":{"plan_id":3}}"#);
    harness.transport.respond(
        endpoints::GET_PLANS,
        200,
        r#"{"data":[{"id":3,"name":"Pro"}]}"#,
    );
    harness.transport.respond(
        endpoints::GET_SERVERS,
        200,
        r#"{"data":[
            {"id":1,"name":"Tokyo","host":"jp.example","port":443,"rate":"1.5","type":"vmess","class":0},
            {"id":2,"name":"Osaka","rate":2,"group_id":null}
        ]}"#,
    );
}

#[tokio::test]
async fn test_load_populates_usage_plan_and_servers() {
    let harness = Harness::new();
    script_backend(&harness);

    let screen = harness.open(DashboardScreen::new()).await;

    let state = screen.state();
    assert_eq!(
        state.usage,
        Usage {
            used: 250,
            total: 1000,
            percent: 25
        }
    );
    assert_eq!(state.expired_at, Some(1767225600));
    assert_eq!(state.plan_name.as_deref(), Some("Pro"));
    assert_eq!(state.servers.len(), 2);
    assert_eq!(state.servers[0].server_type, "vmess");
    assert_eq!(state.servers[1].rate, "2");
    assert!(!state.status.loading);
    assert!(!state.status.has_errors());
    assert_eq!(harness.session.subscribe_url(), "https://sub.example/s/1");
}

#[tokio::test]
async fn test_malformed_server_list_renders_empty() {
    let harness = Harness::new();
    harness.transport.respond(
        endpoints::GET_SUBSCRIBE,
        200,
        r#"{"data":{"u":0,"d":0,"transfer_enable":0}}"#,
    );
    harness
        .transport
        .respond(endpoints::GET_SERVERS, 200, r#"{"data":"oops"}"#);

    let screen = harness.open(DashboardScreen::new()).await;

    let state = screen.state();
    assert!(state.servers.is_empty());
    assert_eq!(state.usage.percent, 0);
    assert_eq!(state.plan_name, None);
    assert!(!state.status.has_errors());
}

#[tokio::test]
async fn test_expired_session_shows_message() {
    let harness = Harness::new();
    harness.transport.respond(
        endpoints::GET_SUBSCRIBE,
        403,
        r#"{"message":"Not logged in"}"#,
    );
    harness
        .transport
        .respond(endpoints::GET_SERVERS, 200, r#"{"data":[]}"#);

    let screen = harness.open(DashboardScreen::new()).await;

    let state = screen.state();
    assert_eq!(state.status.general_error.as_deref(), Some("Not logged in"));
    assert!(!state.status.loading);
}

#[tokio::test(start_paused = true)]
async fn test_failed_step_keeps_loading_until_population_ends() {
    let harness = Harness::new();
    harness.transport.respond(
        endpoints::GET_SUBSCRIBE,
        403,
        r#"{"message":"Not logged in"}"#,
    );
    harness.transport.respond_after(
        endpoints::GET_SERVERS,
        Duration::from_secs(5),
        200,
        r#"{"data":[{"id":1,"name":"Tokyo"}]}"#,
    );
    let mut screen = ScreenController::spawn(DashboardScreen::new(), harness.env.clone());

    tokio::time::sleep(Duration::from_secs(2)).await;
    let state = screen.state();
    assert_eq!(state.status.general_error.as_deref(), Some("Not logged in"));
    assert!(state.status.loading);
    assert_eq!(harness.transport.count(endpoints::GET_SERVERS), 1);

    screen.settle().await;
    let state = screen.state();
    assert!(!state.status.loading);
    assert_eq!(state.status.general_error.as_deref(), Some("Not logged in"));
    assert_eq!(state.servers.len(), 1);
}

#[tokio::test]
async fn test_resume_refreshes() {
    let harness = Harness::new();
    script_backend(&harness);
    let mut screen = harness.open(DashboardScreen::new()).await;
    assert_eq!(harness.transport.count(endpoints::GET_SERVERS), 1);

    screen.notify(LifecycleEvent::Resumed);
    screen.settle().await;
    assert_eq!(harness.transport.count(endpoints::GET_SERVERS), 2);

    screen.send(DashboardIntent::Refresh);
    screen.settle().await;
    assert_eq!(harness.transport.count(endpoints::GET_SERVERS), 3);
}

#[tokio::test]
async fn test_open_purchase_navigates() {
    let harness = Harness::new();
    script_backend(&harness);
    let mut screen = harness.open(DashboardScreen::new()).await;

    screen.send(DashboardIntent::OpenPurchase);
    screen.settle().await;

    assert_eq!(
        screen.drain_effects(),
        vec![ScreenEffect::Navigate(Destination::Purchase)]
    );
}
