//! Messaging integration tests
//!
//! Direct messages, push fallback for offline receivers and push logging.
//!
//! Run with: cargo test -p integration-tests --test messaging_tests

use std::fs;

use integration_tests::{NewUser, TestMarket};
use market_common::{AppConfig, NotificationConfig};
use market_core::{ContentType, Snowflake};
use tempfile::TempDir;

#[test]
fn test_offline_receiver_gets_exactly_one_push() {
    let market = TestMarket::start();
    let seller = market.register(&NewUser::with_nickname("Seller"));
    let buyer = market.register(&NewUser::with_nickname("Buyer"));

    market.im().receive_message(&buyer, seller.id, "Still for sale?").unwrap();

    let pushes = market.pushes.pushes_for(seller.id);
    assert_eq!(pushes.len(), 1);
    assert_eq!(pushes[0].content, "You have a new message from Buyer");
    assert!(market.pushes.pushes_for(buyer.id).is_empty());
}

#[test]
fn test_online_receiver_gets_no_push() {
    let market = TestMarket::start();
    let seller = market.register_online(&NewUser::unique());
    let buyer = market.register(&NewUser::unique());

    let message = market.im().receive_message(&buyer, seller.id, "hello").unwrap();

    assert_eq!(message.receiver_id, seller.id);
    assert!(market.pushes.is_empty());
}

#[test]
fn test_each_offline_message_pushes_once() {
    let market = TestMarket::start();
    let seller = market.register(&NewUser::unique());
    let buyer = market.register(&NewUser::unique());

    for i in 0..3 {
        market
            .im()
            .receive_message(&buyer, seller.id, &format!("ping {i}"))
            .unwrap();
    }

    assert_eq!(market.pushes.len(), 3);
    assert_eq!(market.im().message_count(), 3);
}

#[test]
fn test_unknown_receiver() {
    let market = TestMarket::start();
    let buyer = market.register(&NewUser::unique());

    assert!(market
        .im()
        .receive_message(&buyer, Snowflake::new(1), "anyone?")
        .is_none());
    assert_eq!(market.im().message_count(), 0);
    assert!(market.pushes.is_empty());
}

#[test]
fn test_chat_history_is_pairwise_and_ordered() {
    let market = TestMarket::start();
    let a = market.register(&NewUser::unique());
    let b = market.register(&NewUser::unique());
    let c = market.register(&NewUser::unique());
    let im = market.im();

    im.receive_message(&a, b.id, "1").unwrap();
    im.receive_message(&c, b.id, "x").unwrap();
    im.receive_message(&b, a.id, "2").unwrap();
    im.send_message(&a, b.id, "pic.png", ContentType::Image).unwrap();
    im.receive_message(&a, c.id, "y").unwrap();

    let history = im.get_chat_history(&a, &b);
    let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["1", "2", "pic.png"]);
    assert!(history.windows(2).all(|w| w[0].sent_at <= w[1].sent_at));
    assert!(history.iter().all(|m| m.is_between(a.id, b.id)));
    assert_eq!(history[2].content_type, ContentType::Image);
}

#[test]
fn test_pushes_are_appended_to_configured_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pushes.log");
    let config = AppConfig {
        notification: NotificationConfig {
            log_file: Some(path.clone()),
        },
        ..AppConfig::default()
    };
    let market = TestMarket::start_with_config(&config).unwrap();
    let seller = market.register(&NewUser::unique());
    let buyer = market.register(&NewUser::with_nickname("Bob"));

    market.im().receive_message(&buyer, seller.id, "one").unwrap();
    market.im().receive_message(&buyer, seller.id, "two").unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines
        .iter()
        .all(|l| l.contains("You have a new message from Bob")));
    assert_eq!(market.pushes.len(), 2);
}
