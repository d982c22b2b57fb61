//! Demo walkthrough integration tests
//!
//! Run with: cargo test -p integration-tests --test demo_tests

use market_common::{AppConfig, Environment};
use market_demo::{run, DEMO_SEARCH_QUERY};

#[test]
fn test_demo_report_json() {
    let report = run(&AppConfig::default()).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["users"].as_array().unwrap().len(), 2);
    assert!(value["users"][0].get("password_hash").is_none());
    assert_eq!(value["products"].as_array().unwrap().len(), 3);
    assert_eq!(value["search_query"], DEMO_SEARCH_QUERY);
    assert_eq!(value["advertisements"][0]["position"], "homepage_banner");
    assert_eq!(value["pushes"].as_array().unwrap().len(), 1);
    assert_eq!(value["admin"]["can_manage_products"], true);
}

#[test]
fn test_demo_ids_carry_worker_id() {
    let vars = |key: &str| match key {
        "WORKER_ID" => Some("12".to_string()),
        "APP_ENV" => Some("staging".to_string()),
        _ => None,
    };
    let config = AppConfig::from_vars(vars).unwrap();
    assert_eq!(config.app.env, Environment::Staging);

    let report = run(&config).unwrap();
    for user in &report.users {
        let id: market_core::Snowflake = user.id.parse().unwrap();
        assert_eq!(id.worker_id(), 12);
    }
}
