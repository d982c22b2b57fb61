//! Marketplace integration tests
//!
//! Accounts, listings, search and favorites across the service layer.
//!
//! Run with: cargo test -p integration-tests --test marketplace_tests

use integration_tests::{unique_email, NewProduct, NewUser, TestMarket};

// ============================================================================
// Account Tests
// ============================================================================

#[test]
fn test_register_then_duplicate_email_fails() {
    let market = TestMarket::start();
    let user = NewUser::unique();
    market.register(&user);

    let again = market
        .users()
        .register("other-phone", &user.email, "other-password", "Someone Else");
    assert!(again.is_none());
    assert_eq!(market.users().get_all_users().len(), 1);
}

#[test]
fn test_distinct_emails_all_register() {
    let market = TestMarket::start();
    for _ in 0..5 {
        let email = unique_email();
        assert!(market.users().register("1", &email, "pw", "n").is_some());
    }
    assert_eq!(market.users().get_all_users().len(), 5);
}

#[test]
fn test_login_logout_cycle() {
    let market = TestMarket::start();
    let user = NewUser::unique();
    let registered = market.register(&user);
    assert!(!registered.is_online);

    assert!(market.users().login(&user.email, "wrong").is_none());
    assert!(market.users().login(&unique_email(), &user.password).is_none());

    let online = market.users().login(&user.email, &user.password).unwrap();
    assert!(online.is_online);

    market.users().logout(Some(&online));
    let stored = market.users().find_user_by_id(online.id).unwrap();
    assert!(!stored.is_online);

    // Logging out an offline user keeps it offline
    market.users().logout(Some(&stored));
    assert!(!market.users().find_user_by_id(online.id).unwrap().is_online);
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn test_widget_scenario() {
    let market = TestMarket::start();
    let seller = market.users().register("1", "s@x.com", "pw", "Seller").unwrap();
    let buyer = market.users().register("2", "b@x.com", "pw", "Buyer").unwrap();

    let widget = market
        .products()
        .publish_product(&seller, "Widget", "desc", 10.0, "Tools");

    assert_eq!(market.products().search_products("widg"), vec![widget.clone()]);

    market.products().add_to_favorites(&buyer, &widget);
    assert_eq!(market.products().get_user_favorites(&buyer), vec![widget.clone()]);

    market.products().add_to_favorites(&buyer, &widget);
    assert_eq!(market.products().get_user_favorites(&buyer).len(), 1);
}

#[test]
fn test_search_matches_name_or_description() {
    let market = TestMarket::start();
    let seller = market.register(&NewUser::unique());

    let catalog = [
        NewProduct::new("Road Bike", "Aluminium frame", 900.0, "Sports"),
        NewProduct::new("Helmet", "Fits any BIKE rider", 60.0, "Sports"),
        NewProduct::new("Tent", "Two person", 150.0, "Outdoor"),
    ];
    let published: Vec<_> = catalog.iter().map(|p| market.publish(&seller, p)).collect();

    assert_eq!(market.products().search_products(""), published);
    assert_eq!(
        market.products().search_products("bIkE"),
        vec![published[0].clone(), published[1].clone()]
    );
    assert_eq!(
        market.products().search_products("person"),
        vec![published[2].clone()]
    );
    assert!(market.products().search_products("kayak").is_empty());
}

#[test]
fn test_categories_are_shared_between_sellers() {
    let market = TestMarket::start();
    let a = market.register(&NewUser::unique());
    let b = market.register(&NewUser::unique());

    let first = market.publish(&a, &NewProduct::new("Saw", "", 20.0, "Tools"));
    let second = market.publish(&b, &NewProduct::new("Drill", "", 80.0, "Tools"));

    assert_eq!(first.category_id, second.category_id);
    assert_eq!(market.products().get_categories().len(), 1);
    assert_eq!(market.products().get_products_by_seller(&a), vec![first]);
    assert_eq!(market.products().get_products_by_seller(&b), vec![second]);
}

#[test]
fn test_listing_edits_are_visible_in_favorites() {
    let market = TestMarket::start();
    let seller = market.register(&NewUser::unique());
    let buyer = market.register(&NewUser::unique());
    let product = market.publish(&seller, &NewProduct::new("Sofa", "Grey", 400.0, "Home"));
    market.products().add_to_favorites(&buyer, &product);

    market
        .products()
        .update_product(product.id, Some("Corner Sofa".to_string()), None, Some(350.0));
    market.products().add_product_image(product.id, "sofa.png");

    let favorites = market.products().get_user_favorites(&buyer);
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].name, "Corner Sofa");
    assert_eq!(favorites[0].images.len(), 1);
}

#[test]
fn test_advertisement_positions() {
    let market = TestMarket::start();
    let products = market.products();

    let first = products.add_advertisement("A", "a.png", "/a", "homepage_banner");
    products.add_advertisement("B", "b.png", "/b", "sidebar");
    let third = products.add_advertisement("C", "c.png", "/c", "homepage_banner");

    assert_eq!(
        products.get_advertisements_by_position("homepage_banner"),
        vec![first, third]
    );
    assert!(products.get_advertisements_by_position("Homepage_Banner").is_empty());
}
