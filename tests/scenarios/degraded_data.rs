//! Missing menus, unknown routes, dangling parents and failing stores.

use treemenu::{
    InMemoryMenuRepository, MenuItem, MenuService, NoRoutes, RouteTable, TreeMenuError,
};

use crate::common::{child, root};

/// SCENARIO: an unknown menu renders empty and the listing reports not-found.
#[test]
fn scenario_missing_menu_is_empty() {
    let service = MenuService::new(
        InMemoryMenuRepository::new(vec![root(1, "m1", "A", "/a/")]),
        NoRoutes,
    );

    assert_eq!(service.draw_menu("m2", "/").unwrap(), "");

    let err = service.menu_listing("m2").unwrap_err();
    assert!(matches!(err, TreeMenuError::MenuNotFound { ref menu_name } if menu_name == "m2"));
}

/// SCENARIO: an unresolvable named route renders as `#` and never matches.
#[test]
fn scenario_unknown_route_falls_back_to_hash() {
    let routes = RouteTable::new().with_route("home", "/");
    let service = MenuService::new(
        InMemoryMenuRepository::new(vec![
            MenuItem::new(1, "m", "Home").with_named_url("home"),
            MenuItem::new(2, "m", "C")
                .with_named_url("missing_route")
                .with_url("/c/")
                .with_order(1),
        ]),
        routes,
    );

    let html = service.draw_menu("m", "#").unwrap();
    assert_eq!(
        html,
        "<ul class=\"tree-menu\">\
         <li><a href=\"/\">Home</a></li>\
         <li><a href=\"#\">C</a></li></ul>"
    );

    let html = service.draw_menu("m", "/c/").unwrap();
    assert!(!html.contains("active"));
}

/// SCENARIO: a named route takes priority over the literal url.
#[test]
fn scenario_named_route_wins_over_url() {
    let routes = RouteTable::new().with_route("about", "/about/");
    let service = MenuService::new(
        InMemoryMenuRepository::new(vec![MenuItem::new(1, "m", "About")
            .with_named_url("about")
            .with_url("/old-about/")]),
        routes,
    );

    let html = service.draw_menu("m", "/about/").unwrap();
    assert_eq!(
        html,
        "<ul class=\"tree-menu\"><li class=\"active in-path\"><a href=\"/about/\">About</a></li></ul>"
    );
}

/// SCENARIO: a child whose parent is not in the fetch is promoted to root.
#[test]
fn scenario_dangling_parent_promoted_to_root() {
    let service = MenuService::new(
        InMemoryMenuRepository::new(vec![
            root(1, "m", "A", "/a/"),
            child(2, 99, "m", "Orphan", "/orphan/").with_order(1),
        ]),
        NoRoutes,
    );

    let html = service.draw_menu("m", "/orphan/").unwrap();
    assert_eq!(
        html,
        "<ul class=\"tree-menu\">\
         <li><a href=\"/a/\">A</a></li>\
         <li class=\"active in-path\"><a href=\"/orphan/\">Orphan</a></li></ul>"
    );

    let listing = service.menu_listing("m").unwrap();
    assert_eq!(listing.items.len(), 2);
}

/// SCENARIO: two items share an address; the first in sibling order wins.
#[test]
fn scenario_duplicate_address_first_wins() {
    let service = MenuService::new(
        InMemoryMenuRepository::new(vec![
            root(1, "m", "Second", "/same/").with_order(1),
            root(2, "m", "First", "/same/").with_order(0),
        ]),
        NoRoutes,
    );

    let html = service.draw_menu("m", "/same/").unwrap();
    assert_eq!(html.matches("active").count(), 1);
    assert!(html.contains("<li class=\"active in-path\"><a href=\"/same/\">First</a>"));
}

/// SCENARIO: a parent cycle in unvalidated data does not hang the resolver.
#[test]
fn scenario_parent_cycle_terminates() {
    let service = MenuService::new(
        InMemoryMenuRepository::new(vec![
            root(1, "m", "Root", "/"),
            child(2, 3, "m", "Loop A", "/loop-a/"),
            child(3, 2, "m", "Loop B", "/loop-b/"),
        ]),
        NoRoutes,
    );

    let html = service.draw_menu("m", "/loop-a/").unwrap();
    assert_eq!(html, "<ul class=\"tree-menu\"><li><a href=\"/\">Root</a></li></ul>");
}

/// SCENARIO: a storage failure reaches the caller unchanged.
#[test]
fn scenario_fetch_failure_propagates() {
    let service = MenuService::new(InMemoryMenuRepository::failing("connection refused"), NoRoutes);

    let err = service.draw_menu("m", "/").unwrap_err();
    assert!(matches!(err, TreeMenuError::Fetch(_)));
    assert_eq!(err.to_string(), "connection refused");
}
