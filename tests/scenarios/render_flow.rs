//! Rendering a well-formed menu for different current pages.

use treemenu::{InMemoryMenuRepository, MenuItem, MenuService, NoRoutes};

use crate::common::{child, root};

fn service(items: Vec<MenuItem>) -> MenuService<InMemoryMenuRepository, NoRoutes> {
    MenuService::new(InMemoryMenuRepository::new(items), NoRoutes)
}

/// SCENARIO: current page is a child; its parent opens and is marked in-path.
#[test]
fn scenario_child_active_opens_parent() {
    let service = service(vec![
        root(1, "m1", "A", "/a/"),
        child(2, 1, "m1", "B", "/b/"),
    ]);

    let html = service.draw_menu("m1", "/b/").unwrap();

    assert_eq!(
        html,
        "<ul class=\"tree-menu\">\
         <li class=\"in-path has-children expanded\"><a href=\"/a/\">A</a>\
         <ul class=\"tree-menu\">\
         <li class=\"active in-path\"><a href=\"/b/\">B</a></li>\
         </ul></li></ul>"
    );
}

/// SCENARIO: siblings are emitted by order, not by storage position.
#[test]
fn scenario_siblings_follow_order() {
    let service = service(vec![
        root(1, "m", "A", "/a/"),
        child(2, 1, "m", "B", "/a/b/").with_order(1),
        child(3, 1, "m", "D", "/a/d/").with_order(0),
    ]);

    let html = service.draw_menu("m", "/a/").unwrap();

    let d = html.find(">D<").expect("D rendered");
    let b = html.find(">B<").expect("B rendered");
    assert!(d < b, "expected D before B in {html}");
}

/// SCENARIO: order ties fall back to title.
#[test]
fn scenario_order_ties_sorted_by_title() {
    let service = service(vec![
        root(1, "m", "Zeta", "/z/"),
        root(2, "m", "Alpha", "/a/"),
        root(3, "m", "First", "/f/").with_order(0),
    ]);

    let html = service.draw_menu("m", "/none/").unwrap();

    assert_eq!(
        html,
        "<ul class=\"tree-menu\">\
         <li><a href=\"/a/\">Alpha</a></li>\
         <li><a href=\"/f/\">First</a></li>\
         <li><a href=\"/z/\">Zeta</a></li></ul>"
    );
}

/// SCENARIO: current page is a root; one level below it opens, no deeper.
#[test]
fn scenario_root_active_opens_one_level_below() {
    let service = service(vec![
        root(1, "m", "A", "/a/"),
        child(2, 1, "m", "B", "/a/b/"),
        child(3, 2, "m", "C", "/a/b/c/"),
        child(4, 3, "m", "Deep", "/deep/"),
    ]);

    let html = service.draw_menu("m", "/a/").unwrap();

    assert!(html.contains("<li class=\"active in-path has-children expanded\"><a href=\"/a/\">A</a>"));
    assert!(html.contains("<li class=\"has-children expanded\"><a href=\"/a/b/\">B</a>"));
    assert!(html.contains("<li class=\"has-children\"><a href=\"/a/b/c/\">C</a></li>"));
    assert!(!html.contains("Deep"));
}

/// SCENARIO: nothing matches; only roots are emitted.
#[test]
fn scenario_no_match_renders_roots_only() {
    let service = service(vec![
        root(1, "m", "A", "/a/"),
        child(2, 1, "m", "Hidden", "/a/hidden/"),
        root(3, "m", "C", "/c/").with_order(1),
    ]);

    let html = service.draw_menu("m", "/elsewhere/").unwrap();

    assert_eq!(
        html,
        "<ul class=\"tree-menu\">\
         <li class=\"has-children\"><a href=\"/a/\">A</a></li>\
         <li><a href=\"/c/\">C</a></li></ul>"
    );
}

/// SCENARIO: each render fetches exactly once, however deep the menu is.
#[test]
fn scenario_single_fetch_per_render() {
    let mut items = vec![root(1, "m", "L1", "/1/")];
    for depth in 2..=12u64 {
        items.push(child(depth, depth - 1, "m", &format!("L{depth}"), &format!("/{depth}/")));
    }
    let service = service(items);

    let html = service.draw_menu("m", "/12/").unwrap();
    assert!(html.contains(">L12<"));
    assert_eq!(service.repository().fetch_count(), 1);

    service.draw_menu("m", "/3/").unwrap();
    assert_eq!(service.repository().fetch_count(), 2);
}

/// SCENARIO: rendering twice with unchanged data is byte-identical.
#[test]
fn scenario_render_is_idempotent() {
    let service = service(vec![
        root(1, "m", "A", "/a/"),
        child(2, 1, "m", "B", "/a/b/"),
        child(3, 1, "m", "C", "/a/c/"),
    ]);

    let first = service.draw_menu("m", "/a/c/").unwrap();
    let second = service.draw_menu("m", "/a/c/").unwrap();
    assert_eq!(first, second);
}

/// SCENARIO: titles are escaped, hrefs are emitted as stored.
#[test]
fn scenario_titles_escaped() {
    let service = service(vec![root(1, "m", "R&D <beta>", "/rd/?a=1&b=2")]);

    let html = service.draw_menu("m", "/").unwrap();

    assert_eq!(
        html,
        "<ul class=\"tree-menu\"><li><a href=\"/rd/?a=1&b=2\">R&amp;D &lt;beta&gt;</a></li></ul>"
    );
}
