//! Generators shared by the property tests.

use std::collections::HashMap;

use proptest::prelude::*;
use proptest::sample::Index;

use treemenu::{MenuItem, MenuItemId};

/// A valid forest: every parent is an earlier item, titles and urls unique.
///
/// Items come back in generation order, which is usually not sibling order.
pub fn forest() -> impl Strategy<Value = Vec<MenuItem>> {
    proptest::collection::vec((any::<Index>(), any::<bool>(), 0u32..3), 1..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (parent_pick, is_root, order))| {
                let id = i as u64 + 1;
                let item = MenuItem::new(id, "m", format!("T{id}"))
                    .with_url(format!("/p{id}/"))
                    .with_order(order);
                if i > 0 && !is_root {
                    item.with_parent(parent_pick.index(i) as u64 + 1)
                } else {
                    item
                }
            })
            .collect()
    })
}

/// A forest plus a few items whose parents were never fetched
pub fn forest_with_orphans() -> impl Strategy<Value = Vec<MenuItem>> {
    (forest(), 1usize..4).prop_map(|(mut items, orphans)| {
        let next = items.len() as u64 + 1;
        for k in 0..orphans as u64 {
            let id = next + k;
            items.push(
                MenuItem::new(id, "m", format!("T{id}"))
                    .with_url(format!("/p{id}/"))
                    .with_parent(1000 + id),
            );
        }
        items
    })
}

/// Parent lookup over the generated items
pub fn parents(items: &[MenuItem]) -> HashMap<MenuItemId, Option<MenuItemId>> {
    items.iter().map(|item| (item.id, item.parent_id)).collect()
}

/// Number of ancestors of `id` present in `items`
pub fn depth(items: &[MenuItem], id: MenuItemId) -> usize {
    let parents = parents(items);
    let mut depth = 0;
    let mut current = parents.get(&id).copied().flatten();
    while let Some(parent) = current {
        if !parents.contains_key(&parent) {
            break;
        }
        depth += 1;
        current = parents.get(&parent).copied().flatten();
    }
    depth
}
