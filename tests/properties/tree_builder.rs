//! Property tests for tree assembly.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use treemenu::{MenuItem, MenuItemId, MenuTree};

use crate::strategies::{forest, forest_with_orphans};

fn assert_sibling_order(siblings: &[&MenuItem]) -> Result<(), TestCaseError> {
    for pair in siblings.windows(2) {
        let key_a = (pair[0].order, &pair[0].title);
        let key_b = (pair[1].order, &pair[1].title);
        prop_assert!(key_a <= key_b, "{:?} placed before {:?}", key_a, key_b);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: roots are exactly the items without a fetched parent, and
    /// every other item sits in exactly one children list.
    #[test]
    fn property_every_item_placed_once(items in forest_with_orphans()) {
        let tree = MenuTree::build(&items);
        let ids: HashSet<MenuItemId> = items.iter().map(|i| i.id).collect();

        let expected_roots = items
            .iter()
            .filter(|i| i.parent_id.map_or(true, |p| !ids.contains(&p)))
            .count();
        prop_assert_eq!(tree.roots().len(), expected_roots);

        let mut seen: HashMap<MenuItemId, usize> = HashMap::new();
        for item in &items {
            for child in tree.children_of(item.id) {
                *seen.entry(child.id).or_default() += 1;
                prop_assert_eq!(child.parent_id, Some(item.id));
            }
        }
        for item in &items {
            let placements = seen.get(&item.id).copied().unwrap_or(0);
            let is_root = tree.roots().iter().any(|r| r.id == item.id);
            prop_assert_eq!(placements + usize::from(is_root), 1, "item {}", item.id);
        }
        prop_assert_eq!(tree.len(), items.len());
    }

    /// PROPERTY: siblings are in (order, title) order at every level.
    #[test]
    fn property_sibling_order_is_canonical(items in forest()) {
        let tree = MenuTree::build(&items);

        assert_sibling_order(tree.roots())?;
        for item in &items {
            assert_sibling_order(tree.children_of(item.id))?;
        }
    }

    /// PROPERTY: input order does not change the tree.
    #[test]
    fn property_build_ignores_input_order(items in forest()) {
        let mut reversed = items.clone();
        reversed.reverse();

        let tree = MenuTree::build(&items);
        let other = MenuTree::build(&reversed);

        let root_ids = |t: &MenuTree<'_>| t.roots().iter().map(|i| i.id).collect::<Vec<_>>();
        prop_assert_eq!(root_ids(&tree), root_ids(&other));
        for item in &items {
            let a: Vec<_> = tree.children_of(item.id).iter().map(|i| i.id).collect();
            let b: Vec<_> = other.children_of(item.id).iter().map(|i| i.id).collect();
            prop_assert_eq!(a, b);
        }
    }
}
