//! Property tests for active-path resolution.

use proptest::prelude::*;
use proptest::sample::Index;

use treemenu::{ActivePath, MenuTree, NoRoutes};

use crate::strategies::{depth, forest_with_orphans};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the active path is an unbroken parent chain ending at a
    /// root, one entry longer than the active item's depth.
    #[test]
    fn property_active_path_is_parent_chain(items in forest_with_orphans(), pick in any::<Index>()) {
        let target = &items[pick.index(items.len())];
        let tree = MenuTree::build(&items);
        let current = format!("/p{}/", target.id);

        let active = ActivePath::resolve(&tree, &current, &NoRoutes);

        prop_assert_eq!(active.active(), Some(target.id));
        prop_assert_eq!(active.len(), depth(&items, target.id) + 1);

        let mut node = Some(target);
        let mut walked = 0;
        while let Some(item) = node {
            prop_assert!(active.contains(item.id));
            walked += 1;
            node = item.parent_id.and_then(|p| items.iter().find(|i| i.id == p));
        }
        prop_assert_eq!(walked, active.len());
    }

    /// PROPERTY: an address no item links to activates nothing.
    #[test]
    fn property_unknown_address_has_no_active(items in forest_with_orphans()) {
        let tree = MenuTree::build(&items);
        let active = ActivePath::resolve(&tree, "/nowhere/", &NoRoutes);

        prop_assert_eq!(active.active(), None);
        prop_assert!(active.is_empty());
    }
}
