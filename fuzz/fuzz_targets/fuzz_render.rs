#![no_main]

use libfuzzer_sys::fuzz_target;

use treemenu::{ActivePath, MenuItem, MenuRenderer, MenuTree, NoRoutes, RenderOptions};

// Each 3-byte chunk is one item: parent pick, order, url pick. Parents are
// unchecked, so self-parents and cycles show up too.
fuzz_target!(|data: &[u8]| {
    let items: Vec<MenuItem> = data
        .chunks_exact(3)
        .take(64)
        .enumerate()
        .map(|(i, chunk)| {
            let id = i as u64 + 1;
            let mut item = MenuItem::new(id, "m", format!("<{id}&>"))
                .with_order(u32::from(chunk[1] % 4));
            if chunk[0] % 5 != 0 {
                item = item.with_parent(u64::from(chunk[0] % 70));
            }
            match chunk[2] % 3 {
                0 => item,
                1 => item.with_url(format!("/u{}/", chunk[2] % 7)),
                _ => item.with_url("#"),
            }
        })
        .collect();

    let tree = MenuTree::build(&items);
    for current in ["/", "#", "/u1/", "/u3/"] {
        let active = ActivePath::resolve(&tree, current, &NoRoutes);
        let html = MenuRenderer::new(&tree, &active, &NoRoutes, &RenderOptions::default()).render();
        assert!(!html.contains("<1&>"));
    }
});
