#![no_main]

use libfuzzer_sys::fuzz_target;
use serde::Deserialize;

use treemenu::domain::policies::validate_items;
use treemenu::{InMemoryMenuRepository, MenuItem, MenuService, NoRoutes};

#[derive(Deserialize)]
struct Store {
    #[serde(default)]
    items: Vec<MenuItem>,
}

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(store) = toml::from_str::<Store>(content) else {
        return;
    };

    // Validation must never panic, and valid stores must always render
    let valid = validate_items(&store.items).is_ok();
    let names: Vec<String> = store.items.iter().map(|i| i.menu_name.clone()).collect();
    let service = MenuService::new(InMemoryMenuRepository::new(store.items), NoRoutes);
    for name in &names {
        let html = service.draw_menu(name, "/");
        if valid {
            assert!(html.is_ok());
        }
    }
});
