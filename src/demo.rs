//! Demo menus used by `treemenu seed`
//!
//! Two menus: a four-level `main_menu` and a flat `footer_menu`. Every item
//! links through a named route, so the matching route table ships alongside.

use crate::domain::entities::MenuItem;
use crate::infrastructure::RouteTable;

/// Demo items, ids assigned in insertion order
pub fn demo_items() -> Vec<MenuItem> {
    let main = "main_menu";
    let footer = "footer_menu";

    vec![
        MenuItem::new(1, main, "Главная").with_named_url("home").with_order(0),
        MenuItem::new(2, main, "О компании").with_named_url("about").with_order(1),
        MenuItem::new(3, main, "Услуги").with_named_url("services").with_order(2),
        MenuItem::new(4, main, "Контакты").with_named_url("contact").with_order(3),
        MenuItem::new(5, main, "Команда")
            .with_parent(2)
            .with_named_url("about_team")
            .with_order(0),
        MenuItem::new(6, main, "История")
            .with_parent(2)
            .with_named_url("about_history")
            .with_order(1),
        MenuItem::new(7, main, "Веб-разработка")
            .with_parent(3)
            .with_named_url("services_web")
            .with_order(0),
        MenuItem::new(8, main, "Мобильные приложения")
            .with_parent(3)
            .with_named_url("services_mobile")
            .with_order(1),
        MenuItem::new(9, main, "Дизайн")
            .with_parent(3)
            .with_named_url("services_design")
            .with_order(2),
        MenuItem::new(10, main, "Frontend")
            .with_parent(7)
            .with_named_url("services_frontend")
            .with_order(0),
        MenuItem::new(11, main, "Backend")
            .with_parent(7)
            .with_named_url("services_backend")
            .with_order(1),
        MenuItem::new(12, footer, "Политика конфиденциальности")
            .with_named_url("privacy")
            .with_order(0),
        MenuItem::new(13, footer, "Условия использования")
            .with_named_url("terms")
            .with_order(1),
    ]
}

/// Routes referenced by [`demo_items`]
pub fn demo_routes() -> RouteTable {
    [
        ("home", "/"),
        ("about", "/about/"),
        ("about_team", "/about/team/"),
        ("about_history", "/about/history/"),
        ("services", "/services/"),
        ("services_web", "/services/web/"),
        ("services_frontend", "/services/web/frontend/"),
        ("services_backend", "/services/web/backend/"),
        ("services_mobile", "/services/mobile/"),
        ("services_design", "/services/design/"),
        ("contact", "/contact/"),
        ("privacy", "/privacy/"),
        ("terms", "/terms/"),
    ]
    .into_iter()
    .collect()
}
