//! Application Layer
//!
//! Use cases that orchestrate the menu flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MenuService::draw_menu` - Fetch, build, resolve, render
//! - `MenuService::menu_listing` - Nested read-only projection of one menu
//! - `MenuService::list_items` / `item_detail` / `menus` - Flat read-only views

pub mod menu_service;

pub use menu_service::{MenuService, MenuSummary};
