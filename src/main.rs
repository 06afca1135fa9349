//! treemenu CLI - render and inspect hierarchical navigation menus
//!
//! Usage: treemenu <COMMAND>
//!
//! Commands:
//!   render    Render a menu as nested HTML for one page
//!   list      Print one menu with nested children as JSON
//!   items     Print stored items as JSON
//!   menus     List stored menu names
//!   template  Expand {% draw_menu %} tags in a template file
//!   seed      Write the demo menus
//!   check     Validate the menu store

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use treemenu::config::{Config, StoreConfig, PROJECT_CONFIG_FILE};
use treemenu::demo::{demo_items, demo_routes};
use treemenu::presentation::cli::{Cli, Commands};
use treemenu::presentation::{factory, output, TagContext};
use treemenu::{telemetry, MenuService, TreeMenuError};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    telemetry::init(cli.verbose, &config.logging);
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let store = cli.store.as_deref();
    match cli.command {
        Commands::Render { menu, path } => cmd_render(&config, store, &menu, &path),
        Commands::List { menu } => cmd_list(&config, store, &menu),
        Commands::Items { menu } => cmd_items(&config, store, menu.as_deref()),
        Commands::Menus { json } => cmd_menus(&config, store, json),
        Commands::Template { file, path } => cmd_template(&config, store, &file, &path),
        Commands::Seed { out, with_config } => {
            let target = out.unwrap_or_else(|| factory::resolve_store_path(&config, store));
            cmd_seed(&target, with_config)
        }
        Commands::Check => cmd_check(&config, store),
    }
}

fn cmd_render(config: &Config, store: Option<&Path>, menu: &str, path: &str) -> Result<()> {
    let service = factory::create_menu_service(config, store);
    let html = service.draw_menu(menu, path)?;
    tracing::info!(menu, path, bytes = html.len(), "rendered menu");
    if !html.is_empty() {
        println!("{html}");
    }
    Ok(())
}

fn cmd_list(config: &Config, store: Option<&Path>, menu: &str) -> Result<()> {
    let service = factory::create_menu_service(config, store);
    let listing = service.menu_listing(menu)?;
    print!("{}", output::to_json(&listing)?);
    Ok(())
}

fn cmd_items(config: &Config, store: Option<&Path>, menu: Option<&str>) -> Result<()> {
    let service = factory::create_menu_service(config, store);
    let items = service.list_items(menu)?;
    print!("{}", output::to_json(&items)?);
    Ok(())
}

fn cmd_menus(config: &Config, store: Option<&Path>, json: bool) -> Result<()> {
    let service = factory::create_menu_service(config, store);
    let menus = service.menus()?;
    if json {
        print!("{}", output::to_json(&menus)?);
    } else {
        print!("{}", output::menus_text(&menus));
    }
    Ok(())
}

fn cmd_template(config: &Config, store: Option<&Path>, file: &Path, path: &str) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("failed to read template {}", file.display()))?;
    let service = Arc::new(factory::create_menu_service(config, store));
    let tags = factory::create_tag_registry(service);
    let page = tags.render_template(&source, &TagContext::new(path))?;
    print!("{page}");
    Ok(())
}

fn cmd_seed(target: &Path, with_config: bool) -> Result<()> {
    let repository = treemenu::TomlMenuRepository::new(target);
    repository.save(&demo_items())?;
    tracing::info!(store = %target.display(), "wrote demo menus");

    if with_config {
        let config_path = target
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(PROJECT_CONFIG_FILE);
        let store_file = target
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| target.to_path_buf());
        let config = Config {
            store: StoreConfig { path: store_file },
            routes: demo_routes()
                .iter()
                .map(|(name, address)| (name.to_string(), address.to_string()))
                .collect(),
            ..Config::default()
        };
        config.save(&config_path)?;
        println!("Wrote demo config to {}", config_path.display());
    }

    let menus = MenuService::new(repository, demo_routes()).menus()?;
    print!("{}", output::seed_text(target, &menus));
    Ok(())
}

fn cmd_check(config: &Config, store: Option<&Path>) -> Result<()> {
    let repository = factory::create_repository(config, store);
    match repository.load_checked() {
        Ok(items) => {
            print!("{}", output::check_text(repository.path(), items.len(), &[]));
            Ok(())
        }
        Err(TreeMenuError::InvalidItems { source, .. }) => {
            print!("{}", output::check_text(repository.path(), 0, &source.violations));
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
