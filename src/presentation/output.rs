//! Output Rendering
//!
//! Formats command results for stdout. JSON output is pretty-printed with a
//! trailing newline; text output is line oriented.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::application::MenuSummary;
use crate::domain::policies::Violation;

/// Serialize `value` as pretty JSON followed by a newline
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// One line per menu: name padded to the longest name, then the count
pub fn menus_text(menus: &[MenuSummary]) -> String {
    if menus.is_empty() {
        return "no menus stored\n".to_string();
    }

    let width = menus.iter().map(|m| m.menu_name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for menu in menus {
        let _ = writeln!(
            out,
            "{:<width$}  {} {}",
            menu.menu_name,
            menu.item_count,
            plural(menu.item_count, "item", "items"),
        );
    }
    out
}

/// Summary printed after `seed`
pub fn seed_text(store: &Path, menus: &[MenuSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Wrote demo menus to {}", store.display());
    for menu in menus {
        let _ = writeln!(
            out,
            "  {}: {} {}",
            menu.menu_name,
            menu.item_count,
            plural(menu.item_count, "item", "items"),
        );
    }
    out
}

/// Result of `check`
pub fn check_text(store: &Path, item_count: usize, violations: &[Violation]) -> String {
    let mut out = String::new();
    if violations.is_empty() {
        let _ = writeln!(
            out,
            "✓ {} is valid ({} {})",
            store.display(),
            item_count,
            plural(item_count, "item", "items"),
        );
        return out;
    }

    let _ = writeln!(
        out,
        "✗ {} has {} {}",
        store.display(),
        violations.len(),
        plural(violations.len(), "problem", "problems"),
    );
    for violation in violations {
        let _ = writeln!(out, "  - {violation}");
    }
    out
}

fn plural<'s>(count: usize, one: &'s str, many: &'s str) -> &'s str {
    if count == 1 {
        one
    } else {
        many
    }
}
