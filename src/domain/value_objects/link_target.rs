//! Link Target Value Object
//!
//! The effective address of a menu item after named-route resolution.
//! A target is either a literal address or the "no destination" sentinel,
//! which renders as `#` and never matches the current page.

use std::fmt;

/// Address rendered for an item whose destination cannot be determined
pub const NO_DESTINATION_HREF: &str = "#";

/// Effective address of a menu item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// A literal address such as `/about/`
    Address(String),
    /// No usable destination (unset, or a named route that failed to resolve)
    NoDestination,
}

impl LinkTarget {
    /// Build a target from a literal address, treating blank and `#` as no destination
    pub fn from_address(address: impl Into<String>) -> Self {
        let address = address.into();
        if address.trim().is_empty() || address == NO_DESTINATION_HREF {
            Self::NoDestination
        } else {
            Self::Address(address)
        }
    }

    /// The string emitted in the `href` attribute
    pub fn href(&self) -> &str {
        match self {
            Self::Address(address) => address,
            Self::NoDestination => NO_DESTINATION_HREF,
        }
    }

    /// Whether this target identifies the page at `current_address`
    pub fn matches(&self, current_address: &str) -> bool {
        match self {
            Self::Address(address) => address == current_address,
            Self::NoDestination => false,
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}
