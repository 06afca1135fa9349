//! Domain Layer
//!
//! The menu core: pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Stored records (MenuItem)
//! - `value_objects/` - Immutable value types (MenuItemId, LinkTarget)
//! - `services/` - Tree builder, active-path resolver, renderer, projections
//! - `policies/` - Write-side validation rules
//! - `ports/` - Interfaces for storage and routing collaborators
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Per-call state** - Trees and active paths live for one render only
//! 3. **Ports & Adapters** - Storage and routing go through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
