// clarity-core/src/domain/mod.rs

pub mod error;
pub mod filter;
pub mod fixtures;
pub mod format;
pub mod navigation;
pub mod settings;
pub mod view_state;

// Handy re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use filter::{Filter, Searchable, Selector};
pub use fixtures::{Fixture, FixtureKind};
pub use navigation::Route;
pub use view_state::{ViewEvent, ViewState};
