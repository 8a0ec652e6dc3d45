// clarity-core/src/ports/mod.rs

pub mod fixture_source;

pub use fixture_source::{FixtureSource, load_fixture};
