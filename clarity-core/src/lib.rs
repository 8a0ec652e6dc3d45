// clarity-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// The fixture source contract, whatever backs it (embedded, directory, delayed).
pub mod ports;

// 2. Domain
// Fixture records, formatters, filter combinators, view state, routes.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Embedded / directory fixtures, simulated latency, config files, atomic writes.
pub mod infrastructure;

// 4. Application (Use Cases)
// One use case per dashboard page.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use clarity_core::ClarityError;
pub use error::ClarityError;
