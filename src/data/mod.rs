//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  .json / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  Vec<Entity>, each with named dated series
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  keep entities tagged with a slug
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
