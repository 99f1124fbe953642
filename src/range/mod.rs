//! Date-range extraction over sorted dated series.
//!
//! ```text
//!   start / end strings
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   date   │  parse → instant, validity check
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐     ┌──────────┐
//!   │  search  │ ──▶ │ boundary │  exact index, or first/last fallback
//!   └──────────┘     └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  align   │  score index → extra point
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ extract  │  per entity slice → points / ResultRecords
//!   └──────────┘
//! ```

pub mod align;
pub mod boundary;
pub mod date;
pub mod extract;
pub mod search;

pub use extract::RangeExtractor;
