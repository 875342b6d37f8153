/// Data layer: source types, sample data, and view derivation.
///
/// Architecture:
/// ```text
///   built-in samples + Rng
///        │
///        ▼
///   ┌──────────┐
///   │   mock    │  monthly series, keyword bubbles → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  period   │  Period → IndexRange over the monthly series
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  threshold / frequency / categories → DerivedViews
///   └──────────┘
/// ```

pub mod filter;
pub mod mock;
pub mod model;
pub mod period;
