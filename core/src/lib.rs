//! labbench-core — laboratory benchmark aggregation engine.
//!
//! Compares a facility's lab-test ordering against reference benchmarks
//! and decomposes the gap into four levers. The library:
//!   1. Reduces a filtered observation batch to one summary with four
//!      sub-benchmark blocks (aggregate)
//!   2. Ranks top-N rollups by parameter, department and DRG (rank)
//!   3. Loads batches, lists distinct dimension values, and warns on
//!      inconsistent potential components (dataset)
//!   4. Ships an embedded demo batch and a deterministic generator
//!      (fixture)
//!
//! Every operation is a pure function of (rows, criteria): no internal
//! state, no mutation of inputs, freshly allocated outputs.

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod lever;
pub mod rank;
pub mod rng;
pub mod row;
pub mod types;
