//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `edge_cases.rs` - Special positions and edge cases
//! - `search.rs` - Move choice, mates and cancellation
//! - `proptest.rs` - Property-based tests over random playouts
