//! Snapscrub - Scrub generated styling class names from snapshot text
//!
//! This library provides functionality to:
//! - Collect class-name tokens from a rendered component tree
//! - Classify tokens against the current run's generated-identifier registry
//! - Match registered CSS rules (including @media / @supports groups) against those tokens
//! - Strip matched, unreferenced, and transitively referenced identifiers from printed snapshot text

pub mod classnames;
pub mod printer;
pub mod registry;
pub mod rewrite;
pub mod serializer;
pub mod stylesheet;
pub mod tree;
