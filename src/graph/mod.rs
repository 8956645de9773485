//! Graph construction and representation
//!
//! This module provides the directed link graph for explicit-link ranking
//! and the dense transition matrices consumed by PageRank.

pub mod builder;
pub mod matrix;

pub use builder::{LinkGraph, LinkNode};
pub use matrix::TransitionMatrix;
