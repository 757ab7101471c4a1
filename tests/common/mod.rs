//! Common test utilities for climplot.
//!
//! This module provides shared assertions for level and tick arrays.

pub mod assertions;
