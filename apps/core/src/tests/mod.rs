//! Test Module
//!
//! Cross-component test suite for the PairForge core.
//!
//! ## Test Categories
//! - `extract_tests`: normalization, classification and strategy behavior
//!   through the full extraction pipeline
//! - `analytics_tests`: report assembly, score bounds, metric properties
//! - `exchange_tests`: import/export round trips and dataset workflows

pub mod analytics_tests;
