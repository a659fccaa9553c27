//! Numerology Match - compatibility engine for the Numerology Love app
//!
//! This library computes life-path and destiny numbers from a birth date and a
//! name, scores the compatibility of two numbers, and filters and orders a
//! roster of candidate profiles by that score. All engine functions are pure.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    analyze, calculate_compatibility, calculate_destiny, calculate_life_path, classify, view, RosterQuery,
    RosterView,
};
pub use models::{AnalysisCategory, CompatibilityBand, CompatibilityScore, NumerologyNumber, Profile, SortMode};
