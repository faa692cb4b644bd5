//! Trip planner for Himachal Pradesh - collects travel-date preferences from a
//! web form and shows AI-generated travel recommendations.
//!
//! Recommendations come from Gemini when an API key is configured and fall
//! back to a fixed block otherwise, so the form always produces a result.

pub mod ai;
pub mod error;
pub mod flash;
pub mod models;
pub mod prompts;
pub mod recommendations;
pub mod web;

pub use error::{Error, Result};
