//! Občine viewer — a browsable catalogue of Slovenian municipalities.
//!
//! This crate provides a Dioxus desktop application for browsing
//! municipality records:
//! - Free-text search over names, debounced while typing
//! - Multi-select filtering by province
//! - One card per municipality with an optional emblem image

pub mod app;
pub mod components;
pub mod theme;
