//! GUI-facing use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the application API surface.
//! - Keep the GUI shell decoupled from storage details.

pub mod app_service;
