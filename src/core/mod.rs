//! # Core Navigation Logic
//!
//! This module contains tripane's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (navigation)   │
//!                    │  • Action (transitions) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — path, cursor, scroll, snapshot
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: TOML config with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod state;
