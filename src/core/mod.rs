//! # Core Application Logic
//!
//! What an input session means, independent of any terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Entry (the data)     │
//!                    │  • Form (session state) │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Store    │
//!           │  Adapter   │              │  (MySQL)   │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entry`]: `PostText`, `Entry` and the session outcome
//! - [`state`]: The `Form` struct and its stages
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Database settings resolution

pub mod action;
pub mod config;
pub mod entry;
pub mod state;
