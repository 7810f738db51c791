//! # spinline
//!
//! Techno-economic model of a fiber-spinning production line.
//!
//! Process inputs live in a session-scoped [`store::ParameterStore`];
//! every downstream quantity (mass balance, spinning geometry, costs,
//! profitability) is a pure formula over that store, recomputed in full
//! on each access. One parameter pair (`dpf` and its g/m counterpart)
//! is dual-synchronized: editing either side silently rewrites the
//! other.
//!
//! ## Example
//!
//! ```rust
//! use spinline::prelude::*;
//!
//! let mut session = LineSession::new();
//! session.set(Param::TakeUpSpeed, 150.0)?;
//!
//! let draw_ratio = session.evaluate(Derived::DrawRatio);
//! assert!(draw_ratio > 0.0);
//!
//! let summary = session.summary();
//! assert!(summary.annual_revenue > 0.0);
//! # Ok::<(), spinline::LineError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
    clippy::suboptimal_flops      // Formula arithmetic mirrors the documented algebra
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod formulas;
pub mod session;
pub mod store;
pub mod summary;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::ScenarioConfig;
    pub use crate::error::{LineError, LineResult};
    pub use crate::formulas::Derived;
    pub use crate::session::LineSession;
    pub use crate::store::{LinkedPair, Param, ParamSpec, ParameterStore};
    pub use crate::summary::{CostCategory, CostLineItem, FinancialSummary};
}

/// Re-export for public API
pub use error::{LineError, LineResult};
