// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Demonstration driver.
//!
//! Wires one [`EventEmitter`](crate::event::EventEmitter) to one printing
//! listener per event name and emits a short, paced sequence of events.
//!
//! # Examples
//!
//! ```no_run
//! use event_emitter::demo::{DemoConfig, run_demo};
//!
//! #[tokio::main]
//! async fn main() -> event_emitter::Result<()> {
//!     let report = run_demo(&DemoConfig::default()).await?;
//!     println!("{} events processed", report.total_processed());
//!     Ok(())
//! }
//! ```

mod demo_config;
mod driver;

pub use demo_config::DemoConfig;
pub use driver::{DemoReport, run_demo};
