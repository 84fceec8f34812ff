// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event emitter demo.
//!
//! Registers `Listener 1` under `event_type_1` and `Listener 2` under
//! `event_type_2`, emits one event of each name every second for five
//! seconds, then gives the listeners five more seconds before exiting.
//! Received events are printed to stdout, diagnostics go to stderr.

use std::process::ExitCode;

use event_emitter::demo::{DemoConfig, run_demo};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match run_demo(&DemoConfig::default()).await {
        Ok(report) => {
            tracing::info!(
                processed = report.total_processed(),
                undelivered = report.undelivered,
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Demo failed");
            ExitCode::FAILURE
        }
    }
}
