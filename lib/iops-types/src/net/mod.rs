/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod buf;
mod config;
mod sockopt;

pub use buf::SocketBufferConfig;
pub use config::SocketConfig;
pub use sockopt::SocketMiscOpts;
