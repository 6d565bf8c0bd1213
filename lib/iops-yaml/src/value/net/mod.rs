/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod buf;
mod config;
mod sockopt;

pub use buf::as_socket_buffer_config;
pub use config::as_socket_config;
pub use sockopt::as_socket_misc_opts;
