/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod net;
mod platform;
mod primary;

pub use net::*;
pub use platform::as_platform_family;
pub use primary::{as_bool, as_u8, as_u32};
