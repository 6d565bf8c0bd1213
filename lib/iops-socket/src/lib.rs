/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub mod sys;
pub use sys::{Native, PlatformInfo, SocketSys, platform_info};

mod raw;
pub use raw::RawSocket;

pub mod util;
pub use util::AddressFamily;

pub use iops_types::platform::{PlatformFamily, TargetPlatform, UnsupportedPlatform};
