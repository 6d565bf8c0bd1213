/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// Per socket IP level options.
///
/// `time_to_live` and `type_of_service` apply to IPv4 sockets, `hop_limit`
/// and `traffic_class` to IPv6 sockets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SocketMiscOpts {
    pub no_delay: Option<bool>,
    pub time_to_live: Option<u32>,
    pub hop_limit: Option<u32>,
    pub type_of_service: Option<u8>,
    #[cfg(not(windows))]
    pub traffic_class: Option<u8>,
    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub netfilter_mark: Option<u32>,
}
