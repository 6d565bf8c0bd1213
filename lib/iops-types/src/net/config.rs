/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::anyhow;

use super::{SocketBufferConfig, SocketMiscOpts};
use crate::platform::{PlatformFamily, TargetPlatform};

/// Options to apply to a socket created through the platform layer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SocketConfig {
    buf_conf: SocketBufferConfig,
    misc_opts: SocketMiscOpts,
    reuse_address: bool,
    ipv6only: Option<bool>,
    recv_pktinfo: bool,
    platform: Option<PlatformFamily>,
}

impl SocketConfig {
    /// Validate against the target this crate is compiled for.
    pub fn check(&self) -> anyhow::Result<()> {
        if let Some(expected) = self.platform {
            let host = TargetPlatform::host();
            let family = host.family()?;
            if family != expected {
                return Err(anyhow!(
                    "config is written for platform {expected}, but running on {family} ({host})"
                ));
            }
        }

        #[cfg(target_os = "openbsd")]
        if self.ipv6only == Some(false) {
            return Err(anyhow!("dual stack sockets are not supported on openbsd"));
        }

        Ok(())
    }

    #[inline]
    pub fn socket_buffer(&self) -> SocketBufferConfig {
        self.buf_conf
    }

    #[inline]
    pub fn set_socket_buffer(&mut self, buf_conf: SocketBufferConfig) {
        self.buf_conf = buf_conf;
    }

    #[inline]
    pub fn socket_misc_opts(&self) -> SocketMiscOpts {
        self.misc_opts
    }

    #[inline]
    pub fn set_socket_misc_opts(&mut self, misc_opts: SocketMiscOpts) {
        self.misc_opts = misc_opts;
    }

    #[inline]
    pub fn reuse_address(&self) -> bool {
        self.reuse_address
    }

    #[inline]
    pub fn set_reuse_address(&mut self, enable: bool) {
        self.reuse_address = enable;
    }

    #[inline]
    pub fn is_ipv6only(&self) -> Option<bool> {
        self.ipv6only
    }

    #[inline]
    pub fn set_ipv6_only(&mut self, ipv6only: bool) {
        self.ipv6only = Some(ipv6only);
    }

    #[inline]
    pub fn recv_pktinfo(&self) -> bool {
        self.recv_pktinfo
    }

    #[inline]
    pub fn set_recv_pktinfo(&mut self, enable: bool) {
        self.recv_pktinfo = enable;
    }

    #[inline]
    pub fn platform(&self) -> Option<PlatformFamily> {
        self.platform
    }

    #[inline]
    pub fn set_platform(&mut self, family: PlatformFamily) {
        self.platform = Some(family);
    }
}
