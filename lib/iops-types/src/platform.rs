/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use thiserror::Error;

/// Operating system families sharing one low level socket API surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PlatformFamily {
    Bsd,
    Linux,
    Windows,
}

impl PlatformFamily {
    /// Map a `target_os` value to its family.
    ///
    /// DragonFly, illumos, Solaris and other targets are not part of any family.
    pub fn from_target_os(os: &str) -> Option<Self> {
        match os {
            "freebsd" | "netbsd" | "openbsd" | "macos" => Some(PlatformFamily::Bsd),
            "linux" | "android" => Some(PlatformFamily::Linux),
            "windows" => Some(PlatformFamily::Windows),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            PlatformFamily::Bsd => "bsd",
            PlatformFamily::Linux => "linux",
            PlatformFamily::Windows => "windows",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformFamily {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bsd" => Ok(PlatformFamily::Bsd),
            "linux" => Ok(PlatformFamily::Linux),
            "windows" => Ok(PlatformFamily::Windows),
            _ => Err(anyhow!("unknown platform family {s}")),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unsupported platform {os}: socket abstraction unavailable")]
pub struct UnsupportedPlatform {
    os: String,
}

impl UnsupportedPlatform {
    #[inline]
    pub fn os(&self) -> &str {
        &self.os
    }
}

/// A build target, as identified by the compiler predefined values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetPlatform {
    os: String,
    pointer_width: u8,
}

impl TargetPlatform {
    pub fn new(os: &str, pointer_width: u8) -> Self {
        TargetPlatform {
            os: os.to_string(),
            pointer_width,
        }
    }

    /// The target this crate is compiled for.
    pub fn host() -> Self {
        let pointer_width = if cfg!(target_pointer_width = "64") {
            64
        } else if cfg!(target_pointer_width = "32") {
            32
        } else {
            16
        };
        TargetPlatform::new(std::env::consts::OS, pointer_width)
    }

    #[inline]
    pub fn os(&self) -> &str {
        &self.os
    }

    #[inline]
    pub fn pointer_width(&self) -> u8 {
        self.pointer_width
    }

    pub fn family(&self) -> Result<PlatformFamily, UnsupportedPlatform> {
        PlatformFamily::from_target_os(&self.os).ok_or_else(|| UnsupportedPlatform {
            os: self.os.clone(),
        })
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}bit", self.os, self.pointer_width)
    }
}
