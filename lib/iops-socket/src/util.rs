/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io;
use std::net::{IpAddr, SocketAddr};

use socket2::Domain;

/// Address family of a socket, which decides the level of IP options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AddressFamily> for Domain {
    fn from(v: AddressFamily) -> Self {
        match v {
            AddressFamily::Ipv4 => Domain::IPV4,
            AddressFamily::Ipv6 => Domain::IPV6,
        }
    }
}

impl TryFrom<Domain> for AddressFamily {
    type Error = io::Error;

    fn try_from(domain: Domain) -> Result<Self, Self::Error> {
        if domain == Domain::IPV4 {
            Ok(AddressFamily::Ipv4)
        } else if domain == Domain::IPV6 {
            Ok(AddressFamily::Ipv6)
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported socket domain {domain:?}"),
            ))
        }
    }
}

impl From<&IpAddr> for AddressFamily {
    fn from(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}

impl From<&SocketAddr> for AddressFamily {
    fn from(addr: &SocketAddr) -> Self {
        AddressFamily::from(&addr.ip())
    }
}
