/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io;
use std::sync::OnceLock;

use log::info;
use socket2::{Domain, Socket, Type};

use iops_types::platform::{PlatformFamily, TargetPlatform};

#[cfg(not(any(
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "macos",
    target_os = "linux",
    target_os = "android",
    windows
)))]
compile_error!("unsupported platform: socket abstraction unavailable");

#[cfg(unix)]
mod unix;

#[cfg(any(
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "macos"
))]
mod bsd;
#[cfg(any(
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "macos"
))]
pub use bsd::BsdSys as Native;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::LinuxSys as Native;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WindowsSys as Native;

/// The declarations every platform backend has to provide.
///
/// Exactly one implementation is compiled in, and it is exported as [`Native`].
pub trait SocketSys {
    const FAMILY: PlatformFamily;
    /// Name of the native handle type, `c_int` or `SOCKET`.
    const RAW_HANDLE_TYPE: &'static str;
    /// Whether a dual stack IPv6 wildcard socket needs IPv4 packet info
    /// enabled in addition to the IPv6 one.
    const DUAL_STACK_IPV4_PKTINFO: bool;

    type RawHandle: Copy + fmt::Debug + Eq;

    fn raw_handle(socket: &Socket) -> Self::RawHandle;

    fn new_nonblocking(domain: Domain, ty: Type) -> io::Result<Socket>;

    /// Allow binding to an address and port that is already bound by
    /// another socket with the same options.
    fn set_addr_reuse(socket: &Socket) -> io::Result<()>;

    fn set_recv_ip_pktinfo(socket: &Socket, enable: bool) -> io::Result<()>;

    fn set_recv_ipv6_pktinfo(socket: &Socket, enable: bool) -> io::Result<()>;

    /// Defer local port allocation to connect time if the platform can.
    fn prepare_bind_no_port(_socket: &Socket) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct PlatformInfo {
    family: PlatformFamily,
    target: TargetPlatform,
    raw_handle_type: &'static str,
}

impl PlatformInfo {
    #[inline]
    pub fn family(&self) -> PlatformFamily {
        self.family
    }

    #[inline]
    pub fn target(&self) -> &TargetPlatform {
        &self.target
    }

    #[inline]
    pub fn raw_handle_type(&self) -> &'static str {
        self.raw_handle_type
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sockets on {} (raw handle {})",
            self.family, self.target, self.raw_handle_type
        )
    }
}

static PLATFORM_INFO: OnceLock<PlatformInfo> = OnceLock::new();

/// The platform selection made for this build.
pub fn platform_info() -> &'static PlatformInfo {
    PLATFORM_INFO.get_or_init(|| {
        let info = PlatformInfo {
            family: Native::FAMILY,
            target: TargetPlatform::host(),
            raw_handle_type: Native::RAW_HANDLE_TYPE,
        };
        info!("selected {info}");
        info
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_family_compiled() {
        #[cfg(any(target_os = "linux", target_os = "android"))]
        assert_eq!(Native::FAMILY, PlatformFamily::Linux);
        #[cfg(windows)]
        assert_eq!(Native::FAMILY, PlatformFamily::Windows);
        #[cfg(any(
            target_os = "freebsd",
            target_os = "netbsd",
            target_os = "openbsd",
            target_os = "macos"
        ))]
        assert_eq!(Native::FAMILY, PlatformFamily::Bsd);

        assert_eq!(TargetPlatform::host().family().unwrap(), Native::FAMILY);
    }

    #[test]
    fn info_initialized_once() {
        let a = platform_info();
        let b = platform_info();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.family(), Native::FAMILY);
        assert_eq!(a.raw_handle_type(), Native::RAW_HANDLE_TYPE);

        let addr = a as *const PlatformInfo as usize;
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| platform_info() as *const PlatformInfo as usize))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), addr);
        }
    }

    #[test]
    fn nonblocking_socket() {
        let socket = Native::new_nonblocking(Domain::IPV4, Type::DGRAM).unwrap();
        assert_eq!(socket.r#type().unwrap(), Type::DGRAM);
        let addr: std::net::SocketAddr = "127.0.0.1:0".parse().unwrap();
        socket.bind(&addr.into()).unwrap();
        let buf = &mut [std::mem::MaybeUninit::<u8>::uninit(); 16];
        let e = socket.recv(buf).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::WouldBlock);
    }

    #[test]
    fn addr_reuse() {
        let socket = Native::new_nonblocking(Domain::IPV4, Type::STREAM).unwrap();
        Native::set_addr_reuse(&socket).unwrap();
        assert!(socket.reuse_address().unwrap());
        #[cfg(any(
            target_os = "linux",
            target_os = "android",
            target_os = "netbsd",
            target_os = "openbsd",
            target_os = "macos"
        ))]
        assert!(socket.reuse_port().unwrap());
    }

    #[test]
    fn pktinfo() {
        let socket = Native::new_nonblocking(Domain::IPV4, Type::DGRAM).unwrap();
        Native::set_recv_ip_pktinfo(&socket, true).unwrap();
        Native::set_recv_ip_pktinfo(&socket, false).unwrap();

        let socket = Native::new_nonblocking(Domain::IPV6, Type::DGRAM).unwrap();
        Native::set_recv_ipv6_pktinfo(&socket, true).unwrap();
    }

    #[test]
    fn bind_no_port() {
        let socket = Native::new_nonblocking(Domain::IPV4, Type::STREAM).unwrap();
        Native::prepare_bind_no_port(&socket).unwrap();
    }
}
