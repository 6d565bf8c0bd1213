/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::os::fd::{AsRawFd, RawFd};

use libc::c_int;
use socket2::{Domain, Socket, Type};

use iops_types::platform::PlatformFamily;

use super::SocketSys;
use super::unix::set_int_opt;

pub struct BsdSys;

impl SocketSys for BsdSys {
    const FAMILY: PlatformFamily = PlatformFamily::Bsd;
    const RAW_HANDLE_TYPE: &'static str = "c_int";
    const DUAL_STACK_IPV4_PKTINFO: bool = false;

    type RawHandle = RawFd;

    #[inline]
    fn raw_handle(socket: &Socket) -> RawFd {
        socket.as_raw_fd()
    }

    #[cfg(target_os = "macos")]
    fn new_nonblocking(domain: Domain, ty: Type) -> io::Result<Socket> {
        // no SOCK_NONBLOCK on macos
        let socket = Socket::new(domain, ty, None)?;
        socket.set_nonblocking(true)?;
        Ok(socket)
    }

    #[cfg(not(target_os = "macos"))]
    fn new_nonblocking(domain: Domain, ty: Type) -> io::Result<Socket> {
        Socket::new(domain, ty.nonblocking(), None)
    }

    #[cfg(target_os = "freebsd")]
    fn set_addr_reuse(socket: &Socket) -> io::Result<()> {
        socket.set_reuse_address(true)?;
        socket.set_reuse_port_lb(true)
    }

    #[cfg(not(target_os = "freebsd"))]
    fn set_addr_reuse(socket: &Socket) -> io::Result<()> {
        socket.set_reuse_address(true)?;
        // not load balanced, the last bound socket takes over
        socket.set_reuse_port(true)
    }

    #[cfg(target_os = "macos")]
    fn set_recv_ip_pktinfo(socket: &Socket, enable: bool) -> io::Result<()> {
        set_int_opt(socket, libc::IPPROTO_IP, libc::IP_PKTINFO, enable as c_int)
    }

    #[cfg(any(target_os = "freebsd", target_os = "openbsd"))]
    fn set_recv_ip_pktinfo(socket: &Socket, enable: bool) -> io::Result<()> {
        set_int_opt(
            socket,
            libc::IPPROTO_IP,
            libc::IP_RECVDSTADDR,
            enable as c_int,
        )?;
        set_int_opt(socket, libc::IPPROTO_IP, libc::IP_RECVIF, enable as c_int)
    }

    #[cfg(target_os = "netbsd")]
    fn set_recv_ip_pktinfo(socket: &Socket, enable: bool) -> io::Result<()> {
        set_int_opt(
            socket,
            libc::IPPROTO_IP,
            libc::IP_RECVPKTINFO,
            enable as c_int,
        )
    }

    fn set_recv_ipv6_pktinfo(socket: &Socket, enable: bool) -> io::Result<()> {
        super::unix::set_recv_ipv6_pktinfo(socket, enable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonblocking_flag() {
        let socket = BsdSys::new_nonblocking(Domain::IPV4, Type::DGRAM).unwrap();
        let flags = unsafe { libc::fcntl(BsdSys::raw_handle(&socket), libc::F_GETFL) };
        assert_ne!(flags & libc::O_NONBLOCK, 0);
    }
}
