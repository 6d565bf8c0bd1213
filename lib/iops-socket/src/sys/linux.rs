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
use super::unix::{get_int_opt, set_int_opt};

pub struct LinuxSys;

impl SocketSys for LinuxSys {
    const FAMILY: PlatformFamily = PlatformFamily::Linux;
    const RAW_HANDLE_TYPE: &'static str = "c_int";
    const DUAL_STACK_IPV4_PKTINFO: bool = false;

    type RawHandle = RawFd;

    #[inline]
    fn raw_handle(socket: &Socket) -> RawFd {
        socket.as_raw_fd()
    }

    fn new_nonblocking(domain: Domain, ty: Type) -> io::Result<Socket> {
        Socket::new(domain, ty.nonblocking(), None)
    }

    fn set_addr_reuse(socket: &Socket) -> io::Result<()> {
        socket.set_reuse_address(true)?;
        // load balanced between all sockets bound to the same port
        socket.set_reuse_port(true)
    }

    fn set_recv_ip_pktinfo(socket: &Socket, enable: bool) -> io::Result<()> {
        set_int_opt(socket, libc::IPPROTO_IP, libc::IP_PKTINFO, enable as c_int)
    }

    fn set_recv_ipv6_pktinfo(socket: &Socket, enable: bool) -> io::Result<()> {
        super::unix::set_recv_ipv6_pktinfo(socket, enable)
    }

    fn prepare_bind_no_port(socket: &Socket) -> io::Result<()> {
        set_int_opt(
            socket,
            libc::IPPROTO_IP,
            libc::IP_BIND_ADDRESS_NO_PORT,
            1 as c_int,
        )
    }
}

impl LinuxSys {
    pub fn incoming_cpu<T: AsRawFd>(fd: &T) -> io::Result<usize> {
        let cpu_id = get_int_opt(fd, libc::SOL_SOCKET, libc::SO_INCOMING_CPU)?;
        usize::try_from(cpu_id).map_err(|e| io::Error::other(format!("invalid cpu id: {e}")))
    }

    pub fn set_incoming_cpu<T: AsRawFd>(fd: &T, cpu_id: usize) -> io::Result<()> {
        let cpu_id = c_int::try_from(cpu_id)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "out of range cpu id"))?;
        set_int_opt(fd, libc::SOL_SOCKET, libc::SO_INCOMING_CPU, cpu_id)
    }
}
