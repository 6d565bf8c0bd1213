/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::os::windows::io::AsRawSocket;

use socket2::{Domain, Socket, Type};
use windows_sys::Win32::Networking::WinSock::{
    self, IP_PKTINFO, IPPROTO_IP, IPPROTO_IPV6, IPV6_PKTINFO, SOCKET, SOCKET_ERROR,
};

use iops_types::platform::PlatformFamily;

use super::SocketSys;

unsafe fn setsockopt<T>(socket: SOCKET, level: i32, name: i32, value: T) -> io::Result<()>
where
    T: Copy,
{
    unsafe {
        let payload = &value as *const T as *const u8;
        let ret = WinSock::setsockopt(socket, level, name, payload, size_of::<T>() as i32);
        if ret == SOCKET_ERROR {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

fn set_bool_opt(socket: &Socket, level: i32, name: i32, enable: bool) -> io::Result<()> {
    unsafe { setsockopt(WindowsSys::raw_handle(socket), level, name, enable as i32) }
}

pub struct WindowsSys;

impl SocketSys for WindowsSys {
    const FAMILY: PlatformFamily = PlatformFamily::Windows;
    const RAW_HANDLE_TYPE: &'static str = "SOCKET";
    // IPV6_V6ONLY defaults to true, and v4 pktinfo is not implied by the v6 one
    const DUAL_STACK_IPV4_PKTINFO: bool = true;

    type RawHandle = SOCKET;

    #[inline]
    fn raw_handle(socket: &Socket) -> SOCKET {
        // std::os::windows::raw::SOCKET is u64, while WinSock SOCKET is usize
        socket.as_raw_socket() as SOCKET
    }

    fn new_nonblocking(domain: Domain, ty: Type) -> io::Result<Socket> {
        let socket = Socket::new(domain, ty, None)?;
        socket.set_nonblocking(true)?;
        Ok(socket)
    }

    fn set_addr_reuse(socket: &Socket) -> io::Result<()> {
        // SO_REUSEADDR on windows acts like SO_REUSEADDR + SO_REUSEPORT on unix
        socket.set_reuse_address(true)
    }

    fn set_recv_ip_pktinfo(socket: &Socket, enable: bool) -> io::Result<()> {
        set_bool_opt(socket, IPPROTO_IP, IP_PKTINFO, enable)
    }

    fn set_recv_ipv6_pktinfo(socket: &Socket, enable: bool) -> io::Result<()> {
        set_bool_opt(socket, IPPROTO_IPV6, IPV6_PKTINFO, enable)
    }
}
