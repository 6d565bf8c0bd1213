/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::{IpAddr, SocketAddr};

use log::debug;
use socket2::{Socket, Type};

use iops_types::net::{SocketBufferConfig, SocketConfig, SocketMiscOpts};

use crate::sys::{Native, SocketSys};
use crate::util::AddressFamily;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

/// A borrowed socket handle, which never closes the underlying socket.
#[derive(Debug)]
pub struct RawSocket {
    inner: Option<Socket>,
}

impl RawSocket {
    fn get_inner(&self) -> io::Result<&Socket> {
        self.inner
            .as_ref()
            .ok_or_else(|| io::Error::other("no socket set"))
    }

    pub fn raw_handle(&self) -> io::Result<<Native as SocketSys>::RawHandle> {
        let socket = self.get_inner()?;
        Ok(Native::raw_handle(socket))
    }

    pub fn set_buf_opts(&self, buf_conf: SocketBufferConfig) -> io::Result<()> {
        let socket = self.get_inner()?;
        if let Some(size) = buf_conf.recv_size() {
            socket.set_recv_buffer_size(size)?;
        }
        if let Some(size) = buf_conf.send_size() {
            socket.set_send_buffer_size(size)?;
        }
        Ok(())
    }

    pub fn set_tcp_misc_opts(
        &self,
        family: AddressFamily,
        misc_opts: &SocketMiscOpts,
        default_set_nodelay: bool,
    ) -> io::Result<()> {
        let socket = self.get_inner()?;
        if let Some(no_delay) = misc_opts.no_delay {
            socket.set_nodelay(no_delay)?;
        } else if default_set_nodelay {
            socket.set_nodelay(true)?;
        }
        set_ip_misc_opts(socket, family, misc_opts)
    }

    pub fn set_udp_misc_opts(
        &self,
        family: AddressFamily,
        misc_opts: &SocketMiscOpts,
    ) -> io::Result<()> {
        let socket = self.get_inner()?;
        set_ip_misc_opts(socket, family, misc_opts)
    }

    /// Apply a socket config before the socket is bound to `local_addr`.
    ///
    /// The address family of `local_addr` selects which IP level options
    /// are set.
    pub fn set_config_opts(&self, config: &SocketConfig, local_addr: SocketAddr) -> io::Result<()> {
        let socket = self.get_inner()?;
        let family = AddressFamily::from(&local_addr);
        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            let socket_family = AddressFamily::try_from(socket.domain()?)?;
            if socket_family != family {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "{family} address {local_addr} can not be used with {socket_family} socket"
                    ),
                ));
            }
        }
        let is_stream = socket.r#type()? == Type::STREAM;
        debug!(
            "applying {} socket options for {family} local address {local_addr}",
            Native::FAMILY
        );

        if let Some(ipv6only) = config.is_ipv6only() {
            set_only_v6(socket, local_addr, ipv6only)?;
        }
        if config.reuse_address() && local_addr.port() != 0 {
            Native::set_addr_reuse(socket)?;
        }
        if config.recv_pktinfo() {
            set_recv_pktinfo(socket, local_addr, config.is_ipv6only())?;
        }

        self.set_buf_opts(config.socket_buffer())?;
        let misc_opts = config.socket_misc_opts();
        if is_stream {
            self.set_tcp_misc_opts(family, &misc_opts, false)
        } else {
            self.set_udp_misc_opts(family, &misc_opts)
        }
    }

    pub fn prepare_bind_no_port(&self) -> io::Result<()> {
        let socket = self.get_inner()?;
        Native::prepare_bind_no_port(socket)
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub fn trigger_tcp_quick_ack(&self) -> io::Result<()> {
        let socket = self.get_inner()?;
        socket.set_quickack(true)
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub fn tcp_incoming_cpu(&self) -> io::Result<usize> {
        let socket = self.get_inner()?;
        Native::incoming_cpu(socket)
    }
}

fn set_ip_misc_opts(
    socket: &Socket,
    family: AddressFamily,
    misc_opts: &SocketMiscOpts,
) -> io::Result<()> {
    match family {
        AddressFamily::Ipv4 => {
            if let Some(ttl) = misc_opts.time_to_live {
                socket.set_ttl(ttl)?;
            }
            if let Some(tos) = misc_opts.type_of_service {
                socket.set_tos(tos as u32)?;
            }
        }
        AddressFamily::Ipv6 => {
            if let Some(hops) = misc_opts.hop_limit {
                socket.set_unicast_hops_v6(hops)?;
            }
            #[cfg(not(windows))]
            if let Some(class) = misc_opts.traffic_class {
                socket.set_tclass_v6(class as u32)?;
            }
        }
    }
    #[cfg(any(target_os = "linux", target_os = "android"))]
    if let Some(mark) = misc_opts.netfilter_mark {
        socket.set_mark(mark)?;
    }
    Ok(())
}

fn set_only_v6(socket: &Socket, addr: SocketAddr, enable: bool) -> io::Result<()> {
    match addr.ip() {
        IpAddr::V6(v6) if v6.is_unspecified() => {
            #[cfg(target_os = "openbsd")]
            let _ = socket;
            #[cfg(target_os = "openbsd")]
            if !enable {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "dual stack socket is not supported",
                ));
            }
            #[cfg(not(target_os = "openbsd"))]
            socket.set_only_v6(enable)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

fn set_recv_pktinfo(socket: &Socket, addr: SocketAddr, ipv6only: Option<bool>) -> io::Result<()> {
    match addr.ip() {
        IpAddr::V4(v4) => {
            if !v4.is_unspecified() {
                return Ok(());
            }
            Native::set_recv_ip_pktinfo(socket, true)
        }
        IpAddr::V6(v6) => {
            if !v6.is_unspecified() {
                return Ok(());
            }
            if Native::DUAL_STACK_IPV4_PKTINFO && ipv6only == Some(false) {
                Native::set_recv_ip_pktinfo(socket, true)?;
            }
            Native::set_recv_ipv6_pktinfo(socket, true)
        }
    }
}
