/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::net::SocketAddr;
use std::str::FromStr;

use socket2::{Domain, SockAddr, Type};
use yaml_rust::YamlLoader;

use iops_socket::{Native, RawSocket, SocketSys, platform_info};

fn load(s: &str) -> yaml_rust::Yaml {
    YamlLoader::load_from_str(s).unwrap().pop().unwrap()
}

#[test]
fn apply_to_udp_listener() {
    let doc = load(&format!(
        "platform: {}\nreuse_address: true\nrecv_pktinfo: true\nsocket_buffer: 128K\nmisc_opts:\n  ttl: 8\n",
        platform_info().family()
    ));
    let config = iops_yaml::value::as_socket_config(&doc).unwrap();

    let socket = Native::new_nonblocking(Domain::IPV4, Type::DGRAM).unwrap();
    let addr = SocketAddr::from_str("127.0.0.1:0").unwrap();
    RawSocket::from(&socket)
        .set_config_opts(&config, addr)
        .unwrap();
    socket.bind(&SockAddr::from(addr)).unwrap();

    assert_eq!(socket.ttl().unwrap(), 8);
    assert!(socket.recv_buffer_size().unwrap() >= 64_000);
}

#[test]
fn apply_to_tcp_socket() {
    let doc = load("misc_opts:\n  no_delay: on\n  tos: 0x10\n");
    let config = iops_yaml::value::as_socket_config(&doc).unwrap();

    let socket = Native::new_nonblocking(Domain::IPV4, Type::STREAM).unwrap();
    let addr = SocketAddr::from_str("127.0.0.1:0").unwrap();
    RawSocket::from(&socket)
        .set_config_opts(&config, addr)
        .unwrap();
    assert!(socket.nodelay().unwrap());
    #[cfg(unix)]
    assert_eq!(socket.tos().unwrap(), 0x10);
}

#[test]
fn ipv6_options_on_ipv4_socket() {
    let doc = load("misc_opts:\n  ttl: 64\n  hop_limit: 64\n");
    let config = iops_yaml::value::as_socket_config(&doc).unwrap();

    let socket = Native::new_nonblocking(Domain::IPV4, Type::DGRAM).unwrap();
    let addr = SocketAddr::from_str("127.0.0.1:0").unwrap();
    RawSocket::from(&socket)
        .set_config_opts(&config, addr)
        .unwrap();
    socket.bind(&SockAddr::from(addr)).unwrap();
    assert_eq!(socket.ttl().unwrap(), 64);
}

#[cfg(not(windows))]
#[test]
fn traffic_class_by_family() {
    let doc = load("misc_opts:\n  traffic_class: 16\n");
    let config = iops_yaml::value::as_socket_config(&doc).unwrap();

    let socket = Native::new_nonblocking(Domain::IPV4, Type::STREAM).unwrap();
    let addr = SocketAddr::from_str("127.0.0.1:0").unwrap();
    RawSocket::from(&socket)
        .set_config_opts(&config, addr)
        .unwrap();

    let socket = Native::new_nonblocking(Domain::IPV6, Type::STREAM).unwrap();
    let addr = SocketAddr::from_str("[::1]:0").unwrap();
    RawSocket::from(&socket)
        .set_config_opts(&config, addr)
        .unwrap();
    assert_eq!(socket.tclass_v6().unwrap(), 16);
}

#[test]
fn apply_to_ipv6_socket() {
    let doc = load("misc_opts:\n  hop_limit: 48\n  tos: 0x10\n");
    let config = iops_yaml::value::as_socket_config(&doc).unwrap();

    let socket = Native::new_nonblocking(Domain::IPV6, Type::DGRAM).unwrap();
    let addr = SocketAddr::from_str("[::1]:0").unwrap();
    RawSocket::from(&socket)
        .set_config_opts(&config, addr)
        .unwrap();
    socket.bind(&SockAddr::from(addr)).unwrap();
    assert_eq!(socket.unicast_hops_v6().unwrap(), 48);
}

#[test]
fn selection_is_stable() {
    let info = platform_info();
    assert_eq!(info.family(), Native::FAMILY);
    assert_eq!(info.target().family().unwrap(), Native::FAMILY);
    assert!(std::ptr::eq(info, platform_info()));
    assert!(info.to_string().starts_with(Native::FAMILY.as_str()));
}
