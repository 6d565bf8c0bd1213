/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::PathBuf;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("iops-yaml-{}-{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_socket_config() {
    let path = write_temp(
        "socket.yaml",
        "socket_buffer:\n  recv: 1MiB\nmisc_opts:\n  no_delay: true\nreuse_addr: on\n",
    );
    let config = iops_yaml::load_socket_config(&path).unwrap();
    assert_eq!(config.socket_buffer().recv_size(), Some(1024 * 1024));
    assert_eq!(config.socket_buffer().send_size(), None);
    assert_eq!(config.socket_misc_opts().no_delay, Some(true));
    assert!(config.reuse_address());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn first_document_only() {
    let path = write_temp("multi.yaml", "recv_pktinfo: true\n---\nunknown: 1\n");
    let config = iops_yaml::load_socket_config(&path).unwrap();
    assert!(config.recv_pktinfo());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn load_errors() {
    let missing = std::env::temp_dir().join("iops-yaml-not-exist.yaml");
    assert!(iops_yaml::load_doc(&missing).is_err());

    let path = write_temp("empty.yaml", "");
    let e = iops_yaml::load_doc(&path).unwrap_err();
    assert!(e.to_string().starts_with("no yaml document found"));
    std::fs::remove_file(path).unwrap();

    let path = write_temp("bad-key.yaml", "backlog: 128\n");
    let e = iops_yaml::load_socket_config(&path).unwrap_err();
    assert!(e.to_string().starts_with("invalid socket config in file"));
    std::fs::remove_file(path).unwrap();
}
