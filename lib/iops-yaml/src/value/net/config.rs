/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use iops_types::net::SocketConfig;

pub fn as_socket_config(value: &Yaml) -> anyhow::Result<SocketConfig> {
    let Yaml::Hash(map) = value else {
        return Err(anyhow!("yaml value type for 'SocketConfig' should be 'map'"));
    };

    let mut config = SocketConfig::default();
    crate::foreach_kv(map, |k, v| match crate::key::normalize(k).as_str() {
        "socket_buffer" | "buffer" => {
            let buf_conf = crate::value::as_socket_buffer_config(v)
                .context(format!("invalid socket buffer config value for key {k}"))?;
            config.set_socket_buffer(buf_conf);
            Ok(())
        }
        "misc_opts" | "socket_misc_opts" => {
            let misc_opts = crate::value::as_socket_misc_opts(v)
                .context(format!("invalid socket misc opts value for key {k}"))?;
            config.set_socket_misc_opts(misc_opts);
            Ok(())
        }
        "reuse_address" | "reuse_addr" => {
            let enable =
                crate::value::as_bool(v).context(format!("invalid bool value for key {k}"))?;
            config.set_reuse_address(enable);
            Ok(())
        }
        "ipv6only" | "ipv6_only" => {
            let enable =
                crate::value::as_bool(v).context(format!("invalid bool value for key {k}"))?;
            config.set_ipv6_only(enable);
            Ok(())
        }
        "recv_pktinfo" => {
            let enable =
                crate::value::as_bool(v).context(format!("invalid bool value for key {k}"))?;
            config.set_recv_pktinfo(enable);
            Ok(())
        }
        "platform" => {
            let family = crate::value::as_platform_family(v)
                .context(format!("invalid platform family value for key {k}"))?;
            config.set_platform(family);
            Ok(())
        }
        _ => Err(anyhow!("invalid key {k}")),
    })?;

    config.check()?;
    Ok(config)
}
