/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use iops_types::net::SocketMiscOpts;

pub fn as_socket_misc_opts(v: &Yaml) -> anyhow::Result<SocketMiscOpts> {
    let Yaml::Hash(map) = v else {
        return Err(anyhow!(
            "yaml value type for 'SocketMiscOpts' should be 'map'"
        ));
    };

    let mut config = SocketMiscOpts::default();
    crate::foreach_kv(map, |k, v| match crate::key::normalize(k).as_str() {
        "no_delay" | "nodelay" => {
            let enable =
                crate::value::as_bool(v).context(format!("invalid bool value for key {k}"))?;
            config.no_delay = Some(enable);
            Ok(())
        }
        "time_to_live" | "ttl" => {
            let ttl = crate::value::as_u32(v).context(format!("invalid u32 value for key {k}"))?;
            config.time_to_live = Some(ttl);
            Ok(())
        }
        "hop_limit" => {
            let hops = crate::value::as_u32(v).context(format!("invalid u32 value for key {k}"))?;
            config.hop_limit = Some(hops);
            Ok(())
        }
        "type_of_service" | "tos" => {
            let tos = crate::value::as_u8(v).context(format!("invalid u8 value for key {k}"))?;
            config.type_of_service = Some(tos);
            Ok(())
        }
        #[cfg(not(windows))]
        "traffic_class" => {
            let class = crate::value::as_u8(v).context(format!("invalid u8 value for key {k}"))?;
            config.traffic_class = Some(class);
            Ok(())
        }
        #[cfg(any(target_os = "linux", target_os = "android"))]
        "netfilter_mark" | "mark" => {
            let mark = crate::value::as_u32(v).context(format!("invalid u32 value for key {k}"))?;
            config.netfilter_mark = Some(mark);
            Ok(())
        }
        _ => Err(anyhow!("invalid key {k}")),
    })?;

    Ok(config)
}
