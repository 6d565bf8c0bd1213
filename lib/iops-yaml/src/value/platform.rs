/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::anyhow;
use yaml_rust::Yaml;

use iops_types::platform::PlatformFamily;

pub fn as_platform_family(v: &Yaml) -> anyhow::Result<PlatformFamily> {
    if let Yaml::String(s) = v {
        PlatformFamily::from_str(s)
    } else {
        Err(anyhow!(
            "yaml value type for 'PlatformFamily' should be 'string'"
        ))
    }
}
