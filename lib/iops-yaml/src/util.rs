/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::Path;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, YamlLoader};

use iops_types::net::SocketConfig;

/// Load the first document of a yaml file.
pub fn load_doc(path: &Path) -> anyhow::Result<Yaml> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read {}: {e}", path.display()))?;
    let mut docs = YamlLoader::load_from_str(&content)
        .map_err(|e| anyhow!("invalid yaml file {}: {e}", path.display()))?;
    if docs.is_empty() {
        return Err(anyhow!("no yaml document found in {}", path.display()));
    }
    Ok(docs.swap_remove(0))
}

pub fn load_socket_config(path: &Path) -> anyhow::Result<SocketConfig> {
    let doc = load_doc(path)?;
    crate::value::as_socket_config(&doc)
        .context(format!("invalid socket config in file {}", path.display()))
}
