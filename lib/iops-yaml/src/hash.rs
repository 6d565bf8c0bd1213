/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

pub fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        let Yaml::String(key) = k else {
            return Err(anyhow!("key in hash should be string"));
        };
        f(key, v).context(format!("failed to parse value of key {key}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreach_kv_order() {
        let doc = yaml_doc!("recv: 1\nsend: 2");
        let map = doc.as_hash().unwrap();
        let mut keys = Vec::new();
        foreach_kv(map, |k, _| {
            keys.push(k.to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(keys, ["recv", "send"]);
    }

    #[test]
    fn foreach_kv_non_string_key() {
        let doc = yaml_doc!("1: a");
        let map = doc.as_hash().unwrap();
        assert!(foreach_kv(map, |_, _| Ok(())).is_err());
    }

    #[test]
    fn foreach_kv_error_context() {
        let doc = yaml_doc!("ttl: x");
        let map = doc.as_hash().unwrap();
        let e = foreach_kv(map, |_, _| Err(anyhow!("bad"))).unwrap_err();
        assert_eq!(e.to_string(), "failed to parse value of key ttl");
    }
}
