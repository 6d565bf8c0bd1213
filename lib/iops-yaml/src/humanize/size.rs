/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::anyhow;
use humanize_rs::bytes::Bytes;
use yaml_rust::Yaml;

/// Parse a size like `4096`, `"64K"` or `"2MiB"`.
pub fn as_usize(v: &Yaml) -> anyhow::Result<usize> {
    match v {
        Yaml::String(value) => {
            let v = value.parse::<Bytes>()?;
            Ok(v.size())
        }
        Yaml::Integer(value) => Ok(usize::try_from(*value)?),
        _ => Err(anyhow!(
            "yaml value type for humanize usize should be 'string' or 'integer'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        let v = Yaml::String("64K".to_string());
        assert_eq!(as_usize(&v).unwrap(), 64_000);

        let v = Yaml::String("2MiB".to_string());
        assert_eq!(as_usize(&v).unwrap(), 2 * 1024 * 1024);

        let v = Yaml::Integer(4096);
        assert_eq!(as_usize(&v).unwrap(), 4096);

        let v = Yaml::Integer(-1);
        assert!(as_usize(&v).is_err());

        let v = Yaml::Boolean(true);
        assert!(as_usize(&v).is_err());
    }
}
