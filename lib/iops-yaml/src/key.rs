/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// Keys are matched case-insensitively, with '-' and '_' treated the same.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}
