// Dweve benchplot - Benchmark throughput and speedup plotting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cache boundaries drawn as reference lines.

use crate::report::CacheInfo;

/// Cache kinds that hold data and therefore bound the working set.
pub const DATA_CACHE_KINDS: [&str; 2] = ["Data", "Unified"];

/// Sizes of the data and unified caches, in report order.
///
/// Instruction caches (and any other kind) are excluded.
pub fn cache_boundaries(caches: &[CacheInfo]) -> Vec<u64> {
    caches
        .iter()
        .filter(|cache| DATA_CACHE_KINDS.contains(&cache.kind.as_str()))
        .map(|cache| cache.size)
        .collect()
}
