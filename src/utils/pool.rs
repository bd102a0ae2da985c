// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Sized rayon pools for the parallel measurements

/// Run `op` on a dedicated pool of `workers` threads
///
/// `workers == 0` runs `op` on the global rayon pool. If the dedicated pool
/// cannot be built the global pool is used and a warning logged.
pub fn install<R, F>(workers: usize, op: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    if workers == 0 {
        return op();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(op),
        Err(e) => {
            log::warn!("could not build a {}-thread pool ({}), using the global pool", workers, e);
            op()
        }
    }
}
