// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use crate::{BytesError, Result};

/// Lexicographically compare `n` bytes of `src1` starting at `off1`
/// against `n` bytes of `src2` starting at `off2`.
///
/// Comparison is by unsigned byte value. Comparing zero bytes is
/// [`BytesError::EmptyCompare`].
///
/// # Panics
///
/// Both ranges must lie within their buffers; out-of-bounds offsets
/// panic rather than being clamped, so caller bugs surface instead of
/// being masked.
pub fn cmp(src1: &[u8], off1: usize, src2: &[u8], off2: usize, n: usize) -> Result<Ordering> {
	if n == 0 {
		return Err(BytesError::EmptyCompare);
	}
	for i in 0..n {
		match src1[off1 + i].cmp(&src2[off2 + i]) {
			Ordering::Equal => {}
			other => return Ok(other),
		}
	}
	Ok(Ordering::Equal)
}
