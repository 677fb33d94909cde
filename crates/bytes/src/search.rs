// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{BytesError, Result};

/// Find byte `b` in `src[off, lim)`, honoring escape byte `e`.
///
/// A candidate byte is escaped when an odd number of consecutive `e`
/// bytes sits directly before it; pairs of escapes cancel out. With
/// `escaped == false` the first unescaped occurrence of `b` is
/// returned. With `escaped == true` the first escaped occurrence is
/// returned, as the index of the escape byte preceding `b` rather
/// than of `b` itself.
///
/// `off` defaults to 0 and `lim` to `src.len()` when absent. The
/// backward escape count never looks left of `off`. Returns
/// `Ok(None)` when no occurrence qualifies, and
/// [`BytesError::EscapeIsByte`] when `b == e`.
pub fn index_of_esc(
	src: &[u8],
	off: Option<usize>,
	lim: Option<usize>,
	b: u8,
	e: u8,
	escaped: bool,
) -> Result<Option<usize>> {
	if b == e {
		return Err(BytesError::EscapeIsByte);
	}
	let adj = usize::from(escaped);
	let off = off.unwrap_or(0);
	let lim = lim.unwrap_or(src.len()).min(src.len());

	for i in off..lim {
		if src[i] != b {
			continue;
		}
		// count escapes going backwards; n is the escape count plus one
		let mut n = 1;
		while i >= off + n && src[i - n] == e {
			n += 1;
		}
		if (n + adj) % 2 == 1 {
			// for escaped, this is the index of the preceding escape
			return Ok(Some(i - adj));
		}
	}
	Ok(None)
}

/// Find the first occurrence of `bsrc[boff, blim)` within
/// `src[off, lim)`, returning its index relative to `src`.
///
/// A naive linear scan, intended for shortish needles. `off`, `lim`,
/// `boff` and `blim` default to 0, `src.len()`, 0 and `bsrc.len()`
/// respectively when absent. A needle longer than the haystack range,
/// or one whose range reaches past the end of `bsrc`, can never match
/// and yields `Ok(None)`. An empty needle range is
/// [`BytesError::EmptySearch`].
pub fn index_of(
	src: &[u8],
	off: Option<usize>,
	lim: Option<usize>,
	bsrc: &[u8],
	boff: Option<usize>,
	blim: Option<usize>,
) -> Result<Option<usize>> {
	let off = off.unwrap_or(0);
	let lim = lim.unwrap_or(src.len()).min(src.len());
	let boff = boff.unwrap_or(0);
	let blim = blim.unwrap_or(bsrc.len());
	if blim <= boff {
		return Err(BytesError::EmptySearch);
	}
	if blim > bsrc.len() {
		return Ok(None);
	}

	let blen = blim - boff;
	if off > lim || lim - off < blen {
		return Ok(None);
	}
	let needle = &bsrc[boff..blim];
	for i in off..=lim - blen {
		if src[i..i + blen] == *needle {
			return Ok(Some(i));
		}
	}
	Ok(None)
}
