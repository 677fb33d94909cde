// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

/// Render `src[off, lim)` as a display string.
///
/// Printable ASCII bytes (32..=126) appear as themselves; every other
/// byte renders as `\u` followed by two lowercase hex digits. `lim`
/// is clamped to the buffer length; `off` past `lim` yields an empty
/// string.
///
/// Does not attempt to reassemble multi-byte unicode characters.
pub fn str(src: &[u8], off: usize, lim: usize) -> String {
	let lim = lim.min(src.len());
	let mut out = String::new();
	for i in off..lim {
		let b = src[i];
		if b > 31 && b < 127 {
			out.push(b as char);
		} else {
			let _ = write!(out, "\\u{:02x}", b);
		}
	}
	out
}

/// Render the selection `src[sel_off, sel_lim)` together with up to
/// `lctx` bytes of left context and `rctx` bytes of right context,
/// for error messages and debugging.
///
/// `sel_off` and `sel_lim` are clamped independently to the buffer.
/// `lctx`, `rctx` and `max_select` default to 160, 100 and 20.
/// Truncated context is marked with `...`; a selection longer than
/// `max_select` is cut after `max_select` bytes and marked with `..`.
pub fn context_str(
	src: &[u8],
	sel_off: usize,
	sel_lim: usize,
	lctx: Option<usize>,
	rctx: Option<usize>,
	max_select: Option<usize>,
) -> String {
	let sel_off = sel_off.min(src.len());
	let sel_lim = sel_lim.min(src.len());
	let lctx = lctx.unwrap_or(160);
	let rctx = rctx.unwrap_or(100);
	let max_select = max_select.unwrap_or(20);

	let coff = sel_off.saturating_sub(lctx);
	let clim = sel_lim.saturating_add(rctx).min(src.len());

	let mut lstr = if coff < sel_off {
		str(src, coff, sel_off)
	} else {
		String::new()
	};
	if coff > 0 {
		lstr = format!("...{}", lstr);
	}

	let mut rstr = if sel_lim < clim {
		str(src, sel_lim, clim)
	} else {
		String::new()
	};
	if clim < src.len() {
		rstr.push_str("...");
	}

	let selected = if sel_lim.saturating_sub(sel_off) > max_select {
		format!("{}..", str(src, sel_off, sel_off + max_select))
	} else {
		str(src, sel_off, sel_lim)
	};

	let range = if sel_off == sel_lim {
		sel_off.to_string()
	} else {
		format!("{}..{}", sel_off, sel_lim)
	};

	format!("src[{}] {}->{}<-{}", range, lstr, selected, rstr)
}
