// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Concatenate buffers in order into one newly allocated buffer.
///
/// No separators are inserted; an empty input slice yields an empty
/// buffer.
pub fn concat(srcs: &[&[u8]]) -> Vec<u8> {
	let nbytes = srcs.iter().map(|src| src.len()).sum();
	let mut out = Vec::with_capacity(nbytes);
	for src in srcs {
		out.extend_from_slice(src);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::concat;

	#[test]
	fn test_concat_nothing() {
		assert_eq!(concat(&[]), Vec::<u8>::new());
	}

	#[test]
	fn test_concat_single() {
		assert_eq!(concat(&[b"a".as_slice()]), b"a");
	}

	#[test]
	fn test_concat_many() {
		assert_eq!(concat(&[b"a".as_slice(), b"b"]), b"ab");
		assert_eq!(concat(&[b"a".as_slice(), b"b", b"c"]), b"abc");
		assert_eq!(concat(&[b"ab".as_slice(), b"c"]), b"abc");
		assert_eq!(concat(&[b"a".as_slice(), b"bc"]), b"abc");
		assert_eq!(concat(&[b"".as_slice(), b"abc"]), b"abc");
	}

	#[test]
	fn test_concat_preserves_order_and_length() {
		let a: &[u8] = &[0x00, 0xFF];
		let b: &[u8] = &[0x7F];
		let out = concat(&[a, b]);
		assert_eq!(out.len(), a.len() + b.len());
		assert!(out.starts_with(a));
		assert_eq!(out, vec![0x00, 0xFF, 0x7F]);
	}
}
