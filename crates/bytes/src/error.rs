// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

/// Invalid-argument errors raised by the byte utilities.
///
/// All variants are fail-fast: they are returned before any scanning
/// happens and are never recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BytesError {
	#[error("escape and byte cannot be the same")]
	EscapeIsByte,

	#[error("cannot search empty bytes")]
	EmptySearch,

	#[error("cannot compare nothing")]
	EmptyCompare,
}
