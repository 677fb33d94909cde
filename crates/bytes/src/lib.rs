// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Low-level byte buffer utilities shared by tokenizers and
//! binary-format readers: concatenation, escape-aware and
//! sub-sequence search, lexicographic comparison, and diagnostic
//! rendering of a buffer around a selection.
//!
//! Every function here is pure and operates on caller-owned slices;
//! nothing is retained across calls.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use compare::cmp;
pub use concat::concat;
pub use display::{context_str, str};
pub use error::BytesError;
pub use search::{index_of, index_of_esc};

mod compare;
mod concat;
mod display;
mod error;
mod search;

pub type Result<T> = std::result::Result<T, BytesError>;
