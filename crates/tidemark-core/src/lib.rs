// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Tidemark Core
//!
//! Closed time-interval primitives for the Tidemark set-algebra library.
//! This crate defines the immutable interval value type that the
//! higher-level set crate builds its algebra on.
//!
//! ## Modules
//!
//! - `interval`: The closed interval `[start, end]` value type with
//!   validated construction, relational predicates (disjointness with
//!   touching endpoints, nesting), elapsed-time measurement, and the
//!   pairwise intersection/difference/clamp primitives. Generic over any
//!   copyable, totally ordered instant type.
//! - `parse`: Construction of calendar intervals from strings using
//!   strftime-style format specifiers, with a structured error taxonomy
//!   distinguishing format mismatches from trailing input.
//!
//! ## Purpose
//!
//! An interval on its own cannot express the result of every set
//! operation: subtracting one closed interval from another can yield
//! zero, one, or two intervals. This crate therefore keeps the interval
//! a plain value type and hands multi-interval results upward as small
//! vectors, leaving the collection semantics to `tidemark-set`.

pub mod interval;
pub mod parse;
