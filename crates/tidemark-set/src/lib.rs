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

//! # Tidemark Set
//!
//! **Exact set algebra over collections of closed time intervals.**
//!
//! A single [`tidemark_core::interval::TimeInterval`] cannot express the
//! result of every set operation: subtracting one interval from another
//! can yield zero, one, or two intervals. [`set::TimeSet`] wraps an
//! ordered sequence of intervals so that every operation can return a
//! `TimeSet` again, and callers unwrap the collection in one place.
//!
//! ## Modules
//!
//! - `set`: The `TimeSet` value type with `+`/`-` operators, internal and
//!   two-set union and intersection, and clamping.
//! - `algebra` (private): The casewise subtraction algorithms.
//!
//! ## Design Philosophy
//!
//! 1. **Value semantics**: No operation mutates an operand; every
//!    transformation allocates a new set. Sharing sets across threads
//!    needs no synchronization.
//! 2. **Exactness**: All comparisons are exact `Ord` comparisons on the
//!    instant type. No precision is lost and no spurious empty or
//!    non-empty results are produced.
//! 3. **Laziness about normal form**: A set may hold overlapping, nested,
//!    duplicate, or empty members. Normalization happens only when the
//!    caller asks for it via a union.

pub mod set;

mod algebra;
