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

//! The subtraction algorithms behind `TimeSet`'s `-` operators.
//!
//! These are stateless pure functions over immutable values. The casewise
//! interval-from-interval primitive lives on
//! [`TimeInterval::difference`]; this module lifts it to sets.

use crate::set::TimeSet;
use tidemark_core::interval::TimeInterval;

/// Subtracts one interval from another, wrapping the surviving pieces in a set.
pub(crate) fn subtract_interval_from_interval<T>(
    minuend: TimeInterval<T>,
    subtrahend: TimeInterval<T>,
) -> TimeSet<T>
where
    T: Copy + Ord,
{
    minuend.difference(subtrahend).into_iter().collect()
}

/// Subtracts a single interval from every member of a set independently.
///
/// Members that the subtrahend fully covers drop out; all other surviving
/// pieces are concatenated in the minuend's original member order. No
/// merging takes place.
pub(crate) fn subtract_interval_from_set<T>(
    minuend: &TimeSet<T>,
    subtrahend: TimeInterval<T>,
) -> TimeSet<T>
where
    T: Copy + Ord,
{
    let mut differences = Vec::new();
    for member in minuend.intervals() {
        differences.extend(subtract_interval_from_interval(*member, subtrahend));
    }
    TimeSet::new(differences)
}

/// Subtracts a set from a set.
///
/// Both operands are sorted by start (stable for ties) so that the inner
/// scan over subtrahends can stop early: once the running difference for a
/// minuend member is empty, or once a subtrahend starts past the latest
/// end still present in that difference, no later subtrahend can touch it.
/// The result is concatenated in minuend-sorted order, unlike
/// [`subtract_interval_from_set`] which keeps original member order.
pub(crate) fn subtract_set_from_set<T>(minuend: &TimeSet<T>, subtrahend: &TimeSet<T>) -> TimeSet<T>
where
    T: Copy + Ord,
{
    let mut sorted_minuend = minuend.intervals().to_vec();
    sorted_minuend.sort_by(|a, b| a.start().cmp(&b.start()));
    let mut sorted_subtrahend = subtrahend.intervals().to_vec();
    sorted_subtrahend.sort_by(|a, b| a.start().cmp(&b.start()));

    let mut differences = Vec::new();
    for member in &sorted_minuend {
        let mut diff = vec![*member];
        for sub in &sorted_subtrahend {
            let mut remaining = Vec::with_capacity(diff.len());
            for piece in &diff {
                remaining.extend(piece.difference(*sub));
            }
            diff = remaining;

            match diff.iter().map(|piece| piece.end()).max() {
                None => break,
                Some(latest_end) if sub.start() > latest_end => break,
                Some(_) => {}
            }
        }
        differences.extend(diff);
    }
    TimeSet::new(differences)
}
