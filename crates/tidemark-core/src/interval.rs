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

use smallvec::SmallVec;
use std::{
    cmp::{Ordering, max, min},
    ops::Sub,
};

/// The error returned when an interval is constructed with `end < start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIntervalError<T> {
    /// The start bound that was passed to the constructor.
    pub start: T,
    /// The end bound that was passed to the constructor.
    pub end: T,
}

impl<T> std::fmt::Display for InvalidIntervalError<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot construct TimeInterval: end {:?} is earlier than start {:?}",
            self.end, self.start
        )
    }
}

impl<T> std::error::Error for InvalidIntervalError<T> where T: std::fmt::Debug {}

/// A closed interval `[start, end]` over an ordered instant type.
///
/// Both bounds are inclusive and `start <= end` always holds. An interval
/// with `start == end` is a legal single-point interval that contains no
/// elapsed time; it is not the same thing as the absence of an interval.
///
/// `TimeInterval` is an immutable value type: every operation returns new
/// values and never modifies its operands. Subtraction can split an
/// interval in two, so [`difference`](TimeInterval::difference) returns a
/// small vector of surviving pieces rather than a single interval.
///
/// # Invariants
/// `start <= end`, enforced at construction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TimeInterval<T>
where
    T: Copy + Ord,
{
    start: T,
    end: T,
}

impl<T> TimeInterval<T>
where
    T: Copy + Ord,
{
    /// Creates a new `TimeInterval`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalError`] if `end < start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(0, 10).unwrap();
    /// assert_eq!(iv.start(), 0);
    /// assert_eq!(iv.end(), 10);
    /// assert!(TimeInterval::new(10, 0).is_err());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Result<Self, InvalidIntervalError<T>> {
        if end < start {
            Err(InvalidIntervalError { start, end })
        } else {
            Ok(Self { start, end })
        }
    }

    /// Creates a new `TimeInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `start <= end`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start bound of the interval.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound of the interval.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the interval is a single point (`start == end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// assert!(TimeInterval::new(5, 5).unwrap().is_empty());
    /// assert!(!TimeInterval::new(5, 6).unwrap().is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this interval shares no interior instants with `other`.
    ///
    /// Closed intervals that touch at exactly one boundary point
    /// (`self.end == other.start`) count as disjoint: the shared point has
    /// no interior. The union sweep in `tidemark-set` still fuses touching
    /// runs into one contiguous interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let a = TimeInterval::new(0, 5).unwrap();
    /// let b = TimeInterval::new(5, 10).unwrap();
    /// assert!(a.is_disjoint_with(b)); // Touching endpoints
    ///
    /// let c = TimeInterval::new(4, 10).unwrap();
    /// assert!(!a.is_disjoint_with(c)); // Overlapping
    /// ```
    #[inline]
    pub fn is_disjoint_with(&self, other: Self) -> bool {
        self.end <= other.start || other.end <= self.start
    }

    /// Returns `true` if this interval lies entirely within `other`.
    ///
    /// Nesting is reflexive: equal intervals are mutually nested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let outer = TimeInterval::new(0, 10).unwrap();
    /// let inner = TimeInterval::new(2, 8).unwrap();
    /// assert!(inner.is_nested_in(outer));
    /// assert!(!outer.is_nested_in(inner));
    /// assert!(outer.is_nested_in(outer));
    /// ```
    #[inline]
    pub fn is_nested_in(&self, other: Self) -> bool {
        self.start >= other.start && self.end <= other.end
    }

    /// Returns `true` if `value` lies within the closed bounds of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(0, 10).unwrap();
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals are disjoint. Intervals touching at
    /// a single boundary point are disjoint, so their intersection is
    /// `None` rather than an empty single-point interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let a = TimeInterval::new(0, 10).unwrap();
    /// let b = TimeInterval::new(5, 15).unwrap();
    /// assert_eq!(a.intersection(b), Some(TimeInterval::new(5, 10).unwrap()));
    ///
    /// let c = TimeInterval::new(10, 20).unwrap();
    /// assert_eq!(a.intersection(c), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        if self.is_disjoint_with(other) {
            return None;
        }
        if self.is_nested_in(other) {
            return Some(*self);
        }
        if other.is_nested_in(*self) {
            return Some(other);
        }
        let latest_start = max(self.start, other.start);
        let earliest_end = min(self.end, other.end);
        Some(Self::new_unchecked(latest_start, earliest_end))
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 intervals: If `self` is nested in `other` (including equality).
    /// * 1 interval: If `other` clips one side of `self`, or is disjoint.
    /// * 2 intervals: If `other` is strictly interior to `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let base = TimeInterval::new(0, 10).unwrap();
    /// let hole = TimeInterval::new(4, 6).unwrap();
    ///
    /// let diff = base.difference(hole);
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], TimeInterval::new(0, 4).unwrap());
    /// assert_eq!(diff[1], TimeInterval::new(6, 10).unwrap());
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<Self, 2> {
        if self.is_disjoint_with(other) {
            smallvec::smallvec![*self]
        } else if self.is_nested_in(other) {
            SmallVec::new()
        } else if other.is_nested_in(*self) {
            self.subtract_nested(other)
        } else {
            self.subtract_non_nested(other)
        }
    }

    /// Subtraction where `other` is properly nested in `self`.
    ///
    /// When the operands share a start or an end the survivor is a single
    /// piece; otherwise `other` is strictly interior and splits `self`.
    fn subtract_nested(&self, other: Self) -> SmallVec<Self, 2> {
        if self.start == other.start {
            smallvec::smallvec![Self::new_unchecked(other.end, self.end)]
        } else if self.end == other.end {
            smallvec::smallvec![Self::new_unchecked(self.start, other.start)]
        } else {
            smallvec::smallvec![
                Self::new_unchecked(self.start, other.start),
                Self::new_unchecked(other.end, self.end),
            ]
        }
    }

    /// Subtraction where the operands overlap without either nesting in the other.
    ///
    /// # Panics
    ///
    /// Equal starts imply one operand nests in the other, which the
    /// dispatch in [`difference`](TimeInterval::difference) routes to the
    /// nested cases. Reaching that state here is a programming error.
    fn subtract_non_nested(&self, other: Self) -> SmallVec<Self, 2> {
        match self.start.cmp(&other.start) {
            Ordering::Less => smallvec::smallvec![Self::new_unchecked(self.start, other.start)],
            Ordering::Greater => smallvec::smallvec![Self::new_unchecked(other.end, self.end)],
            Ordering::Equal => {
                unreachable!("operands with equal starts are nested, not merely overlapping")
            }
        }
    }

    /// Clips the interval to an optional new start and end.
    ///
    /// `None` on either side leaves that bound untouched. Returns `None`
    /// when the clip inverts the interval, meaning it lay entirely outside
    /// the clamp window. A clip down to a single point survives as an
    /// empty interval.
    ///
    /// Not named `clamp`: `TimeInterval` derives [`Ord`], and on a
    /// by-value receiver method resolution would pick `Ord::clamp` over
    /// an inherent method that takes `&self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(0, 10).unwrap();
    /// assert_eq!(iv.clip(Some(2), Some(8)), Some(TimeInterval::new(2, 8).unwrap()));
    /// assert_eq!(iv.clip(Some(10), None), Some(TimeInterval::new(10, 10).unwrap()));
    /// assert_eq!(iv.clip(Some(12), None), None);
    /// ```
    #[inline]
    pub fn clip(&self, new_start: Option<T>, new_end: Option<T>) -> Option<Self> {
        let mut start = self.start;
        let mut end = self.end;
        if let Some(lo) = new_start {
            if start < lo {
                start = lo;
            }
        }
        if let Some(hi) = new_end {
            if end > hi {
                end = hi;
            }
        }
        if end >= start {
            Some(Self::new_unchecked(start, end))
        } else {
            None
        }
    }
}

impl<T> TimeInterval<T>
where
    T: Copy + Ord + Sub,
{
    /// Returns the amount of time between `start` and `end`.
    ///
    /// The result type is whatever subtracting two instants yields: an
    /// integer for tick-based instants, a `chrono::TimeDelta` for
    /// calendar instants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(10, 25).unwrap();
    /// assert_eq!(iv.elapsed(), 15);
    /// ```
    #[inline]
    pub fn elapsed(&self) -> T::Output {
        self.end - self.start
    }
}

impl<T> std::fmt::Display for TimeInterval<T>
where
    T: Copy + Ord + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeInterval(start={}, end={})", self.start, self.end)
    }
}
