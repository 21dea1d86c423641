// THEORY:
// Two sequence helpers that std leaves a little awkward:
//
// 1.  **Seedless aggregation**: `aggregate` is a left fold whose seed is the
//     result type's `Default`. An empty sequence simply yields that default,
//     there is no "empty sequence" error. Unlike `Iterator::reduce` the result
//     type may differ from the item type.
// 2.  **Filter-then-select in one pass**: `select_where` tests each source item
//     with a predicate and only transforms the accepted ones. The selector is
//     never called for a rejected item, which matters when the selector is
//     expensive or has side effects. It is lazy, like every adapter in std.
//
// Both are also offered for `futures::Stream`, so the same call shape works on
// asynchronous sources.

use std::future::Future;
use std::iter::FusedIterator;

use futures::future;
use futures::stream::{Stream, StreamExt};

/// Left fold starting from `R::default()`.
pub fn aggregate<I, R, F>(iter: I, f: F) -> R
where
    I: IntoIterator,
    R: Default,
    F: FnMut(R, I::Item) -> R,
{
    iter.into_iter().fold(R::default(), f)
}

/// Lazily yields `selector(item)` for every `item` accepted by `predicate`.
pub fn select_where<I, S, P, R>(iter: I, selector: S, predicate: P) -> SelectWhere<I::IntoIter, S, P>
where
    I: IntoIterator,
    S: FnMut(I::Item) -> R,
    P: FnMut(&I::Item) -> bool,
{
    SelectWhere {
        iter: iter.into_iter(),
        selector,
        predicate,
    }
}

/// Iterator returned by [`select_where`] and [`SequenceExt::select_where`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectWhere<I, S, P> {
    iter: I,
    selector: S,
    predicate: P,
}

impl<I, S, P, R> Iterator for SelectWhere<I, S, P>
where
    I: Iterator,
    S: FnMut(I::Item) -> R,
    P: FnMut(&I::Item) -> bool,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        let predicate = &mut self.predicate;
        let item = self.iter.find(|item| predicate(item))?;
        Some((self.selector)(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, S, P, R> DoubleEndedIterator for SelectWhere<I, S, P>
where
    I: DoubleEndedIterator,
    S: FnMut(I::Item) -> R,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<R> {
        let predicate = &mut self.predicate;
        let item = self.iter.rfind(|item| predicate(item))?;
        Some((self.selector)(item))
    }
}

impl<I, S, P, R> FusedIterator for SelectWhere<I, S, P>
where
    I: FusedIterator,
    S: FnMut(I::Item) -> R,
    P: FnMut(&I::Item) -> bool,
{
}

/// Method-call form of the sequence helpers for every iterator.
pub trait SequenceExt: Iterator + Sized {
    /// See [`aggregate`].
    fn aggregate<R, F>(self, f: F) -> R
    where
        R: Default,
        F: FnMut(R, Self::Item) -> R,
    {
        aggregate(self, f)
    }

    /// See [`select_where`].
    fn select_where<S, P, R>(self, selector: S, predicate: P) -> SelectWhere<Self, S, P>
    where
        S: FnMut(Self::Item) -> R,
        P: FnMut(&Self::Item) -> bool,
    {
        select_where(self, selector, predicate)
    }
}

impl<I: Iterator> SequenceExt for I {}

/// [`aggregate`] over a stream.
pub fn aggregate_stream<St, R, F>(stream: St, mut f: F) -> impl Future<Output = R>
where
    St: Stream,
    R: Default,
    F: FnMut(R, St::Item) -> R,
{
    stream.fold(R::default(), move |acc, item| future::ready(f(acc, item)))
}

/// [`select_where`] over a stream.
pub fn select_where_stream<St, S, P, R>(stream: St, mut selector: S, mut predicate: P) -> impl Stream<Item = R>
where
    St: Stream,
    S: FnMut(St::Item) -> R,
    P: FnMut(&St::Item) -> bool,
{
    stream.filter_map(move |item| {
        let selected = if predicate(&item) {
            Some(selector(item))
        } else {
            None
        };
        future::ready(selected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::stream;
    use std::cell::Cell;

    #[test]
    fn aggregate_folds_from_default() {
        assert_eq!(aggregate(1..=4, |acc: i64, x| acc + x), 10);
        assert_eq!(["a", "b", "c"].into_iter().aggregate(|acc: String, s| acc + s), "abc");
    }

    #[test]
    fn aggregate_of_empty_sequence_is_default() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(aggregate(empty, |acc: u32, x| acc + x), 0);
        assert_eq!(std::iter::empty::<u8>().aggregate(|acc: String, _| acc), "");
    }

    #[test]
    fn aggregate_may_change_the_result_type() {
        let lengths = ["one", "three", "seven"]
            .into_iter()
            .aggregate(|mut acc: Vec<usize>, s| {
                acc.push(s.len());
                acc
            });
        assert_eq!(lengths, vec![3, 5, 5]);
    }

    #[test]
    fn select_where_filters_then_transforms() {
        let evens_squared: Vec<i32> = select_where(1..=6, |x| x * x, |x| x % 2 == 0).collect();
        assert_eq!(evens_squared, vec![4, 16, 36]);
    }

    #[test]
    fn selector_only_sees_accepted_items() {
        let calls = Cell::new(0);
        let out: Vec<String> = (0..10)
            .select_where(
                |x| {
                    calls.set(calls.get() + 1);
                    x.to_string()
                },
                |x| *x >= 7,
            )
            .collect();
        assert_eq!(out, vec!["7", "8", "9"]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn select_where_is_lazy_and_reversible() {
        let calls = Cell::new(0);
        let mut iter = (0..5).select_where(|x| x * 10, |_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(iter.size_hint(), (0, Some(5)));
        assert_eq!(iter.next_back(), Some(40));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn stream_helpers_match_iterator_helpers() {
        let selected: Vec<i32> =
            block_on(select_where_stream(stream::iter(1..=6), |x| x * x, |x| x % 2 == 0).collect());
        assert_eq!(selected, vec![4, 16, 36]);

        let total = block_on(aggregate_stream(stream::iter(1..=4), |acc: i64, x| acc + x));
        assert_eq!(total, 10);

        let nothing = block_on(aggregate_stream(stream::empty::<i64>(), |acc: i64, x| acc + x));
        assert_eq!(nothing, 0);
    }
}
