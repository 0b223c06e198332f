use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Bound, RangeBounds};

use crate::list::cursor::{Cursor, CursorMut};
use crate::list::List;

mod drain;
mod sort;

pub use self::drain::{Drain, DrainFilter};

use self::sort::merge_sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        #[cfg(feature = "length")]
        {
            if self.len != other.len {
                return false;
            }
        }
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Overwrites the elements both lists share in place, then grows or
    /// truncates `self` to match `source`.
    fn clone_from(&mut self, source: &Self) {
        let mut cursor = self.cursor_start_mut();
        for elem in source.iter() {
            match cursor.current_mut() {
                Some(existing) => {
                    existing.clone_from(elem);
                    // cannot cross the sentinel: `current_mut` was `Some`
                    let _ = cursor.move_next();
                }
                None => cursor.insert(elem.clone()),
            }
        }
        // Truncate the surplus, if any.
        cursor.split();
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T> List<T> {
    /// Returns `true` if the list contains an element equal to the given
    /// value.
    ///
    /// # Complexity
    ///
    /// This operation should compute linearly in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Searches for the first element equal to the given value, and
    /// returns a cursor parked at it.
    ///
    /// If no element matches, the returned cursor is parked at the
    /// sentinel.
    ///
    /// # Complexity
    ///
    /// This operation should compute linearly in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    ///
    /// let cursor = list.find(&2);
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.previous(), Some(&1));
    ///
    /// let cursor = list.find(&7);
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn find(&self, x: &T) -> Cursor<'_, T>
    where
        T: PartialEq<T>,
    {
        let mut cursor = self.cursor_start();
        while let Some(elem) = cursor.current() {
            if elem == x {
                break;
            }
            cursor.move_next_wrapping();
        }
        cursor
    }

    /// Searches for the first element equal to the given value, and
    /// returns an editing cursor parked at it.
    ///
    /// If no element matches, the returned cursor is parked at the
    /// sentinel.
    ///
    /// # Complexity
    ///
    /// This operation should compute linearly in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.find_mut(&2);
    /// assert_eq!(cursor.remove(), Some(2));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    pub fn find_mut(&mut self, x: &T) -> CursorMut<'_, T>
    where
        T: PartialEq<T>,
    {
        let mut cursor = self.cursor_start_mut();
        while let Some(elem) = cursor.current() {
            if elem == x {
                break;
            }
            cursor.move_next_wrapping();
        }
        cursor
    }

    /// Removes every element equal to the given value, and returns the
    /// number of elements removed.
    ///
    /// The surviving elements keep their relative order.
    ///
    /// # Complexity
    ///
    /// This operation should compute linearly in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 2, 3, 2]);
    ///
    /// assert_eq!(list.remove(&2), 3);
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    ///
    /// assert_eq!(list.remove(&7), 0);
    /// ```
    pub fn remove(&mut self, x: &T) -> usize
    where
        T: PartialEq<T>,
    {
        self.drain_filter(|elem| *elem == *x).count()
    }

    /// Removes the elements in the given range of positions, and returns
    /// them as a draining iterator.
    ///
    /// The drained run is severed from the list immediately, so the
    /// elements are removed even if the iterator is dropped without being
    /// consumed.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point, or if
    /// the end point is greater than the length of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`end`) time. Without the
    /// `length` feature, an unbounded end point costs one extra traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    ///
    /// let removed: Vec<_> = list.drain(1..4).collect();
    /// assert_eq!(removed, vec![1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![0, 4, 5]);
    ///
    /// // An empty range removes nothing.
    /// assert!(list.drain(1..1).next().is_none());
    ///
    /// // An unbounded range empties the list.
    /// list.drain(..);
    /// assert!(list.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i + 1,
            Bound::Excluded(&i) => i,
            Bound::Unbounded => self.len(),
        };
        assert!(start <= end, "Cannot drain a decreasing range");
        #[cfg(feature = "length")]
        assert!(end <= self.len, "Cannot drain outside of the list bounds");

        let mut removed = List::new();
        let sentinel = self.sentinel_node();
        let mut front = self.front_node();
        for _ in 0..start {
            assert!(front != sentinel, "Cannot drain outside of the list bounds");
            // SAFETY: `front` is a valid non-sentinel node of the list.
            front = unsafe { front.as_ref().next };
        }
        if start < end {
            let mut back = front;
            for _ in start..end - 1 {
                assert!(back != sentinel, "Cannot drain outside of the list bounds");
                // SAFETY: `back` is a valid non-sentinel node of the list.
                back = unsafe { back.as_ref().next };
            }
            assert!(back != sentinel, "Cannot drain outside of the list bounds");
            #[cfg(feature = "length")]
            let len = end - start;
            // SAFETY: `front..=back` is a valid run of non-sentinel nodes.
            let chain = unsafe {
                self.sever_chain(
                    front,
                    back,
                    #[cfg(feature = "length")]
                    len,
                )
            };
            removed = List::from_chain(chain);
        }
        Drain::new(removed)
    }

    /// Removes every element for which `filter` returns `true`, and
    /// returns the removed elements as an iterator.
    ///
    /// The filter sees a mutable reference, so it may edit elements it
    /// decides to keep. If the iterator is dropped before being fully
    /// consumed, the remaining matching elements are still removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..8);
    ///
    /// let evens: Vec<_> = list.drain_filter(|x| *x % 2 == 0).collect();
    /// assert_eq!(evens, vec![0, 2, 4, 6]);
    /// assert_eq!(list.to_vec(), vec![1, 3, 5, 7]);
    /// ```
    pub fn drain_filter<F>(&mut self, filter: F) -> DrainFilter<'_, T, F>
    where
        F: FnMut(&mut T) -> bool,
    {
        DrainFilter::new(self, filter)
    }
}

impl<T> List<T> {
    /// Sorts the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The elements are sorted in place: only the node links change, so
    /// no element is moved or copied, and references into the list stay
    /// valid across the sort.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* \* log(*n*)) time, with
    /// *O*(log(*n*)) stack and no allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::from([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sorts the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order of
    /// the elements is unspecified. An order is a total order if it is
    /// (for all `a`, `b` and `c`):
    ///
    /// - total and antisymmetric: exactly one of `a < b`, `a == b` or
    ///   `a > b` is true, and
    /// - transitive, `a < b` and `b < c` implies `a < c`. The same must
    ///   hold for both `==` and `>`.
    ///
    /// For example, while [`f64`] does not implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function when
    /// we know the list does not contain a `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut floats = List::from([5.0, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(floats.into_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    ///
    /// let mut list = List::from([5, 4, 1, 3, 2]);
    ///
    /// list.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less);
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The key function is called on every comparison, so cache the keys
    /// yourself if extraction is expensive.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// list.sort_by_key(|k| k.abs());
    /// assert_eq!(list.into_vec(), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, |a, b| f(a).lt(&f(b)));
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use rand::{thread_rng, Rng};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    #[test]
    fn list_equality() {
        assert_eq!(List::from_iter(0..4), List::from_iter(0..4));
        assert_ne!(List::from_iter(0..4), List::from_iter(0..3));
        assert_ne!(List::from_iter(0..3), List::from_iter(0..4));
        assert_ne!(List::from_iter([1, 2, 3]), List::from_iter([1, 2, 4]));
        assert_eq!(List::<i32>::new(), List::new());
    }

    #[test]
    fn list_ordering() {
        assert!(List::from_iter([1, 2, 3]) < List::from_iter([1, 2, 4]));
        assert!(List::from_iter([1, 2]) < List::from_iter([1, 2, 3]));
        assert!(List::from_iter([2]) > List::from_iter([1, 9, 9]));
        assert!(List::<i32>::new() < List::from_iter([0]));
    }

    #[test]
    fn list_hash_agrees_with_equality() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from_iter(0..10);
        let b = List::from_iter(0..10);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&List::from_iter(0..9)));
    }

    #[test]
    fn list_clone() {
        let list = List::from_iter(0..5);
        let clone = list.clone();
        assert_eq!(list, clone);

        // `clone_from` truncates a longer target...
        let mut target = List::from_iter(0..10);
        target.clone_from(&list);
        assert_eq!(target, list);

        // ...grows a shorter one...
        let mut target = List::from_iter(0..2);
        target.clone_from(&list);
        assert_eq!(target, list);

        // ...and clears when the source is empty.
        let mut target = List::from_iter(0..3);
        target.clone_from(&List::new());
        assert!(target.is_empty());

        // An empty target copies everything.
        let mut target = List::new();
        target.clone_from(&list);
        assert_eq!(target, list);
    }

    #[test]
    fn list_contains_and_find() {
        let list = List::from_iter([1, 2, 3]);
        assert!(list.contains(&2));
        assert!(!list.contains(&7));

        let cursor = list.find(&2);
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.previous(), Some(&1));

        // A miss parks the cursor at the sentinel.
        let cursor = list.find(&7);
        assert_eq!(cursor.current(), None);
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn list_find_mut_edits_in_place() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.find_mut(&2);
        if let Some(x) = cursor.current_mut() {
            *x = 20;
        }
        assert_eq!(list.to_vec(), vec![1, 20, 3]);

        // Removing at the found position keeps the rest linked.
        let mut cursor = list.find_mut(&20);
        assert_eq!(cursor.remove(), Some(20));
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(list.to_vec(), vec![1, 3]);
    }

    #[test]
    fn list_remove_by_value() {
        let mut list = List::from_iter([1, 2, 2, 3, 2]);
        assert_eq!(list.remove(&2), 3);
        assert_eq!(list.to_vec(), vec![1, 3]);

        // Removing a missing value is a no-op.
        assert_eq!(list.remove(&7), 0);
        assert_eq!(list.to_vec(), vec![1, 3]);

        // Front and back matches are removed as well.
        let mut list = List::from_iter([5, 1, 5, 2, 5]);
        assert_eq!(list.remove(&5), 3);
        assert_eq!(list.to_vec(), vec![1, 2]);

        // Removing every element leaves the list empty but usable.
        let mut list = List::from_iter([4, 4, 4]);
        assert_eq!(list.remove(&4), 3);
        assert!(list.is_empty());
        list.push_back(1);
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn list_drain_ranges() {
        let mut list = List::from_iter(0..6);
        assert!(list.drain(1..4).eq([1, 2, 3]));
        assert_eq!(list.to_vec(), vec![0, 4, 5]);

        // Inclusive upper bound.
        let mut list = List::from_iter(0..6);
        assert!(list.drain(1..=4).eq([1, 2, 3, 4]));
        assert_eq!(list.to_vec(), vec![0, 5]);

        // Open-ended ranges.
        let mut list = List::from_iter(0..6);
        assert!(list.drain(4..).eq([4, 5]));
        assert!(list.drain(..2).eq([0, 1]));
        assert!(list.drain(..).eq([2, 3]));
        assert!(list.is_empty());

        // Empty ranges drain nothing, even at the very end.
        let mut list = List::from_iter(0..3);
        assert_eq!(list.drain(1..1).next(), None);
        assert_eq!(list.drain(3..3).next(), None);
        assert_eq!(list.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn list_drain_unconsumed_still_removes() {
        let mut list = List::from_iter(0..6);
        let mut drain = list.drain(1..4);
        assert_eq!(drain.next(), Some(1));
        drop(drain);
        assert_eq!(list.to_vec(), vec![0, 4, 5]);
        assert_eq!(list.len(), 3);

        // Draining from both ends.
        let mut list = List::from_iter(0..6);
        let mut drain = list.drain(1..4);
        assert_eq!(drain.next_back(), Some(3));
        assert_eq!(drain.next(), Some(1));
        drop(drain);
        assert_eq!(list.to_vec(), vec![0, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "Cannot drain a decreasing range")]
    fn list_drain_decreasing_range() {
        let mut list = List::from_iter(0..3);
        let (start, end) = (2, 1);
        list.drain(start..end);
    }

    #[test]
    #[should_panic(expected = "Cannot drain outside of the list bounds")]
    fn list_drain_out_of_bounds() {
        let mut list = List::from_iter(0..3);
        list.drain(1..5);
    }

    #[test]
    #[should_panic(expected = "Cannot drain outside of the list bounds")]
    fn list_drain_empty_range_past_end() {
        let mut list = List::from_iter(0..3);
        list.drain(4..4);
    }

    #[test]
    fn list_drain_filter() {
        let mut list = List::from_iter(0..8);
        assert!(list.drain_filter(|x| *x % 2 == 0).eq([0, 2, 4, 6]));
        assert_eq!(list.to_vec(), vec![1, 3, 5, 7]);

        // Dropping the iterator midway still drains every match.
        let mut list = List::from_iter(0..8);
        let mut drain = list.drain_filter(|x| *x % 2 == 0);
        assert_eq!(drain.next(), Some(0));
        drop(drain);
        assert_eq!(list.to_vec(), vec![1, 3, 5, 7]);

        // A filter that matches nothing leaves the list untouched.
        let mut list = List::from_iter(0..4);
        assert_eq!(list.drain_filter(|_| false).next(), None);
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn sort_small_lists() {
        let mut list: List<i32> = List::new();
        list.sort();
        assert!(list.is_empty());

        let mut list = List::from([1]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1]);

        let mut list = List::from([2, 1]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 2]);

        let mut list = List::from([2, 3, 1]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);

        let mut list = List::from([4, 2, 3, 1]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sort_sorted_and_reversed_input() {
        let mut list = List::from_iter(0..64);
        list.sort();
        assert!(list.iter().copied().eq(0..64));

        let mut list = List::from_iter((0..64).rev());
        list.sort();
        assert!(list.iter().copied().eq(0..64));

        // Sorting again is a no-op.
        list.sort();
        assert!(list.iter().copied().eq(0..64));
    }

    #[test]
    fn sort_matches_vec_sort() {
        let mut rng = thread_rng();
        for &len in &[2usize, 3, 4, 7, 8, 15, 100, 1000] {
            let mut expected: Vec<i32> = (0..len).map(|_| rng.gen_range(0..1000)).collect();
            let mut list = List::from_iter(expected.iter().copied());
            list.sort();
            expected.sort();
            assert_eq!(list.into_vec(), expected);
        }
    }

    #[test]
    fn sort_is_stable() {
        let mut rng = thread_rng();
        // Key-value pairs with plenty of duplicate keys; the values record
        // the original order.
        let input: Vec<(u8, usize)> = (0..300)
            .map(|position| (rng.gen_range(0..8), position))
            .collect();

        let mut list = List::from_iter(input.iter().copied());
        list.sort_by(|a, b| a.0.cmp(&b.0));

        let mut expected = input;
        expected.sort_by(|a, b| a.0.cmp(&b.0)); // Vec's sort is stable
        assert_eq!(list.into_vec(), expected);
    }

    #[test]
    fn sort_by_reverse_order() {
        let mut list = List::from([5, 4, 1, 3, 2]);
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn sort_by_key_abs() {
        let mut list = List::from([-5i32, 4, 1, -3, 2]);
        list.sort_by_key(|k| k.abs());
        assert_eq!(list.into_vec(), vec![1, 2, -3, 4, -5]);
    }

    #[test]
    fn sort_keeps_references_valid() {
        // Sorting relinks nodes without moving elements, so an address
        // observed before the sort is still that element's address after.
        let mut list = List::from([3, 1, 2]);
        let before = list.find(&1).current().map(|x| x as *const i32);
        list.sort();
        let after = list.find(&1).current().map(|x| x as *const i32);
        assert_eq!(before, after);
    }
}
