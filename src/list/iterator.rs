use std::fmt::{self, Debug, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::{
    Cursor, CursorBackIter, CursorBackIterMut, CursorIter, CursorIterMut, CursorMut,
};
use crate::list::{List, Node};

/// An iterator over the elements of a `List`.
///
/// It holds a pair of nodes `start..end` representing the half-open run of
/// elements not yet yielded, where `start` is inclusive and `end` is not.
/// Both ends shrink towards each other, so the iterator is double-ended.
///
/// Though the `Iter` does not hold a reference to the list, it borrows the
/// list immutably, so a phantom marker of `&'a List<T>` protects the list
/// from being written while the iterator is alive:
///
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // ERROR: `list` is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a + Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut node = self.start;
        while node != self.end {
            // SAFETY: `start..end` is a valid run of the list.
            let current = unsafe { node.as_ref() };
            entries.entry(&current.element);
            node = current.next;
        }
        entries.finish()
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.sentinel_node(),
            #[cfg(feature = "length")]
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is a valid non-sentinel node of the list.
        let current = unsafe { self.start.as_ref() };
        self.start = current.next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `end.prev` is a valid non-sentinel node of the list.
        let current = unsafe { self.end.as_ref().prev.as_ref() };
        self.end = NonNull::from(current);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }
}

#[cfg(feature = "length")]
impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// Like [`Iter`], it holds a pair of nodes `start..end` representing the
/// half-open run of elements not yet yielded. The list cannot be observed
/// through any other view while the iterator is alive:
///
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
///
/// // ERROR: `list` is already borrowed mutably.
/// list.front();
/// iter.next();
/// ```
pub struct IterMut<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a + Debug> Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut node = self.start;
        while node != self.end {
            // SAFETY: `start..end` is a valid run of the list.
            let current = unsafe { node.as_ref() };
            entries.entry(&current.element);
            node = current.next;
        }
        entries.finish()
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.sentinel_node(),
            #[cfg(feature = "length")]
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is a valid non-sentinel node of the list, and
        // the iterator never yields the same node twice.
        let current = unsafe { self.start.as_mut() };
        self.start = current.next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `end.prev` is a valid non-sentinel node of the list, and
        // the iterator never yields the same node twice.
        let mut prev = unsafe { self.end.as_ref().prev };
        let current = unsafe { prev.as_mut() };
        self.end = prev;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut current.element)
    }
}

#[cfg(feature = "length")]
impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the `into_iter` method on [`List`].
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    /// Converts a `[T; N]` into a `List<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<T> List<T> {
    /// Consumes the list into a `Vec` in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Clones the elements into a `Vec` in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert!(!list.is_empty());
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T> Iterator for CursorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.current();
        self.cursor.move_next_wrapping();
        current
    }
}

impl<'a, T> Iterator for CursorIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.current_mut();
        self.cursor.move_next_wrapping();
        current
    }
}

impl<'a, T> Iterator for CursorBackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.move_prev_wrapping();
        self.cursor.current()
    }
}

impl<'a, T> Iterator for CursorBackIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.move_prev_wrapping();
        self.cursor.current_mut()
    }
}

impl<'a, T> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, T>;

    /// Consumes the cursor into a cyclic iterator starting at its position.
    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}

impl<'a, T> IntoIterator for CursorMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = CursorIterMut<'a, T>;

    /// Consumes the cursor into a cyclic iterator starting at its position.
    fn into_iter(self) -> Self::IntoIter {
        CursorIterMut { cursor: self }
    }
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}

unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    macro_rules! test_iter {
        ($name:ident: $input:expr, mid $mid:expr) => {
            #[test]
            fn $name() {
                let input: Vec<i32> = $input;
                let mid: usize = $mid;
                let mut list = List::from_iter(input.iter().copied());

                assert!(list.iter().eq(input.iter()));
                assert!(list.iter().rev().eq(input.iter().rev()));
                assert_eq!(list.iter().count(), input.len());
                #[cfg(feature = "length")]
                assert_eq!(list.iter().len(), input.len());

                // Walk forward to `mid`, then drain the rest backwards.
                let mut iter = list.iter();
                let mut expected = input.iter();
                for _ in 0..mid {
                    assert_eq!(iter.next(), expected.next());
                }
                assert!(iter.rev().eq(expected.rev()));

                // Iterators are fused.
                let mut iter = list.iter();
                for _ in 0..input.len() {
                    assert!(iter.next().is_some());
                }
                assert_eq!(iter.next(), None);
                assert_eq!(iter.next(), None);

                // Mutable iteration writes through, in both directions.
                list.iter_mut().for_each(|x| *x += 1);
                assert!(list.iter().copied().eq(input.iter().map(|x| x + 1)));
                list.iter_mut().rev().for_each(|x| *x -= 1);
                assert!(list.iter().eq(input.iter()));

                // By-value iteration consumes the list.
                assert_eq!(Vec::from_iter(list), input);
            }
        };
    }

    test_iter!(iter_empty: Vec::new(), mid 0);
    test_iter!(iter_single: vec![7], mid 0);
    test_iter!(iter_single_to_end: vec![7], mid 1);
    test_iter!(iter_pair: vec![1, 2], mid 1);
    test_iter!(iter_long: Vec::from_iter(0..10), mid 5);
    test_iter!(iter_long_from_start: Vec::from_iter(0..10), mid 0);
    test_iter!(iter_long_to_end: Vec::from_iter(0..10), mid 10);

    #[test]
    fn into_iter_double_ended() {
        let mut iter = List::from_iter(0..5).into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn from_array() {
        let list = List::from([1, 2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn extend_by_value_and_by_ref() {
        let mut list = List::from_iter(0..3);
        list.extend(3..5);
        list.extend([5, 6].iter());
        assert!(list.iter().eq(&[0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn cursor_iter_wraps() {
        let list = List::from_iter([1, 2]);

        let mut iter = list.cursor_start().into_iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None); // the sentinel
        assert_eq!(iter.next(), Some(&1)); // wrapped around

        let mut iter = list.cursor_end().into_iter().rev();
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), Some(&2));
    }

    #[test]
    fn cursor_iter_peek_and_rev() {
        let list = List::from_iter([1, 2, 3]);
        let mut iter = list.cursor_start().into_iter();
        assert_eq!(iter.peek(), Some(&1));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.peek(), Some(&2));

        // Reversing keeps the position, so the element just yielded comes
        // back first.
        let mut back = iter.rev();
        assert_eq!(back.peek(), Some(&1));
        assert_eq!(back.next(), Some(&1));
        assert_eq!(back.next(), None);
    }

    #[test]
    fn cursor_iter_mut_writes() {
        let mut list = List::from_iter([1, 2, 3]);
        {
            let mut iter = list.cursor_start_mut().into_iter();
            while let Some(x) = iter.next() {
                *x *= 2;
            }
        }
        assert_eq!(list.to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn iter_mut_rev_writes() {
        let mut list = List::from_iter(1..=5);
        assert!(list.iter_mut().rev().map(|x| *x).eq((1..=5).rev()));
        for x in list.iter_mut().rev() {
            *x *= 10;
        }
        assert!(list.iter().eq(&[10, 20, 30, 40, 50]));
    }
}
