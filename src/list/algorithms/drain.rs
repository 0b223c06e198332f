use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::list::cursor::CursorMut;
use crate::List;

/// A draining iterator over a range of a [`List`], returned by
/// [`List::drain`].
///
/// The drained run is severed from the source list when the `Drain` is
/// created, so dropping it early only drops the unconsumed elements.
pub struct Drain<'a, T: 'a> {
    removed: List<T>,
    // Keeps the source list mutably borrowed for as long as the drain
    // is alive.
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> Drain<'a, T> {
    pub(crate) fn new(removed: List<T>) -> Self {
        Self {
            removed,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.removed.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.removed.len, Some(self.removed.len))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.removed.pop_back()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for Drain<'_, T> {
    fn len(&self) -> usize {
        self.removed.len
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.removed).finish()
    }
}

/// A draining iterator over the elements of a [`List`] matching a
/// predicate, returned by [`List::drain_filter`].
///
/// Unlike [`Drain`], the matching elements are unlinked lazily as the
/// iterator walks the list; dropping it runs the walk to completion.
pub struct DrainFilter<'a, T: 'a, F: 'a>
where
    F: FnMut(&mut T) -> bool,
{
    cursor: CursorMut<'a, T>,
    filter: F,
}

impl<'a, T, F> DrainFilter<'a, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    pub(crate) fn new(list: &'a mut List<T>, filter: F) -> Self {
        let cursor = list.cursor_start_mut();
        Self { cursor, filter }
    }
}

impl<T, F> Iterator for DrainFilter<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if (self.filter)(self.cursor.current_mut()?) {
                return self.cursor.remove();
            }
            self.cursor.move_next_wrapping();
        }
    }
}

impl<T, F> Drop for DrainFilter<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T: fmt::Debug, F> fmt::Debug for DrainFilter<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrainFilter")
            .field(self.cursor.view())
            .finish()
    }
}
