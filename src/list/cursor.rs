use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

#[cfg(feature = "length")]
use std::cmp::Ordering;

use crate::list::{List, Node};

/// A read-only cursor over a [`List`], parked at one of its nodes or at the
/// sentinel.
///
/// Unlike [`Iter`], a cursor can move in both directions and never exhausts:
/// the wrapping moves treat the list as the cycle it is, with the sentinel
/// standing between the back and the front. The checked moves [`move_next`]
/// and [`move_prev`] refuse to cross the sentinel boundary instead.
///
/// In a list with length *n*, there are *n* + 1 positions for a cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the sentinel.
///
/// Cursors borrow the list immutably, so any number of them can view the
/// same list at once.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
///
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&1));
///
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&2));
///
/// cursor.move_to_end();
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.previous(), Some(&3));
/// ```
///
/// [`Iter`]: crate::Iter
/// [`move_next`]: Cursor::move_next
/// [`move_prev`]: Cursor::move_prev
pub struct Cursor<'a, T: 'a> {
    pub(crate) list: &'a List<T>,
    pub(crate) current: NonNull<Node<T>>,
    /// The position of `current` in the list, counted from the start.
    /// The sentinel is at position `len`.
    #[cfg(feature = "length")]
    pub(crate) index: usize,
}

/// A cursor over a [`List`] with editing operations.
///
/// Besides moving like a [`Cursor`], it can insert, remove and split at its
/// position in constant time. A `CursorMut` borrows the list exclusively,
/// so while it is alive no other cursor or iterator can observe the list:
///
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// list.iter(); // ERROR: `list` is already mutably borrowed
/// cursor.insert(0);
/// ```
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
///
/// let mut cursor = list.cursor_start_mut();
/// assert!(cursor.move_next().is_ok());
///
/// cursor.insert(10); // [1, 10, 2, 3], the cursor stays at 2
/// assert_eq!(cursor.current(), Some(&2));
///
/// assert_eq!(cursor.remove(), Some(2)); // [1, 10, 3], the cursor moves to 3
/// assert_eq!(cursor.current(), Some(&3));
///
/// assert_eq!(Vec::from_iter(list), vec![1, 10, 3]);
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) list: &'a mut List<T>,
    pub(crate) current: NonNull<Node<T>>,
    /// The position of `current` in the list, counted from the start.
    /// The sentinel is at position `len`.
    #[cfg(feature = "length")]
    pub(crate) index: usize,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T> $CURSOR<'a, T> {
            fn is_sentinel_node(&self, node: NonNull<Node<T>>) -> bool {
                self.list.sentinel_node() == node
            }

            fn is_front_node(&self, node: NonNull<Node<T>>) -> bool {
                self.list.front_node() == node
            }

            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid.
                unsafe { self.current.as_ref().next }
            }

            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid.
                unsafe { self.current.as_ref().prev }
            }

            /// Returns the position of the cursor in the list, counted from
            /// the start. The sentinel is at position `len`.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            /// assert_eq!(cursor.index(), 0);
            ///
            /// cursor.move_to_end();
            /// assert_eq!(cursor.index(), 3);
            /// ```
            #[cfg(feature = "length")]
            pub fn index(&self) -> usize {
                self.index
            }

            /// Moves the cursor to the next node, wrapping across the
            /// sentinel: at the back node the cursor moves to the sentinel,
            /// and at the sentinel it moves to the front node.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_next_wrapping(); // at 2
            /// cursor.move_next_wrapping(); // at the sentinel
            /// assert_eq!(cursor.current(), None);
            ///
            /// cursor.move_next_wrapping(); // wraps to the front
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_next_wrapping(&mut self) {
                #[cfg(feature = "length")]
                {
                    if self.is_sentinel_node(self.current) {
                        self.index = 0;
                    } else {
                        self.index += 1;
                    }
                }
                self.current = self.next_node();
            }

            /// Moves the cursor to the previous node, wrapping across the
            /// sentinel: at the front node the cursor moves to the sentinel,
            /// and at the sentinel it moves to the back node.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_prev_wrapping(); // at the sentinel
            /// assert_eq!(cursor.current(), None);
            ///
            /// cursor.move_prev_wrapping(); // at the back
            /// assert_eq!(cursor.current(), Some(&2));
            /// ```
            pub fn move_prev_wrapping(&mut self) {
                #[cfg(feature = "length")]
                {
                    if self.is_front_node(self.current) {
                        self.index = self.list.len;
                    } else {
                        self.index -= 1;
                    }
                }
                self.current = self.prev_node();
            }

            /// Moves the cursor to the next node, unless the move would
            /// cross the sentinel boundary.
            ///
            /// It returns `Err(_)` if the cursor is parked at the sentinel,
            /// and the cursor is not moved.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.move_next().is_ok()); // at 2
            /// assert!(cursor.move_next().is_ok()); // at the sentinel
            /// assert!(cursor.move_next().is_err()); // refuses to wrap
            /// assert_eq!(cursor.current(), None);
            /// ```
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if self.is_sentinel_node(self.current) {
                    return Err("`move_next` across the sentinel boundary");
                }
                self.move_next_wrapping();
                Ok(())
            }

            /// Moves the cursor to the previous node, unless the move would
            /// cross the sentinel boundary.
            ///
            /// It returns `Err(_)` if the previous node is the sentinel,
            /// and the cursor is not moved.
            ///
            /// # Examples
            ///
            /// ```
            /// use chain_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.move_prev().is_ok()); // at 2
            /// assert!(cursor.move_prev().is_ok()); // at 1
            /// assert!(cursor.move_prev().is_err()); // refuses to wrap
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                if self.is_sentinel_node(self.prev_node()) {
                    return Err("`move_prev` across the sentinel boundary");
                }
                self.move_prev_wrapping();
                Ok(())
            }

            /// Moves the cursor to the start of the list.
            pub fn move_to_start(&mut self) {
                self.current = self.list.front_node();
                #[cfg(feature = "length")]
                {
                    self.index = 0;
                }
            }

            /// Moves the cursor to the sentinel of the list.
            pub fn move_to_end(&mut self) {
                self.current = self.list.sentinel_node();
                #[cfg(feature = "length")]
                {
                    self.index = self.list.len;
                }
            }

            /// Returns a reference to the current element, or `None` if the
            /// cursor is parked at the sentinel.
            pub fn current(&self) -> Option<&'a T> {
                if self.is_sentinel_node(self.current) {
                    return None;
                }
                // SAFETY: `current` is a valid non-sentinel node, so its
                // element lives as long as the borrow of the list.
                unsafe { Some(&(*self.current.as_ptr()).element) }
            }

            /// Returns a reference to the previous element, or `None` if
            /// the cursor is at the start of the list.
            ///
            /// Parked at the sentinel, this peeks the back element.
            pub fn previous(&self) -> Option<&'a T> {
                let prev = self.prev_node();
                if self.is_sentinel_node(prev) {
                    return None;
                }
                // SAFETY: `prev` is a valid non-sentinel node, so its
                // element lives as long as the borrow of the list.
                unsafe { Some(&(*prev.as_ptr()).element) }
            }
        }

        impl<'a, T: Debug> Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut debug = f.debug_struct(stringify!($CURSOR));
                debug.field("list", &self.list);
                #[cfg(feature = "length")]
                debug.field("index", &self.index);
                debug.finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a List<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            list,
            current,
            #[cfg(feature = "length")]
            index,
        }
    }

    /// Returns `true` if both cursors view the same list.
    pub fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Two cursors are equal if they view the same list and are parked at the
/// same node.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2]);
/// let other = List::from_iter([1, 2]);
///
/// let mut a = list.cursor_start();
/// let b = list.cursor_start();
/// assert_eq!(a, b);
///
/// a.move_next_wrapping();
/// assert_ne!(a, b);
///
/// // Cursors of different lists never compare equal.
/// assert_ne!(list.cursor_start(), other.cursor_start());
/// ```
impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

/// Cursors of the same list are ordered by their position; cursors of
/// different lists are not comparable.
#[cfg(feature = "length")]
impl<'a, T> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        self.index.partial_cmp(&other.index)
    }
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            list,
            current,
            #[cfg(feature = "length")]
            index,
        }
    }

    /// Splices a new node holding `item` right before `next`, without
    /// moving the cursor or adjusting its index.
    fn insert_before(&mut self, next: NonNull<Node<T>>, item: T) {
        let node = Node::alloc(item);
        // SAFETY: `next.prev` and `next` are adjacent nodes of the list.
        unsafe {
            self.list.splice_node(next.as_ref().prev, next, node);
        }
    }

    /// Returns a mutable reference to the current element, or `None` if
    /// the cursor is parked at the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x += 10;
    /// }
    /// assert_eq!(cursor.current(), Some(&11));
    /// ```
    pub fn current_mut(&mut self) -> Option<&'a mut T> {
        if self.is_sentinel_node(self.current) {
            return None;
        }
        // SAFETY: `current` is a valid non-sentinel node, and the list is
        // borrowed mutably for `'a`.
        unsafe { Some(&mut (*self.current.as_ptr()).element) }
    }

    /// Returns a mutable reference to the previous element, or `None` if
    /// the cursor is at the start of the list.
    ///
    /// Parked at the sentinel, this peeks the back element.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// if let Some(x) = cursor.previous_mut() {
    ///     *x += 10;
    /// }
    /// assert_eq!(cursor.previous(), Some(&13));
    /// ```
    pub fn previous_mut(&mut self) -> Option<&'a mut T> {
        let prev = self.prev_node();
        if self.is_sentinel_node(prev) {
            return None;
        }
        // SAFETY: `prev` is a valid non-sentinel node, and the list is
        // borrowed mutably for `'a`.
        unsafe { Some(&mut (*prev.as_ptr()).element) }
    }

    /// Reborrows a read-only cursor parked at the current node.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(
            self.list,
            self.current,
            #[cfg(feature = "length")]
            self.index,
        )
    }

    /// Consumes the cursor, and returns a read-only cursor parked at the
    /// current node for the rest of the list borrow.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(
            self.list,
            self.current,
            #[cfg(feature = "length")]
            self.index,
        )
    }

    /// Provides a read-only view of the list.
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Inserts a new element at the start of the list. The cursor stays
    /// at the node it was parked at.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.push_front(1);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn push_front(&mut self, item: T) {
        self.insert_before(self.list.front_node(), item);
        #[cfg(feature = "length")]
        {
            self.index += 1;
        }
    }

    /// Removes the element at the start of the list and returns it, or
    /// `None` if the list is empty.
    ///
    /// If the cursor was parked at the front node, it moves to the next
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.pop_front(), Some(1));
    /// // The cursor was at the front, so it moved to the new front.
    /// assert_eq!(cursor.current(), Some(&2));
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.list.is_empty() {
            return None;
        }
        let was_front = self.is_front_node(self.current);
        let front = self.list.front_node();
        // SAFETY: `front` is a valid non-sentinel node of the list.
        let node = unsafe { self.list.sever_node(front) };
        if was_front {
            self.current = self.list.front_node();
        } else {
            #[cfg(feature = "length")]
            {
                self.index -= 1;
            }
        }
        Some(Node::into_element(node))
    }

    /// Appends a new element at the end of the list. The cursor stays at
    /// the node it was parked at.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// cursor.push_back(3);
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, item: T) {
        self.insert_before(self.list.sentinel_node(), item);
        #[cfg(feature = "length")]
        {
            if self.is_sentinel_node(self.current) {
                self.index += 1;
            }
        }
    }

    /// Removes the element at the end of the list and returns it, or
    /// `None` if the list is empty.
    ///
    /// If the cursor was parked at the back node, it moves to the
    /// sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.pop_back(), Some(3));
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2]);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.list.is_empty() {
            return None;
        }
        let back = self.list.back_node();
        if self.current == back {
            // The sentinel takes over the old back position, so the index
            // stays put.
            self.current = self.list.sentinel_node();
        } else {
            #[cfg(feature = "length")]
            {
                if self.is_sentinel_node(self.current) {
                    self.index -= 1;
                }
            }
        }
        // SAFETY: `back` is a valid non-sentinel node of the list.
        let node = unsafe { self.list.sever_node(back) };
        Some(Node::into_element(node))
    }

    /// Inserts a new element before the current node, and the cursor
    /// stays at the current node.
    ///
    /// If the cursor is parked at the sentinel, the new element becomes
    /// the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert!(cursor.move_next().is_ok()); // at 3
    /// cursor.insert(2); // [1, 2, 3], the cursor stays at 3
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(4); // inserting at the sentinel appends
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, item: T) {
        self.insert_before(self.current, item);
        #[cfg(feature = "length")]
        {
            self.index += 1;
        }
    }

    /// Removes the current node and returns its element, or `None` if the
    /// cursor is parked at the sentinel. The cursor moves to the next
    /// node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.remove(), Some(1)); // [2, 3], the cursor at 2
    /// assert_eq!(cursor.remove(), Some(2)); // [3], the cursor at 3
    /// assert_eq!(cursor.remove(), Some(3)); // [], the cursor at the sentinel
    /// assert_eq!(cursor.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_sentinel_node(self.current) {
            return None;
        }
        let next = self.next_node();
        // SAFETY: `current` is a valid non-sentinel node of the list. The
        // next node takes over the current index.
        let node = unsafe { self.list.sever_node(self.current) };
        self.current = next;
        Some(Node::into_element(node))
    }

    /// Removes the node before the cursor and returns its element, or
    /// `None` if the cursor is at the start of the list. The cursor stays
    /// at the current node.
    ///
    /// Parked at the sentinel, this removes the back element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// assert_eq!(cursor.backspace(), Some(3)); // [1, 2], still at the sentinel
    /// assert_eq!(cursor.backspace(), Some(2)); // [1]
    /// assert_eq!(cursor.backspace(), Some(1)); // []
    /// assert_eq!(cursor.backspace(), None);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }

    /// Splits the list into two at the current node. Everything from the
    /// current node to the back, both inclusive, is severed and returned
    /// as a new list, or `None` if the cursor is parked at the sentinel.
    ///
    /// The cursor is left parked at the sentinel of `self`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    /// let mut cursor = list.find_mut(&3);
    ///
    /// let tail = cursor.split().unwrap();
    /// assert_eq!(Vec::from_iter(tail), vec![3, 4, 5]);
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2]);
    /// ```
    pub fn split(&mut self) -> Option<List<T>> {
        if self.is_sentinel_node(self.current) {
            return None;
        }
        let front = self.current;
        let back = self.list.back_node();
        #[cfg(feature = "length")]
        let len = self.list.len - self.index;
        // The cursor parks at the sentinel; its index already equals the
        // new length of `self`.
        self.current = self.list.sentinel_node();
        // SAFETY: `front` is a valid non-sentinel node, so `front..=back`
        // is a valid run of the list.
        let chain = unsafe {
            self.list.sever_chain(
                front,
                back,
                #[cfg(feature = "length")]
                len,
            )
        };
        Some(List::from_chain(chain))
    }

    /// Splits the list into two before the current node. Everything
    /// before the current node is severed and returned as a new list, or
    /// `None` if the current node is at the start of the list.
    ///
    /// The cursor stays at the current node, which becomes the front of
    /// `self`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    /// let mut cursor = list.find_mut(&3);
    ///
    /// let head = cursor.split_before().unwrap();
    /// assert_eq!(Vec::from_iter(head), vec![0, 1, 2]);
    ///
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(Vec::from_iter(list), vec![3, 4, 5]);
    /// ```
    pub fn split_before(&mut self) -> Option<List<T>> {
        if self.is_front_node(self.current) {
            return None;
        }
        let front = self.list.front_node();
        let back = self.prev_node();
        #[cfg(feature = "length")]
        let len = std::mem::replace(&mut self.index, 0);
        // SAFETY: `back.next` is the current node, so `front..=back` is a
        // valid run of the list.
        let chain = unsafe {
            self.list.sever_chain(
                front,
                back,
                #[cfg(feature = "length")]
                len,
            )
        };
        Some(List::from_chain(chain))
    }
}

/// A cursor iterator over the elements of a list.
///
/// Unlike [`Iter`], it is cyclic: after the back element it yields `None`
/// once for the sentinel, and then starts over from the front. It is
/// therefore **NOT** a [`FusedIterator`].
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2]);
/// let mut iter = list.cursor_start().into_iter();
///
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None); // the sentinel
/// assert_eq!(iter.next(), Some(&1)); // wrapped around
/// ```
///
/// [`Iter`]: crate::Iter
/// [`FusedIterator`]: std::iter::FusedIterator
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// A cursor iterator over the elements of a list, in reverse order.
///
/// It yields the element before the cursor and then moves backwards. Like
/// [`CursorIter`], it is cyclic: it yields `None` once each time it passes
/// the sentinel.
pub struct CursorBackIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// A cursor iterator over the elements of a list, with mutable references.
///
/// Like [`CursorIter`], it is cyclic and **NOT** a [`FusedIterator`].
///
/// [`FusedIterator`]: std::iter::FusedIterator
pub struct CursorIterMut<'a, T: 'a> {
    pub(crate) cursor: CursorMut<'a, T>,
}

/// A cursor iterator over the elements of a list with mutable references,
/// in reverse order.
///
/// Like [`CursorBackIter`], it is cyclic and **NOT** a [`FusedIterator`].
///
/// [`FusedIterator`]: std::iter::FusedIterator
pub struct CursorBackIterMut<'a, T: 'a> {
    pub(crate) cursor: CursorMut<'a, T>,
}

impl<'a, T> CursorIter<'a, T> {
    /// Consumes the iterator, and returns the underlying cursor.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }

    /// Reverses the direction of the iteration, keeping the position.
    pub fn rev(self) -> CursorBackIter<'a, T> {
        CursorBackIter {
            cursor: self.cursor,
        }
    }

    /// Peeks the element the next call to `next` would yield.
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.current()
    }
}

impl<'a, T> CursorBackIter<'a, T> {
    /// Consumes the iterator, and returns the underlying cursor.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }

    /// Reverses the direction of the iteration, keeping the position.
    pub fn rev(self) -> CursorIter<'a, T> {
        CursorIter {
            cursor: self.cursor,
        }
    }

    /// Peeks the element the next call to `next` would yield.
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.previous()
    }
}

impl<'a, T> CursorIterMut<'a, T> {
    /// Consumes the iterator, and returns the underlying cursor.
    pub fn into_cursor_mut(self) -> CursorMut<'a, T> {
        self.cursor
    }

    /// Reverses the direction of the iteration, keeping the position.
    pub fn rev(self) -> CursorBackIterMut<'a, T> {
        CursorBackIterMut {
            cursor: self.cursor,
        }
    }

    /// Peeks the element the next call to `next` would yield.
    pub fn peek(&mut self) -> Option<&'a mut T> {
        self.cursor.current_mut()
    }
}

impl<'a, T> CursorBackIterMut<'a, T> {
    /// Consumes the iterator, and returns the underlying cursor.
    pub fn into_cursor_mut(self) -> CursorMut<'a, T> {
        self.cursor
    }

    /// Reverses the direction of the iteration, keeping the position.
    pub fn rev(self) -> CursorIterMut<'a, T> {
        CursorIterMut {
            cursor: self.cursor,
        }
    }

    /// Peeks the element the next call to `next` would yield.
    pub fn peek(&mut self) -> Option<&'a mut T> {
        self.cursor.previous_mut()
    }
}

impl<'a, T> From<Cursor<'a, T>> for CursorIter<'a, T> {
    fn from(cursor: Cursor<'a, T>) -> Self {
        Self { cursor }
    }
}

impl<'a, T> From<Cursor<'a, T>> for CursorBackIter<'a, T> {
    fn from(cursor: Cursor<'a, T>) -> Self {
        Self { cursor }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for CursorIterMut<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Self { cursor }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for CursorBackIterMut<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Self { cursor }
    }
}

unsafe impl<'a, T: Sync> Send for Cursor<'a, T> {}

unsafe impl<'a, T: Sync> Sync for Cursor<'a, T> {}

unsafe impl<'a, T: Send> Send for CursorMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for CursorMut<'a, T> {}

unsafe impl<'a, T: Sync> Send for CursorIter<'a, T> {}

unsafe impl<'a, T: Sync> Sync for CursorIter<'a, T> {}

unsafe impl<'a, T: Send> Send for CursorIterMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for CursorIterMut<'a, T> {}

unsafe impl<'a, T: Sync> Send for CursorBackIter<'a, T> {}

unsafe impl<'a, T: Sync> Sync for CursorBackIter<'a, T> {}

unsafe impl<'a, T: Send> Send for CursorBackIterMut<'a, T> {}

unsafe impl<'a, T: Sync> Sync for CursorBackIterMut<'a, T> {}
