use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod algorithms;
pub mod cursor;
pub mod iterator;

#[cfg(feature = "serde")]
mod serde;

/// The `List` is a doubly-linked list with owned nodes. Its chain is closed
/// into a cycle through one payload-erased sentinel node, so every link in
/// the structure is non-null and no operation needs an empty-list special
/// case.
///
/// Inserting and removing elements at a known position takes constant time.
/// In compromise, reaching a position by value or by walking takes *O*(*n*)
/// time.
///
/// The `List` contains:
/// - a pointer `sentinel` that owns the sentinel node;
/// - a length field `len` counting the elements. It can be disabled by
///   disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// chain_list = { default-features = false }
/// ```
///   Without the feature, [`List::len`] falls back to counting traversal.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed run of list nodes, both inclusive;
/// - `start..end`: a half-open run of list nodes, left inclusive and right
///   exclusive (possibly the sentinel).
pub struct List<T> {
    sentinel: Box<Node<Erased>>,
    #[cfg(feature = "length")]
    /// the number of elements in the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
struct Erased;

/// A run of nodes severed from a list, used in splitting and splicing.
///
/// While severed, reading `front.prev` and `back.next` is invalid.
pub(crate) struct Chain<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn sentinel_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.sentinel.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.next` is always valid (either the sentinel itself,
        // or the first element of the list).
        unsafe { self.sentinel_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.prev` is always valid (either the sentinel itself,
        // or the last element of the list).
        unsafe { self.sentinel_node().as_ref().prev }
    }

    /// Sever the single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list.
    ///
    /// If `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn sever_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Splice a loose node `node` into the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether `prev` and `next` are adjacent (only
    /// in `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn splice_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Sever the run of nodes `front..=back` from the list, and return the
    /// severed chain.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a
    /// valid run (i.e. `front` must **NOT** be at the right of `back`), or
    /// whether it belongs to the list.
    ///
    /// If `front..=back` is not a valid run or it does not belong to the
    /// list, this function call will make the list ill-formed.
    pub(crate) unsafe fn sever_chain(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        #[cfg(feature = "length")] len: usize,
    ) -> Chain<T> {
        #[cfg(feature = "length")]
        {
            self.len -= len;
        }
        connect(front.as_ref().prev, back.as_ref().next);
        Chain::new(
            front,
            back,
            #[cfg(feature = "length")]
            len,
        )
    }

    /// Splice a severed chain into the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether `prev` and `next` are adjacent (only
    /// in `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn splice_chain(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        chain: Chain<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, chain.front);
        connect(chain.back, next);
        #[cfg(feature = "length")]
        {
            self.len += chain.len;
        }
    }

    /// Sever every node from the list, or return `None` if the list is
    /// empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid
    /// run.
    pub(crate) fn sever_all(&mut self) -> Option<Chain<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe {
            Some(self.sever_chain(
                self.front_node(),
                self.back_node(),
                #[cfg(feature = "length")]
                self.len,
            ))
        }
    }

    /// Construct a list around a severed chain.
    ///
    /// It is safe because the chain is guaranteed to be a valid run at
    /// construction.
    pub(crate) fn from_chain(chain: Chain<T>) -> Self {
        let mut list = List::new();
        unsafe {
            list.splice_chain(list.sentinel_node(), list.sentinel_node(), chain);
        }
        list
    }

    /// Like [`List::sever_all`], but consumes the list.
    pub(crate) fn into_chain(mut self) -> Option<Chain<T>> {
        self.sever_all()
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use chain_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let sentinel = new_sentinel();
        #[cfg(feature = "length")]
        let len = 0;
        let _marker = PhantomData;
        Self {
            sentinel,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.sentinel_node()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// Without the `length` feature, this operation computes in *O*(*n*)
    /// time by traversing the whole list.
    #[cfg(not(feature = "length"))]
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.cursor_start_mut().current_mut()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// The back element is the one the sentinel's `prev` link reaches, i.e.
    /// the last element in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.cursor_end_mut().previous_mut()
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Resizes the list in place so that its length is equal to `new_len`.
    ///
    /// If `new_len` is greater than the current length, the list is extended
    /// at the back with default values. If `new_len` is less than the
    /// current length, the list is truncated from the back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(|`new_len` - `len`|) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.resize(5);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 0, 0]);
    ///
    /// list.resize(2);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the list in place so that its length is equal to `new_len`,
    /// filling each new slot with the result of calling `generator`.
    ///
    /// If `new_len` is less than the current length, the list is truncated
    /// from the back and `generator` is never called.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(|`new_len` - `len`|) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// let mut next = 0;
    /// list.resize_with(4, || {
    ///     next += 1;
    ///     next
    /// });
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn resize_with<F>(&mut self, new_len: usize, mut generator: F)
    where
        F: FnMut() -> T,
    {
        let len = self.len();
        if new_len < len {
            for _ in new_len..len {
                self.pop_back();
            }
        } else {
            for _ in len..new_len {
                self.push_back(generator());
            }
        }
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is parked at the sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor at the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.sentinel_node(),
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is parked at the sentinel if the list is empty.
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
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor with editing operations at the sentinel.
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
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.previous(), Some(&15));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(
            self,
            self.sentinel_node(),
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides a forward iterator.
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
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
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
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`.
    /// After this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list1 = List::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = List::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list1.append(&mut list2);
    ///
    /// let mut iter = list1.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(chain) = other.sever_all() {
            // `self.back_node()` and `self.sentinel_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.splice_chain(self.back_node(), self.sentinel_node(), chain) }
        }
    }

    /// Moves all elements from `other` to the beginning of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`.
    /// After this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list1 = List::new();
    /// list1.push_back('a');
    ///
    /// let mut list2 = List::new();
    /// list2.push_back('b');
    /// list2.push_back('c');
    ///
    /// list2.prepend(&mut list1);
    ///
    /// let mut iter = list2.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list1.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(chain) = other.sever_all() {
            // `self.sentinel_node()` and `self.front_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.splice_chain(self.sentinel_node(), self.front_node(), chain) }
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a loose node holding `element`.
    ///
    /// Its links are dangling until the node is spliced into a list.
    pub(crate) fn alloc(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Chain<T> {
    /// It is unsafe because it must be guaranteed that `front..=back` is
    /// a valid run and its length must be equal to `len` (with
    /// `#[cfg(feature = "length")]`).
    unsafe fn new(
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        #[cfg(feature = "length")] len: usize,
    ) -> Self {
        let _marker = PhantomData;
        #[cfg(feature = "length")]
        debug_assert!(len > 0, "Cannot sever a run of length 0");
        Self {
            front,
            back,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }
}

fn new_sentinel() -> Box<Node<Erased>> {
    let sentinel_ptr = Node::alloc(Erased::default());
    // SAFETY:
    // - `sentinel.next` and `sentinel.prev` are initialized immediately after
    //   creating the node;
    // - `sentinel.element` is never read, so it is erased out.
    let mut sentinel = unsafe { Box::from_raw(sentinel_ptr.as_ptr()) };
    sentinel.next = sentinel_ptr;
    sentinel.prev = sentinel_ptr;
    sentinel
}

pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use rand::{thread_rng, Rng};
    use std::cell::RefCell;
    use std::iter::FromIterator;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// Walk the whole cycle and check that every adjacent pair of links
    /// agrees, and that the node count matches the length.
    fn check_links<T>(list: &List<T>) {
        unsafe {
            let sentinel = list.sentinel_node();
            let mut node = sentinel.as_ref().next;
            let mut count = 0;
            while node != sentinel {
                assert_eq!(node.as_ref().prev.as_ref().next, node);
                node = node.as_ref().next;
                count += 1;
            }
            assert_eq!(sentinel.as_ref().prev.as_ref().next, sentinel);
            assert_eq!(count, list.len());
        }
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_append_and_prepend() {
        let mut list = List::from_iter(0..3);
        let mut other = List::from_iter(3..5);

        list.append(&mut other);
        assert!(other.is_empty());
        assert_eq!(list, List::from_iter(0..5));
        check_links(&list);

        let mut front = List::from_iter(10..12);
        list.prepend(&mut front);
        assert!(front.is_empty());
        assert_eq!(list, List::from_iter((10..12).chain(0..5)));
        check_links(&list);

        // Appending an empty list leaves everything untouched.
        list.append(&mut List::new());
        list.prepend(&mut List::new());
        assert_eq!(list, List::from_iter((10..12).chain(0..5)));

        // Appending onto an empty list adopts the whole chain.
        let mut list = List::new();
        list.append(&mut List::from_iter(0..3));
        assert_eq!(list, List::from_iter(0..3));
        check_links(&list);
    }

    #[test]
    fn list_resize() {
        let mut list: List<i32> = List::new();

        list.resize(3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 0, 0]);

        list.iter_mut().zip(1..).for_each(|(slot, n)| *slot = n);
        list.resize(5);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 0, 0]);
        check_links(&list);

        list.resize(2);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2]);
        check_links(&list);

        list.resize(2);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2]);

        list.resize(0);
        assert!(list.is_empty());
    }

    #[test]
    fn list_resize_with() {
        let mut list: List<i32> = List::new();
        let mut next = 0;
        list.resize_with(4, || {
            next += 1;
            next
        });
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);

        // Shrinking never calls the generator.
        let mut list = List::from_iter(0..5);
        list.resize_with(2, || unreachable!());
        assert_eq!(Vec::from_iter(list), vec![0, 1]);
    }

    #[test]
    fn resize_with_panicking_generator() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut calls = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            list.resize_with(8, || {
                if calls == 2 {
                    panic!("generator failed");
                }
                calls += 1;
                calls + 10
            })
        }));
        assert!(result.is_err());
        // The elements appended before the panic stay linked.
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 11, 12]);
        check_links(&list);
    }

    #[cfg(feature = "length")]
    #[test]
    fn list_len() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.len(), 1);

        list.pop_front();
        assert_eq!(list.len(), 0);

        list.append(&mut List::from_iter(0..5));
        assert_eq!(list.len(), 5);

        assert_eq!(list.find_mut(&3).remove(), Some(3));
        assert_eq!(list.len(), 4);

        list.drain(1..3);
        assert_eq!(list.len(), 2);

        list.resize(6);
        assert_eq!(list.len(), 6);

        list.prepend(&mut List::from_iter(7..10));
        assert_eq!(list.len(), 9);

        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn randomized_ops_match_vec() {
        let mut rng = thread_rng();
        for _ in 0..8 {
            let mut list = List::new();
            let mut model: Vec<i32> = Vec::new();
            for _ in 0..500 {
                match rng.gen_range(0..5) {
                    0 => {
                        let value = rng.gen_range(0..100);
                        list.push_back(value);
                        model.push(value);
                    }
                    1 => {
                        let value = rng.gen_range(0..100);
                        list.push_front(value);
                        model.insert(0, value);
                    }
                    2 => {
                        assert_eq!(list.pop_back(), model.pop());
                    }
                    3 => {
                        let expected = if model.is_empty() {
                            None
                        } else {
                            Some(model.remove(0))
                        };
                        assert_eq!(list.pop_front(), expected);
                    }
                    _ => {
                        assert_eq!(list.front(), model.first());
                        assert_eq!(list.back(), model.last());
                    }
                }
                assert_eq!(list.len(), model.len());
            }
            check_links(&list);
            assert!(list.iter().eq(model.iter()));
        }
    }
}
