//! This crate provides a doubly-linked list with owned nodes, arranged as
//! a cycle through a payload-free sentinel node.
//!
//! The [`List`] allows inserting and removing elements at any given
//! position in constant time. In compromise, accessing or mutating
//! elements at any position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([3, 1, 4, 1, 5, 9, 2, 6]);
//!
//! let mut cursor = list.find_mut(&9); // search, then edit in place
//! assert_eq!(cursor.current(), Some(&9));
//! assert_eq!(cursor.remove(), Some(9));
//!
//! assert_eq!(list.remove(&1), 2); // remove by value, all occurrences
//!
//! list.sort(); // stable in-place merge sort
//! assert_eq!(Vec::from_iter(list), vec![2, 3, 4, 5, 6]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                    Sentinel node    │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║ sentinel  ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║   (len)   ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a `sentinel` box that owns the payload-free sentinel node;
//! - a length field `len` indicating the length of the list. It can be
//!   disabled by disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! chain_list = { default-features = false }
//! ```
//!
//! Each element of the list `List<T>` lives in a node allocated on the
//! heap, which contains:
//! - the `next` pointer that points to the next node (or the sentinel if
//!   it is the last element in the list);
//! - the `prev` pointer that points to the previous node (or the sentinel
//!   if it is the first element in the list);
//! - the actual payload `T`, except in the sentinel node.
//!
//! Note that the sentinel node has *NO* payload to save memory.
//!
//! In an empty list, the `next` and `prev` pointers of the sentinel point
//! to itself. As elements are inserted, `sentinel.next` points to the
//! first element and `sentinel.prev` points to the last element of the
//! list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0,
//! 1, ..., *n* - 1, and the sentinel node is always indexed by *n*. (In
//! an empty list, the sentinel node is indexed by 0, which is equal to
//! its length 0).
//!
//! With the `serde` feature enabled, the list serializes as a sequence of
//! its elements.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended iterators and iterate the list like an array
//! (fused and non-cyclic). [`IterMut`] provides mutability of the
//! elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide
//! more flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can move forward or
//! backward over the list. In a list with length *n*, there are *n* + 1
//! valid locations for the cursor, indexed by 0, 1, ..., *n*, where *n*
//! is the sentinel node of the list.
//!
//! Cursors can also be used as iterators, but are cyclic and not fused.
//!
//! **Warning**: Though cursor iterators have methods `rev`, they **DO
//! NOT** behave as double-ended iterators. Instead, they create a new
//! iterator that reverses the moving direction of the cursor.
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! // Create a cursor iterator
//! let mut cursor_iter = list.cursor_start().into_iter();
//! assert_eq!(cursor_iter.next(), Some(&1));
//! assert_eq!(cursor_iter.next(), Some(&2));
//! assert_eq!(cursor_iter.next(), Some(&3));
//! assert_eq!(cursor_iter.next(), None);
//! assert_eq!(cursor_iter.next(), Some(&1)); // Not fused and cyclic
//!
//! // Create a cursor back iterator which reverses the moving direction
//! // of the cursor
//! let mut cursor_iter = cursor_iter.rev();
//! assert_eq!(cursor_iter.next(), Some(&1)); // Iterate in reversed direction
//! assert_eq!(cursor_iter.next(), None); // Pass through the sentinel boundary
//! assert_eq!(cursor_iter.next(), Some(&3)); // Continue from the back
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides many useful ways to mutate the list in any
//! position.
//! - [`insert`]: insert a new item at the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`split`]: split the list from the cursor position to the end;
//! - [`split_before`]: split the list from the start to the cursor;
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! cursor.move_next_wrapping();
//! assert_eq!(cursor.remove(), Some(2)); // becomes [5, 1, 3, 4], points to 3
//! assert_eq!(cursor.current(), Some(&3));
//!
//! assert_eq!(cursor.backspace(), Some(1)); // becomes [5, 3, 4], points to 3
//! assert_eq!(cursor.current(), Some(&3));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 3, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Searching and Removing
//!
//! Elements can be located and unlinked without touching the rest of the
//! list.
//! - [`find`] / [`find_mut`]: walk to the first element equal to a value
//!   and return a cursor parked at it;
//! - [`remove`][List::remove]: unlink every element equal to a value;
//! - [`drain`]: unlink a range of positions in one splice and iterate
//!   over the removed elements;
//! - [`drain_filter`]: unlink the elements matching a predicate as the
//!   returned iterator walks the list.
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 2, 3, 2, 4]);
//!
//! assert_eq!(list.remove(&2), 3); // [1, 3, 4]
//!
//! let drained: Vec<_> = list.drain(1..).collect();
//! assert_eq!(drained, vec![3, 4]);
//! assert_eq!(Vec::from_iter(list), vec![1]);
//! ```
//!
//! # Sorting
//!
//! The list can be sorted with [`sort`], [`sort_by`] and [`sort_by_key`].
//! The sort is a stable merge sort running directly on the node links: it
//! splits a run in halves with a pair of runners, merges sorted runs by
//! splicing nodes behind a tail cursor, and never moves or copies an
//! element. It takes *O*(*n* \* log(*n*)) time, *O*(log(*n*)) stack and
//! no allocation, and references into the list stay valid across it.
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//!
//! let mut list = List::from([3, 1, 2]);
//!
//! list.sort();
//! assert_eq!(list.into_vec(), vec![1, 2, 3]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`split_before`]: crate::list::cursor::CursorMut::split_before
//! [`find`]: crate::List::find
//! [`find_mut`]: crate::List::find_mut
//! [List::remove]: crate::List::remove
//! [`drain`]: crate::List::drain
//! [`drain_filter`]: crate::List::drain_filter
//! [`sort`]: crate::List::sort
//! [`sort_by`]: crate::List::sort_by
//! [`sort_by_key`]: crate::List::sort_by_key

#[doc(inline)]
pub use list::algorithms::{Drain, DrainFilter};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
