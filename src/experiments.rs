//! A doubly-linked list with no `unsafe`, as an experiment in replacing
//! the raw-pointer [`List`](crate::List) with borrow-checked plumbing.
//!
//! Each node is owned by two [`StaticRc`] halves: the forward half lives
//! in the predecessor's `next` field (or in the list's `front` for the
//! head), the backward half in the successor's `prev` field (or in the
//! list's `back` for the tail). Rejoining the halves is the proof that a
//! node is fully unlinked, at which point its element can be taken out.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

pub struct List<'id, T> {
    front: Option<NodePtr<'id, T>>,
    back: Option<NodePtr<'id, T>>,
    len: usize,
}

struct Node<'id, T> {
    prev: Option<NodePtr<'id, T>>,
    next: Option<NodePtr<'id, T>>,
    element: T,
}

impl<'id, T> Node<'id, T> {
    fn alloc(element: T) -> (NodePtr<'id, T>, NodePtr<'id, T>) {
        let node = Node {
            prev: None,
            next: None,
            element,
        };
        Full::split(Full::new(GhostCell::new(node)))
    }

    fn free(forward: NodePtr<'id, T>, backward: NodePtr<'id, T>) -> T {
        Full::into_box(Full::join(forward, backward))
            .into_inner()
            .element
    }
}

impl<'id, T> Default for List<'id, T> {
    fn default() -> Self {
        Self {
            front: None,
            back: None,
            len: 0,
        }
    }
}

impl<'id, T> List<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.front
            .as_ref()
            .map(|node| &node.deref().borrow(token).element)
    }

    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.back
            .as_ref()
            .map(|node| &node.deref().borrow(token).element)
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (forward, backward) = Node::alloc(element);
        match self.front.take() {
            Some(head) => {
                head.deref().borrow_mut(token).prev = Some(backward);
                forward.deref().borrow_mut(token).next = Some(head);
            }
            None => self.back = Some(backward),
        }
        self.front = Some(forward);
        self.len += 1;
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (forward, backward) = Node::alloc(element);
        match self.back.take() {
            Some(tail) => {
                tail.deref().borrow_mut(token).next = Some(forward);
                backward.deref().borrow_mut(token).prev = Some(tail);
            }
            None => self.front = Some(forward),
        }
        self.back = Some(backward);
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let forward = self.front.take()?;
        let backward = match forward.deref().borrow_mut(token).next.take() {
            Some(next) => {
                let backward = next.deref().borrow_mut(token).prev.take().unwrap();
                self.front = Some(next);
                backward
            }
            None => self.back.take().unwrap(),
        };
        self.len -= 1;
        Some(Node::free(forward, backward))
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let backward = self.back.take()?;
        let forward = match backward.deref().borrow_mut(token).prev.take() {
            Some(prev) => {
                let forward = prev.deref().borrow_mut(token).next.take().unwrap();
                self.back = Some(prev);
                forward
            }
            None => self.front.take().unwrap(),
        };
        self.len -= 1;
        Some(Node::free(forward, backward))
    }

    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::List;
    use ghost_cell::GhostToken;

    #[test]
    fn deque_order() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            assert!(list.is_empty());

            list.push_back(2, &mut token);
            list.push_back(3, &mut token);
            list.push_front(1, &mut token);
            assert_eq!(list.len(), 3);
            assert_eq!(list.front(&token), Some(&1));
            assert_eq!(list.back(&token), Some(&3));

            assert_eq!(list.pop_front(&mut token), Some(1));
            assert_eq!(list.pop_back(&mut token), Some(3));
            assert_eq!(list.pop_back(&mut token), Some(2));
            assert_eq!(list.pop_back(&mut token), None);
            assert!(list.is_empty());
        })
    }

    #[test]
    fn clear_empties() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            for i in 0..10 {
                list.push_back(i, &mut token);
            }
            assert_eq!(list.len(), 10);
            list.clear(&mut token);
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);
        })
    }
}
