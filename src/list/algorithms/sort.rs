use std::ptr::NonNull;

use crate::list::{connect, List, Node};

/// Sorts the list in place by relinking its nodes.
///
/// `less` must be a strict weak ordering. Elements for which neither
/// `less(a, b)` nor `less(b, a)` holds keep their relative order, so the
/// sort is stable.
pub fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    #[cfg(feature = "length")]
    {
        if list.len < 2 {
            return;
        }
    }
    #[cfg(not(feature = "length"))]
    {
        if list.is_empty() || list.front_node() == list.back_node() {
            return;
        }
    }
    let (start, end) = (list.front_node(), list.sentinel_node());
    // SAFETY: `start..end` spans every node of the list, and the list
    // holds at least two elements.
    unsafe {
        sort_range(start, end, &mut less);
    }
}

/// Sorts the run `start..end` and returns its new front node.
///
/// The run must contain at least two nodes. The links of the nodes
/// surrounding the run are kept consistent, so on return the node before
/// the run points at the returned front, and the run's new back points at
/// `end`.
unsafe fn sort_range<T, F>(
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mid = mid_of_range(start, end);

    let mut first = start;
    if start != mid && start.as_ref().next != mid {
        first = sort_range(start, mid, less);
    }
    let mut second = mid;
    if mid != end && mid.as_ref().next != end {
        second = sort_range(mid, end, less);
    }

    merge_runs(first, second, end, less)
}

/// Walks `start..end` with two pointers, the faster one advancing two
/// nodes per step, and returns the node halfway through the run. The
/// front half `start..mid` ends up one node shorter for odd lengths.
unsafe fn mid_of_range<T>(start: NonNull<Node<T>>, end: NonNull<Node<T>>) -> NonNull<Node<T>> {
    let mut mid = start;
    let mut fast = start;
    while fast != end {
        fast = fast.as_ref().next;
        if fast != end {
            fast = fast.as_ref().next;
            mid = mid.as_ref().next;
        }
    }
    mid
}

/// Merges the sorted runs `first..mid` and `mid..end` into one sorted run
/// and returns its new front node.
///
/// Both runs must be non-empty. Instead of collecting onto a scratch
/// node, the merge appends to a tail cursor that starts at the node
/// before `first` (the sentinel, for a run at the front of the list) and
/// always points at the last node merged so far.
unsafe fn merge_runs<T, F>(
    first: NonNull<Node<T>>,
    mid: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let before = first.as_ref().prev;
    let left_back = mid.as_ref().prev;

    let (mut left, mut right) = (first, mid);
    let mut tail = before;
    while left != mid && right != end {
        // Take from the left run on ties to keep the sort stable.
        if less(&right.as_ref().element, &left.as_ref().element) {
            let next = right.as_ref().next;
            connect(tail, right);
            tail = right;
            right = next;
        } else {
            let next = left.as_ref().next;
            connect(tail, left);
            tail = left;
            left = next;
        }
    }
    if left != mid {
        // The rest of the left run is still chained up to `left_back`,
        // but its old back pointed into the right run.
        connect(tail, left);
        connect(left_back, end);
    } else {
        // The rest of the right run already ends at `end`.
        connect(tail, right);
    }
    before.as_ref().next
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    // End-to-end coverage lives next to the public sort methods; these
    // check the split point through the lens of stability at tiny sizes.

    #[test]
    fn two_equal_elements_keep_their_order() {
        let mut list = List::from_iter([(1, 'a'), (1, 'b')]);
        list.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(list.into_vec(), vec![(1, 'a'), (1, 'b')]);
    }

    #[test]
    fn odd_length_splits_sort() {
        for len in [3usize, 5, 7, 9] {
            let mut list = List::from_iter((0..len).rev());
            list.sort();
            assert!(list.iter().copied().eq(0..len));
        }
    }
}
