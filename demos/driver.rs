//! A walking tour of the list: resizing, cursor edits, draining, and the
//! in-place sort, printed step by step.

use chain_list::List;
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::iter::FromIterator;

fn print(list: &List<i32>) {
    for x in list.iter() {
        print!("{} ", x);
    }
    println!();
}

fn print_reverse(list: &List<i32>) {
    for x in list.iter().rev() {
        print!("{} ", x);
    }
    println!();
}

fn is_sorted(list: &List<i32>) -> bool {
    list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b)
}

fn main() {
    let mut list: List<i32> = List::new();

    // Grow with default values, then fill 1..=100 through a mutable iterator.
    list.resize(100);
    let mut next = 0;
    for slot in list.iter_mut() {
        next += 1;
        *slot = next;
    }
    print(&list);
    println!("and backwards:");
    print_reverse(&list);

    println!("resize to a lower size:");
    list.resize(50);
    print(&list);

    println!("reset the list");
    list.drain(..);

    println!("append a vector twice, the second time only its front:");
    list.push_back(100);
    let values = Vec::from_iter(0..50);
    list.extend(&values);
    list.extend(values.iter().take(10));
    print(&list);

    let mut cursor = list.find_mut(&10);
    println!(
        "element 10 {}",
        if cursor.current().is_some() {
            "found"
        } else {
            "not found"
        }
    );
    println!("delete element 10");
    cursor.remove();
    print(&list);
    println!(
        "element 10 {}",
        if list.contains(&10) { "found" } else { "not found" }
    );

    println!("remove odd elements:");
    list.drain_filter(|x| *x % 2 == 1).count();
    print(&list);

    println!("reinitialize with a shuffled vector");
    let mut values = list.to_vec();
    values.shuffle(&mut thread_rng());
    let mut list = List::from_iter(values);
    print(&list);

    println!(
        "the list is {}",
        if is_sorted(&list) { "sorted" } else { "not sorted" }
    );
    println!("sort, then check again:");
    list.sort();
    print(&list);
    println!(
        "the list is {}",
        if is_sorted(&list) { "sorted" } else { "not sorted" }
    );

    let total: i32 = list.iter().rev().sum();
    println!("list sum: {}", total);

    // Walk backwards, printing each element and bumping it in place.
    let mut list = List::from_iter([1, 2, 3, 4, 5]);
    for x in list.iter_mut().rev() {
        print!("{} ", x);
        *x += 1;
    }
    println!();
    print(&list);
}
