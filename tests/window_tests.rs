use std::collections::VecDeque;

use toerings::window::{BoundedWindow, push_bounded};

#[test]
fn push_below_limit_keeps_everything() {
    let mut window = BoundedWindow::new(3);
    window.push(1);
    window.push(2);
    assert_eq!(window.to_vec(), vec![1, 2]);
    assert!(!window.is_full());
}

#[test]
fn push_at_capacity_evicts_exactly_the_oldest() {
    let mut window = BoundedWindow::new(3);
    window.extend([1, 2, 3]);
    assert!(window.is_full());

    window.push(4);
    assert_eq!(window.to_vec(), vec![2, 3, 4]);
    assert_eq!(window.latest(), Some(&4));
}

#[test]
fn zero_limit_stays_empty() {
    let mut window = BoundedWindow::new(0);
    window.push("sample");
    assert!(window.is_empty());

    let mut raw = VecDeque::new();
    push_bounded(&mut raw, 1.0, 0);
    assert!(raw.is_empty());
}

#[test]
fn push_bounded_trims_oversized_input_to_limit() {
    let mut raw: VecDeque<i32> = (0..10).collect();
    push_bounded(&mut raw, 10, 4);
    assert_eq!(raw, VecDeque::from([7, 8, 9, 10]));
}

#[test]
fn shrinking_limit_drops_oldest_samples() {
    let mut window = BoundedWindow::new(5);
    window.extend(0..5);
    window.set_limit(2);
    assert_eq!(window.limit(), 2);
    assert_eq!(window.to_vec(), vec![3, 4]);
}

#[test]
fn unbounded_limit_does_not_reserve_up_front() {
    let mut window = BoundedWindow::<u8>::new(usize::MAX);
    window.extend([1, 2, 3]);
    assert_eq!(window.limit(), usize::MAX);
    assert_eq!(window.to_vec(), vec![1, 2, 3]);
    assert!(!window.is_full());
}
