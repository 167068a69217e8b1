use proptest::prelude::*;
use toerings::window::BoundedWindow;

proptest! {
    #[test]
    fn window_retains_most_recent_pushes_in_order(
        limit in 0usize..16,
        values in proptest::collection::vec(any::<i32>(), 0..64)
    ) {
        let mut window = BoundedWindow::new(limit);
        for (pushed, value) in values.iter().enumerate() {
            window.push(*value);
            prop_assert!(window.len() <= limit);
            prop_assert_eq!(window.len(), (pushed + 1).min(limit));
        }

        let keep = values.len().min(limit);
        let expected = values[values.len() - keep..].to_vec();
        prop_assert_eq!(window.to_vec(), expected);
    }
}
