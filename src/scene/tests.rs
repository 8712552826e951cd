//! Scene domain: tests for seeded obstacle placement.

use super::spawn::obstacle_positions;

#[test]
fn test_placement_is_deterministic_for_a_seed() {
    let a = obstacle_positions(42, 5, 20.0);
    let b = obstacle_positions(42, 5, 20.0);
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    let a = obstacle_positions(1, 5, 20.0);
    let b = obstacle_positions(2, 5, 20.0);
    assert_ne!(a, b);
}

#[test]
fn test_positions_stay_in_the_spawn_region() {
    let range = 20.0;
    for position in obstacle_positions(7, 50, range) {
        assert!(position.x >= -range && position.x < range);
        assert!(position.z >= -range && position.z < range);
        assert_eq!(position.y, 1.0);
    }
}

#[test]
fn test_count_is_respected() {
    assert_eq!(obstacle_positions(3, 0, 20.0).len(), 0);
    assert_eq!(obstacle_positions(3, 5, 20.0).len(), 5);
    assert_eq!(obstacle_positions(3, 12, 20.0).len(), 12);
}

#[test]
fn test_count_does_not_reorder_earlier_draws() {
    // Growing the count extends the sequence without changing the prefix,
    // since draws come from one generator in creation order.
    let five = obstacle_positions(9, 5, 20.0);
    let eight = obstacle_positions(9, 8, 20.0);
    assert_eq!(&eight[..5], &five[..]);
}
