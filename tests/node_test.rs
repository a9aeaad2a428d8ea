//! Tests for the Node record contract

use bst_node::{Node, NodeArena};
use rstest::rstest;

// ============================================================
// Construction
// ============================================================

#[rstest]
#[case(0)]
#[case(5)]
#[case(-17)]
fn given_value_when_constructed_then_count_zero_and_no_children(#[case] value: i64) {
    let node = Node::new(value);

    assert_eq!(node.value_copy(), value);
    assert_eq!(node.count(), 0);
    assert!(node.left().is_none());
    assert!(node.right().is_none());
}

#[test]
fn given_no_value_when_defaulted_then_holds_type_default() {
    let node: Node<u8> = Node::default();
    assert_eq!(*node.value(), 0);
    assert_eq!(node.count(), 0);
}

// ============================================================
// Value accessors
// ============================================================

#[rstest]
#[case("alpha")]
#[case("")]
fn given_new_value_when_set_then_value_round_trips(#[case] value: &str) {
    let mut node = Node::new(String::from("initial"));

    node.set_value(value.to_string());

    assert_eq!(node.value_copy(), value);
}

#[test]
fn given_value_mut_when_written_then_read_accessor_observes_write() {
    let mut node = Node::new(10);

    *node.value_mut() += 5;

    assert_eq!(*node.value(), 15);
}

// ============================================================
// Counter
// ============================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(1_000)]
fn given_n_increments_then_count_is_n(#[case] n: u32) {
    let mut node = Node::new(());
    for _ in 0..n {
        node.increment_count();
    }
    assert_eq!(node.count(), n);
}

#[test]
fn given_zero_count_when_decremented_then_wraps_to_u32_max() {
    let mut node = Node::new(());

    node.decrement_count();

    assert_eq!(node.count(), u32::MAX);
}

// ============================================================
// Links
// ============================================================

#[test]
fn given_links_when_set_then_same_handles_are_returned() {
    let mut arena = NodeArena::new();
    let left = arena.insert(1);
    let right = arena.insert(3);
    let mut node = Node::new(2);

    node.set_left(Some(left));
    node.set_right(Some(right));

    assert_eq!(node.left(), Some(left));
    assert_eq!(node.right(), Some(right));
}

#[test]
fn given_link_slot_handle_when_reassigned_then_read_accessor_observes_it() {
    let mut arena = NodeArena::new();
    let first = arena.insert(1);
    let second = arena.insert(2);
    let mut node = Node::new(0);
    node.set_right(Some(first));

    let slot = node.right_mut();
    *slot = Some(second);

    assert_eq!(node.right(), Some(second));
}

#[test]
fn given_link_overwritten_then_previous_child_still_lives_in_arena() {
    let mut arena = NodeArena::new();
    let first = arena.insert(1);
    let second = arena.insert(2);
    let mut node = Node::new(0);
    node.set_left(Some(first));

    node.set_left(Some(second));

    assert!(arena.contains(first));
    assert_eq!(*arena.node(first).unwrap().value(), 1);
}

// ============================================================
// End-to-end scenario
// ============================================================

#[test]
fn given_root_five_with_left_three_when_counting_then_matches_expected_states() {
    // Arrange
    let mut arena = NodeArena::new();
    let root = arena.insert(5);
    {
        let node = arena.node(root).unwrap();
        assert_eq!(*node.value(), 5);
        assert_eq!(node.count(), 0);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    // Act: link a left child holding 3
    let three = arena.insert(3);
    arena.set_left(root, Some(three)).unwrap();

    // Assert
    let left = arena.node(root).unwrap().left().unwrap();
    assert_eq!(left, three);
    assert_eq!(*arena.node(left).unwrap().value(), 3);

    // Act: count twice up, once down
    arena.increment_count(root).unwrap();
    arena.increment_count(root).unwrap();
    assert_eq!(arena.node(root).unwrap().count(), 2);
    arena.decrement_count(root).unwrap();

    // Assert
    assert_eq!(arena.node(root).unwrap().count(), 1);
}
