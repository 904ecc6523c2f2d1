use super::*;

#[test]
fn test_node() {
    let mut node: Node<u64, u64> = Node::new(10, 200, None);

    // fresh nodes enter the tree red, fixups recolor them.
    assert_eq!(node.is_black(), false);
    assert_eq!(node.left, None);
    assert_eq!(node.right, None);
    assert_eq!(node.parent, None);

    node.set_black();
    assert_eq!(node.is_black(), true);
    node.set_red();
    assert_eq!(node.is_black(), false);

    let old = node.set_value(300);
    assert_eq!(old, 200);
    assert_eq!(node.value, 300);
    assert_eq!(node.key, 10);
}

#[test]
fn test_node_links() {
    let mut node: Node<u64, u64> = Node::new(10, 200, Some(7));

    assert_eq!(node.parent, Some(7));
    node.left = Some(1);
    node.right = Some(2);
    assert_eq!(node.left, Some(1));
    assert_eq!(node.right, Some(2));
}
