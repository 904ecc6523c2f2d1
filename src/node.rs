// Node slots are owned by the map's slab arena and referenced by slot
// index. `None` stands for the nil/leaf position.
pub(crate) type Slot = Option<usize>;

// Node corresponds to a single entry in TreeMap instance.
//
// Child links are the owning side of the graph, `parent` is a non-owning
// back-reference used for successor/predecessor walks and rebalancing.
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub black: bool,    // store: black or red
    pub left: Slot,     // store: left child
    pub right: Slot,    // store: right child
    pub parent: Slot,   // store: back-reference, never followed for drop
}

impl<K, V> Node<K, V> {
    // New nodes start red and get recolored by the insert fixup.
    pub fn new(key: K, value: V, parent: Slot) -> Node<K, V> {
        Node {
            key,
            value,
            black: false,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
