//! Module provide ordered-map implemented by [TreeMap] type.
//!
//! TreeMap is implemented using a [red-black tree][wiki-rbt] whose nodes
//! carry parent back-references, so iteration is exposed as bidirectional
//! cursors stepping one entry at a time, in the C++ standard-library style.
//!
//! - Each entry in TreeMap instance correspond to a {Key, Value} pair.
//! - Parametrised over `key-type` and `value-type`.
//! - CRUD operations, via set(), get(), remove() api.
//! - Full table scan, via iter() in ascending key order and reverse()
//!   in descending key order.
//! - Bound queries, via lower_bound(), upper_bound() and range().
//! - Key ordering is a caller supplied strict less-than predicate,
//!   defaulting to the key-type's natural order.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! [TreeMap] instance and its API uses Rust's ownership model and borrow
//! semantics to ensure safe operation: cursors borrow the map immutably,
//! hence no structural mutation can happen while a cursor is alive.
//!
//! Nodes are kept in a slab arena and linked by slot index; the nil/leaf
//! position and the one-past-the-end cursor position are both `None`.
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use slab::Slab;

use std::{fmt, ptr};

use crate::{
    node::{Node, Slot},
    Error, Result,
};

/// TreeMap manage a single instance of in-memory ordered-map using a
/// [red-black tree][rbt] with parent-linked nodes.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
pub struct TreeMap<K, V> {
    nodes: Slab<Node<K, V>>,
    root: Slot,
    begin: Slot,    // cached minimum node, None iff the map is empty.
    n_count: usize, // number of entries in the tree.
    lt: Box<dyn Fn(&K, &K) -> bool>,
}

impl<K, V> TreeMap<K, V>
where
    K: Ord,
{
    /// Create an empty instance of TreeMap ordered by the key-type's
    /// natural total order.
    pub fn new() -> TreeMap<K, V>
    where
        K: 'static,
    {
        TreeMap::with_compare(|a: &K, b: &K| a.lt(b))
    }
}

impl<K, V> TreeMap<K, V> {
    /// Create an empty instance of TreeMap ordered by `lt`, a strict
    /// less-than predicate returning true when `a` sorts before `b`.
    ///
    /// Two keys are treated equal when neither sorts before the other.
    pub fn with_compare<F>(lt: F) -> TreeMap<K, V>
    where
        F: Fn(&K, &K) -> bool + 'static,
    {
        TreeMap {
            nodes: Slab::new(),
            root: None,
            begin: None,
            n_count: Default::default(),
            lt: Box::new(lt),
        }
    }
}

/// Maintenance API.
impl<K, V> TreeMap<K, V> {
    /// Return number of entries in this instance. Complexity: O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Validate the red-black tree with following rules:
    ///
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Make sure every child's parent link points back at its holder.
    /// * Make sure the entry count and the cached minimum are accurate.
    pub fn validate(&self) -> Result<()>
    where
        K: fmt::Debug,
    {
        let (_, count) =
            self.validate_tree(self.root, self.is_red(self.root), 0 /*n_blacks*/, 1 /*depth*/)?;

        if count != self.n_count {
            err_at!(Fatal, msg: "count {} != {}", count, self.n_count)?;
        }

        let min = self.root.map(|root| self.most_left(root));
        if self.begin != min {
            err_at!(Fatal, msg: "begin {:?} is not the minimum {:?}", self.begin, min)?;
        }
        if let Some(root) = self.root {
            if self.nodes[root].parent.is_some() {
                err_at!(Fatal, msg: "root has a parent")?;
            }
        }

        Ok(())
    }
}

/// CRUD API.
impl<K, V> TreeMap<K, V> {
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value, in place, and return the
    /// old value. Complexity: O(log N).
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let mut parent: Slot = None;
        let mut current = self.root;
        let mut less = true;
        while let Some(c) = current {
            parent = Some(c);
            if (self.lt)(&key, &self.nodes[c].key) {
                current = self.nodes[c].left;
                less = true;
            } else if (self.lt)(&self.nodes[c].key, &key) {
                current = self.nodes[c].right;
                less = false;
            } else {
                return Some(self.nodes[c].set_value(value));
            }
        }

        let x = self.nodes.insert(Node::new(key, value, parent));
        match parent {
            Some(p) if less => self.nodes[p].left = Some(x),
            Some(p) => self.nodes[p].right = Some(x),
            None => self.root = Some(x),
        }
        // a new minimum always lands as the left child of the old minimum.
        match self.begin {
            Some(b) if self.nodes[b].left == Some(x) => self.begin = Some(x),
            None => self.begin = Some(x),
            _ => (),
        }
        self.insert_fixup(x);
        self.n_count += 1;
        None
    }

    /// Remove key from this instance and return its value. If key is
    /// not present, then remove is effectively a no-op.
    /// Complexity: O(log N).
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let z = self.find_node(key)?;
        if self.begin == Some(z) {
            // the minimum has no left child, its successor is either its
            // right child or its parent.
            self.begin = match self.nodes[z].right {
                Some(r) => Some(r),
                None => self.nodes[z].parent,
            };
        }
        self.n_count -= 1;
        let node = self.remove_node(z);
        Some(node.value)
    }

    /// Discard every entry. The arena keeps its capacity.
    /// Complexity: O(N) on dropped entries.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.begin = None;
        self.n_count = 0;
    }
}

/// Read API.
impl<K, V> TreeMap<K, V> {
    /// Get the value for key. Complexity: O(log N).
    pub fn get(&self, key: &K) -> Option<&V> {
        let node = self.find_node(key)?;
        Some(&self.nodes[node].value)
    }

    /// Check whether key is present in this instance. Complexity: O(log N).
    pub fn contains(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Return the entry with the least key. Complexity: O(1).
    pub fn min(&self) -> Option<(&K, &V)> {
        let b = self.begin?;
        Some((&self.nodes[b].key, &self.nodes[b].value))
    }

    /// Return the entry with the greatest key. Complexity: O(log N).
    pub fn max(&self) -> Option<(&K, &V)> {
        let m = self.most_right(self.root?);
        Some((&self.nodes[m].key, &self.nodes[m].value))
    }

    /// Return a forward cursor positioned at the first entry. Iterate by
    /// stepping it with [FwdIter::next] while [FwdIter::valid].
    /// Complexity: O(1).
    pub fn iter(&self) -> FwdIter<K, V> {
        FwdIter {
            tree: self,
            node: self.begin,
        }
    }

    /// Return a reverse cursor positioned at the last entry. Iterate by
    /// stepping it with [RevIter::next] while [RevIter::valid].
    /// Complexity: O(log N).
    pub fn reverse(&self) -> RevIter<K, V> {
        RevIter {
            tree: self,
            node: self.root.map(|root| self.most_right(root)),
        }
    }

    /// Return a cursor at the first entry whose key is not less than the
    /// given key, or the end cursor if every key is less.
    /// Complexity: O(log N).
    pub fn lower_bound(&self, key: &K) -> FwdIter<K, V> {
        let mut result: Slot = None;
        let mut node = self.root;
        while let Some(n) = node {
            if (self.lt)(&self.nodes[n].key, key) {
                node = self.nodes[n].right;
            } else {
                result = Some(n);
                node = self.nodes[n].left;
            }
        }
        FwdIter {
            tree: self,
            node: result,
        }
    }

    /// Return a cursor at the first entry whose key is strictly greater
    /// than the given key, or the end cursor if no key is greater.
    /// Complexity: O(log N).
    pub fn upper_bound(&self, key: &K) -> FwdIter<K, V> {
        let mut result: Slot = None;
        let mut node = self.root;
        while let Some(n) = node {
            if (self.lt)(key, &self.nodes[n].key) {
                result = Some(n);
                node = self.nodes[n].left;
            } else {
                node = self.nodes[n].right;
            }
        }
        FwdIter {
            tree: self,
            node: result,
        }
    }

    /// Return the pair (lower_bound(from), upper_bound(to)). Iterate the
    /// closed range [from, to] by stepping the first cursor until it equals
    /// the second; an empty range yields two equal cursors.
    /// Complexity: O(log N).
    pub fn range(&self, from: &K, to: &K) -> (FwdIter<K, V>, FwdIter<K, V>) {
        (self.lower_bound(from), self.upper_bound(to))
    }
}

impl<K, V> TreeMap<K, V> {
    fn find_node(&self, key: &K) -> Slot {
        let mut current = self.root;
        while let Some(c) = current {
            current = if (self.lt)(key, &self.nodes[c].key) {
                self.nodes[c].left
            } else if (self.lt)(&self.nodes[c].key, key) {
                self.nodes[c].right
            } else {
                return Some(c);
            };
        }
        None
    }

    fn most_left(&self, mut x: usize) -> usize {
        while let Some(l) = self.nodes[x].left {
            x = l;
        }
        x
    }

    fn most_right(&self, mut x: usize) -> usize {
        while let Some(r) = self.nodes[x].right {
            x = r;
        }
        x
    }

    // In-order successor: leftmost of the right subtree, else the first
    // ancestor of which x's subtree hangs to the left.
    fn successor_of(&self, mut x: usize) -> Slot {
        if let Some(r) = self.nodes[x].right {
            return Some(self.most_left(r));
        }
        loop {
            match self.nodes[x].parent {
                Some(p) if self.nodes[p].left == Some(x) => break Some(p),
                Some(p) => x = p,
                None => break None,
            }
        }
    }

    fn predecessor_of(&self, mut x: usize) -> Slot {
        if let Some(l) = self.nodes[x].left {
            return Some(self.most_right(l));
        }
        loop {
            match self.nodes[x].parent {
                Some(p) if self.nodes[p].right == Some(x) => break Some(p),
                Some(p) => x = p,
                None => break None,
            }
        }
    }

    #[inline]
    fn is_red(&self, slot: Slot) -> bool {
        slot.map_or(false, |s| !self.nodes[s].is_black())
    }

    #[inline]
    fn is_black(&self, slot: Slot) -> bool {
        slot.map_or(true, |s| self.nodes[s].is_black())
    }

    fn validate_tree(
        &self,
        slot: Slot,
        fromred: bool,
        mut n_blacks: usize,
        depth: usize,
    ) -> Result<(usize, usize)>
    where
        K: fmt::Debug,
    {
        let node = match slot {
            Some(s) => s,
            None => return Ok((n_blacks, 0)),
        };

        let red = self.is_red(slot);
        if fromred && red {
            return err_at!(Fatal, msg: "consecutive reds");
        }

        if !red {
            n_blacks += 1;
        }

        let (left, right) = (self.nodes[node].left, self.nodes[node].right);
        for child in left.iter().chain(right.iter()) {
            if self.nodes[*child].parent != Some(node) {
                err_at!(Fatal, msg: "parent link of {} is broken", child)?;
            }
        }

        let (lblacks, lcount) = self.validate_tree(left, red, n_blacks, depth + 1)?;
        let (rblacks, rcount) = self.validate_tree(right, red, n_blacks, depth + 1)?;
        if lblacks != rblacks {
            err_at!(Fatal, msg: "unbalanced blacks {} {}", lblacks, rblacks)?;
        }

        let key = &self.nodes[node].key;
        if let Some(left) = left {
            let lkey = &self.nodes[left].key;
            if !(self.lt)(lkey, key) {
                err_at!(Fatal, msg: "sort lkey:{:?} parent:{:?}", lkey, key)?;
            }
        }
        if let Some(right) = right {
            let rkey = &self.nodes[right].key;
            if !(self.lt)(key, rkey) {
                err_at!(Fatal, msg: "sort rkey:{:?} parent:{:?}", rkey, key)?;
            }
        }

        Ok((lblacks, lcount + rcount + 1))
    }
}

//--------- rotation and fixup routines ----------------

impl<K, V> TreeMap<K, V> {
    //              (p)                       (p)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             /   \                     /   \
    //            a     y                   x     c
    //                 / \                 / \
    //                b   c               a   b
    //
    fn rotate_left(&mut self, x: usize) {
        let y = match self.nodes[x].right {
            Some(y) => y,
            None => panic!("rotate_left(): no right child, call the programmer"),
        };
        self.nodes[x].right = self.nodes[y].left;
        if let Some(b) = self.nodes[x].right {
            self.nodes[b].parent = Some(x);
        }
        let p = self.nodes[x].parent;
        self.nodes[y].parent = p;
        match p {
            Some(p) if self.nodes[p].left == Some(x) => self.nodes[p].left = Some(y),
            Some(p) => self.nodes[p].right = Some(y),
            None => self.root = Some(y),
        }
        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn rotate_right(&mut self, x: usize) {
        let y = match self.nodes[x].left {
            Some(y) => y,
            None => panic!("rotate_right(): no left child, call the programmer"),
        };
        self.nodes[x].left = self.nodes[y].right;
        if let Some(b) = self.nodes[x].left {
            self.nodes[b].parent = Some(x);
        }
        let p = self.nodes[x].parent;
        self.nodes[y].parent = p;
        match p {
            Some(p) if self.nodes[p].left == Some(x) => self.nodes[p].left = Some(y),
            Some(p) => self.nodes[p].right = Some(y),
            None => self.root = Some(y),
        }
        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn insert_fixup(&mut self, mut x: usize) {
        self.nodes[x].black = Some(x) == self.root;
        while Some(x) != self.root && self.is_red(self.nodes[x].parent) {
            // a red parent is never the root, the grandparent exists.
            let p = self.nodes[x].parent.unwrap();
            let g = self.nodes[p].parent.unwrap();
            if Some(p) == self.nodes[g].left {
                let uncle = self.nodes[g].right;
                if self.is_red(uncle) {
                    self.nodes[p].set_black();
                    self.nodes[g].black = Some(g) == self.root;
                    self.nodes[uncle.unwrap()].set_black();
                    x = g;
                } else {
                    if Some(x) != self.nodes[p].left {
                        // triangle, one rotation converts it to a line.
                        x = p;
                        self.rotate_left(x);
                    }
                    let p = self.nodes[x].parent.unwrap();
                    self.nodes[p].set_black();
                    let g = self.nodes[p].parent.unwrap();
                    self.nodes[g].set_red();
                    self.rotate_right(g);
                    break;
                }
            } else {
                let uncle = self.nodes[g].left;
                if self.is_red(uncle) {
                    self.nodes[p].set_black();
                    self.nodes[g].black = Some(g) == self.root;
                    self.nodes[uncle.unwrap()].set_black();
                    x = g;
                } else {
                    if Some(x) == self.nodes[p].left {
                        x = p;
                        self.rotate_right(x);
                    }
                    let p = self.nodes[x].parent.unwrap();
                    self.nodes[p].set_black();
                    let g = self.nodes[p].parent.unwrap();
                    self.nodes[g].set_red();
                    self.rotate_left(g);
                    break;
                }
            }
        }
    }

    // Splice z out of the tree and move its entry out of the arena.
    // Standard BST deletion with successor substitution; the successor
    // node is relinked into z's place, entries are never copied around.
    fn remove_node(&mut self, z: usize) -> Node<K, V> {
        let y = if self.nodes[z].left.is_none() || self.nodes[z].right.is_none() {
            z
        } else {
            // z has a right child, the successor lives in that subtree
            // and has no left child.
            self.successor_of(z).unwrap()
        };
        let x = match self.nodes[y].left {
            l @ Some(_) => l,
            None => self.nodes[y].right,
        };

        let yp = self.nodes[y].parent;
        if let Some(x) = x {
            self.nodes[x].parent = yp;
        }
        // unlink y, remembering the sibling the delete fixup starts from.
        let mut w: Slot = None;
        match yp {
            None => self.root = x,
            Some(p) if self.nodes[p].left == Some(y) => {
                self.nodes[p].left = x;
                w = self.nodes[p].right;
            }
            Some(p) => {
                self.nodes[p].right = x;
                w = self.nodes[p].left;
            }
        }
        let removed_black = self.nodes[y].is_black();

        if y != z {
            // relink y into z's position. Note that z's right link may
            // have been redirected to x by the unlink step above.
            let zp = self.nodes[z].parent;
            self.nodes[y].parent = zp;
            match zp {
                None => self.root = Some(y),
                Some(p) if self.nodes[p].left == Some(z) => self.nodes[p].left = Some(y),
                Some(p) => self.nodes[p].right = Some(y),
            }
            let zl = self.nodes[z].left; // z had two children
            self.nodes[y].left = zl;
            self.nodes[zl.unwrap()].parent = Some(y);
            let zr = self.nodes[z].right;
            self.nodes[y].right = zr;
            if let Some(r) = zr {
                self.nodes[r].parent = Some(y);
            }
            self.nodes[y].black = self.nodes[z].black;
        }

        if removed_black && self.root.is_some() {
            match x {
                Some(x) => self.nodes[x].set_black(),
                None => {
                    // a black leaf was removed, its sibling must exist.
                    match w {
                        Some(w) => self.remove_fixup(w),
                        None => panic!("remove_node(): fatal logic, call the programmer"),
                    }
                }
            }
        }

        self.nodes.remove(z)
    }

    // Walk up from the sibling `w` of the deficient (nil) position,
    // recoloring and rotating until the missing black is restored.
    fn remove_fixup(&mut self, mut w: usize) {
        loop {
            let p = self.nodes[w].parent.unwrap();
            if self.nodes[p].left != Some(w) {
                // deficiency is on the left, w is the right sibling.
                if self.is_red(Some(w)) {
                    self.nodes[w].set_black();
                    self.nodes[p].set_red();
                    self.rotate_left(p);
                    w = self.nodes[self.nodes[w].left.unwrap()].right.unwrap();
                }
                if self.is_black(self.nodes[w].left) && self.is_black(self.nodes[w].right) {
                    self.nodes[w].set_red();
                    let x = self.nodes[w].parent.unwrap();
                    if Some(x) == self.root || self.is_red(Some(x)) {
                        self.nodes[x].set_black();
                        break;
                    }
                    let xp = self.nodes[x].parent.unwrap();
                    w = match self.nodes[xp].left {
                        l if l == Some(x) => self.nodes[xp].right.unwrap(),
                        _ => self.nodes[xp].left.unwrap(),
                    };
                } else {
                    if self.is_black(self.nodes[w].right) {
                        let wl = self.nodes[w].left.unwrap();
                        self.nodes[wl].set_black();
                        self.nodes[w].set_red();
                        self.rotate_right(w);
                        w = self.nodes[w].parent.unwrap();
                    }
                    let p = self.nodes[w].parent.unwrap();
                    self.nodes[w].black = self.nodes[p].black;
                    self.nodes[p].set_black();
                    let wr = self.nodes[w].right.unwrap();
                    self.nodes[wr].set_black();
                    self.rotate_left(p);
                    break;
                }
            } else {
                // mirror image, w is the left sibling.
                if self.is_red(Some(w)) {
                    self.nodes[w].set_black();
                    self.nodes[p].set_red();
                    self.rotate_right(p);
                    w = self.nodes[self.nodes[w].right.unwrap()].left.unwrap();
                }
                if self.is_black(self.nodes[w].left) && self.is_black(self.nodes[w].right) {
                    self.nodes[w].set_red();
                    let x = self.nodes[w].parent.unwrap();
                    if Some(x) == self.root || self.is_red(Some(x)) {
                        self.nodes[x].set_black();
                        break;
                    }
                    let xp = self.nodes[x].parent.unwrap();
                    w = match self.nodes[xp].left {
                        l if l == Some(x) => self.nodes[xp].right.unwrap(),
                        _ => self.nodes[xp].left.unwrap(),
                    };
                } else {
                    if self.is_black(self.nodes[w].left) {
                        let wr = self.nodes[w].right.unwrap();
                        self.nodes[wr].set_black();
                        self.nodes[w].set_red();
                        self.rotate_left(w);
                        w = self.nodes[w].parent.unwrap();
                    }
                    let p = self.nodes[w].parent.unwrap();
                    self.nodes[w].black = self.nodes[p].black;
                    self.nodes[p].set_black();
                    let wl = self.nodes[w].left.unwrap();
                    self.nodes[wl].set_black();
                    self.rotate_right(p);
                    break;
                }
            }
        }
    }
}

/// Bidirectional cursor walking a [TreeMap] in ascending key order.
///
/// A cursor is either positioned at an entry or at the one-past-the-end
/// position; [FwdIter::valid] distinguishes the two. Stepping past either
/// end of the map panics, it is a programming error.
pub struct FwdIter<'a, K, V> {
    tree: &'a TreeMap<K, V>,
    node: Slot,
}

impl<'a, K, V> FwdIter<'a, K, V> {
    /// Return whether the cursor is positioned at an entry, in other
    /// words whether it is not at the one-past-the-end position.
    #[inline]
    pub fn valid(&self) -> bool {
        self.node.is_some()
    }

    /// Step to the next entry in ascending key order. Stepping from the
    /// one-past-the-end position panics.
    pub fn next(&mut self) {
        match self.node {
            Some(n) => self.node = self.tree.successor_of(n),
            None => panic!("out of bound iteration"),
        }
    }

    /// Step to the previous entry. From the one-past-the-end position
    /// this resolves to the last entry. Stepping before the first entry
    /// panics.
    pub fn prev(&mut self) {
        self.node = match self.node {
            Some(n) => self.tree.predecessor_of(n),
            None => self.tree.root.map(|root| self.tree.most_right(root)),
        };
        if self.node.is_none() {
            panic!("out of bound iteration");
        }
    }

    /// Return the key at the cursor position. Panics when the cursor
    /// is not valid.
    pub fn key(&self) -> &'a K {
        match self.node {
            Some(n) => &self.tree.nodes[n].key,
            None => panic!("out of bound iteration"),
        }
    }

    /// Return the value at the cursor position. Panics when the cursor
    /// is not valid.
    pub fn value(&self) -> &'a V {
        match self.node {
            Some(n) => &self.tree.nodes[n].value,
            None => panic!("out of bound iteration"),
        }
    }
}

impl<'a, K, V> Clone for FwdIter<'a, K, V> {
    fn clone(&self) -> Self {
        FwdIter {
            tree: self.tree,
            node: self.node,
        }
    }
}

impl<'a, K, V> Copy for FwdIter<'a, K, V> {}

/// Cursors are equal when they sit at the same position of the same map.
impl<'a, K, V> PartialEq for FwdIter<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<'a, K, V> Eq for FwdIter<'a, K, V> {}

/// Bidirectional cursor walking a [TreeMap] in descending key order.
///
/// A cursor is either positioned at an entry or at the
/// one-before-the-start position; [RevIter::valid] distinguishes the two.
/// Stepping past either end of the map panics, it is a programming error.
pub struct RevIter<'a, K, V> {
    tree: &'a TreeMap<K, V>,
    node: Slot,
}

impl<'a, K, V> RevIter<'a, K, V> {
    /// Return whether the cursor is positioned at an entry, in other
    /// words whether it is not at the one-before-the-start position.
    #[inline]
    pub fn valid(&self) -> bool {
        self.node.is_some()
    }

    /// Step to the next entry in descending key order. Stepping from the
    /// one-before-the-start position panics.
    pub fn next(&mut self) {
        match self.node {
            Some(n) => self.node = self.tree.predecessor_of(n),
            None => panic!("out of bound iteration"),
        }
    }

    /// Step back to the previous entry in descending key order, towards
    /// greater keys. From the one-before-the-start position this resolves
    /// to the first entry. Stepping past the last entry panics.
    pub fn prev(&mut self) {
        self.node = match self.node {
            Some(n) => self.tree.successor_of(n),
            None => self.tree.begin,
        };
        if self.node.is_none() {
            panic!("out of bound iteration");
        }
    }

    /// Return the key at the cursor position. Panics when the cursor
    /// is not valid.
    pub fn key(&self) -> &'a K {
        match self.node {
            Some(n) => &self.tree.nodes[n].key,
            None => panic!("out of bound iteration"),
        }
    }

    /// Return the value at the cursor position. Panics when the cursor
    /// is not valid.
    pub fn value(&self) -> &'a V {
        match self.node {
            Some(n) => &self.tree.nodes[n].value,
            None => panic!("out of bound iteration"),
        }
    }
}

impl<'a, K, V> Clone for RevIter<'a, K, V> {
    fn clone(&self) -> Self {
        RevIter {
            tree: self.tree,
            node: self.node,
        }
    }
}

impl<'a, K, V> Copy for RevIter<'a, K, V> {}

/// Cursors are equal when they sit at the same position of the same map.
impl<'a, K, V> PartialEq for RevIter<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<'a, K, V> Eq for RevIter<'a, K, V> {}

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;
