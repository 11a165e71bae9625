//! Circular doubly-linked vertex list backed by an index arena.
//!
//! Nodes live in one `Vec` and link to each other by slot index, so removal is
//! an O(1) relink plus pushing the slot onto a free list. Freed slots are
//! reused by later pushes, which lets one ring serve many triangulations
//! without reallocating.
//!
//! Invariants (non-empty ring): `next(prev(head)) == head` and
//! `prev(next(tail)) == tail`, where `tail == prev(head)`. Removing the last
//! live node leaves an empty ring (`head() == None`).

use nalgebra::Vector2;

/// Slot index of a node in the arena.
pub type NodeId = usize;

/// One polygon vertex as seen by the triangulator.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub p: Vector2<f64>,
    /// Index in the caller's polygon.
    pub index: usize,
    pub ear: bool,
    next: NodeId,
    prev: NodeId,
}

#[derive(Clone, Debug, Default)]
pub struct VertexRing {
    nodes: Vec<Vertex>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    len: usize,
}

impl VertexRing {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.head.map(|h| self.nodes[h].prev)
    }

    /// Total slots allocated so far (live plus pooled).
    #[inline]
    pub fn pool_capacity(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Vertex {
        &self.nodes[id]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Vertex {
        &mut self.nodes[id]
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> NodeId {
        self.nodes[id].next
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> NodeId {
        self.nodes[id].prev
    }

    /// Return every live node to the pool.
    pub fn clear(&mut self) {
        self.free.clear();
        self.free.extend((0..self.nodes.len()).rev());
        self.head = None;
        self.len = 0;
    }

    fn alloc(&mut self, p: Vector2<f64>, index: usize) -> NodeId {
        let v = Vertex {
            p,
            index,
            ear: false,
            next: 0,
            prev: 0,
        };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = v;
                id
            }
            None => {
                self.nodes.push(v);
                self.nodes.len() - 1
            }
        }
    }

    /// Append after the current tail.
    pub fn push_tail(&mut self, p: Vector2<f64>, index: usize) -> NodeId {
        let id = self.alloc(p, index);
        match self.head {
            None => {
                self.nodes[id].next = id;
                self.nodes[id].prev = id;
                self.head = Some(id);
            }
            Some(h) => {
                let t = self.nodes[h].prev;
                self.nodes[id].prev = t;
                self.nodes[id].next = h;
                self.nodes[t].next = id;
                self.nodes[h].prev = id;
            }
        }
        self.len += 1;
        id
    }

    /// Insert before the current head and make it the new head.
    pub fn push_head(&mut self, p: Vector2<f64>, index: usize) -> NodeId {
        let id = self.push_tail(p, index);
        self.head = Some(id);
        id
    }

    /// Unlink `id` and return its slot to the pool. If `id` was the head,
    /// its successor becomes the head.
    pub fn remove(&mut self, id: NodeId) {
        debug_assert!(self.len > 0, "remove from empty ring");
        if self.len == 1 {
            self.head = None;
        } else {
            let (prev, next) = (self.nodes[id].prev, self.nodes[id].next);
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            if self.head == Some(id) {
                self.head = Some(next);
            }
        }
        self.len -= 1;
        self.free.push(id);
    }

    /// Node ids from head in ring order.
    pub fn iter(&self) -> RingIter<'_> {
        RingIter {
            ring: self,
            cur: self.head,
            left: self.len,
        }
    }
}

pub struct RingIter<'a> {
    ring: &'a VertexRing,
    cur: Option<NodeId>,
    left: usize,
}

impl Iterator for RingIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.left == 0 {
            return None;
        }
        let id = self.cur?;
        self.left -= 1;
        self.cur = Some(self.ring.next(id));
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn indices(r: &VertexRing) -> Vec<usize> {
        r.iter().map(|id| r.get(id).index).collect()
    }

    fn check_links(r: &VertexRing) {
        if let (Some(h), Some(t)) = (r.head(), r.tail()) {
            assert_eq!(r.next(r.prev(h)), h);
            assert_eq!(r.prev(r.next(t)), t);
            assert_eq!(r.next(t), h);
        } else {
            assert!(r.is_empty());
        }
    }

    #[test]
    fn push_and_remove_keep_links() {
        let mut r = VertexRing::default();
        for i in 0..4 {
            r.push_tail(vector![i as f64, 0.0], i);
        }
        r.push_head(vector![-1.0, 0.0], 9);
        assert_eq!(indices(&r), vec![9, 0, 1, 2, 3]);
        check_links(&r);

        let head = r.head().unwrap();
        r.remove(head);
        assert_eq!(indices(&r), vec![0, 1, 2, 3]);
        check_links(&r);

        let third = r.next(r.next(r.head().unwrap()));
        r.remove(third);
        assert_eq!(indices(&r), vec![0, 1, 3]);
        check_links(&r);

        while let Some(h) = r.head() {
            r.remove(h);
            check_links(&r);
        }
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn slots_are_recycled() {
        let mut r = VertexRing::default();
        for i in 0..6 {
            r.push_tail(vector![0.0, i as f64], i);
        }
        assert_eq!(r.pool_capacity(), 6);
        r.clear();
        assert!(r.is_empty());
        for i in 0..4 {
            r.push_tail(vector![1.0, i as f64], i);
        }
        assert_eq!(r.pool_capacity(), 6);
        assert_eq!(indices(&r), vec![0, 1, 2, 3]);
        let id = r.head().unwrap();
        r.remove(id);
        r.push_tail(vector![2.0, 2.0], 7);
        assert_eq!(r.pool_capacity(), 6);
        assert_eq!(indices(&r), vec![1, 2, 3, 7]);
    }
}
