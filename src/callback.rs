//! Defines the `BfsCallback` trait.

/// Defines callback functions that run during the BFS.
pub trait BfsCallback {
    /// Called when a new node is discovered. The start node is reported at depth 0.
    fn new_node(&mut self, depth: usize, node: usize);
}

/// A callback that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallback;

impl BfsCallback for NoopCallback {
    fn new_node(&mut self, _depth: usize, _node: usize) {}
}

impl<T: BfsCallback + ?Sized> BfsCallback for &mut T {
    fn new_node(&mut self, depth: usize, node: usize) {
        (**self).new_node(depth, node);
    }
}
