//! This is min-priority queue that supports in-place priority changes of queued elements
//! and optional bounding of its size.
//!
//! It uses IndexMap and own implementation of binary heap to achieve this.
//!
//! Each entry has associated *key*, *priority* and *secondary priority*.
//! Keys must be unique, and hashable; priorities must implement Ord trait.
//! Secondary priority is only used to order entries with equal priorities.
//!
//! Popping returns key with the smallest priority.
//! Inserting a key which is already queued does nothing.
//! Priority of queued key can be updated in both directions.
//!
//! Bounded queues evict one entry when an insert makes them too long
//! and pass the evicted key to a [`Cleanup`].
//!
//! Pop, insert, update priority have ***O(log n)*** time complexity;
//! peek, lookup by key are ***O(1)***.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra's algorithm][dijkstra] for 2D grid.
//! Each cell in grid has the cost of entering it.
//!
//! Cells in the frontier can be reached by a cheaper path later,
//! so their priority is lowered in place instead of queueing them again.
//! Among equally cheap cells the one reached in fewer steps goes first.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`Cleanup`]: trait.Cleanup.html
//!
//! ```
//! use updatable_priority_queue::UpdatablePriorityQueue;
//! use std::collections::HashSet;
//! use std::ops::Index;
//!
//! struct Field {
//!     rows: usize,
//!     columns: usize,
//!     costs: Box<[u32]>,
//! }
//!
//! #[derive(Eq, PartialEq, Debug, Hash, Copy, Clone)]
//! struct Position {
//!     row: usize,
//!     column: usize,
//! }
//!
//! impl Index<Position> for Field {
//!     type Output = u32;
//!
//!     fn index(&self, index: Position) -> &Self::Output {
//!         &self.costs[self.columns * index.row + index.column]
//!     }
//! }
//!
//! // From cell we can move upper, right, bottom and left
//! fn get_neighbors(pos: Position, field: &Field) -> Vec<Position> {
//!     let mut items = Vec::with_capacity(4);
//!     if pos.row > 0 {
//!         items.push(Position { row: pos.row - 1, column: pos.column });
//!     }
//!     if pos.row + 1 < field.rows {
//!         items.push(Position { row: pos.row + 1, column: pos.column });
//!     }
//!     if pos.column > 0 {
//!         items.push(Position { row: pos.row, column: pos.column - 1 });
//!     }
//!     if pos.column + 1 < field.columns {
//!         items.push(Position { row: pos.row, column: pos.column + 1 });
//!     }
//!     items
//! }
//!
//! fn find_path(start: Position, target: Position, field: &Field) -> Option<u32> {
//!     // Already handled this points
//!     let mut closed_set: HashSet<Position> = HashSet::new();
//!     // Priority is the real cost, secondary priority is number of steps.
//!     let mut frontier = UpdatablePriorityQueue::new();
//!     frontier.insert(start, 0, 0);
//!     while let Ok((current_pos, cost, steps)) = frontier.pop_with_priority() {
//!         // We have reached target
//!         if current_pos == target {
//!             return Some(cost);
//!         }
//!
//!         closed_set.insert(current_pos);
//!
//!         for next in get_neighbors(current_pos, &field)
//!             .into_iter()
//!             .filter(|x| !closed_set.contains(x))
//!         {
//!             let next_cost = cost + field[next];
//!             match frontier.get_priority(&next) {
//!                 None => {
//!                     frontier.insert(next, next_cost, steps + 1);
//!                 }
//!                 Some(&known) if next_cost < known => {
//!                     // Have found better path to node in queue
//!                     frontier.update_priority(&next, next_cost);
//!                 }
//!                 _ => { /* Have found worse path. */ }
//!             }
//!         }
//!     }
//!     None
//! }
//!
//! let field = Field {
//!     rows: 4,
//!     columns: 4,
//!     costs: vec![
//!         1, 3, 3, 6, //
//!         4, 4, 3, 8, //
//!         3, 1, 2, 4, //
//!         4, 8, 9, 4, //
//!     ].into_boxed_slice(),
//! };
//!
//! let start = Position { row: 0, column: 0 };
//! let end = Position { row: 3, column: 3 };
//! assert_eq!(find_path(start, end, &field), Some(18));
//! ```
//!

mod cleanup;
mod editable_binary_heap;
mod mediator;
mod updatable_priority_queue;

pub use crate::cleanup::{Clean, CleanElement, Cleanup, NoCleanup};
pub use crate::updatable_priority_queue::{
    EmptyQueueError, UpdatablePriorityQueue, UpdatablePriorityQueueIterator,
};
