/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Breadth-first-search for shortest augmenting paths.
//!
//! The search runs on the residual network implied by the current flow. A
//! node `v` can be reached from `u` if either the edge `(u,v)` is not
//! saturated or the edge `(v,u)` carries positive flow. Neighbors are
//! scanned in increasing order and the queue is FIFO, so the path found
//! for a fixed flow is always the same.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::Graph;
//! use rs_maxflow::maxflow::{augmenting_path, Step};
//!
//! let mut g = Graph::<i32>::from_edges(3, &[(0, 1, 2), (2, 1, 2)]).unwrap();
//! assert!(augmenting_path(&g, 0, 2).is_none());
//!
//! g.adjust_flow(2, 1, 1);
//! let path = augmenting_path(&g, 0, 2).unwrap();
//! assert_eq!(path.steps(), &[Step::Forward(0, 1), Step::Backward(2, 1)]);
//! ```

use super::path::{Path, Step};
use crate::graph::Graph;
use crate::num::traits::NumAssign;

use log::trace;
use std::collections::VecDeque;

/// Data structures of the residual breadth-first-search.
///
/// The buffers are reused for subsequent searches on graphs with the same
/// number of nodes.
#[derive(Default)]
pub struct ResidualBfs {
    pred: Vec<Option<usize>>,
    queue: VecDeque<usize>,
    src: Option<usize>,
}

impl ResidualBfs {
    /// Create the search data.
    ///
    /// The buffers are allocated by the first search.
    pub fn new() -> Self {
        ResidualBfs::default()
    }

    /// Forget the result of the latest search.
    pub fn clear(&mut self) {
        self.pred.clear();
        self.queue.clear();
        self.src = None;
    }

    /// Search a shortest augmenting path from `src` to `snk`.
    ///
    /// Returns `None` if the sink cannot be reached. The returned path runs
    /// from the source to the sink. If `src == snk` the path is empty.
    pub fn search<F>(&mut self, g: &Graph<F>, src: usize, snk: usize) -> Option<Path>
    where
        F: NumAssign + Ord + Copy,
    {
        let n = g.num_nodes();
        self.pred.clear();
        self.pred.resize(n, None);
        self.queue.clear();
        self.src = Some(src);

        self.queue.push_back(src);
        let mut found = false;
        while let Some(u) = self.queue.pop_front() {
            if u == snk {
                found = true;
                break;
            }
            for v in 0..n {
                if self.is_reached(v) {
                    continue;
                }
                let forward = g.has_edge(u, v) && g.capacity(u, v) - g.flow(u, v) > F::zero();
                let backward = g.has_edge(v, u) && g.flow(v, u) > F::zero();
                if forward || backward {
                    self.pred[v] = Some(u);
                    self.queue.push_back(v);
                }
            }
        }

        if !found {
            trace!("No augmenting path from {} to {}", src, snk);
            return None;
        }

        let mut steps = Vec::new();
        let mut v = snk;
        while v != src {
            // every node but the source got its predecessor when enqueued
            let u = self.pred[v]?;
            steps.push(if g.has_edge(u, v) {
                Step::Forward(u, v)
            } else {
                Step::Backward(v, u)
            });
            v = u;
        }
        steps.reverse();

        trace!("Augmenting path from {} to {} with {} edges", src, snk, steps.len());
        Some(Path::new(steps))
    }

    /// Return `true` if `u` has been reached by the latest search.
    ///
    /// After a search that did not find the sink these are exactly the
    /// nodes reachable from the source in the residual network.
    pub fn is_reached(&self, u: usize) -> bool {
        self.src == Some(u) || self.pred.get(u).map_or(false, |p| p.is_some())
    }

    /// Return the nodes reached by the latest search in increasing order.
    pub fn reached(&self) -> Vec<usize> {
        (0..self.pred.len()).filter(|&u| self.is_reached(u)).collect()
    }
}

/// Search a shortest augmenting path from `src` to `snk` in `g`.
///
/// This is a convenience wrapper around [`ResidualBfs::search`].
pub fn augmenting_path<F>(g: &Graph<F>, src: usize, snk: usize) -> Option<Path>
where
    F: NumAssign + Ord + Copy,
{
    ResidualBfs::new().search(g, src, snk)
}

#[cfg(test)]
mod tests {
    use super::{augmenting_path, ResidualBfs};
    use crate::maxflow::Step::{Backward, Forward};
    use crate::Graph;

    #[test]
    fn test_shortest_path() {
        // 0 -> 1 -> 2 -> 4 and 0 -> 3 -> 4
        let g = Graph::<i32>::from_edges(5, &[(0, 1, 1), (1, 2, 1), (2, 4, 1), (0, 3, 1), (3, 4, 1)]).unwrap();
        let path = augmenting_path(&g, 0, 4).unwrap();
        assert_eq!(path.steps(), &[Forward(0, 3), Forward(3, 4)]);
    }

    #[test]
    fn test_lowest_index_first() {
        // two paths of equal length, the one through node 1 wins
        let g = Graph::<i32>::from_edges(4, &[(0, 2, 1), (2, 3, 1), (0, 1, 1), (1, 3, 1)]).unwrap();
        let path = augmenting_path(&g, 0, 3).unwrap();
        assert_eq!(path.steps(), &[Forward(0, 1), Forward(1, 3)]);
    }

    #[test]
    fn test_saturated_edges() {
        let mut g = Graph::<i32>::from_edges(3, &[(0, 1, 2), (1, 2, 2)]).unwrap();
        g.adjust_flow(0, 1, 2);
        g.adjust_flow(1, 2, 2);

        let mut bfs = ResidualBfs::new();
        assert!(bfs.search(&g, 0, 2).is_none());
        assert_eq!(bfs.reached(), vec![0]);

        // backwards from the sink
        let path = bfs.search(&g, 2, 0).unwrap();
        assert_eq!(path.steps(), &[Backward(1, 2), Backward(0, 1)]);
        assert_eq!(bfs.reached(), vec![0, 1, 2]);
    }

    #[test]
    fn test_same_source_and_sink() {
        let g = Graph::<i32>::from_edges(2, &[(0, 1, 2)]).unwrap();
        let path = augmenting_path(&g, 1, 1).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let mut g = Graph::<i32>::from_edges(
            6,
            &[(0, 1, 3), (0, 2, 3), (1, 2, 2), (1, 3, 3), (2, 4, 2), (4, 3, 1), (3, 5, 2), (4, 5, 3)],
        )
        .unwrap();
        g.adjust_flow(1, 2, 1);
        let mut bfs = ResidualBfs::new();
        let first = bfs.search(&g, 0, 5);
        for _ in 0..5 {
            assert_eq!(bfs.search(&g, 0, 5), first);
        }
    }
}
