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

//! A dense capacitated digraph carrying a flow.
//!
//! Nodes are the numbers `0..n`. For each ordered pair `(u,v)` with `u != v`
//! there is at most one edge, and never both `(u,v)` and `(v,u)`. This is
//! what allows the residual search to tell a forward step from a backward
//! step by only looking at the matrix.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::Graph;
//!
//! let mut g = Graph::<i32>::new(3).unwrap();
//! g.add_edge(0, 1, 5).unwrap();
//! g.add_edge(1, 2, 3).unwrap();
//! assert!(g.add_edge(2, 2, 1).is_err());
//! assert!(g.add_edge(1, 0, 1).is_err());
//!
//! g.adjust_flow(0, 1, 3);
//! g.adjust_flow(1, 2, 3);
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.net_outflow(0), 3);
//! assert!(g.validate().is_ok());
//! ```

use crate::error::{Error, Result};
use crate::num::traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed graph over a fixed number of nodes stored as dense tables.
///
/// The capacity and flow tables contain zero for all pairs without an edge.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<F> {
    num_nodes: usize,
    edges: Vec<bool>,
    upper: Vec<F>,
    flow: Vec<F>,
}

impl<F> Graph<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Result<Self> {
        if num_nodes == 0 {
            return Err(Error::NoNodes);
        }
        let n2 = num_nodes.checked_mul(num_nodes).ok_or(Error::TooManyNodes(num_nodes))?;
        Ok(Graph {
            num_nodes,
            edges: vec![false; n2],
            upper: vec![F::zero(); n2],
            flow: vec![F::zero(); n2],
        })
    }

    /// Create a graph from a list of `(src, snk, capacity)` triples.
    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize, F)]) -> Result<Self> {
        let mut g = Graph::new(num_nodes)?;
        for &(u, v, upper) in edges {
            g.add_edge(u, v, upper)?;
        }
        Ok(g)
    }

    #[inline]
    fn id(&self, u: usize, v: usize) -> usize {
        assert!(
            u < self.num_nodes && v < self.num_nodes,
            "invalid node pair ({},{}) (nodes must be in 0..{})",
            u,
            v,
            self.num_nodes
        );
        u * self.num_nodes + v
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.iter().filter(|&&e| e).count()
    }

    /// Return an error if `u` is not a node of this graph.
    pub fn check_node(&self, u: usize) -> Result<()> {
        if u < self.num_nodes {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node: u,
                num_nodes: self.num_nodes,
            })
        }
    }

    /// Add the edge `(u,v)` with capacity `upper`.
    ///
    /// Loops, duplicate edges, antiparallel edges and non-positive
    /// capacities are rejected. The flow on the new edge is zero.
    pub fn add_edge(&mut self, u: usize, v: usize, upper: F) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(Error::Loop(u));
        }
        if self.has_edge(u, v) {
            return Err(Error::DuplicateEdge(u, v));
        }
        if self.has_edge(v, u) {
            return Err(Error::AntiParallel(u, v));
        }
        if upper <= F::zero() {
            return Err(Error::NonPositiveCapacity(u, v));
        }

        let e = self.id(u, v);
        self.edges[e] = true;
        self.upper[e] = upper;
        self.flow[e] = F::zero();
        Ok(())
    }

    /// Return `true` if the edge `(u,v)` exists.
    ///
    /// Panics if `u` or `v` is not a node.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edges[self.id(u, v)]
    }

    /// Return the capacity of the edge `(u,v)` (zero if there is no edge).
    ///
    /// Panics if `u` or `v` is not a node.
    #[inline]
    pub fn capacity(&self, u: usize, v: usize) -> F {
        self.upper[self.id(u, v)]
    }

    /// Return the flow on the edge `(u,v)` (zero if there is no edge).
    ///
    /// Panics if `u` or `v` is not a node.
    #[inline]
    pub fn flow(&self, u: usize, v: usize) -> F {
        self.flow[self.id(u, v)]
    }

    /// Add `df` to the flow on edge `(u,v)`.
    ///
    /// The bounds of the edge are not checked, keeping them is up to the
    /// caller. Panics if `u` or `v` is not a node.
    #[inline]
    pub fn adjust_flow(&mut self, u: usize, v: usize, df: F) {
        let e = self.id(u, v);
        self.flow[e] += df;
    }

    /// Subtract `df` from the flow on edge `(u,v)`.
    ///
    /// This is `adjust_flow` with a negated amount, usable for unsigned
    /// flow types as well.
    #[inline]
    pub fn cancel_flow(&mut self, u: usize, v: usize, df: F) {
        let e = self.id(u, v);
        self.flow[e] -= df;
    }

    /// Set the flow on all edges to zero.
    pub fn clear_flow(&mut self) {
        for f in self.flow.iter_mut() {
            *f = F::zero();
        }
    }

    /// Return an iterator over all edges `(u,v)` in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.num_nodes;
        (0..n)
            .flat_map(move |u| (0..n).map(move |v| (u, v)))
            .filter(move |&(u, v)| self.has_edge(u, v))
    }

    /// Return the total flow on the outgoing edges of `u`.
    pub fn outflow(&self, u: usize) -> F {
        (0..self.num_nodes)
            .filter(|&v| self.has_edge(u, v))
            .fold(F::zero(), |sum, v| sum + self.flow(u, v))
    }

    /// Return the total flow on the incoming edges of `u`.
    pub fn inflow(&self, u: usize) -> F {
        (0..self.num_nodes)
            .filter(|&v| self.has_edge(v, u))
            .fold(F::zero(), |sum, v| sum + self.flow(v, u))
    }

    /// Return the flow leaving `u` minus the flow entering `u`.
    pub fn net_outflow(&self, u: usize) -> F {
        self.outflow(u) - self.inflow(u)
    }

    /// Return the total capacity of all edges leaving the node set `side`.
    pub fn cut_capacity(&self, side: &[usize]) -> F {
        let mut inside = vec![false; self.num_nodes];
        for &u in side {
            inside[u] = true;
        }
        self.edges()
            .filter(|&(u, v)| inside[u] && !inside[v])
            .fold(F::zero(), |sum, (u, v)| sum + self.capacity(u, v))
    }

    /// Check all invariants of the graph.
    ///
    /// Graphs built with `add_edge` always satisfy the structural
    /// invariants, but deserialized graphs or graphs whose flow has been
    /// modified by hand may not.
    pub fn validate(&self) -> Result<()> {
        if self.num_nodes == 0 {
            return Err(Error::NoNodes);
        }
        let n2 = self
            .num_nodes
            .checked_mul(self.num_nodes)
            .ok_or(Error::TooManyNodes(self.num_nodes))?;
        for len in [self.edges.len(), self.upper.len(), self.flow.len()] {
            if len != n2 {
                return Err(Error::TableSize { expected: n2, got: len });
            }
        }

        for u in 0..self.num_nodes {
            if self.has_edge(u, u) {
                return Err(Error::Loop(u));
            }
        }
        for (u, v) in self.edges() {
            if u < v && self.has_edge(v, u) {
                return Err(Error::AntiParallel(u, v));
            }
            if self.capacity(u, v) <= F::zero() {
                return Err(Error::NonPositiveCapacity(u, v));
            }
            let f = self.flow(u, v);
            if f < F::zero() || f > self.capacity(u, v) {
                return Err(Error::FlowOutOfBounds(u, v));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Graph;
    use crate::Error;

    fn diamond() -> Graph<i32> {
        Graph::from_edges(4, &[(0, 1, 5), (0, 2, 3), (1, 3, 4), (2, 3, 6)]).unwrap()
    }

    #[test]
    fn test_new() {
        assert_eq!(Graph::<i32>::new(0), Err(Error::NoNodes));

        let g = Graph::<i32>::new(3).unwrap();
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.edges().count(), 0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_add_edge() {
        let mut g = Graph::<i32>::new(3).unwrap();
        assert_eq!(g.add_edge(0, 1, 2), Ok(()));
        assert_eq!(g.add_edge(0, 1, 2), Err(Error::DuplicateEdge(0, 1)));
        assert_eq!(g.add_edge(1, 0, 2), Err(Error::AntiParallel(1, 0)));
        assert_eq!(g.add_edge(1, 1, 2), Err(Error::Loop(1)));
        assert_eq!(g.add_edge(1, 2, 0), Err(Error::NonPositiveCapacity(1, 2)));
        assert_eq!(g.add_edge(1, 2, -4), Err(Error::NonPositiveCapacity(1, 2)));
        assert_eq!(
            g.add_edge(1, 3, 1),
            Err(Error::NodeOutOfRange { node: 3, num_nodes: 3 })
        );

        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert_eq!(g.capacity(0, 1), 2);
        assert_eq!(g.capacity(1, 0), 0);
        assert_eq!(g.flow(0, 1), 0);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    #[should_panic]
    fn test_column_out_of_range() {
        let g = Graph::<i32>::from_edges(4, &[(1, 0, 3)]).unwrap();
        // (0,4) must not alias the edge (1,0)
        g.has_edge(0, 4);
    }

    #[test]
    #[should_panic]
    fn test_adjust_out_of_range() {
        let mut g = Graph::<i32>::from_edges(4, &[(1, 0, 3)]).unwrap();
        g.adjust_flow(0, 5, 2);
    }

    #[test]
    fn test_too_many_nodes() {
        assert_eq!(Graph::<i32>::new(usize::MAX), Err(Error::TooManyNodes(usize::MAX)));

        let g = Graph::<i32> {
            num_nodes: usize::MAX / 2,
            edges: vec![],
            upper: vec![],
            flow: vec![],
        };
        assert_eq!(g.validate(), Err(Error::TooManyNodes(usize::MAX / 2)));
    }

    #[test]
    fn test_edges_order() {
        let g = diamond();
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_flow_sums() {
        let mut g = diamond();
        g.adjust_flow(0, 1, 4);
        g.adjust_flow(1, 3, 4);
        g.adjust_flow(0, 2, 3);
        g.adjust_flow(2, 3, 3);
        assert_eq!(g.outflow(0), 7);
        assert_eq!(g.inflow(0), 0);
        assert_eq!(g.net_outflow(0), 7);
        assert_eq!(g.inflow(3), 7);
        assert_eq!(g.net_outflow(1), 0);

        g.cancel_flow(0, 1, 1);
        assert_eq!(g.flow(0, 1), 3);

        g.clear_flow();
        assert!(g.edges().all(|(u, v)| g.flow(u, v) == 0));
    }

    #[test]
    fn test_cut_capacity() {
        let g = diamond();
        assert_eq!(g.cut_capacity(&[0]), 8);
        assert_eq!(g.cut_capacity(&[0, 1]), 7);
        assert_eq!(g.cut_capacity(&[0, 1, 2]), 10);
        assert_eq!(g.cut_capacity(&[0, 1, 2, 3]), 0);
    }

    #[test]
    fn test_validate() {
        let mut g = diamond();
        g.adjust_flow(0, 1, 6);
        assert_eq!(g.validate(), Err(Error::FlowOutOfBounds(0, 1)));

        let mut g = diamond();
        g.cancel_flow(2, 3, 1);
        assert_eq!(g.validate(), Err(Error::FlowOutOfBounds(2, 3)));

        let mut g = diamond();
        let e = g.id(1, 0);
        g.edges[e] = true;
        g.upper[e] = 1;
        assert_eq!(g.validate(), Err(Error::AntiParallel(0, 1)));

        let mut g = diamond();
        g.upper.pop();
        assert_eq!(g.validate(), Err(Error::TableSize { expected: 16, got: 15 }));

        let mut g = diamond();
        let e = g.id(2, 2);
        g.edges[e] = true;
        assert_eq!(g.validate(), Err(Error::Loop(2)));
    }
}
