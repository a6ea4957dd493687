/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::Graph;
//! use rs_maxflow::maxflow::edmondskarp;
//!
//! //      1
//! //    /   \
//! //   5     4
//! //  /       \
//! // 0         3
//! //  \       /
//! //   3     6
//! //    \   /
//! //      2
//! let mut g = Graph::from_edges(4, &[(0, 1, 5), (0, 2, 3), (1, 3, 4), (2, 3, 6)]).unwrap();
//!
//! let (value, mincut) = edmondskarp(&mut g, 0, 3).unwrap();
//!
//! assert_eq!(value, 7);
//! assert_eq!(g.flow(0, 1), 4);
//! assert_eq!(g.flow(0, 2), 3);
//! assert!(g.edges().all(|(u, v)| g.flow(u, v) >= 0 && g.flow(u, v) <= g.capacity(u, v)));
//! assert!((1..3).all(|u| g.inflow(u) == g.outflow(u)));
//!
//! assert_eq!(mincut, vec![0, 1]);
//! assert_eq!(g.cut_capacity(&mincut), value);
//! ```
//!
//! Flow on an edge may have to be canceled later on:
//!
//! ```
//! use rs_maxflow::Graph;
//! use rs_maxflow::maxflow::EdmondsKarp;
//!
//! let mut g = Graph::from_edges(
//!     7,
//!     &[(0, 1, 1), (1, 2, 1), (2, 6, 1), (0, 3, 1), (3, 2, 1), (1, 4, 1), (4, 5, 1), (5, 6, 1)],
//! )
//! .unwrap();
//!
//! let mut ek = EdmondsKarp::new(&mut g);
//! assert_eq!(ek.solve(0, 6).unwrap(), 2);
//! assert_eq!(ek.num_augmentations(), 2);
//! assert_eq!(ek.as_graph().flow(1, 2), 0);
//! ```

use super::bfs::ResidualBfs;
use super::path::{augment, bottleneck};
use crate::draw::{Event, FlowDrawer, NoDrawer};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::num::traits::NumAssign;

use log::{debug, warn};
use std::fmt::Display;

/// Max-flow algorithm of Edmonds and Karp.
///
/// The flow is stored in the graph itself.
pub struct EdmondsKarp<'a, F> {
    g: &'a mut Graph<F>,
    bfs: ResidualBfs,
    value: F,
    num_augmentations: usize,
}

impl<'a, F> EdmondsKarp<'a, F>
where
    F: NumAssign + Ord + Copy + Display,
{
    /// Create a new Edmonds-Karp algorithm instance for a graph.
    pub fn new(g: &'a mut Graph<F>) -> Self {
        EdmondsKarp {
            g,
            bfs: ResidualBfs::new(),
            value: F::zero(),
            num_augmentations: 0,
        }
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &Graph<F> {
        &*self.g
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the number of augmentations of the latest computation.
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    /// Compute a maximum flow from `src` to `snk`.
    pub fn solve(&mut self, src: usize, snk: usize) -> Result<F> {
        self.solve_with(src, snk, NoDrawer)
    }

    /// Compute a maximum flow from `src` to `snk` and draw each step.
    ///
    /// The computation starts with the zero flow. Any flow stored in the
    /// graph is overwritten. Drawing errors are logged and ignored.
    pub fn solve_with<D>(&mut self, src: usize, snk: usize, mut drawer: D) -> Result<F>
    where
        D: FlowDrawer<F>,
    {
        self.value = F::zero();
        self.num_augmentations = 0;
        self.bfs.clear();

        self.g.validate()?;
        self.g.check_node(src)?;
        self.g.check_node(snk)?;
        if src == snk {
            return Err(Error::SourceIsSink(src));
        }

        // initialize network flow
        self.g.clear_flow();

        draw(&mut drawer, self.g, Event::Initial);

        while let Some(path) = self.bfs.search(self.g, src, snk) {
            draw(&mut drawer, self.g, Event::PathFound(&path));

            let df = bottleneck(self.g, &path)?;
            debug_assert!(df > F::zero());

            augment(self.g, &path, df);
            self.value += df;
            self.num_augmentations += 1;
            debug!(
                "Augmentation {}: {} units along {} edges, flow value {}",
                self.num_augmentations,
                df,
                path.len(),
                self.value
            );

            draw(&mut drawer, self.g, Event::FlowUpdated);
        }

        let value = self.g.net_outflow(src);
        debug_assert!(value == self.value);
        self.value = value;
        Ok(value)
    }

    /// Return the minimal cut associated with the last maximum flow.
    ///
    /// These are the nodes on the source side in increasing order.
    pub fn mincut(&self) -> Vec<usize> {
        self.bfs.reached()
    }
}

fn draw<F, D>(drawer: &mut D, g: &Graph<F>, event: Event)
where
    D: FlowDrawer<F>,
{
    if let Err(err) = drawer.add_drawing(g, event) {
        warn!("Drawing failed: {}", err);
    }
}

/// Compute the value of a maximum flow from `src` to `snk`.
///
/// The flow itself is stored in `g`.
pub fn max_flow<F>(g: &mut Graph<F>, src: usize, snk: usize) -> Result<F>
where
    F: NumAssign + Ord + Copy + Display,
{
    EdmondsKarp::new(g).solve(src, snk)
}

/// Compute the value of a maximum flow and draw each step with `drawer`.
pub fn max_flow_with<F, D>(g: &mut Graph<F>, src: usize, snk: usize, drawer: D) -> Result<F>
where
    F: NumAssign + Ord + Copy + Display,
    D: FlowDrawer<F>,
{
    EdmondsKarp::new(g).solve_with(src, snk, drawer)
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source node `src`
/// to the sink node `snk`. The flow is stored in `g`.
///
/// The function returns the flow value and the nodes on the source side
/// of a minimal cut.
pub fn edmondskarp<F>(g: &mut Graph<F>, src: usize, snk: usize) -> Result<(F, Vec<usize>)>
where
    F: NumAssign + Ord + Copy + Display,
{
    let mut maxflow = EdmondsKarp::new(g);
    let value = maxflow.solve(src, snk)?;
    Ok((value, maxflow.mincut()))
}

#[cfg(test)]
mod tests {
    use super::{max_flow, max_flow_with, EdmondsKarp};
    use crate::draw::{self, Event, FlowDrawer};
    use crate::maxflow::Path;
    use crate::{Error, Graph};

    #[derive(Default)]
    struct Recorder {
        events: Vec<&'static str>,
        paths: Vec<Path>,
        values: Vec<i32>,
    }

    impl FlowDrawer<i32> for Recorder {
        fn add_drawing(&mut self, g: &Graph<i32>, event: Event) -> draw::Result<()> {
            match event {
                Event::Initial => self.events.push("initial"),
                Event::PathFound(path) => {
                    self.events.push("path");
                    self.paths.push(path.clone());
                }
                Event::FlowUpdated => {
                    self.events.push("flow");
                    self.values.push(g.net_outflow(0));
                }
            }
            Ok(())
        }
    }

    struct Failing(usize);

    impl FlowDrawer<i32> for Failing {
        fn add_drawing(&mut self, _g: &Graph<i32>, _event: Event) -> draw::Result<()> {
            self.0 += 1;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe").into())
        }
    }

    fn network() -> Graph<i32> {
        Graph::from_edges(
            6,
            &[
                (0, 1, 16),
                (0, 2, 13),
                (2, 1, 4),
                (1, 3, 12),
                (3, 2, 9),
                (2, 4, 14),
                (4, 3, 7),
                (3, 5, 20),
                (4, 5, 4),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_events() {
        let mut g = network();
        let mut rec = Recorder::default();
        let value = max_flow_with(&mut g, 0, 5, &mut rec).unwrap();
        assert_eq!(value, 23);

        let n = rec.paths.len();
        assert!(n > 0);
        assert_eq!(rec.events.len(), 1 + 2 * n);
        assert_eq!(rec.events[0], "initial");
        assert!(rec.events[1..].chunks(2).all(|c| c == ["path", "flow"]));

        // strictly increasing flow value
        assert!(rec.values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(rec.values.last(), Some(&23));
    }

    #[test]
    fn test_failing_drawer() {
        let mut g = network();
        let mut drawer = Failing(0);
        assert_eq!(max_flow_with(&mut g, 0, 5, &mut drawer), Ok(23));
        assert!(drawer.0 >= 3);
    }

    #[test]
    fn test_repeated_solve() {
        let mut g = network();
        let mut ek = EdmondsKarp::new(&mut g);
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        assert_eq!(ek.solve_with(0, 5, &mut first), Ok(23));
        let num = ek.num_augmentations();
        let cut = ek.mincut();
        assert_eq!(ek.solve_with(0, 5, &mut second), Ok(23));
        assert_eq!(ek.num_augmentations(), num);
        assert_eq!(ek.mincut(), cut);
        assert_eq!(first.paths, second.paths);
        assert_eq!(ek.value(), 23);
    }

    #[test]
    fn test_failed_solve_resets() {
        let mut g = network();
        let mut ek = EdmondsKarp::new(&mut g);
        assert_eq!(ek.solve(0, 5), Ok(23));
        assert!(ek.num_augmentations() > 0);

        assert_eq!(ek.solve(3, 3), Err(Error::SourceIsSink(3)));
        assert_eq!(ek.value(), 0);
        assert_eq!(ek.num_augmentations(), 0);
        assert!(ek.mincut().is_empty());
    }

    #[test]
    fn test_mincut() {
        let mut g = network();
        let mut ek = EdmondsKarp::new(&mut g);
        ek.solve(0, 5).unwrap();
        let cut = ek.mincut();
        assert_eq!(cut, vec![0, 1, 2, 4]);
        assert_eq!(ek.as_graph().cut_capacity(&cut), 23);
    }

    #[test]
    fn test_invalid_problem() {
        let mut g = network();
        assert_eq!(max_flow(&mut g, 2, 2), Err(Error::SourceIsSink(2)));
        assert_eq!(
            max_flow(&mut g, 0, 6),
            Err(Error::NodeOutOfRange { node: 6, num_nodes: 6 })
        );
        assert_eq!(
            max_flow(&mut g, 9, 5),
            Err(Error::NodeOutOfRange { node: 9, num_nodes: 6 })
        );

        g.adjust_flow(0, 1, 17);
        assert_eq!(max_flow(&mut g, 0, 5), Err(Error::FlowOutOfBounds(0, 1)));
    }

    #[test]
    fn test_reset_flow() {
        let mut g = network();
        g.adjust_flow(0, 2, 10);
        assert_eq!(max_flow(&mut g, 0, 5), Ok(23));
        assert!((1..5).all(|u| g.inflow(u) == g.outflow(u)));
    }
}
