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

//! Random flow networks.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rs_maxflow::generate::RandomNetwork;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let g = RandomNetwork::new(8, 100).generate(&mut rng).unwrap();
//! assert_eq!(g.num_nodes(), 8);
//! assert!(g.edges().all(|(u, v)| !g.has_edge(v, u)));
//! assert!(g.edges().all(|(u, v)| (1..=100).contains(&g.capacity(u, v))));
//! ```

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::num::traits::NumAssign;

use log::debug;
use rand::distr::uniform::SampleUniform;
use rand::Rng;

/// The number of nodes of the default random network.
pub const DEFAULT_NUM_NODES: usize = 8;

/// The largest capacity of the default random network.
pub const DEFAULT_MAX_CAPACITY: i32 = 100;

/// Parameters of a random network.
#[derive(Clone, Debug)]
pub struct RandomNetwork<F> {
    /// The number of nodes.
    pub num_nodes: usize,
    /// The probability that an edge `(u,v)` is added.
    pub edge_probability: f64,
    /// Capacities are chosen uniformly from `1..=max_capacity`.
    pub max_capacity: F,
}

impl Default for RandomNetwork<i32> {
    fn default() -> Self {
        RandomNetwork::new(DEFAULT_NUM_NODES, DEFAULT_MAX_CAPACITY)
    }
}

impl<F> RandomNetwork<F>
where
    F: NumAssign + Ord + Copy + SampleUniform,
{
    pub fn new(num_nodes: usize, max_capacity: F) -> Self {
        RandomNetwork {
            num_nodes,
            edge_probability: 0.5,
            max_capacity,
        }
    }

    /// Generate a random network.
    ///
    /// The pairs `(u,v)` are visited in row-major order. If the edge
    /// `(v,u)` has not been added before, the edge `(u,v)` is added with
    /// probability `edge_probability`. The result has neither loops nor
    /// antiparallel edges.
    pub fn generate<R>(&self, rng: &mut R) -> Result<Graph<F>>
    where
        R: Rng,
    {
        if self.max_capacity <= F::zero() {
            return Err(Error::MaxCapacity);
        }
        let p = self.edge_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::Probability(p));
        }

        let mut g = Graph::new(self.num_nodes)?;
        for u in 0..self.num_nodes {
            for v in 0..self.num_nodes {
                if u == v || g.has_edge(v, u) {
                    continue;
                }
                if rng.random_bool(p) {
                    let upper = rng.random_range(F::one()..=self.max_capacity);
                    g.add_edge(u, v, upper)?;
                }
            }
        }

        debug!(
            "Generated random network with {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomNetwork;
    use crate::Error;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_random_network() {
        let mut rng = Pcg64::seed_from_u64(17);
        for _ in 0..20 {
            let g = RandomNetwork::default().generate(&mut rng).unwrap();
            assert!(g.validate().is_ok());
            assert!(g.edges().all(|(u, v)| (1..=100).contains(&g.capacity(u, v))));
        }
    }

    #[test]
    fn test_reproducible() {
        let net = RandomNetwork::new(10, 20i64);
        let a = net.generate(&mut Pcg64::seed_from_u64(3)).unwrap();
        let b = net.generate(&mut Pcg64::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_probabilities() {
        let mut rng = Pcg64::seed_from_u64(5);
        let mut net = RandomNetwork::new(6, 3u32);

        net.edge_probability = 0.0;
        assert_eq!(net.generate(&mut rng).unwrap().num_edges(), 0);

        // every unordered pair gets exactly one edge, the lower-numbered node first
        net.edge_probability = 1.0;
        let g = net.generate(&mut rng).unwrap();
        assert_eq!(g.num_edges(), 15);
        assert!(g.edges().all(|(u, v)| u < v));
    }

    #[test]
    fn test_invalid_parameters() {
        let mut rng = Pcg64::seed_from_u64(1);
        assert_eq!(RandomNetwork::new(0, 5i32).generate(&mut rng), Err(Error::NoNodes));
        assert_eq!(RandomNetwork::new(3, 0i32).generate(&mut rng), Err(Error::MaxCapacity));

        let mut net = RandomNetwork::new(3, 5i32);
        net.edge_probability = 1.5;
        assert_eq!(net.generate(&mut rng), Err(Error::Probability(1.5)));
    }
}
