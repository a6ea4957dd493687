/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use time::OffsetDateTime;

use rustop::opts;

use rs_maxflow::dimacs;
use rs_maxflow::EdmondsKarp;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve max-flow problem with the algorithm of Edmonds-Karp.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        param file:String, desc:"Instance file name";
    }
    .parse_or_exit();

    let tstart = OffsetDateTime::now_utc();
    let mut instance = dimacs::read_from_file::<i64>(&args.file)?;
    let s = instance.src;
    let t = instance.snk;

    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of nodes: {}", instance.graph.num_nodes());
    println!("  number of arcs: {}", instance.graph.num_edges());

    let mut ek = EdmondsKarp::new(&mut instance.graph);
    let tstart = OffsetDateTime::now_utc();
    for _ in 0..args.num {
        ek.solve(s, t)?;
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("Flow: {}", ek.value());
    println!("Augmentations: {}", ek.num_augmentations());

    let mincut = ek.mincut();
    let g = &instance.graph;
    assert!(g.edges().all(|(u, v)| g.flow(u, v) >= 0 && g.flow(u, v) <= g.capacity(u, v)));
    assert!((0..g.num_nodes())
        .filter(|&u| u != s && u != t)
        .all(|u| g.inflow(u) == g.outflow(u)));
    assert_eq!(g.cut_capacity(&mincut), g.net_outflow(s));

    Ok(())
}
