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

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustop::opts;

use rs_maxflow::draw::dot::DotRenderer;
use rs_maxflow::draw::NoDrawer;
use rs_maxflow::generate::RandomNetwork;
use rs_maxflow::string::{capacities, edges, flows};
use rs_maxflow::EdmondsKarp;

use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Compute a maximum flow on a random network.";
        opt nodes:usize=8, desc:"Number of nodes.";
        opt capacity:i32=100, desc:"Maximal edge capacity.";
        opt probability:f64=0.5, desc:"Probability of each edge.";
        opt seed:Option<u64>, desc:"Seed of the random number generator.";
        opt render:bool, desc:"Render each step with graphviz.";
        opt format:String="svg".to_string(), desc:"Image format of the rendered steps.";
        opt outdir:String=".".to_string(), desc:"Directory of the rendered steps.";
    }
    .parse_or_exit();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut net = RandomNetwork::new(args.nodes, args.capacity);
    net.edge_probability = args.probability;
    let mut g = net.generate(&mut rng)?;
    let (s, t) = (0, g.num_nodes() - 1);

    println!("Edges:\n{}", edges(&g));
    println!("Capacities:\n{}", capacities(&g));

    let mut ek = EdmondsKarp::new(&mut g);
    let value = if args.render {
        let mut renderer = DotRenderer::new();
        renderer.format = args.format;
        renderer.output_dir = PathBuf::from(args.outdir);
        let value = ek.solve_with(s, t, &mut renderer)?;
        println!("Frames: {}", renderer.num_frames());
        value
    } else {
        ek.solve_with(s, t, NoDrawer)?
    };
    let mincut = ek.mincut();

    println!("Flows:\n{}", flows(&g));
    println!("Min cut: {:?}", mincut);
    println!("MAX FLOW: {}", value);

    Ok(())
}
