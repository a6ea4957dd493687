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

//! Drawing flow networks in the DOT language of Graphviz.
//!
//! Each edge is labelled with `flow/capacity`, edges on the current
//! augmenting path are drawn thick and blue.
//!
//! ```
//! use rs_maxflow::Graph;
//! use rs_maxflow::draw::dot::write_dot;
//!
//! let mut g = Graph::<i32>::from_edges(3, &[(0, 1, 4), (1, 2, 2)]).unwrap();
//! g.adjust_flow(0, 1, 1);
//! let mut buf = Vec::new();
//! write_dot(&mut buf, &g, None).unwrap();
//! assert_eq!(
//!     String::from_utf8(buf).unwrap(),
//!     "digraph G{\n\t0->1 [label=\"1/4\"];\n\t1->2 [label=\"0/2\"];\n}\n"
//! );
//! ```

use super::{Error, Event, FlowDrawer, Result};
use crate::graph::Graph;
use crate::maxflow::Path;
use crate::num::traits::NumAssign;

use log::debug;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::Command;

/// Write the network `g` in DOT format.
///
/// The edges used by `path` are highlighted.
pub fn write_dot<W, F>(mut w: W, g: &Graph<F>, path: Option<&Path>) -> io::Result<()>
where
    W: Write,
    F: NumAssign + Ord + Copy + Display,
{
    writeln!(w, "digraph G{{")?;
    for (u, v) in g.edges() {
        write!(w, "\t{}->{} [label=\"{}/{}\"", u, v, g.flow(u, v), g.capacity(u, v))?;
        if path.map_or(false, |p| p.contains_edge(u, v)) {
            write!(w, ", color=\"blue\", penwidth=3")?;
        }
        writeln!(w, "];")?;
    }
    writeln!(w, "}}")?;
    w.flush()
}

/// Collects the DOT description of each drawing in memory.
#[derive(Clone, Debug, Default)]
pub struct DotFrames {
    pub frames: Vec<String>,
}

impl<F> FlowDrawer<F> for DotFrames
where
    F: NumAssign + Ord + Copy + Display,
{
    fn add_drawing(&mut self, g: &Graph<F>, event: Event) -> Result<()> {
        let mut buf = Vec::new();
        write_dot(&mut buf, g, event.path())?;
        self.frames.push(String::from_utf8_lossy(&buf).into_owned());
        Ok(())
    }
}

/// Renders each drawing to an image file with an external program.
///
/// The DOT description is written to the `scratch` file, then
/// `<program> -T<format> <scratch> -o <output_dir>/<prefix>-NNNN.<format>`
/// is run. Frames are numbered starting at 1.
#[derive(Clone, Debug)]
pub struct DotRenderer {
    /// The rendering program.
    pub program: String,
    /// The output format passed to the program.
    pub format: String,
    /// The file receiving the DOT description of the current frame.
    pub scratch: PathBuf,
    /// The directory of the image files.
    pub output_dir: PathBuf,
    /// The prefix of the image file names.
    pub prefix: String,
    frames: usize,
}

impl Default for DotRenderer {
    fn default() -> Self {
        DotRenderer {
            program: "dot".to_string(),
            format: "svg".to_string(),
            scratch: PathBuf::from(".temp"),
            output_dir: PathBuf::from("."),
            prefix: "img".to_string(),
            frames: 0,
        }
    }
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of frames drawn so far, including failed ones.
    pub fn num_frames(&self) -> usize {
        self.frames
    }

    /// Return the image file name of frame `frame`.
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}-{:04}.{}", self.prefix, frame, self.format))
    }

    /// Render a new frame of `g`, highlighting `path`.
    ///
    /// Returns the name of the image file.
    pub fn render<F>(&mut self, g: &Graph<F>, path: Option<&Path>) -> Result<PathBuf>
    where
        F: NumAssign + Ord + Copy + Display,
    {
        self.frames += 1;
        write_dot(BufWriter::new(File::create(&self.scratch)?), g, path)?;

        let output = self.frame_path(self.frames);
        let status = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg(&self.scratch)
            .arg("-o")
            .arg(&output)
            .status()?;
        if !status.success() {
            return Err(Error::Renderer {
                program: self.program.clone(),
                status,
            });
        }

        debug!("Rendered frame {}", output.display());
        Ok(output)
    }
}

impl<F> FlowDrawer<F> for DotRenderer
where
    F: NumAssign + Ord + Copy + Display,
{
    fn add_drawing(&mut self, g: &Graph<F>, event: Event) -> Result<()> {
        self.render(g, event.path()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::{write_dot, DotFrames, DotRenderer};
    use crate::draw::{Error, Event, FlowDrawer};
    use crate::maxflow::{Path, Step};
    use crate::Graph;

    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rs-maxflow-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_highlight_path() {
        let mut g = Graph::<i32>::from_edges(3, &[(0, 1, 4), (2, 1, 2), (0, 2, 1)]).unwrap();
        g.adjust_flow(2, 1, 2);
        let path = Path::new(vec![Step::Forward(0, 1), Step::Backward(2, 1)]);

        let mut buf = Vec::new();
        write_dot(&mut buf, &g, Some(&path)).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "digraph G{
\t0->1 [label=\"0/4\", color=\"blue\", penwidth=3];
\t0->2 [label=\"0/1\"];
\t2->1 [label=\"2/2\", color=\"blue\", penwidth=3];
}
"
        );
    }

    #[test]
    fn test_frames() {
        let g = Graph::<u32>::from_edges(2, &[(0, 1, 3)]).unwrap();
        let path = Path::new(vec![Step::Forward(0, 1)]);
        let mut frames = DotFrames::default();
        frames.add_drawing(&g, Event::Initial).unwrap();
        frames.add_drawing(&g, Event::PathFound(&path)).unwrap();
        assert_eq!(frames.frames.len(), 2);
        assert!(!frames.frames[0].contains("blue"));
        assert!(frames.frames[1].contains("blue"));
    }

    #[test]
    fn test_frame_path() {
        let mut r = DotRenderer::new();
        r.output_dir = PathBuf::from("out");
        assert_eq!(r.frame_path(7), PathBuf::from("out/img-0007.svg"));
        r.format = "png".to_string();
        r.prefix = "step".to_string();
        assert_eq!(r.frame_path(12), PathBuf::from("out/step-0012.png"));
    }

    #[test]
    fn test_missing_renderer() {
        let g = Graph::<i32>::from_edges(2, &[(0, 1, 3)]).unwrap();
        let mut r = DotRenderer::new();
        r.program = "rs-maxflow-no-such-renderer".to_string();
        r.scratch = scratch("missing.dot");
        assert!(matches!(r.render(&g, None), Err(Error::Io(_))));
        assert_eq!(r.num_frames(), 1);

        let text = std::fs::read_to_string(&r.scratch).unwrap();
        assert!(text.starts_with("digraph G{"));
        std::fs::remove_file(&r.scratch).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_status() {
        let g = Graph::<i32>::from_edges(2, &[(0, 1, 3)]).unwrap();
        let mut r = DotRenderer::new();
        r.scratch = scratch("status.dot");
        r.output_dir = std::env::temp_dir();

        r.program = "false".to_string();
        assert!(matches!(r.render(&g, None), Err(Error::Renderer { .. })));

        r.program = "true".to_string();
        assert_eq!(r.render(&g, None).unwrap(), r.frame_path(2));
        std::fs::remove_file(&r.scratch).unwrap();
    }
}
