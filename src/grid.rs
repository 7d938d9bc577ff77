//! MovingAI `.map` octile grids as a [`Graph`].

use std::fs;
use std::path::Path;

use crate::core::{Cost32, Graph, MapError, NodeId};

fn is_free_char(c: u8) -> bool {
    matches!(c, b'.' | b'G' | b'S')
}

/// Straight-move and diagonal-move deltas, paired with their integer costs.
/// Index order matches the original 8-neighbour table; the first four
/// entries are the 4-connected subset.
const DX8: [i32; 8] = [1, -1, 0, 0, 1, 1, -1, -1];
const DY8: [i32; 8] = [0, 0, 1, -1, 1, -1, 1, -1];
const W8: [Cost32; 8] = [10, 10, 10, 10, 14, 14, 14, 14];

/// A MovingAI octile grid map, exposed as an 8- or 4-connected [`Graph`].
///
/// Node ids are `y * width + x`; `num_nodes() == width * height` even though
/// blocked cells never appear as the source or target of an edge.
#[derive(Debug, Clone)]
pub struct GridMap {
    width: usize,
    height: usize,
    allow_diag: bool,
    free: Vec<bool>,
}

impl GridMap {
    /// Parse a MovingAI `.map` file. `allow_diag` selects 8- vs 4-connectivity
    /// for [`Graph::edges`].
    pub fn load<P: AsRef<Path>>(map_path: P, allow_diag: bool) -> Result<Self, MapError> {
        let path = map_path.as_ref();
        let path_str = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| MapError::Open {
            path: path_str.clone(),
            source,
        })?;
        Self::parse(&path_str, &text, allow_diag)
    }

    fn parse(path: &str, text: &str, allow_diag: bool) -> Result<Self, MapError> {
        let mut lines = text.lines();

        let header_err = |reason: &str| MapError::Header {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        let type_line = lines.next().ok_or_else(|| header_err("missing type line"))?;
        if !type_line.trim_start().starts_with("type") {
            return Err(header_err("expected 'type octile' line"));
        }

        let height_line = lines.next().ok_or_else(|| header_err("missing height line"))?;
        let height: usize = height_line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| header_err("missing height value"))?
            .parse()
            .map_err(|_| header_err("height is not an integer"))?;

        let width_line = lines.next().ok_or_else(|| header_err("missing width line"))?;
        let width: usize = width_line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| header_err("missing width value"))?
            .parse()
            .map_err(|_| header_err("width is not an integer"))?;

        let map_tag = lines.next().ok_or_else(|| header_err("missing 'map' line"))?;
        if map_tag.trim() != "map" {
            return Err(header_err("expected 'map' line"));
        }

        if width == 0 || height == 0 {
            return Err(header_err("width and height must both be positive"));
        }

        let mut free = vec![false; width * height];
        for y in 0..height {
            let row = lines.next().ok_or_else(|| MapError::ShortRow {
                path: path.to_string(),
                row: y,
                expected: width,
                found: 0,
            })?;
            let bytes = row.as_bytes();
            if bytes.len() < width {
                return Err(MapError::ShortRow {
                    path: path.to_string(),
                    row: y,
                    expected: width,
                    found: bytes.len(),
                });
            }
            for x in 0..width {
                free[y * width + x] = is_free_char(bytes[x]);
            }
        }

        Ok(Self { width, height, allow_diag, free })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn allow_diag(&self) -> bool {
        self.allow_diag
    }

    pub fn passable(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.free[y as usize * self.width + x as usize]
    }

    pub fn node_id(&self, x: usize, y: usize) -> NodeId {
        (y * self.width + x) as NodeId
    }

    pub fn xy(&self, u: NodeId) -> (i64, i64) {
        let u = u as usize;
        ((u % self.width) as i64, (u / self.width) as i64)
    }
}

impl Graph for GridMap {
    fn num_nodes(&self) -> usize {
        self.width * self.height
    }

    fn edges(&self, u: NodeId) -> Box<dyn Iterator<Item = (NodeId, Cost32)> + '_> {
        let (x, y) = self.xy(u);
        if !self.passable(x, y) {
            return Box::new(std::iter::empty());
        }
        let n = if self.allow_diag { 8 } else { 4 };
        let width = self.width;
        Box::new((0..n).filter_map(move |i| {
            let nx = x + DX8[i] as i64;
            let ny = y + DY8[i] as i64;
            if !self.passable(nx, ny) {
                return None;
            }
            Some(((ny as usize * width + nx as usize) as NodeId, W8[i]))
        }))
    }
}
