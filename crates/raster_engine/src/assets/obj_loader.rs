//! OBJ file loader for triangle lists
//!
//! Reads the small Wavefront subset the engine needs: `v`, `vt`, `vn` and
//! `f` lines. Polygons are fan-triangulated around their first corner and
//! emitted as a flat list of [`Point`]s, three per triangle.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::foundation::math::{self, Vec4};
use crate::render::Point;

/// Which attribute list a face index points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// `v` lines
    Position,
    /// `vt` lines
    TexCoord,
    /// `vn` lines
    Normal,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Position => "position",
            Self::TexCoord => "texture coordinate",
            Self::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// Errors produced while reading an OBJ source
#[derive(Error, Debug)]
pub enum ObjError {
    /// The source could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric token was malformed or a line had too few components
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based source line
        line: usize,
        /// What went wrong
        message: String,
    },

    /// A face referenced an element that has not been defined
    #[error("Line {line}: {kind} index {index} out of range ({count} defined)")]
    IndexOutOfRange {
        /// 1-based source line
        line: usize,
        /// Attribute list the index refers to
        kind: AttributeKind,
        /// The 1-based index as written in the source
        index: usize,
        /// How many elements of that kind existed at that point
        count: usize,
    },
}

/// Incremental fan triangulation of one polygon
///
/// Keeps at most three corners. Once three are present a triangle is emitted
/// and the middle corner is dropped, so the first corner roots every
/// triangle of the polygon.
#[derive(Debug, Default)]
struct FanTriangulator {
    corners: Vec<Point>,
    emitted: usize,
}

impl FanTriangulator {
    fn push(&mut self, corner: Point, out: &mut Vec<Point>) {
        self.corners.push(corner);
        if self.corners.len() == 3 {
            out.extend_from_slice(&self.corners);
            self.corners.remove(1);
            self.emitted += 1;
        }
    }
}

/// Parser state for one OBJ source
#[derive(Debug, Default)]
struct ObjParser {
    points: Vec<Point>,
    tex_coords: Vec<Vec4>,
    normals: Vec<Vec4>,
    triangles: Vec<Point>,
    line: usize,
}

impl ObjParser {
    fn parse_line(&mut self, line: &str) -> Result<(), ObjError> {
        self.line += 1;
        let line = line.trim_end_matches('\r');

        // Also rejects lines whose second byte is inside a multi-byte char
        let Some(prefix) = line.get(..2) else {
            return Ok(());
        };
        let rest = &line[2..];

        match prefix {
            "v " => self.parse_vertex(rest),
            "f " => self.parse_face(rest),
            "vt" if rest.starts_with(char::is_whitespace) => self.parse_tex_coord(rest),
            "vn" if rest.starts_with(char::is_whitespace) => self.parse_normal(rest),
            _ => {
                log::trace!("Ignoring line {}: {}", self.line, line);
                Ok(())
            }
        }
    }

    fn parse_vertex(&mut self, rest: &str) -> Result<(), ObjError> {
        let values = self.parse_floats(rest, 3, "vertex")?;
        let mut point = Point::from_position(math::position(values[0], values[1], values[2]));
        if values.len() == 6 {
            point.color = Vec4::new(values[3], values[4], values[5], 1.0);
        }
        log::debug!("point: {:?}", point.position);
        self.points.push(point);
        Ok(())
    }

    fn parse_tex_coord(&mut self, rest: &str) -> Result<(), ObjError> {
        let values = self.parse_floats(rest, 2, "texture coordinate")?;
        let w = values.get(2).copied().unwrap_or(0.0);
        self.tex_coords.push(Vec4::new(values[0], values[1], w, 0.0));
        Ok(())
    }

    fn parse_normal(&mut self, rest: &str) -> Result<(), ObjError> {
        let values = self.parse_floats(rest, 3, "normal")?;
        self.normals.push(math::direction(values[0], values[1], values[2]));
        Ok(())
    }

    fn parse_face(&mut self, rest: &str) -> Result<(), ObjError> {
        let mut fan = FanTriangulator::default();
        let mut corners = 0;
        for token in rest.split_whitespace() {
            let corner = self.resolve_corner(token)?;
            fan.push(corner, &mut self.triangles);
            corners += 1;
        }

        if fan.emitted == 0 {
            log::warn!("Face on line {} has {} corner(s), skipping", self.line, corners);
        }
        Ok(())
    }

    /// Turn a `v`, `v/vt`, `v//vn` or `v/vt/vn` token into a point
    fn resolve_corner(&self, token: &str) -> Result<Point, ObjError> {
        let mut parts = token.split('/');

        let position = match parts.next() {
            Some(part) if !part.is_empty() => self.parse_index(part)?,
            _ => return Err(self.parse_error(format!("face corner '{}' has no vertex index", token))),
        };
        let mut point = *lookup(&self.points, position, AttributeKind::Position, self.line)?;

        if let Some(part) = parts.next().filter(|p| !p.is_empty()) {
            let index = self.parse_index(part)?;
            point.uv = *lookup(&self.tex_coords, index, AttributeKind::TexCoord, self.line)?;
        }
        if let Some(part) = parts.next().filter(|p| !p.is_empty()) {
            let index = self.parse_index(part)?;
            point.normal = *lookup(&self.normals, index, AttributeKind::Normal, self.line)?;
        }

        Ok(point)
    }

    fn parse_index(&self, token: &str) -> Result<usize, ObjError> {
        token
            .parse::<usize>()
            .map_err(|e| self.parse_error(format!("invalid index '{}': {}", token, e)))
    }

    fn parse_floats(&self, rest: &str, required: usize, what: &str) -> Result<Vec<f32>, ObjError> {
        let values = rest
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f32>()
                    .map_err(|e| self.parse_error(format!("invalid {} component '{}': {}", what, token, e)))
            })
            .collect::<Result<Vec<f32>, _>>()?;

        if values.len() < required {
            return Err(self.parse_error(format!(
                "{} needs {} components, found {}",
                what,
                required,
                values.len()
            )));
        }
        Ok(values)
    }

    fn parse_error(&self, message: String) -> ObjError {
        ObjError::Parse { line: self.line, message }
    }
}

/// Look up a 1-based OBJ index
fn lookup<T>(items: &[T], index: usize, kind: AttributeKind, line: usize) -> Result<&T, ObjError> {
    index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or(ObjError::IndexOutOfRange {
            line,
            kind,
            index,
            count: items.len(),
        })
}

/// Loader entry points
pub struct ObjLoader;

impl ObjLoader {
    /// Load an OBJ file and return its triangle list
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, ObjError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::info!("Loading mesh: {}", path.display());
        Self::parse(BufReader::new(file))
    }

    /// Parse OBJ text from any buffered reader
    pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Point>, ObjError> {
        let mut parser = ObjParser::default();
        for line in reader.lines() {
            parser.parse_line(&line?)?;
        }

        log::info!(
            "Parsed {} point(s) into {} triangle(s)",
            parser.points.len(),
            parser.triangles.len() / 3
        );
        Ok(parser.triangles)
    }

    /// Parse OBJ text held in memory
    pub fn parse_str(source: &str) -> Result<Vec<Point>, ObjError> {
        Self::parse(source.as_bytes())
    }
}
