/// Wavefront OBJ loader (positions and faces only)
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{i64 as integer, space0, space1},
    multi::many1,
    number::complete::float,
    sequence::{preceded, terminated, tuple},
    IResult,
};
use std::fs;
use std::path::Path;

use crate::error::MeshError;
use crate::geometry::Mesh;
use crate::math::Vec3;

/// Load and parse an OBJ file
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, MeshError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mesh = parse_obj(&text)?;
    log::info!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertices().len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ text.
///
/// Only `v` and `f` lines contribute. Face tokens may be `i`, `i/t`, `i//n` or
/// `i/t/n`; only the 1-based position index is kept. Polygons are split into a
/// fan around their first vertex. Lines that fail to parse are skipped.
pub fn parse_obj(text: &str) -> Result<Mesh, MeshError> {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let number = number + 1;

        if line.starts_with("v ") {
            match vertex_line(line) {
                Ok((_, vertex)) => vertices.push(vertex),
                Err(_) => log::warn!("line {}: malformed vertex {:?}", number, line),
            }
        } else if line.starts_with("f ") {
            match face_indices(line) {
                Some(face) => triangulate_fan(&face, &mut indices),
                None => log::warn!("line {}: malformed face {:?}", number, line),
            }
        } else {
            log::trace!("line {}: skipped", number);
        }
    }

    Mesh::new(vertices, indices)
}

/// Emit `(0, i, i + 1)` for each corner after the first two
fn triangulate_fan(face: &[u32], indices: &mut Vec<u32>) {
    for pair in face[1..].windows(2) {
        indices.extend_from_slice(&[face[0], pair[0], pair[1]]);
    }
}

/// Zero-based position indices of a face with at least three corners
fn face_indices(line: &str) -> Option<Vec<u32>> {
    let (rest, raw) = face_line(line).ok()?;
    if !rest.trim().is_empty() || raw.len() < 3 {
        return None;
    }
    raw.into_iter()
        .map(|index| u32::try_from(index.checked_sub(1)?).ok())
        .collect()
}

fn vertex_line(input: &str) -> IResult<&str, Vec3> {
    let (input, _) = tag("v ")(input)?;
    let (input, (x, y, z)) = tuple((
        preceded(space0, float),
        preceded(space1, float),
        preceded(space1, float),
    ))(input)?;
    Ok((input, Vec3::new(x, y, z)))
}

fn face_line(input: &str) -> IResult<&str, Vec<i64>> {
    preceded(tag("f"), many1(preceded(space1, face_vertex)))(input)
}

/// `i`, `i/t`, `i//n` or `i/t/n`: keep `i`, skip the rest of the token
fn face_vertex(input: &str) -> IResult<&str, i64> {
    terminated(integer, take_till(char::is_whitespace))(input)
}
