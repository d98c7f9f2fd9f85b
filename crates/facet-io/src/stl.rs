//! STL (Stereolithography) file loading.
//!
//! Supports both ASCII and binary STL formats.
//!
//! # Format Detection
//!
//! The loader automatically detects whether a file is ASCII or binary:
//! - ASCII files start with "solid" (after optional whitespace)
//! - Binary files have an 80-byte header followed by a triangle count
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    - Header (ignored, often contains file info)
//! UINT32       - Number of triangles
//! foreach triangle
//!     REAL32[3] - Normal vector
//!     REAL32[3] - Vertex 1
//!     REAL32[3] - Vertex 2
//!     REAL32[3] - Vertex 3
//!     UINT16    - Attribute byte count (usually 0)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! # Normals
//!
//! The facet normal stored in the file is kept on each record verbatim;
//! it is never recomputed from the vertices. A zero-length stored normal
//! is replaced by the winding normal (right-hand rule over the vertex
//! order) so every record carries a usable direction.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use facet_types::{Model, Point3, RawTriangle, Vector3};
use tracing::info;

use crate::error::{StlError, StlResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Load raw triangles from an STL file.
///
/// Automatically detects ASCII vs binary format. Stored facet normals
/// come through verbatim; only a zero-length stored normal is replaced
/// by the winding normal.
///
/// # Arguments
///
/// * `path` - Path to the STL file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content is not valid STL
///
/// # Example
///
/// ```no_run
/// use facet_io::load_stl;
///
/// let triangles = load_stl("model.stl").unwrap();
/// println!("Loaded {} triangles", triangles.len());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> StlResult<Vec<RawTriangle>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StlError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StlError::Io(e)
        }
    })?;

    let mut reader = BufReader::new(file);

    // Read enough to determine format
    let mut header = [0u8; HEADER_SIZE + 4];
    let bytes_read = reader.read(&mut header)?;

    if bytes_read < 6 {
        return Err(StlError::invalid_content("file too small to be valid STL"));
    }

    // Check if ASCII (starts with "solid")
    let header_str = String::from_utf8_lossy(&header[..bytes_read.min(HEADER_SIZE)]);
    let trimmed = header_str.trim_start();

    let triangles = if trimmed.starts_with("solid") && !is_binary_stl_header(&header[..bytes_read])
    {
        // ASCII format - need to re-read from start
        drop(reader);
        let file = File::open(path)?;
        load_stl_ascii(BufReader::new(file))
    } else {
        // Binary format - continue reading
        load_stl_binary_from_header(&header[..bytes_read], reader)
    }?;

    info!(
        path = %path.display(),
        triangles = triangles.len(),
        "Loaded STL file"
    );

    Ok(triangles)
}

/// Load a model from an STL file.
///
/// Convenience wrapper around [`load_stl`] that assembles the raw
/// records into a `Model` of three-edge faces.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid STL.
///
/// # Example
///
/// ```no_run
/// use facet_io::load_model;
///
/// let model = load_model("model.stl").unwrap();
/// println!("Loaded {} faces", model.face_count());
/// ```
pub fn load_model<P: AsRef<Path>>(path: P) -> StlResult<Model> {
    let triangles = load_stl(path)?;
    Ok(Model::from_triangles(&triangles))
}

/// Check if the header suggests binary STL despite starting with "solid".
///
/// Some binary STLs happen to have "solid" in the header. Binary headers
/// often contain null bytes; ASCII files never do.
fn is_binary_stl_header(header: &[u8]) -> bool {
    if header.len() < HEADER_SIZE + 4 {
        return false;
    }

    header[..HEADER_SIZE].contains(&0)
}

/// Load a binary STL given the already-read header.
fn load_stl_binary_from_header<R: Read>(
    header: &[u8],
    mut reader: R,
) -> StlResult<Vec<RawTriangle>> {
    if header.len() < HEADER_SIZE + 4 {
        return Err(StlError::invalid_content(
            "binary STL truncated before triangle count",
        ));
    }

    // Triangle count is stored after the 80-byte header
    let triangle_count = u32::from_le_bytes([
        header[HEADER_SIZE],
        header[HEADER_SIZE + 1],
        header[HEADER_SIZE + 2],
        header[HEADER_SIZE + 3],
    ]);

    let mut triangles = Vec::with_capacity(triangle_count as usize);

    let mut record = [0u8; TRIANGLE_SIZE];
    for i in 0..triangle_count {
        let bytes_read = reader.read(&mut record)?;
        if bytes_read < TRIANGLE_SIZE {
            return Err(StlError::TriangleCountMismatch {
                expected: triangle_count,
                got: i,
            });
        }

        let normal = read_triple(&record[0..12]);
        let v0 = read_triple(&record[12..24]);
        let v1 = read_triple(&record[24..36]);
        let v2 = read_triple(&record[36..48]);

        let vertices = [v0, v1, v2];
        triangles.push(RawTriangle::new(
            vertices,
            resolve_normal(&vertices, normal),
        ));
    }

    Ok(triangles)
}

/// Read three little-endian f32s from 12 bytes, widening to f64.
fn read_triple(buf: &[u8]) -> [f64; 3] {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    [f64::from(x), f64::from(y), f64::from(z)]
}

/// Pick the normal for a triangle record.
///
/// The stored normal wins when it has nonzero length; a zero normal is
/// replaced by the cross product of the winding edges. The replacement
/// is left unnormalized since unit-normal queries normalize on demand.
fn resolve_normal(vertices: &[[f64; 3]; 3], stored: [f64; 3]) -> [f64; 3] {
    if Vector3::from(stored).norm_squared() > f64::EPSILON {
        return stored;
    }

    let [a, b, c] = vertices.map(Point3::from);
    (b - a).cross(&(c - a)).into()
}

/// Load an ASCII STL file.
fn load_stl_ascii<R: BufRead>(reader: R) -> StlResult<Vec<RawTriangle>> {
    let mut triangles = Vec::new();
    let mut in_facet = false;
    let mut in_loop = false;
    let mut facet_normal = [0.0; 3];
    let mut vertices_in_facet: Vec<[f64; 3]> = Vec::with_capacity(3);

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "facet" => {
                in_facet = true;
                facet_normal = if parts.len() >= 5 && parts[1].eq_ignore_ascii_case("normal") {
                    [parts[2].parse()?, parts[3].parse()?, parts[4].parse()?]
                } else {
                    [0.0; 3]
                };
            }
            "outer" => {
                if parts.len() >= 2 && parts[1].eq_ignore_ascii_case("loop") {
                    in_loop = true;
                    vertices_in_facet.clear();
                }
            }
            "vertex" => {
                if in_loop && parts.len() >= 4 {
                    let x: f64 = parts[1].parse()?;
                    let y: f64 = parts[2].parse()?;
                    let z: f64 = parts[3].parse()?;
                    vertices_in_facet.push([x, y, z]);
                }
            }
            "endloop" => {
                in_loop = false;
            }
            "endfacet" => {
                if in_facet && vertices_in_facet.len() == 3 {
                    let vertices = [
                        vertices_in_facet[0],
                        vertices_in_facet[1],
                        vertices_in_facet[2],
                    ];
                    triangles.push(RawTriangle::new(
                        vertices,
                        resolve_normal(&vertices, facet_normal),
                    ));
                }
                in_facet = false;
            }
            "endsolid" => {
                // End of solid
                break;
            }
            _ => {
                // Ignore unknown lines
            }
        }
    }

    Ok(triangles)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::unnecessary_raw_string_hashes
)]
mod tests {
    use super::*;

    /// Assemble binary STL bytes from (normal, vertices) records.
    fn binary_stl_bytes(records: &[([f32; 3], [[f32; 3]; 3])]) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_SIZE];
        let count = u32::try_from(records.len()).unwrap();
        bytes.extend_from_slice(&count.to_le_bytes());

        for (normal, vertices) in records {
            for value in normal {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
            for vertex in vertices {
                for value in vertex {
                    bytes.extend_from_slice(&value.to_le_bytes());
                }
            }
            bytes.extend_from_slice(&0u16.to_le_bytes());
        }

        bytes
    }

    #[test]
    fn ascii_stl_parsing() {
        let ascii_stl = br#"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test"#;

        let triangles = load_stl_ascii(BufReader::new(&ascii_stl[..])).unwrap();

        assert_eq!(triangles.len(), 1);
        assert_eq!(
            triangles[0].vertices,
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
        assert_eq!(triangles[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn ascii_normal_kept_verbatim() {
        // A non-unit stored normal must come through unnormalized.
        let ascii_stl = br#"solid test
  facet normal 0 0 2.5
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test"#;

        let triangles = load_stl_ascii(BufReader::new(&ascii_stl[..])).unwrap();
        assert_eq!(triangles[0].normal, [0.0, 0.0, 2.5]);
    }

    #[test]
    fn ascii_zero_normal_derived_from_winding() {
        let ascii_stl = br#"solid test
  facet normal 0 0 0
    outer loop
      vertex 0 0 0
      vertex 2 0 0
      vertex 0 2 0
    endloop
  endfacet
endsolid test"#;

        let triangles = load_stl_ascii(BufReader::new(&ascii_stl[..])).unwrap();
        // (2,0,0) x (0,2,0) by the right-hand rule
        assert_eq!(triangles[0].normal, [0.0, 0.0, 4.0]);
    }

    #[test]
    fn ascii_casing_and_blank_lines_tolerated() {
        let ascii_stl = br#"solid test

  FACET NORMAL 0 0 1
    OUTER LOOP
      VERTEX 0 0 0
      VERTEX 1 0 0
      VERTEX 0 1 0
    ENDLOOP
  ENDFACET
endsolid test"#;

        let triangles = load_stl_ascii(BufReader::new(&ascii_stl[..])).unwrap();
        assert_eq!(triangles.len(), 1);
    }

    #[test]
    fn binary_stl_parsing() {
        let bytes = binary_stl_bytes(&[(
            [0.0, 0.0, 1.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        )]);

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("test.stl");
            std::fs::write(&path, &bytes).unwrap();

            let triangles = load_stl(&path).unwrap();
            assert_eq!(triangles.len(), 1);
            assert_eq!(
                triangles[0].vertices,
                [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
            );
            assert_eq!(triangles[0].normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn binary_zero_normal_derived_from_winding() {
        let bytes = binary_stl_bytes(&[(
            [0.0, 0.0, 0.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        )]);

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("zero_normal.stl");
            std::fs::write(&path, &bytes).unwrap();

            let triangles = load_stl(&path).unwrap();
            assert_eq!(triangles[0].normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn binary_despite_solid_header() {
        // Binary files sometimes carry "solid" in their text header; the
        // null bytes that follow mark them as binary anyway.
        let mut bytes = binary_stl_bytes(&[(
            [0.0, 0.0, 1.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        )]);
        bytes[..5].copy_from_slice(b"solid");

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("solid_binary.stl");
            std::fs::write(&path, &bytes).unwrap();

            let triangles = load_stl(&path).unwrap();
            assert_eq!(triangles.len(), 1);
        }
    }

    #[test]
    fn binary_truncated_file_reports_mismatch() {
        let triangle = (
            [0.0_f32, 0.0, 1.0],
            [[0.0_f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        );
        let mut bytes = binary_stl_bytes(&[triangle, triangle]);
        // Keep the header, the count of 2, and only the first record.
        bytes.truncate(HEADER_SIZE + 4 + TRIANGLE_SIZE);

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("truncated.stl");
            std::fs::write(&path, &bytes).unwrap();

            let result = load_stl(&path);
            assert!(matches!(
                result,
                Err(StlError::TriangleCountMismatch {
                    expected: 2,
                    got: 1
                })
            ));
        }
    }

    #[test]
    fn ascii_binary_equivalence() {
        // The same triangle through both formats yields identical records.
        let ascii_stl = br#"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test"#;
        let from_ascii = load_stl_ascii(BufReader::new(&ascii_stl[..])).unwrap();

        let bytes = binary_stl_bytes(&[(
            [0.0, 0.0, 1.0],
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        )]);

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("equiv.stl");
            std::fs::write(&path, &bytes).unwrap();

            let from_binary = load_stl(&path).unwrap();
            assert_eq!(from_ascii, from_binary);
        }
    }

    #[test]
    fn ascii_file_through_autodetect() {
        let ascii_stl = br#"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test"#;

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("ascii.stl");
            std::fs::write(&path, &ascii_stl[..]).unwrap();

            let triangles = load_stl(&path).unwrap();
            assert_eq!(triangles.len(), 1);
            assert_eq!(triangles[0].normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_stl("nonexistent_file_12345.stl");
        assert!(result.is_err());
        if let Err(StlError::FileNotFound { path }) = result {
            assert!(path.to_string_lossy().contains("nonexistent"));
        }
    }

    #[test]
    fn file_too_small() {
        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("tiny.stl");
            std::fs::write(&path, b"sol").unwrap();

            assert!(matches!(
                load_stl(&path),
                Err(StlError::InvalidContent { .. })
            ));
        }
    }

    #[test]
    fn load_model_builds_three_edge_faces() {
        let ascii_stl = br#"solid pair
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 1 1 0
    endloop
  endfacet
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 1 0
      vertex 0 1 0
    endloop
  endfacet
endsolid pair"#;

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("pair.stl");
            std::fs::write(&path, &ascii_stl[..]).unwrap();

            let model = load_model(&path).unwrap();
            assert_eq!(model.face_count(), 2);
            assert!(model.iter().all(|face| face.edge_count() == 3));
            assert_eq!(model.faces[0].normal, Vector3::new(0.0, 0.0, 1.0));
        }
    }
}
