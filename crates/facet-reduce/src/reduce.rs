//! Whole-model reduction: fuse adjacent coplanar faces into polygons.

use std::cmp::Ordering;

use facet_types::{Edge, Face, Model, Point3, Vector3};
use hashbrown::HashMap;
use tracing::{debug, info};

use crate::error::ReduceResult;
use crate::params::ReduceParams;

/// Reduce a model by fusing adjacent coplanar faces into single polygons.
///
/// Faces are grouped by unit normal, quantized to
/// [`ReduceParams::normal_decimals`] decimal places. Within each group,
/// faces sharing an edge (undirected, exact coordinates) form connected
/// components, and each component fuses into one face. The fused boundary
/// keeps the edges that occur an odd number of times across the component,
/// in first-appearance order; interior edges occur twice and cancel, so
/// the result equals [`merge_faces`] applied pairwise to completion.
///
/// Output order is deterministic: normal groups in first-seen order, then
/// components within a group by their lowest face index. Each fused face
/// keeps the stored normal of its lowest-indexed member.
///
/// [`merge_faces`]: crate::merge_faces
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateFace`] (wrapped in
/// [`ReduceError::Geometry`]) if any face has a zero-length normal.
///
/// [`GeometryError::DegenerateFace`]: facet_types::GeometryError::DegenerateFace
/// [`ReduceError::Geometry`]: crate::ReduceError::Geometry
///
/// # Example
///
/// ```
/// use facet_reduce::{reduce_model, ReduceParams};
/// use facet_types::sample;
///
/// let cube = sample::unit_cube();
/// assert_eq!(cube.face_count(), 12);
///
/// let reduced = reduce_model(&cube, &ReduceParams::default()).unwrap();
/// assert_eq!(reduced.face_count(), 6);
/// ```
pub fn reduce_model(model: &Model, params: &ReduceParams) -> ReduceResult<Model> {
    info!(faces = model.face_count(), "Reducing model");

    // Group face indices by quantized unit normal, buckets in first-seen order.
    let mut bucket_order: HashMap<[i64; 3], usize> = HashMap::new();
    let mut buckets: Vec<Vec<usize>> = Vec::new();

    for (index, face) in model.iter().enumerate() {
        let unit = face.unit_normal()?;
        let key = quantize_normal(&unit, params.normal_decimals);
        let slot = *bucket_order.entry(key).or_insert_with(|| {
            buckets.push(Vec::new());
            buckets.len() - 1
        });
        buckets[slot].push(index);
    }

    let mut reduced = Model::new();
    for bucket in &buckets {
        fuse_bucket(model, bucket, &mut reduced);
    }

    info!(
        input_faces = model.face_count(),
        output_faces = reduced.face_count(),
        "Reduction complete"
    );
    Ok(reduced)
}

/// Fuse each edge-connected component of one normal bucket into a single
/// face, appending results in order of each component's lowest face index.
fn fuse_bucket(model: &Model, bucket: &[usize], out: &mut Model) {
    if let [only] = bucket {
        out.add_face(model.faces[*only].clone());
        return;
    }

    // Undirected edge -> positions (within the bucket) of the faces using it.
    let mut edge_owners: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
    for (pos, &face_index) in bucket.iter().enumerate() {
        for edge in &model.faces[face_index].edges {
            edge_owners.entry(edge_key(edge)).or_default().push(pos);
        }
    }

    let mut groups = UnionFind::new(bucket.len());
    for owners in edge_owners.values() {
        for pair in owners.windows(2) {
            groups.union(pair[0], pair[1]);
        }
    }

    // Components keyed by root, ordered by first member position.
    let mut component_order: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    for pos in 0..bucket.len() {
        let root = groups.find(pos);
        let slot = *component_order.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(pos);
    }

    debug!(
        faces = bucket.len(),
        components = components.len(),
        "Fused normal bucket"
    );

    for members in &components {
        if let [only] = members.as_slice() {
            out.add_face(model.faces[bucket[*only]].clone());
        } else {
            out.add_face(fuse_component(model, bucket, members));
        }
    }
}

/// Fuse one connected component into a single face.
///
/// Undirected edge occurrences are counted across the member faces; the
/// fused boundary keeps the edges with odd counts, in first-appearance
/// order and original direction. The fused face keeps the first member's
/// stored normal.
fn fuse_component(model: &Model, bucket: &[usize], members: &[usize]) -> Face {
    let mut counts: HashMap<EdgeKey, usize> = HashMap::new();
    let mut first_seen: Vec<(EdgeKey, Edge)> = Vec::new();

    for &pos in members {
        for edge in &model.faces[bucket[pos]].edges {
            let key = edge_key(edge);
            let count = counts.entry(key).or_insert(0);
            if *count == 0 {
                first_seen.push((key, *edge));
            }
            *count += 1;
        }
    }

    let boundary: Vec<Edge> = first_seen
        .into_iter()
        .filter(|(key, _)| counts.get(key).copied().unwrap_or(0) % 2 == 1)
        .map(|(_, edge)| edge)
        .collect();

    Face::new(boundary, model.faces[bucket[members[0]]].normal)
}

/// Quantize a unit normal into an integer grouping key by rounding each
/// component to `decimals` decimal places.
#[allow(clippy::cast_possible_truncation)]
fn quantize_normal(unit: &Vector3<f64>, decimals: u32) -> [i64; 3] {
    // Truncation: unit components lie in [-1, 1], so the scaled values
    // stay far inside i64 range for any usable precision.
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    [
        (unit.x * scale).round() as i64,
        (unit.y * scale).round() as i64,
        (unit.z * scale).round() as i64,
    ]
}

/// Canonical undirected key for an edge: endpoint coordinate bit patterns
/// ordered so both directions map to the same key.
type EdgeKey = [[u64; 3]; 2];

fn edge_key(edge: &Edge) -> EdgeKey {
    let start = point_bits(&edge.start);
    let end = point_bits(&edge.end);
    if start <= end { [start, end] } else { [end, start] }
}

fn point_bits(point: &Point3<f64>) -> [u64; 3] {
    [
        canonical_bits(point.x),
        canonical_bits(point.y),
        canonical_bits(point.z),
    ]
}

/// Bit pattern of a coordinate with -0.0 collapsed onto +0.0, so edges
/// that compare equal also key equal.
fn canonical_bits(value: f64) -> u64 {
    let bits = value.to_bits();
    if bits == (-0.0_f64).to_bits() { 0 } else { bits }
}

/// Disjoint-set over bucket positions, used to connect faces that share
/// at least one edge.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
    }
}
