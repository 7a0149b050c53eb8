use std::collections::HashMap;

use crate::error::GeometryError;
use crate::geometry::Fragment;
use crate::math::Point2;

/// Merges intersection fragments that share endpoints into maximal chains.
///
/// The intersection primitive may split one true crossing at a polygon
/// vertex, returning several collinear fragments. Ranking those pieces by
/// longest/shortest would undercount the real crossing, so fragments whose
/// endpoints coincide are unioned first.
///
/// Degenerate (point) fragments are dropped up front: they contribute length
/// 0 to any ranking, and one riding on a real endpoint would turn a clean
/// chain into a false branch.
///
/// # Errors
///
/// Returns [`GeometryError::AmbiguousMerge`] when a merge group retains a
/// number of unmatched endpoints other than two, i.e. three or more
/// fragments meet at one point (a T-junction from duplicate vertices), and
/// [`GeometryError::NonCollinearChain`] when a group's endpoint span does
/// not add up to its member lengths. Both topologies are surfaced rather
/// than resolved silently.
pub fn merge_fragments(fragments: &[Fragment]) -> Result<Vec<Fragment>, GeometryError> {
    let fragments: Vec<Fragment> = fragments
        .iter()
        .filter(|f| !f.is_degenerate())
        .copied()
        .collect();
    if fragments.len() < 2 {
        return Ok(fragments);
    }

    // Union fragments through shared endpoints: the first fragment seen at a
    // key adopts every later fragment touching the same point.
    let mut dsu = DisjointSet::new(fragments.len());
    let mut seen_at: HashMap<PointKey, usize> = HashMap::new();
    for (i, fragment) in fragments.iter().enumerate() {
        for key in [PointKey::of(&fragment.start), PointKey::of(&fragment.end)] {
            match seen_at.get(&key) {
                Some(&j) => dsu.union(i, j),
                None => {
                    seen_at.insert(key, i);
                }
            }
        }
    }

    // Connected components = merge groups.
    let mut groups: HashMap<usize, Vec<usize>> = HashMap::new();
    for i in 0..fragments.len() {
        groups.entry(dsu.find(i)).or_default().push(i);
    }

    let mut merged = Vec::with_capacity(groups.len());
    for group in groups.values() {
        if let &[single] = group.as_slice() {
            merged.push(fragments[single]);
            continue;
        }

        // Interior points are shared between two fragments of the group;
        // the merged span is delimited by the endpoints seen exactly once.
        let mut occurrences: HashMap<PointKey, (usize, Point2)> = HashMap::new();
        let mut total_length = 0.0;
        for &idx in group {
            let fragment = &fragments[idx];
            total_length += fragment.length();
            for point in [fragment.start, fragment.end] {
                occurrences
                    .entry(PointKey::of(&point))
                    .and_modify(|(count, _)| *count += 1)
                    .or_insert((1, point));
            }
        }

        let unique: Vec<Point2> = occurrences
            .values()
            .filter(|(count, _)| *count == 1)
            .map(|&(_, point)| point)
            .collect();

        let &[a, b] = unique.as_slice() else {
            return Err(GeometryError::AmbiguousMerge {
                fragments: group.len(),
                endpoints: unique.len(),
            });
        };

        // Chain members arose from one probe line, so they are collinear and
        // contiguous: the span between the unique endpoints must equal the
        // sum of member lengths. A bent chain from a misbehaving intersector
        // would otherwise shorten the crossing silently.
        let span = (b - a).norm();
        if (span - total_length).abs() > 1e-6 * total_length.max(1.0) {
            return Err(GeometryError::NonCollinearChain {
                span,
                sum: total_length,
            });
        }
        merged.push(Fragment::new(a, b));
    }

    Ok(merged)
}

/// Exact-coordinate hash key for a point.
///
/// The data model defines point equality as exact value comparison, and
/// fragments split from one probe line share bit-identical endpoints, so the
/// key hashes the raw bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PointKey {
    x: u64,
    y: u64,
}

impl PointKey {
    fn of(p: &Point2) -> Self {
        Self {
            x: p.x.to_bits(),
            y: p.y.to_bits(),
        }
    }
}

/// Disjoint-set over fragment indices with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}
