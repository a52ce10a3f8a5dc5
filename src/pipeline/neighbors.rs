// src/pipeline/neighbors.rs

//! Nearest-neighbor stage: for every user, the other user living closest
//! by great-circle distance.
//!
//! Distances are symmetric, so each unordered pair is computed exactly
//! once and cached in an upper-triangular matrix. When user `k` is
//! processed, the distances to all users before it are already in rows
//! `m < k` of the matrix; only the forward pairs `j > k` need computing.

use crate::error::{AppError, Result};
use crate::models::{Geolocation, User};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers, by the
/// Haversine formula. Pure: inputs are never mutated.
pub fn haversine_km(a: &Geolocation, b: &Geolocation) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + (d_lng / 2.0).sin().powi(2) * lat_a.cos() * lat_b.cos();
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Upper-triangular pairwise distance cache.
///
/// Row `i` holds `d(i, j)` for `j > i` at offset `j - i - 1`. A cell
/// exists only once it has been computed while processing user `i`, so
/// row `i` is always a prefix of its final length.
struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    fn new(n: usize) -> Self {
        Self {
            rows: (0..n).map(|i| Vec::with_capacity(n - 1 - i)).collect(),
        }
    }

    /// Append the next forward distance for row `i` (ascending `j`).
    fn push(&mut self, i: usize, distance: f64) {
        self.rows[i].push(distance);
    }

    /// Distance between `i` and `j`. Requires `i < j` and a prior `push`.
    fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j - i - 1]
    }
}

/// Produce one line per user naming the other user living closest to it.
///
/// Fewer than two users yields an empty result: a neighbor relation
/// needs at least two points. Ties go to the lowest index, since only a
/// strictly smaller distance replaces the current minimum and both the
/// backward and forward scans run in ascending index order.
pub fn find_closest_user(users: Option<&[User]>) -> Result<Vec<String>> {
    let users = users.ok_or_else(|| AppError::invalid_argument("user collection is missing"))?;

    let n = users.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    let mut matrix = DistanceMatrix::new(n);
    let mut lines = Vec::with_capacity(n);

    for i in 0..n {
        let mut best: Option<(f64, usize)> = None;

        // Baseline from pairs already computed while processing earlier users.
        for m in 0..i {
            let distance = matrix.get(m, i);
            if best.is_none_or(|(min, _)| distance < min) {
                best = Some((distance, m));
            }
        }
        debug_assert!(i == 0 || best.is_some(), "prior rows must cover user {i}");

        // Forward pairs, computed once and cached.
        for j in (i + 1)..n {
            let distance = haversine_km(&users[i].address.geo, &users[j].address.geo);
            matrix.push(i, distance);
            if best.is_none_or(|(min, _)| distance < min) {
                best = Some((distance, j));
            }
        }

        if let Some((_, nearest)) = best {
            lines.push(format!(
                "Closest to {} lives: {}",
                users[i].username, users[nearest].username
            ));
        }
    }

    Ok(lines)
}
