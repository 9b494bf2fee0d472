use log::{debug, warn};

use crate::{
    entry::{LineEntry, TerrainModEntry},
    transform::Pose,
    types::HostType,
};

use super::{PaintType, TerrainAccess, TerrainError, TerrainOp, TerrainQuery, TerrainShape};

/// What stamping one location's terrain modifiers did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StampReport {
    /// Modifiers whose shape selected at least one vertex
    pub modifiers_applied: usize,
    /// Total vertices selected across all modifiers
    pub vertices_touched: usize,
    /// Modifiers whose paint step was skipped, by index into the entry slice
    pub paint_errors: Vec<(usize, TerrainError)>,
}

/// The region a modifier covers once placed at `pose`, or `None` when its
/// shape is not recognised.
pub fn modifier_query(entry: &TerrainModEntry, pose: &Pose) -> Option<TerrainQuery> {
    let placed = pose.compose(entry.position(), entry.rotation_offset());
    let size = entry.radius() * 2.0;
    match entry.terrain_shape()? {
        TerrainShape::Circle => Some(TerrainQuery::Circle {
            center: placed.position,
            diameter: size,
        }),
        TerrainShape::Square => Some(TerrainQuery::Square {
            center: placed.position,
            size,
            yaw: placed.yaw_degrees().to_radians(),
        }),
    }
}

/// Stamp one modifier: reset, level, then paint the vertices its shape covers.
///
/// Returns the number of vertices selected. An unknown shape selects nothing
/// and issues no mutation. An invalid paint name leaves the reset and level
/// in place and reports `InvalidPaintType`. On a `HostType::Client` terrain
/// is left untouched and `Ok(0)` is returned.
pub fn stamp_modifier<T: TerrainAccess + ?Sized>(
    entry: &TerrainModEntry,
    pose: &Pose,
    host_type: HostType,
    terrain: &mut T,
) -> Result<usize, TerrainError> {
    if !host_type.is_authority() {
        return Ok(0);
    }
    match apply_modifier(entry, pose, terrain) {
        (_, Some(err)) => Err(err),
        (touched, None) => Ok(touched),
    }
}

fn apply_modifier<T: TerrainAccess + ?Sized>(
    entry: &TerrainModEntry,
    pose: &Pose,
    terrain: &mut T,
) -> (usize, Option<TerrainError>) {
    let Some(query) = modifier_query(entry, pose) else {
        debug!("Terrain shape {:?} not recognised, nothing to stamp", entry.shape());
        return (0, None);
    };

    let indices = terrain.query_indices(&query);
    if indices.is_empty() {
        return (0, None);
    }

    terrain.mutate(&indices, &TerrainOp::Reset);
    terrain.mutate(
        &indices,
        &TerrainOp::Level {
            center: query.center(),
            radius: entry.radius(),
            smooth: entry.smooth(),
        },
    );

    if !entry.has_paint() {
        return (indices.len(), None);
    }
    match PaintType::parse(entry.paint()) {
        Ok(paint) => {
            terrain.mutate(&indices, &TerrainOp::Paint(paint));
            (indices.len(), None)
        }
        Err(err) => (indices.len(), Some(err)),
    }
}

/// Stamp every terrain modifier of a location placed at `pose`.
///
/// Terrain is only ever mutated by the authority: on a `HostType::Client`
/// this returns `None` without touching `terrain`.
pub fn stamp_location<T: TerrainAccess + ?Sized>(
    entries: &[TerrainModEntry],
    pose: &Pose,
    host_type: HostType,
    terrain: &mut T,
) -> Option<StampReport> {
    if !host_type.is_authority() {
        return None;
    }

    let mut report = StampReport::default();
    for (index, entry) in entries.iter().enumerate() {
        let (touched, paint_error) = apply_modifier(entry, pose, terrain);
        if touched > 0 {
            report.modifiers_applied += 1;
            report.vertices_touched += touched;
        }
        if let Some(err) = paint_error {
            warn!("Skipping paint of terrain modifier {:?}: {}", entry.line(), err);
            report.paint_errors.push((index, err));
        }
    }
    Some(report)
}
