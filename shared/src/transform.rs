//! Position / rotation / scale tokens and pose composition.
//!
//! Vectors are packed into a single line field as comma-separated components
//! (`x,y,z` or `x,y,z,w`). The field separator of every entry line is `|`, so
//! commas never collide with it, and decimals always use a dot.

use glam::{EulerRot, Quat, Vec3};

use crate::numeric::{format_float, parse_float};

/// Separator between the components of a packed vector token.
pub const COMPONENT_SEPARATOR: char = ',';

/// A world-space placement: where a location (or anything in it) sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose of a child placed at a local offset relative to this pose.
    pub fn compose(&self, local_position: Vec3, local_rotation: Quat) -> Pose {
        Pose {
            position: self.position + self.rotation * local_position,
            rotation: self.rotation * local_rotation,
        }
    }

    /// Rotation about the up (Y) axis, in degrees.
    pub fn yaw_degrees(&self) -> f32 {
        yaw_degrees(self.rotation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation about the up (Y) axis of `rotation`, in degrees.
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    yaw.to_degrees()
}

/// A rotation of `degrees` about the up (Y) axis.
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

pub fn format_vec3(value: Vec3) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        format_float(value.x),
        format_float(value.y),
        format_float(value.z),
        sep = COMPONENT_SEPARATOR
    )
}

pub fn format_quat(value: Quat) -> String {
    format!(
        "{}{sep}{}{sep}{}{sep}{}",
        format_float(value.x),
        format_float(value.y),
        format_float(value.z),
        format_float(value.w),
        sep = COMPONENT_SEPARATOR
    )
}

/// Parse an `x,y,z` token.
pub fn parse_vec3(token: &str) -> Option<Vec3> {
    let [x, y, z] = parse_components::<3>(token)?;
    Some(Vec3::new(x, y, z))
}

/// Parse an `x,y,z,w` token. The quaternion is kept exactly as written (not
/// renormalised) so that re-encoding reproduces the same components.
pub fn parse_quat(token: &str) -> Option<Quat> {
    let [x, y, z, w] = parse_components::<4>(token)?;
    Some(Quat::from_xyzw(x, y, z, w))
}

fn parse_components<const N: usize>(token: &str) -> Option<[f32; N]> {
    let mut out = [0.0_f32; N];
    let mut parts = token.split(COMPONENT_SEPARATOR);
    for slot in out.iter_mut() {
        *slot = parse_float(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}
