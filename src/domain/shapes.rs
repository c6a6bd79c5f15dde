//! Rigid body shapes.
//!
//! Each variant carries only the unscaled geometry it needs. Everything that
//! depends on the shape (effective radius, extents, settling behaviour) is a
//! `match` over the variant.

use std::str::FromStr;

use crate::core::error::EngineError;
use crate::core::math::{Mat3, Vec3};

/// Fieldless shape tag, used by the renderer to pick a mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    Sphere = 0,
    Cube = 1,
    Cylinder = 2,
    Tube = 3,
    Torus = 4,
    Cone = 5,
    Capsule = 6,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Box; unequal half extents give planks and beams.
    Cube { half_extents: Vec3 },
    Cylinder { radius: f32, half_height: f32 },
    /// Hollow cylinder.
    Tube { outer_radius: f32, inner_radius: f32, half_height: f32 },
    Torus { major_radius: f32, minor_radius: f32 },
    Cone { radius: f32, half_height: f32 },
    /// Elongated sphere along the local y axis.
    Capsule { radius: f32, half_length: f32 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Cube { .. } => ShapeKind::Cube,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Tube { .. } => ShapeKind::Tube,
            Shape::Torus { .. } => ShapeKind::Torus,
            Shape::Cone { .. } => ShapeKind::Cone,
            Shape::Capsule { .. } => ShapeKind::Capsule,
        }
    }

    /// Box-like shapes collide through their rotated bounding box,
    /// everything else through a scalar radius.
    #[inline]
    pub fn is_box_like(&self) -> bool {
        matches!(self, Shape::Cube { .. })
    }

    /// Shapes with flat faces that come to rest on a face (boxes and the
    /// cylinder family) rather than rolling freely.
    #[inline]
    pub fn rests_on_face(&self) -> bool {
        matches!(self, Shape::Cube { .. } | Shape::Cylinder { .. } | Shape::Tube { .. })
    }

    /// Scalar radius enclosing the shape at the given scale.
    pub fn bounding_radius(&self, scale: f32) -> f32 {
        let r = match *self {
            Shape::Sphere { radius } => radius,
            Shape::Cube { half_extents } => half_extents.length(),
            Shape::Cylinder { radius, half_height } => radius.max(half_height),
            Shape::Tube { outer_radius, half_height, .. } => outer_radius.max(half_height),
            Shape::Torus { major_radius, minor_radius } => major_radius + minor_radius,
            Shape::Cone { radius, half_height } => radius.max(half_height),
            Shape::Capsule { radius, half_length } => half_length + radius,
        };
        r * scale
    }

    /// Radius used for body-body overlap tests.
    ///
    /// Boxes use `0.6 * |size|`, a cheap stand-in for the half diagonal.
    pub fn collision_radius(&self, scale: f32) -> f32 {
        match *self {
            Shape::Cube { half_extents } => 0.6 * (half_extents * (2.0 * scale)).length(),
            _ => self.bounding_radius(scale),
        }
    }

    /// World-space half extents of the shape under `rotation`.
    ///
    /// Round shapes are isotropic. Boxes rotate all eight corners and take the
    /// per-axis extrema, since a tilted box reaches further down than its
    /// static half height.
    pub fn world_half_extents(&self, scale: f32, rotation: &Mat3) -> Vec3 {
        match *self {
            Shape::Cube { half_extents } => {
                let h = half_extents * scale;
                let mut ext = Vec3::ZERO;
                for sx in [-1.0f32, 1.0] {
                    for sy in [-1.0f32, 1.0] {
                        for sz in [-1.0f32, 1.0] {
                            let corner = *rotation * Vec3::new(h.x * sx, h.y * sy, h.z * sz);
                            ext = ext.max(corner.abs());
                        }
                    }
                }
                ext
            }
            _ => Vec3::splat(self.bounding_radius(scale)),
        }
    }

    /// Default geometry for a shape name, about one unit across.
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Sphere => Shape::Sphere { radius: 0.5 },
            ShapeKind::Cube => Shape::Cube { half_extents: Vec3::splat(0.5) },
            ShapeKind::Cylinder => Shape::Cylinder { radius: 0.4, half_height: 0.5 },
            ShapeKind::Tube => Shape::Tube { outer_radius: 0.5, inner_radius: 0.35, half_height: 0.5 },
            ShapeKind::Torus => Shape::Torus { major_radius: 0.45, minor_radius: 0.15 },
            ShapeKind::Cone => Shape::Cone { radius: 0.5, half_height: 0.5 },
            ShapeKind::Capsule => Shape::Capsule { radius: 0.3, half_length: 0.5 },
        }
    }
}

impl FromStr for Shape {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shape = match s.to_ascii_lowercase().as_str() {
            "sphere" | "ball" => Shape::default_for(ShapeKind::Sphere),
            "cube" | "box" => Shape::default_for(ShapeKind::Cube),
            "plank" | "beam" => Shape::Cube { half_extents: Vec3::new(1.0, 0.15, 0.4) },
            "cylinder" => Shape::default_for(ShapeKind::Cylinder),
            "tube" | "hollowcylinder" | "pipe" => Shape::default_for(ShapeKind::Tube),
            "torus" | "ring" => Shape::default_for(ShapeKind::Torus),
            "cone" => Shape::default_for(ShapeKind::Cone),
            "capsule" | "pill" => Shape::default_for(ShapeKind::Capsule),
            _ => return Err(EngineError::UnknownShape(s.to_string())),
        };
        Ok(shape)
    }
}
