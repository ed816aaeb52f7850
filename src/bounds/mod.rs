//! Bounding volumes and coverage classification
//!
//! Pure value types for regions of 3D space (AABB, sphere, frustum) plus
//! the containment/overlap predicates every render pass uses to decide
//! what is worth drawing. Operations never mutate in place — they return
//! new values.

mod aabb;
mod sphere;
mod frustum;
mod coverage;

pub use aabb::Aabb;
pub use sphere::BoundingSphere;
pub use frustum::{
    BoundingFrustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use coverage::Coverage;
