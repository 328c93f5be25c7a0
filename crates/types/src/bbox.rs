use crate::point::Vec3;
use serde::{Deserialize, Serialize};

/// A 3D axis-aligned bounding box.
///
/// Used as the bounding volume of a dataset, built from every observed
/// position and padded by the configured margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3D {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox3D {
    /// Create a new 3D bounding box from minimum and maximum corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use swarmscope_types::bbox::BoundingBox3D;
    /// use swarmscope_types::point::Vec3;
    ///
    /// let bbox = BoundingBox3D::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 5.0, 2.0));
    /// assert_eq!(bbox.expand(1.0).max, Vec3::new(11.0, 6.0, 3.0));
    /// ```
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec3>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let bbox = iter.fold(Self::new(first, first), |mut acc, p| {
            acc.extend(p);
            acc
        });
        Some(bbox)
    }

    /// Grow the box so that it contains `point`.
    pub fn extend(&mut self, point: &Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Expand the bounding box by a given amount in all directions.
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            Vec3::new(
                self.min.x - amount,
                self.min.y - amount,
                self.min.z - amount,
            ),
            Vec3::new(
                self.max.x + amount,
                self.max.y + amount,
                self.max.z + amount,
            ),
        )
    }
}
