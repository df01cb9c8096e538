use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

use crate::{Aabb, HasPosition};

/// An ordered, resizable sequence of points.
///
/// Point order is significant: readers keep on-disk record order and writers
/// emit points in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud<T> {
    points: Vec<T>,
}

impl<T> PointCloud<T> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    pub fn point(&self, i: usize) -> &T {
        &self.points[i]
    }

    pub fn points(&self) -> &[T] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [T] {
        &mut self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.points.iter_mut()
    }

    pub fn into_points(self) -> Vec<T> {
        self.points
    }
}

impl<T: Clone> PointCloud<T> {
    /// Copies the points at `indices`, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut points = Vec::with_capacity(indices.len());
        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            points.push(self.points[idx].clone());
        }
        Self { points }
    }
}

impl<T: Default + Clone> PointCloud<T> {
    /// A cloud of `len` default points, ready to be overwritten by index.
    ///
    /// Fails instead of aborting when `len` points cannot be allocated.
    pub fn try_filled(len: usize) -> Result<Self, TryReserveError> {
        let mut points = Vec::new();
        points.try_reserve_exact(len)?;
        points.resize(len, T::default());
        Ok(Self { points })
    }
}

impl<T: HasPosition> PointCloud<T> {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.points.iter().map(HasPosition::position))
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.points.iter().map(HasPosition::position)
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for PointCloud<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.points[i]
    }
}

impl<T> IndexMut<usize> for PointCloud<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.points[i]
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for PointCloud<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<T> IntoIterator for PointCloud<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
