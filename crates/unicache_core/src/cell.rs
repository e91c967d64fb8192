use crate::{kind::UniformKind, UniformContext};

/// Keeps the last value uploaded to one uniform slot and skips uploads
/// that would not change it.
///
/// The cell borrows the rendering context it uploads through, so the context
/// outlives every cell built against it. The cached value lives as long as
/// the cell, across any number of frames.
pub struct BindingCell<'c, C: UniformContext + ?Sized, K: UniformKind> {
    context: &'c C,
    current: Option<K::Value>,
}

impl<'c, C: UniformContext + ?Sized, K: UniformKind> BindingCell<'c, C, K> {
    pub fn new(context: &'c C) -> Self {
        Self {
            context,
            current: None,
        }
    }

    /// The last uploaded value, `None` until the first upload.
    pub fn current(&self) -> Option<&K::Value> {
        self.current.as_ref()
    }

    /// Uploads `value` unless it matches the cached one.
    /// Returns whether an upload was issued.
    pub fn set(&mut self, location: &C::Location, value: K::Value) -> bool {
        let dirty = match &self.current {
            None => true,
            Some(current) => K::differs(current, &value),
        };

        if dirty {
            self.upload(location, value);
        }

        dirty
    }

    /// Uploads `value` without looking at the cache.
    pub fn force(&mut self, location: &C::Location, value: K::Value) {
        self.upload(location, value);
    }

    /// Forgets the cached value, so the next [BindingCell::set] uploads.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    fn upload(&mut self, location: &C::Location, value: K::Value) {
        let value = self.current.insert(value);
        K::upload(self.context, location, value);
    }
}
