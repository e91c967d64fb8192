use std::collections::{hash_map::Keys, HashMap};

use smart_default::SmartDefault;

use crate::{
    binding::UniformBinding,
    error::UniformError,
    value::{UniformLocations, UniformValue, UniformValues},
    UniformContext,
};

#[derive(SmartDefault, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// If false, every value passed to [UniformGroup::set] is uploaded even
    /// when the cached value matches. Useful when hunting driver state bugs.
    #[default(true)]
    pub elide_redundant_uploads: bool,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadStats {
    pub uploads: u64,
    pub skipped: u64,
}

/// All uniform bindings declared by a shader program, keyed by uniform name.
pub struct UniformGroup<'c, C: UniformContext + ?Sized> {
    bindings: HashMap<String, UniformBinding<'c, C>>,
    settings: CacheSettings,
    stats: UploadStats,
}

impl<'c, C: UniformContext + ?Sized> Default for UniformGroup<'c, C> {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl<'c, C: UniformContext + ?Sized> FromIterator<(String, UniformBinding<'c, C>)>
    for UniformGroup<'c, C>
{
    fn from_iter<T: IntoIterator<Item = (String, UniformBinding<'c, C>)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'c, C: UniformContext + ?Sized> UniformGroup<'c, C> {
    pub fn new(bindings: HashMap<String, UniformBinding<'c, C>>) -> Self {
        Self {
            bindings,
            settings: CacheSettings::default(),
            stats: UploadStats::default(),
        }
    }

    pub fn with_settings(mut self, settings: CacheSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> CacheSettings {
        self.settings
    }

    /// Adds a binding, replacing any binding with the same name.
    pub fn insert(&mut self, name: impl Into<String>, binding: UniformBinding<'c, C>) {
        self.bindings.insert(name.into(), binding);
    }

    pub fn get(&self, name: &str) -> Option<&UniformBinding<'c, C>> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn names(&self) -> Keys<'_, String, UniformBinding<'c, C>> {
        self.bindings.keys()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn stats(&self) -> UploadStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = UploadStats::default();
    }

    /// Forgets every cached value, e.g. after the program was relinked.
    pub fn invalidate(&mut self) {
        log::debug!("Invalidating {} cached uniforms", self.bindings.len());
        for binding in self.bindings.values_mut() {
            binding.invalidate();
        }
    }

    /// Uploads every changed value in `values`.
    ///
    /// # Panics
    ///
    /// If a value has no binding with its name, has no location, or does not
    /// fit its binding's kind. Nothing is uploaded in that case.
    pub fn set(&mut self, locations: &UniformLocations<C::Location>, values: &UniformValues) {
        if let Err(error) = self.try_set(locations, values) {
            panic!("{error}");
        }
    }

    /// Same as [UniformGroup::set], but reports a mismatch instead of panicking.
    /// Returns the number of uploads issued.
    pub fn try_set(
        &mut self,
        locations: &UniformLocations<C::Location>,
        values: &UniformValues,
    ) -> Result<usize, UniformError> {
        for (name, value) in values {
            self.check(name, value, locations)?;
        }

        let force = !self.settings.elide_redundant_uploads;
        let mut uploads = 0;

        for (name, value) in values {
            let binding = self
                .bindings
                .get_mut(name)
                .ok_or_else(|| UniformError::MissingBinding { name: name.clone() })?;
            let location = locations
                .get(name)
                .ok_or_else(|| UniformError::MissingLocation { name: name.clone() })?;

            let uploaded = binding
                .apply(location, value.clone(), force)
                .map_err(|found| UniformError::KindMismatch {
                    name: name.clone(),
                    expected: binding.kind(),
                    found,
                })?;

            if uploaded {
                log::trace!("Uploaded uniform {name}");
                uploads += 1;
                self.stats.uploads += 1;
            } else {
                self.stats.skipped += 1;
            }
        }

        Ok(uploads)
    }

    fn check(
        &self,
        name: &str,
        value: &UniformValue,
        locations: &UniformLocations<C::Location>,
    ) -> Result<(), UniformError> {
        let binding = self
            .bindings
            .get(name)
            .ok_or_else(|| UniformError::MissingBinding { name: name.to_owned() })?;

        if binding.kind() != value.kind() {
            return Err(UniformError::KindMismatch {
                name: name.to_owned(),
                expected: binding.kind(),
                found: value.kind(),
            });
        }

        if !locations.contains_key(name) {
            return Err(UniformError::MissingLocation { name: name.to_owned() });
        }

        Ok(())
    }

    /// Adds all bindings of `other`. On a name collision the binding of
    /// `other` replaces ours, cached value included.
    ///
    /// Settings and statistics of `self` are kept.
    pub fn merge(mut self, other: Self) -> Self {
        for (name, binding) in other.bindings {
            if self.bindings.contains_key(&name) {
                log::debug!("Merged uniform group overrides binding {name}");
            }
            self.bindings.insert(name, binding);
        }

        self
    }
}
