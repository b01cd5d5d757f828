//! Cattle compared by name instead of identity.

use std::hash::{Hash, Hasher};
use std::ops::Deref;

use super::Cattle;

impl Cattle {
    /// Returns true if both cattle answer to the same name.
    pub fn same_name(&self, other: &Cattle) -> bool {
        self.name() == other.name()
    }
}

/// A cattle handle whose equality is its name.
///
/// Two distinct cattle called "Berta" compare equal here, while the plain
/// [`Cattle`] handles stay unequal. Useful for keying herds by name.
#[derive(Clone, Debug)]
pub struct ComparableCattle(Cattle);

impl ComparableCattle {
    pub fn new(cattle: Cattle) -> Self {
        Self(cattle)
    }

    pub fn into_inner(self) -> Cattle {
        self.0
    }
}

impl From<Cattle> for ComparableCattle {
    fn from(cattle: Cattle) -> Self {
        Self(cattle)
    }
}

impl Deref for ComparableCattle {
    type Target = Cattle;

    fn deref(&self) -> &Cattle {
        &self.0
    }
}

impl PartialEq for ComparableCattle {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_name(&other.0)
    }
}

impl Eq for ComparableCattle {}

impl Hash for ComparableCattle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name().hash(state);
    }
}
