use crate::chart::{TypeChart, TypeId};

/// Attacking types chosen by the caller.
///
/// Insertion order is kept for display; a type appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackSet {
    types: Vec<TypeId>,
}

impl AttackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set keeping the first occurrence of each type.
    pub fn from_types<I: IntoIterator<Item = TypeId>>(types: I) -> Self {
        let mut set = Self::new();
        set.extend(types);
        set
    }

    pub fn from_names<S: AsRef<str>>(chart: &TypeChart, names: &[S]) -> anyhow::Result<Self> {
        Ok(Self::from_types(chart.resolve_all(names)?))
    }

    /// Appends `t` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, t: TypeId) -> bool {
        if self.contains(t) {
            return false;
        }
        self.types.push(t);
        true
    }

    pub fn extend<I: IntoIterator<Item = TypeId>>(&mut self, types: I) {
        for t in types {
            self.insert(t);
        }
    }

    /// Removes `t` if selected, appends it otherwise.
    pub fn toggle(&mut self, t: TypeId) {
        if let Some(pos) = self.types.iter().position(|x| *x == t) {
            self.types.remove(pos);
        } else {
            self.types.push(t);
        }
    }

    pub fn clear(&mut self) {
        self.types.clear();
    }

    pub fn contains(&self, t: TypeId) -> bool {
        self.types.contains(&t)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.types.iter().copied()
    }

    pub fn as_slice(&self) -> &[TypeId] {
        &self.types
    }

    pub fn names<'a>(&'a self, chart: &'a TypeChart) -> Vec<&'a str> {
        self.iter().map(|t| chart.name(t)).collect()
    }
}

impl FromIterator<TypeId> for AttackSet {
    fn from_iter<I: IntoIterator<Item = TypeId>>(iter: I) -> Self {
        Self::from_types(iter)
    }
}
