use crate::multiplier::Multiplier;
use crate::types::{standard_effectiveness, StandardType};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Dense catalog index. Ordering is catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u8);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("type chart must list at least one type")]
    Empty,
    #[error("type chart lists {0} types, at most 255 are supported")]
    TooManyTypes(usize),
    #[error("type {0} is listed more than once")]
    DuplicateType(String),
    #[error("effectiveness table refers to unknown type {0}")]
    UnknownType(String),
    #[error("no effectiveness row for defending type {0}")]
    MissingEntry(String),
    #[error("{attacker} against {defender} has multiplier {value}, expected 0, 0.5, 1 or 2")]
    UnsupportedMultiplier {
        defender: String,
        attacker: String,
        value: f64,
    },
}

/// On-disk chart: `effectiveness[defender][attacker]`.
///
/// Attackers left out of a defender row are neutral.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartFile {
    pub types: Vec<String>,
    #[serde(default)]
    pub effectiveness: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub neutral_default: bool,
}

/// Fixed type catalog plus its defender-by-attacker effectiveness table.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    names: Vec<String>,
    // row-major: defender * len + attacker
    table: Vec<Multiplier>,
    // catalog is StandardType::ALL in order
    standard: bool,
}

impl TypeChart {
    pub fn standard() -> Self {
        let names = StandardType::ALL
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        let mut table = Vec::with_capacity(StandardType::ALL.len() * StandardType::ALL.len());
        for defender in StandardType::ALL {
            for attacker in StandardType::ALL {
                table.push(standard_effectiveness(attacker, defender));
            }
        }
        Self {
            names,
            table,
            standard: true,
        }
    }

    pub fn from_file(file: ChartFile) -> Result<Self, ChartError> {
        let ChartFile {
            types,
            effectiveness,
            neutral_default,
        } = file;
        if types.is_empty() {
            return Err(ChartError::Empty);
        }
        if types.len() > u8::MAX as usize {
            return Err(ChartError::TooManyTypes(types.len()));
        }
        let mut lookup: BTreeMap<String, usize> = BTreeMap::new();
        for (idx, name) in types.iter().enumerate() {
            if lookup.insert(normalize_key(name), idx).is_some() {
                return Err(ChartError::DuplicateType(name.clone()));
            }
        }

        let len = types.len();
        let mut table = vec![Multiplier::Neutral; len * len];
        for (defender, row) in &effectiveness {
            let def_idx = *lookup
                .get(&normalize_key(defender))
                .ok_or_else(|| ChartError::UnknownType(defender.clone()))?;
            for (attacker, value) in row {
                let atk_idx = *lookup
                    .get(&normalize_key(attacker))
                    .ok_or_else(|| ChartError::UnknownType(attacker.clone()))?;
                let multiplier = Multiplier::from_single_type_value(*value).ok_or_else(|| {
                    ChartError::UnsupportedMultiplier {
                        defender: defender.clone(),
                        attacker: attacker.clone(),
                        value: *value,
                    }
                })?;
                table[def_idx * len + atk_idx] = multiplier;
            }
        }

        if !neutral_default {
            let present: Vec<usize> = effectiveness
                .keys()
                .filter_map(|k| lookup.get(&normalize_key(k)).copied())
                .collect();
            if let Some(missing) = (0..len).find(|idx| !present.contains(idx)) {
                return Err(ChartError::MissingEntry(types[missing].clone()));
            }
        }

        Ok(Self {
            names: types,
            table,
            standard: false,
        })
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let file: ChartFile =
            serde_json::from_str(raw).context("Failed to parse type chart JSON")?;
        Ok(Self::from_file(file)?)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.names.len()).map(|idx| TypeId(idx as u8))
    }

    pub fn types(&self) -> impl Iterator<Item = (TypeId, &str)> + '_ {
        self.ids().map(move |id| (id, self.name(id)))
    }

    pub fn name(&self, id: TypeId) -> &str {
        &self.names[id.index()]
    }

    pub fn resolve(&self, name: &str) -> Option<TypeId> {
        if self.standard {
            return StandardType::from_name(name).map(|t| TypeId(t as u8));
        }
        let key = normalize_key(name);
        self.names
            .iter()
            .position(|n| normalize_key(n) == key)
            .map(|idx| TypeId(idx as u8))
    }

    /// Resolve every name or fail on the first unknown one.
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> anyhow::Result<Vec<TypeId>> {
        names
            .iter()
            .map(|n| {
                let n = n.as_ref();
                self.resolve(n).ok_or_else(|| {
                    anyhow!("Unknown type '{n}' (run `type-coverage types` to list them)")
                })
            })
            .collect()
    }

    /// Multiplier an `attacker` move deals to a single `defender` type.
    pub fn effectiveness(&self, defender: TypeId, attacker: TypeId) -> Multiplier {
        self.table[defender.index() * self.names.len() + attacker.index()]
    }

    /// Canonical defender combinations, singles on the diagonal: C(n,2)+n of them.
    pub fn canonical_pairs(&self) -> impl Iterator<Item = (TypeId, TypeId)> + '_ {
        self.ids().flat_map(move |d1| {
            self.ids()
                .filter(move |d2| d1 <= *d2)
                .map(move |d2| (d1, d2))
        })
    }
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn load_chart(path: &Path) -> anyhow::Result<TypeChart> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read type chart at {}", path.display()))?;
    let chart = TypeChart::from_json(&raw)
        .with_context(|| format!("Invalid type chart in {}", path.display()))?;
    info!(types = chart.len(), path = %path.display(), "loaded type chart");
    Ok(chart)
}

/// Chart from `path`, or the standard chart when none is given.
pub fn load_chart_or_standard(path: Option<&Path>) -> anyhow::Result<TypeChart> {
    match path {
        Some(path) => load_chart(path),
        None => {
            debug!("using standard type chart");
            Ok(TypeChart::standard())
        }
    }
}
