//! Type-pair attraction table

use crate::error::{Error, Result};
use rand::Rng;

/// Square table of attraction coefficients in [-1, 1].
///
/// `get(a, b)` is what a particle of type `a` feels from a particle of type
/// `b`. The table is not symmetric and the diagonal is drawn like any other
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AttractionMatrix {
    type_count: usize,
    /// Row-major, `type_count * type_count` entries
    values: Vec<f32>,
}

impl AttractionMatrix {
    /// Draw every entry independently and uniformly from [-1, 1)
    pub fn generate<R: Rng>(type_count: usize, rng: &mut R) -> Result<Self> {
        if type_count == 0 {
            return Err(Error::InvalidConfig("type_count must be > 0".into()));
        }

        let values = (0..type_count * type_count)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();

        Ok(Self { type_count, values })
    }

    /// Same coefficient for every type pair
    pub fn uniform(type_count: usize, attraction: f32) -> Result<Self> {
        if type_count == 0 {
            return Err(Error::InvalidConfig("type_count must be > 0".into()));
        }
        check_entry(0, 0, attraction)?;

        Ok(Self {
            type_count,
            values: vec![attraction; type_count * type_count],
        })
    }

    /// Build from explicit rows. Every row must be as long as there are rows.
    pub fn from_rows<Row: AsRef<[f32]>>(rows: &[Row]) -> Result<Self> {
        let type_count = rows.len();
        if type_count == 0 {
            return Err(Error::InvalidMatrix("matrix has no rows".into()));
        }

        let mut values = Vec::with_capacity(type_count * type_count);
        for (a, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != type_count {
                return Err(Error::InvalidMatrix(format!(
                    "row {a} has {} entries, expected {type_count}",
                    row.len()
                )));
            }
            for (b, &value) in row.iter().enumerate() {
                check_entry(a, b, value)?;
                values.push(value);
            }
        }

        Ok(Self { type_count, values })
    }

    /// Number of particle types, `m`
    pub fn type_count(&self) -> usize {
        self.type_count
    }

    /// Coefficient felt by type `a` due to type `b`. Panics if either type is
    /// out of range.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f32 {
        self.row(a)[b]
    }

    /// Everything type `a` feels, indexed by the other type
    pub fn row(&self, a: usize) -> &[f32] {
        let start = a * self.type_count;
        &self.values[start..start + self.type_count]
    }

    /// All `m²` coefficients, row-major
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

fn check_entry(a: usize, b: usize, value: f32) -> Result<()> {
    if value.is_finite() && (-1.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidMatrix(format!(
            "entry ({a}, {b}) = {value} is outside [-1, 1]"
        )))
    }
}
