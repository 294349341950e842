//! Categorical Conversion Module
//! Reinterprets a Polars column as an ordered categorical with explicit levels.

use polars::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CategoricalError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Level `{0}` appears more than once")]
    DuplicateLevel(String),
}

/// A column restricted to an ordered, finite set of levels.
///
/// Each row holds the index of its level, or `None` when the row is
/// missing or its value is outside the level set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedCategorical {
    name: String,
    levels: Vec<String>,
    codes: Vec<Option<u32>>,
}

impl OrderedCategorical {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Levels in their defined order.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn codes(&self) -> &[Option<u32>] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Value of row `i`; `None` for missing rows or rows past the end.
    pub fn value(&self, i: usize) -> Option<&str> {
        let code = (*self.codes.get(i)?)?;
        self.levels.get(code as usize).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.codes
            .iter()
            .map(|code| code.and_then(|c| self.levels.get(c as usize).map(String::as_str)))
    }

    /// Position of a level in the ordering.
    pub fn level_index(&self, level: &str) -> Option<usize> {
        self.levels.iter().position(|l| l == level)
    }

    /// Compares two values by level order. Values outside the levels are
    /// not comparable.
    pub fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        Some(self.level_index(a)?.cmp(&self.level_index(b)?))
    }

    /// Values as a string Series, missing rows as null.
    pub fn to_series(&self) -> Series {
        let values: Vec<Option<&str>> = self.iter().collect();
        Series::new(self.name.as_str().into(), values)
    }

    /// Level codes as a UInt32 Series, missing rows as null.
    pub fn codes_series(&self) -> Series {
        Series::new(self.name.as_str().into(), self.codes.clone())
    }

    /// Drops levels that no row uses, keeping the order of the rest.
    fn remove_unused_levels(self) -> Self {
        let mut used = vec![false; self.levels.len()];
        for code in self.codes.iter().flatten() {
            used[*code as usize] = true;
        }

        let mut remap: Vec<Option<u32>> = vec![None; self.levels.len()];
        let mut levels = Vec::new();
        for (old, level) in self.levels.into_iter().enumerate() {
            if used[old] {
                remap[old] = Some(levels.len() as u32);
                levels.push(level);
            }
        }
        let codes = self
            .codes
            .into_iter()
            .map(|code| code.and_then(|c| remap[c as usize]))
            .collect();

        Self {
            name: self.name,
            levels,
            codes,
        }
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Distinct non-null values in natural order: numeric order for numeric
/// columns, lexical order otherwise.
fn sorted_unique_values(series: &Series) -> Result<Vec<String>, CategoricalError> {
    let as_str = series.cast(&DataType::String)?;
    let labels = as_str.str()?;

    let mut seen: HashMap<&str, Option<f64>> = HashMap::new();
    if is_numeric(series.dtype()) {
        let as_f64 = series.cast(&DataType::Float64)?;
        let keys = as_f64.f64()?;
        for (label, key) in labels.into_iter().zip(keys.into_iter()) {
            if let Some(label) = label {
                seen.entry(label).or_insert(key);
            }
        }
    } else {
        for label in labels.into_iter().flatten() {
            seen.entry(label).or_insert(None);
        }
    }

    let mut unique: Vec<(&str, Option<f64>)> = seen.into_iter().collect();
    unique.sort_by(|(la, ka), (lb, kb)| match (ka, kb) {
        (Some(a), Some(b)) => a.total_cmp(b),
        _ => la.cmp(lb),
    });

    Ok(unique.into_iter().map(|(l, _)| l.to_string()).collect())
}

/// Convert a Series to an ordered categorical.
///
/// * `levels` - the ordered levels; `None` uses the sorted distinct values.
/// * `remove_unused` - when levels are given, drop the ones no row uses.
///
/// Values outside the given levels become missing. Repeated levels are an
/// error.
pub fn to_categorical(
    series: &Series,
    levels: Option<&[&str]>,
    remove_unused: bool,
) -> Result<OrderedCategorical, CategoricalError> {
    let level_list: Vec<String> = match levels {
        Some(levels) => levels.iter().map(|l| l.to_string()).collect(),
        None => sorted_unique_values(series)?,
    };
    let mut index: HashMap<&str, u32> = HashMap::with_capacity(level_list.len());
    for (i, level) in level_list.iter().enumerate() {
        if index.insert(level.as_str(), i as u32).is_some() {
            return Err(CategoricalError::DuplicateLevel(level.clone()));
        }
    }

    let as_str = series.cast(&DataType::String)?;
    let mut unmatched = 0usize;
    let codes: Vec<Option<u32>> = as_str
        .str()?
        .into_iter()
        .map(|value| {
            let value = value?;
            let code = index.get(value).copied();
            if code.is_none() {
                unmatched += 1;
            }
            code
        })
        .collect();

    if unmatched > 0 {
        warn!(
            column = %series.name(),
            unmatched,
            "values outside the categorical levels were set to missing"
        );
    }

    let categorical = OrderedCategorical {
        name: series.name().to_string(),
        levels: level_list,
        codes,
    };

    // Only explicit levels can be unused; derived ones all occur in the data.
    let categorical = match levels {
        Some(levels) if !levels.is_empty() && remove_unused => {
            categorical.remove_unused_levels()
        }
        _ => categorical,
    };
    debug!(
        column = %categorical.name,
        levels = categorical.levels.len(),
        "converted column to ordered categorical"
    );

    Ok(categorical)
}

/// [`to_categorical`] applied to a named DataFrame column.
pub fn categorize_column(
    df: &DataFrame,
    column: &str,
    levels: Option<&[&str]>,
    remove_unused: bool,
) -> Result<OrderedCategorical, CategoricalError> {
    let series = df.column(column)?.as_materialized_series();
    to_categorical(series, levels, remove_unused)
}
