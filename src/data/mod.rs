//! Data module - Categorical column conversion

mod categorical;

pub use categorical::{categorize_column, to_categorical, CategoricalError, OrderedCategorical};
