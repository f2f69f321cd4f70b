//! Conversions between numpy arrays and Rust vectors.

use chrono::NaiveDate;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::error::ScreenerError;
use crate::core::Result;

/// Convert numpy array to Vec<f64>; non-contiguous views are copied element-wise.
pub fn numpy_to_vec_f64(arr: PyReadonlyArray1<f64>) -> Vec<f64> {
    arr.as_array().to_vec()
}

/// Convert a numpy array of `YYYYMMDD` integers to dates.
pub fn numpy_to_dates(arr: PyReadonlyArray1<i64>) -> Result<Vec<NaiveDate>> {
    arr.as_array()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let (year, month, day) = (value / 10_000, (value / 100) % 100, value % 100);
            i32::try_from(year)
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, month as u32, day as u32))
                .ok_or_else(|| {
                    ScreenerError::invalid_observation(i, format!("invalid YYYYMMDD date {value}"))
                })
        })
        .collect()
}

/// Convert Vec<f64> to numpy array.
pub fn vec_to_numpy_f64<'py>(py: Python<'py>, vec: Vec<f64>) -> &'py PyArray1<f64> {
    PyArray1::from_vec(py, vec)
}
