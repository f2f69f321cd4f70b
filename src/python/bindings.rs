//! PyO3 function bindings for the screener.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::types::ScreenCriteria;
use crate::core::TimeSeries;
use crate::indicators;
use crate::screening::predicate;

use super::numpy_bridge::*;

/// Python-exposed screening criteria.
#[pyclass]
#[derive(Debug, Clone)]
pub struct PyScreenCriteria {
    #[pyo3(get, set)]
    pub min_price: f64,
    #[pyo3(get, set)]
    pub max_price: f64,
    #[pyo3(get, set)]
    pub min_rsi: f64,
    #[pyo3(get, set)]
    pub max_rsi: f64,
    #[pyo3(get, set)]
    pub min_avg_volume: f64,
}

#[pymethods]
impl PyScreenCriteria {
    #[new]
    fn new(
        min_price: f64,
        max_price: f64,
        min_rsi: f64,
        max_rsi: f64,
        min_avg_volume: f64,
    ) -> Self {
        Self {
            min_price,
            max_price,
            min_rsi,
            max_rsi,
            min_avg_volume,
        }
    }
}

impl From<&PyScreenCriteria> for ScreenCriteria {
    fn from(py_criteria: &PyScreenCriteria) -> Self {
        ScreenCriteria::new(
            py_criteria.min_price,
            py_criteria.max_price,
            py_criteria.min_rsi,
            py_criteria.max_rsi,
            py_criteria.min_avg_volume,
        )
    }
}

/// Simple Moving Average (valid positions only).
#[pyfunction]
pub fn sma<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    window: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(data);
    let result = indicators::trend::sma(&vec, window)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Exponential Moving Average with flat-filled head.
#[pyfunction]
pub fn ema<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    window: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(data);
    let result = indicators::trend::ema(&vec, window)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Relative Strength Index.
#[pyfunction]
#[pyo3(signature = (data, period=14))]
pub fn rsi<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(data);
    let result = indicators::momentum::rsi(&vec, period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// MACD indicator: returns (ema_slow, ema_fast, macd_line).
#[pyfunction]
#[pyo3(signature = (data, slow_period=26, fast_period=12))]
pub fn macd<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    slow_period: usize,
    fast_period: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let vec = numpy_to_vec_f64(data);
    let result = indicators::momentum::macd(&vec, slow_period, fast_period)?;
    Ok((
        vec_to_numpy_f64(py, result.ema_slow),
        vec_to_numpy_f64(py, result.ema_fast),
        vec_to_numpy_f64(py, result.macd_line),
    ))
}

/// MACD signal line.
#[pyfunction]
#[pyo3(signature = (macd_line, period=9))]
pub fn macd_signal<'py>(
    py: Python<'py>,
    macd_line: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(macd_line);
    let result = indicators::momentum::macd_signal(&vec, period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Screening decision for one series. Dates are `YYYYMMDD` integers.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn include(
    dates: PyReadonlyArray1<i64>,
    open: PyReadonlyArray1<f64>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    volume: PyReadonlyArray1<f64>,
    criteria: &PyScreenCriteria,
) -> PyResult<bool> {
    let series = TimeSeries::new(
        numpy_to_dates(dates)?,
        numpy_to_vec_f64(open),
        numpy_to_vec_f64(high),
        numpy_to_vec_f64(low),
        numpy_to_vec_f64(close),
        numpy_to_vec_f64(volume),
    )?;
    Ok(predicate::include(&series, &ScreenCriteria::from(criteria))?)
}
