//! Annual time series
//!
//! A [`Timeseries`] pairs a sequence of values with the calendar years they
//! apply to. The model itself works on plain slices; time series are how
//! emissions and concentrations are handed to reporting code.

use crate::errors::{CBoxError, CBoxResult};
use ndarray::{Array, Array1};
use serde::{Deserialize, Serialize};

pub type FloatValue = f64;
pub type Time = f64;

/// Values on an explicit time axis.
///
/// Serialized as two plain arrays (`time` and `values`) so that downstream
/// charting tools can consume the output directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimeseriesRecord", into = "TimeseriesRecord")]
pub struct Timeseries {
    time: Array1<Time>,
    values: Array1<FloatValue>,
}

impl Timeseries {
    /// Create a time series from values and a time axis of the same length.
    pub fn from_values(values: Array1<FloatValue>, time: Array1<Time>) -> CBoxResult<Self> {
        if values.len() != time.len() {
            return Err(CBoxError::InvalidArgument(format!(
                "time axis has {} points but there are {} values",
                time.len(),
                values.len()
            )));
        }
        Ok(Self { time, values })
    }

    /// Create a time series with one value per year starting at `start_year`.
    pub fn annual(start_year: i32, values: Vec<FloatValue>) -> Self {
        let start = start_year as Time;
        let time = Array::range(start, start + values.len() as Time, 1.0);
        Self {
            time,
            values: Array1::from(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.values
    }

    pub fn time_axis(&self) -> &Array1<Time> {
        &self.time
    }

    /// Value at a given time, if that time is on the axis.
    pub fn at_time(&self, time: Time) -> Option<FloatValue> {
        self.time
            .iter()
            .position(|t| *t == time)
            .map(|index| self.values[index])
    }

    /// First time on the axis, if any.
    pub fn start(&self) -> Option<Time> {
        self.time.first().copied()
    }

    /// Last time on the axis, if any.
    pub fn end(&self) -> Option<Time> {
        self.time.last().copied()
    }
}

#[derive(Serialize, Deserialize)]
struct TimeseriesRecord {
    time: Vec<Time>,
    values: Vec<FloatValue>,
}

impl TryFrom<TimeseriesRecord> for Timeseries {
    type Error = CBoxError;

    fn try_from(record: TimeseriesRecord) -> CBoxResult<Self> {
        Timeseries::from_values(Array1::from(record.values), Array1::from(record.time))
    }
}

impl From<Timeseries> for TimeseriesRecord {
    fn from(timeseries: Timeseries) -> Self {
        Self {
            time: timeseries.time.to_vec(),
            values: timeseries.values.to_vec(),
        }
    }
}
