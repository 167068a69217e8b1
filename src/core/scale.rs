use serde::{Deserialize, Serialize};

use crate::error::{RingsError, RingsResult};

/// Linear (non-temporal) mapping from a value domain onto a pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> RingsResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(RingsError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits the domain to the finite values of `values`.
    ///
    /// A flat series is widened by `flat_padding` on both sides and an empty
    /// one falls back to `0..1`, so the result is always a usable scale.
    #[must_use]
    pub fn fit(values: impl IntoIterator<Item = f64>, flat_padding: f64) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(value), max.max(value))
            });

        let (domain_start, domain_end) = if min > max {
            (0.0, 1.0)
        } else if min == max {
            let padding = if flat_padding > 0.0 { flat_padding } else { 1.0 };
            (min - padding, max + padding)
        } else {
            (min, max)
        };

        Self {
            domain_start,
            domain_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, extent: f64) -> RingsResult<f64> {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(RingsError::InvalidData(
                "pixel extent must be finite and > 0".to_owned(),
            ));
        }

        if !value.is_finite() {
            return Err(RingsError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * extent)
    }

    pub fn pixel_to_domain(self, pixel: f64, extent: f64) -> RingsResult<f64> {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(RingsError::InvalidData(
                "pixel extent must be finite and > 0".to_owned(),
            ));
        }

        if !pixel.is_finite() {
            return Err(RingsError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / extent;
        Ok(self.domain_start + normalized * span)
    }
}
