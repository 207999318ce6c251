// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Limits and step size for [`Zoom`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomConfig {
    /// Smallest allowed zoom factor.
    pub min: f64,
    /// Largest allowed zoom factor.
    pub max: f64,
    /// Amount added or removed by one zoom step.
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 2.5,
            step: 0.15,
        }
    }
}

impl ZoomConfig {
    /// Creates a config; `min` and `max` are swapped if given in reverse.
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            step: step.abs(),
        }
    }
}

/// A uniform zoom factor controlled by the user.
///
/// Zoom is a pure view transform: it never changes layout coordinates or the
/// view box, only how much of the view box is shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    value: f64,
    config: ZoomConfig,
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl Zoom {
    /// Neutral zoom factor.
    pub const RESET: f64 = 1.0;

    /// Creates a zoom at [`Zoom::RESET`], clamped into `config`.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            value: Self::RESET.clamp(config.min, config.max),
            config,
        }
    }

    /// Current zoom factor.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Limits and step in use.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Sets the zoom factor, clamped into the configured range.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let clamped = value.clamp(self.config.min, self.config.max);
        if (self.value - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) -> bool {
        self.set(self.value + self.config.step)
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) -> bool {
        self.set(self.value - self.config.step)
    }

    /// Returns to [`Zoom::RESET`].
    pub fn reset(&mut self) -> bool {
        self.set(Self::RESET)
    }

    /// Returns `true` if another [`Zoom::zoom_in`] would have an effect.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.value < self.config.max
    }

    /// Returns `true` if another [`Zoom::zoom_out`] would have an effect.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.value > self.config.min
    }
}

#[cfg(test)]
mod tests {
    use super::{Zoom, ZoomConfig};

    #[test]
    fn steps_and_resets() {
        let mut zoom = Zoom::default();
        assert_eq!(zoom.value(), 1.0);
        assert!(zoom.zoom_in());
        assert!((zoom.value() - 1.15).abs() < 1e-12);
        assert!(zoom.zoom_out());
        assert!(zoom.zoom_out());
        assert!((zoom.value() - 0.85).abs() < 1e-12);
        assert!(zoom.reset());
        assert_eq!(zoom.value(), 1.0);
        assert!(!zoom.reset());
    }

    #[test]
    fn clamps_to_limits() {
        let mut zoom = Zoom::default();
        for _ in 0..50 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.value(), 2.5);
        assert!(!zoom.can_zoom_in());
        assert!(!zoom.zoom_in());

        for _ in 0..50 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.value(), 0.5);
        assert!(!zoom.can_zoom_out());

        assert!(zoom.set(100.0));
        assert_eq!(zoom.value(), 2.5);
        assert!(!zoom.set(f64::NAN));
    }

    #[test]
    fn config_normalizes_reversed_limits() {
        let config = ZoomConfig::new(3.0, 0.25, -0.5);
        assert_eq!(config.min, 0.25);
        assert_eq!(config.max, 3.0);
        assert_eq!(config.step, 0.5);

        let zoom = Zoom::new(ZoomConfig::new(2.0, 4.0, 0.1));
        assert_eq!(zoom.value(), 2.0);
    }
}
