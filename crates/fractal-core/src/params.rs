//! User-adjustable shader parameters and the render mode toggle.

use crate::error::ParamError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    TwoD,
    #[default]
    ThreeD,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::TwoD => RenderMode::ThreeD,
            RenderMode::ThreeD => RenderMode::TwoD,
        }
    }

    pub fn from_is_2d(is_2d: bool) -> Self {
        if is_2d {
            RenderMode::TwoD
        } else {
            RenderMode::ThreeD
        }
    }

    pub fn is_2d(self) -> bool {
        self == RenderMode::TwoD
    }

    pub fn label(self) -> &'static str {
        match self {
            RenderMode::TwoD => "2D Mandelbrot",
            RenderMode::ThreeD => "3D Mandelbulb",
        }
    }
}

/// Identifies one slider-backed parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Power,
    ColorSpeed,
    ColorIntensity,
    DistortionScale,
    PulseSpeed,
    PulseIntensity,
}

/// Slider range and granularity for a parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }

    /// Decimal places implied by the step (0.1 -> 1, 0.01 -> 2).
    pub fn decimals(&self) -> usize {
        let mut step = self.step;
        let mut places = 0;
        while places < 6 && (step - step.round()).abs() > 1e-4 {
            step *= 10.0;
            places += 1;
        }
        places
    }
}

impl ParamKey {
    pub const ALL: [ParamKey; 6] = [
        ParamKey::Power,
        ParamKey::ColorSpeed,
        ParamKey::ColorIntensity,
        ParamKey::DistortionScale,
        ParamKey::PulseSpeed,
        ParamKey::PulseIntensity,
    ];

    /// Stable identifier used for DOM ids and log lines.
    pub fn id(self) -> &'static str {
        match self {
            ParamKey::Power => "power",
            ParamKey::ColorSpeed => "colorSpeed",
            ParamKey::ColorIntensity => "colorIntensity",
            ParamKey::DistortionScale => "distortionScale",
            ParamKey::PulseSpeed => "pulseSpeed",
            ParamKey::PulseIntensity => "pulseIntensity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParamKey::Power => "Power",
            ParamKey::ColorSpeed => "Color Speed",
            ParamKey::ColorIntensity => "Color Intensity",
            ParamKey::DistortionScale => "Distortion Scale",
            ParamKey::PulseSpeed => "Pulse Speed",
            ParamKey::PulseIntensity => "Pulse Intensity",
        }
    }

    pub fn range(self) -> ParamRange {
        let (min, max, step) = match self {
            ParamKey::Power => (2.0, 16.0, 0.1),
            ParamKey::ColorSpeed => (0.0, 1.0, 0.01),
            ParamKey::ColorIntensity => (0.0, 1.0, 0.01),
            ParamKey::DistortionScale => (0.0, 10.0, 0.1),
            ParamKey::PulseSpeed => (0.0, 5.0, 0.1),
            ParamKey::PulseIntensity => (0.0, 0.5, 0.01),
        };
        ParamRange { min, max, step }
    }

    /// `"Power: 8.0"` style label text for the control panel.
    pub fn format_value(self, value: f32) -> String {
        format!(
            "{}: {:.*}",
            self.label(),
            self.range().decimals(),
            value
        )
    }
}

impl FromStr for ParamKey {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::ALL
            .iter()
            .copied()
            .find(|k| k.id() == s)
            .ok_or_else(|| ParamError::UnknownParameter(s.to_string()))
    }
}

/// Values pushed into the active shader every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderParameters {
    pub power: f32,
    pub color_speed: f32,
    pub color_intensity: f32,
    pub distortion_scale: f32,
    pub pulse_speed: f32,
    pub pulse_intensity: f32,
}

impl Default for ShaderParameters {
    fn default() -> Self {
        Self {
            power: 8.0,
            color_speed: 0.2,
            color_intensity: 0.5,
            distortion_scale: 3.0,
            pulse_speed: 2.0,
            pulse_intensity: 0.1,
        }
    }
}

impl ShaderParameters {
    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::Power => self.power,
            ParamKey::ColorSpeed => self.color_speed,
            ParamKey::ColorIntensity => self.color_intensity,
            ParamKey::DistortionScale => self.distortion_scale,
            ParamKey::PulseSpeed => self.pulse_speed,
            ParamKey::PulseIntensity => self.pulse_intensity,
        }
    }

    /// Store `value` clamped to the key's range; returns what was stored.
    pub fn set(&mut self, key: ParamKey, value: f32) -> f32 {
        let v = if value.is_nan() {
            self.get(key)
        } else {
            key.range().clamp(value)
        };
        let slot = match key {
            ParamKey::Power => &mut self.power,
            ParamKey::ColorSpeed => &mut self.color_speed,
            ParamKey::ColorIntensity => &mut self.color_intensity,
            ParamKey::DistortionScale => &mut self.distortion_scale,
            ParamKey::PulseSpeed => &mut self.pulse_speed,
            ParamKey::PulseIntensity => &mut self.pulse_intensity,
        };
        *slot = v;
        v
    }

    /// Parse a raw slider value (as delivered by a DOM input) and store it.
    pub fn set_from_str(&mut self, key: ParamKey, raw: &str) -> Result<f32, ParamError> {
        let value: f32 = raw
            .trim()
            .parse()
            .map_err(|_| ParamError::NotANumber {
                key: key.id(),
                value: raw.to_string(),
            })?;
        if !value.is_finite() {
            return Err(ParamError::NotANumber {
                key: key.id(),
                value: raw.to_string(),
            });
        }
        Ok(self.set(key, value))
    }

    /// Nudge a parameter by `steps` slider steps.
    pub fn step(&mut self, key: ParamKey, steps: f32) -> f32 {
        let range = key.range();
        self.set(key, self.get(key) + range.step * steps)
    }
}
