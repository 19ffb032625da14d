use core::fmt;

use crate::types::GestureSet;

/// Thresholds for every decoder. Durations are in timestamp ticks, distances in
/// panel coordinate units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
pub struct GestureConfig {
    pub resolution_x: u16,
    pub resolution_y: u16,

    pub click_timeout_min: u32,
    pub click_timeout_max: u32,
    pub click_distance_max: u16,

    pub second_click_interval_min: u32,
    pub second_click_interval_max: u32,
    pub second_click_distance_max: u16,

    pub scroll_debounce: u8,
    pub scroll_distance_min: u16,

    pub flick_timeout_max: u32,
    pub flick_distance_min: u16,

    pub edge_size: u16,
    pub edge_timeout_max: u32,
    pub edge_angle_max: u8,
    pub edge_distance_min: u16,

    pub zoom_debounce: u8,
    pub zoom_distance_min: u16,

    pub rotate_debounce: u8,
    pub rotate_distance_min: u16,

    pub enabled: GestureSet,
    pub filtering: bool,
}

impl GestureConfig {
    pub const FILTERING_BIT: u16 = 0x8000;

    /// Packed legacy enable word: gesture bits plus the filtering bit.
    pub const fn legacy_enable_mask(&self) -> u16 {
        let mut mask = self.enabled.bits();
        if self.filtering {
            mask |= Self::FILTERING_BIT;
        }
        mask
    }

    pub fn validate(&self) -> Result<(), GestureConfigError> {
        if self.resolution_x == 0 || self.resolution_y == 0 {
            return Err(GestureConfigError::ZeroResolution);
        }
        if self.click_timeout_min > self.click_timeout_max {
            return Err(GestureConfigError::InvertedWindow {
                field: "click_timeout",
            });
        }
        if self.second_click_interval_min > self.second_click_interval_max {
            return Err(GestureConfigError::InvertedWindow {
                field: "second_click_interval",
            });
        }
        let band = u32::from(self.edge_size) * 2;
        if band >= u32::from(self.resolution_x) || band >= u32::from(self.resolution_y) {
            return Err(GestureConfigError::EdgeBandTooWide {
                edge_size: self.edge_size,
            });
        }
        if self.edge_angle_max > 90 {
            return Err(GestureConfigError::EdgeAngleOutOfRange(self.edge_angle_max));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureConfigError {
    ZeroResolution,
    InvertedWindow { field: &'static str },
    EdgeBandTooWide { edge_size: u16 },
    EdgeAngleOutOfRange(u8),
}

impl fmt::Display for GestureConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution => f.write_str("panel resolution must be non-zero"),
            Self::InvertedWindow { field } => {
                write!(f, "{field} minimum must not exceed its maximum")
            }
            Self::EdgeBandTooWide { edge_size } => {
                write!(f, "edge band of {edge_size} leaves no interior on the panel")
            }
            Self::EdgeAngleOutOfRange(angle) => {
                write!(f, "edge angle limit {angle} exceeds 90 degrees")
            }
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/gesture_config.rs"));

pub fn active_config() -> &'static GestureConfig {
    &GESTURE_CONFIG
}

/// Small thresholds that keep unit-test traces short.
#[cfg(test)]
pub(crate) fn sample_config() -> GestureConfig {
    GestureConfig {
        resolution_x: 800,
        resolution_y: 480,
        click_timeout_min: 10,
        click_timeout_max: 200,
        click_distance_max: 10,
        second_click_interval_min: 10,
        second_click_interval_max: 300,
        second_click_distance_max: 20,
        scroll_debounce: 2,
        scroll_distance_min: 10,
        flick_timeout_max: 200,
        flick_distance_min: 100,
        edge_size: 64,
        edge_timeout_max: 1000,
        edge_angle_max: 45,
        edge_distance_min: 100,
        zoom_debounce: 2,
        zoom_distance_min: 20,
        rotate_debounce: 3,
        rotate_distance_min: 30,
        enabled: GestureSet::ALL,
        filtering: true,
    }
}

#[cfg(test)]
mod tests;
