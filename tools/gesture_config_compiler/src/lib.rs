use std::{fmt, fs, path::Path};

use serde::Deserialize;

#[derive(Debug)]
pub enum ConfigCompilerError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl fmt::Display for ConfigCompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigCompilerError {}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GesturesFile {
    pub panel: PanelSection,
    pub click: ClickSection,
    pub double_click: DoubleClickSection,
    pub scroll: DebouncedMotionSection,
    pub flick: FlickSection,
    pub edge_swipe: EdgeSwipeSection,
    pub zoom: DebouncedMotionSection,
    pub rotate: DebouncedMotionSection,
    pub gestures: GesturesSection,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelSection {
    pub resolution_x: u16,
    pub resolution_y: u16,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClickSection {
    pub timeout_min_ticks: u32,
    pub timeout_max_ticks: u32,
    pub distance_max: u16,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoubleClickSection {
    pub interval_min_ticks: u32,
    pub interval_max_ticks: u32,
    pub distance_max: u16,
}

/// Shared by scroll, zoom and rotate.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebouncedMotionSection {
    pub debounce: u8,
    pub distance_min: u16,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlickSection {
    pub timeout_max_ticks: u32,
    pub distance_min: u16,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSwipeSection {
    pub edge_size: u16,
    pub timeout_max_ticks: u32,
    pub angle_max_deg: u8,
    pub distance_min: u16,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GesturesSection {
    pub filtering: bool,
    pub enabled: Vec<String>,
}

/// Gesture names accepted in `gestures.enabled`, in enable-mask bit order.
pub const GESTURE_NAMES: [&str; 10] = [
    "one_finger_single_click",
    "one_finger_double_click",
    "one_finger_click_drag",
    "two_finger_single_click",
    "one_finger_scroll",
    "two_finger_scroll",
    "one_finger_edge_swipe",
    "one_finger_flick",
    "one_finger_rotate",
    "two_finger_zoom",
];

pub fn parse_gestures_file(path: &Path) -> Result<GesturesFile, ConfigCompilerError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ConfigCompilerError::Io(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&raw).map_err(|e| ConfigCompilerError::Parse(e.to_string()))
}

pub fn enable_mask(file: &GesturesFile) -> Result<u16, ConfigCompilerError> {
    let mut mask = 0u16;
    for name in &file.gestures.enabled {
        let bit = GESTURE_NAMES
            .iter()
            .position(|known| known == name)
            .ok_or_else(|| {
                ConfigCompilerError::Validation(format!(
                    "gestures.enabled contains unknown gesture `{name}`"
                ))
            })?;
        let flag = 1u16 << bit;
        if mask & flag != 0 {
            return Err(ConfigCompilerError::Validation(format!(
                "gestures.enabled lists `{name}` more than once"
            )));
        }
        mask |= flag;
    }
    Ok(mask)
}

pub fn validate_config(file: &GesturesFile) -> Result<(), ConfigCompilerError> {
    let invalid = |msg: &str| Err(ConfigCompilerError::Validation(msg.to_string()));

    if file.panel.resolution_x == 0 || file.panel.resolution_y == 0 {
        return invalid("panel.resolution_x and panel.resolution_y must be > 0");
    }
    if file.click.timeout_max_ticks == 0 {
        return invalid("click.timeout_max_ticks must be > 0");
    }
    if file.click.timeout_max_ticks < file.click.timeout_min_ticks {
        return invalid("click.timeout_max_ticks must be >= click.timeout_min_ticks");
    }
    if file.double_click.interval_max_ticks < file.double_click.interval_min_ticks {
        return invalid(
            "double_click.interval_max_ticks must be >= double_click.interval_min_ticks",
        );
    }
    let band = u32::from(file.edge_swipe.edge_size) * 2;
    if band >= u32::from(file.panel.resolution_x) || band >= u32::from(file.panel.resolution_y) {
        return invalid("edge_swipe.edge_size must leave an interior on both panel axes");
    }
    if file.edge_swipe.angle_max_deg > 90 {
        return invalid("edge_swipe.angle_max_deg must be <= 90");
    }
    if file.edge_swipe.distance_min == 0 {
        return invalid("edge_swipe.distance_min must be > 0");
    }
    enable_mask(file)?;
    Ok(())
}

pub fn render_generated_config(file: &GesturesFile) -> String {
    // Callers validate first; an unknown name here only drops its bit.
    let mask = GESTURE_NAMES
        .iter()
        .enumerate()
        .filter(|(_, name)| file.gestures.enabled.iter().any(|e| e == *name))
        .fold(0u16, |mask, (bit, _)| mask | (1 << bit));

    let mut out = String::new();
    out.push_str("// @generated by gesture_config_compiler. Do not edit.\n");
    out.push_str("pub const GESTURE_CONFIG: GestureConfig = GestureConfig {\n");
    push_field(&mut out, "resolution_x", file.panel.resolution_x);
    push_field(&mut out, "resolution_y", file.panel.resolution_y);
    push_field(&mut out, "click_timeout_min", file.click.timeout_min_ticks);
    push_field(&mut out, "click_timeout_max", file.click.timeout_max_ticks);
    push_field(&mut out, "click_distance_max", file.click.distance_max);
    push_field(
        &mut out,
        "second_click_interval_min",
        file.double_click.interval_min_ticks,
    );
    push_field(
        &mut out,
        "second_click_interval_max",
        file.double_click.interval_max_ticks,
    );
    push_field(
        &mut out,
        "second_click_distance_max",
        file.double_click.distance_max,
    );
    push_field(&mut out, "scroll_debounce", file.scroll.debounce);
    push_field(&mut out, "scroll_distance_min", file.scroll.distance_min);
    push_field(&mut out, "flick_timeout_max", file.flick.timeout_max_ticks);
    push_field(&mut out, "flick_distance_min", file.flick.distance_min);
    push_field(&mut out, "edge_size", file.edge_swipe.edge_size);
    push_field(&mut out, "edge_timeout_max", file.edge_swipe.timeout_max_ticks);
    push_field(&mut out, "edge_angle_max", file.edge_swipe.angle_max_deg);
    push_field(&mut out, "edge_distance_min", file.edge_swipe.distance_min);
    push_field(&mut out, "zoom_debounce", file.zoom.debounce);
    push_field(&mut out, "zoom_distance_min", file.zoom.distance_min);
    push_field(&mut out, "rotate_debounce", file.rotate.debounce);
    push_field(&mut out, "rotate_distance_min", file.rotate.distance_min);
    out.push_str(&format!(
        "    enabled: GestureSet::from_bits_truncate(0x{mask:04X}),\n"
    ));
    push_field(&mut out, "filtering", file.gestures.filtering);
    out.push_str("};\n");
    out
}

fn push_field(out: &mut String, name: &str, value: impl fmt::Display) {
    out.push_str(&format!("    {name}: {value},\n"));
}

pub fn generate_from_path(path: &Path) -> Result<String, ConfigCompilerError> {
    let file = parse_gestures_file(path)?;
    validate_config(&file)?;
    Ok(render_generated_config(&file))
}
