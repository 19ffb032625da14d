// @generated by gesture_config_compiler. Do not edit.
pub const GESTURE_CONFIG: GestureConfig = GestureConfig {
    resolution_x: 800,
    resolution_y: 480,
    click_timeout_min: 10,
    click_timeout_max: 1000,
    click_distance_max: 50,
    second_click_interval_min: 10,
    second_click_interval_max: 1000,
    second_click_distance_max: 50,
    scroll_debounce: 3,
    scroll_distance_min: 20,
    flick_timeout_max: 200,
    flick_distance_min: 100,
    edge_size: 64,
    edge_timeout_max: 2000,
    edge_angle_max: 45,
    edge_distance_min: 100,
    zoom_debounce: 3,
    zoom_distance_min: 50,
    rotate_debounce: 20,
    rotate_distance_min: 30,
    enabled: GestureSet::from_bits_truncate(0x03FF),
    filtering: true,
};
