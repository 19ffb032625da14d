use std::{
    env,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    process,
};

use touch_gestures::{
    active_config, Detected, Directions, FlickDirection, GestureConfig, GestureContext,
    GestureKind, Position, Quadrant, Rotation, Zoom,
};

#[derive(Clone, Copy)]
struct ReplaySample {
    ticks: u32,
    touch_count: u8,
    points: [Position; 2],
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let mut trace_path: Option<PathBuf> = None;
    let mut expect_path: Option<PathBuf> = None;

    let mut idx = 1usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--expect" => {
                idx += 1;
                let Some(path) = args.get(idx) else {
                    return Err("missing path after --expect".into());
                };
                expect_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("{}", usage());
                return Ok(());
            }
            value if value.starts_with('-') => {
                return Err(format!("unknown argument: {value}"));
            }
            value => {
                if trace_path.is_some() {
                    return Err("multiple trace paths provided".into());
                }
                trace_path = Some(PathBuf::from(value));
            }
        }
        idx += 1;
    }

    let trace_path = trace_path.ok_or_else(usage)?;
    let samples = parse_trace(&trace_path)?;

    let lines = replay(&samples, active_config());

    for line in &lines {
        println!("{line}");
    }

    if let Some(expect_path) = expect_path {
        let expected = parse_expected_lines(&expect_path)?;
        if lines != expected {
            eprintln!("expected:");
            for line in &expected {
                eprintln!("  {line}");
            }
            eprintln!("actual:");
            for line in &lines {
                eprintln!("  {line}");
            }
            return Err("gesture sequence mismatch".into());
        }
    }

    Ok(())
}

fn usage() -> String {
    "usage: gesture_replay <trace.txt> [--expect expected.txt]".to_string()
}

/// Feeds every sample through a fresh context and collects the reporting cycles.
fn replay(samples: &[ReplaySample], config: &GestureConfig) -> Vec<String> {
    let mut context = GestureContext::new();
    let mut lines: Vec<String> = Vec::new();
    for sample in samples {
        context.decode(sample.ticks, sample.touch_count, sample.points, config);
        if let Some(line) = describe_cycle(sample.ticks, context.detected(), context.directions())
        {
            lines.push(line);
        }
    }
    lines
}

/// `<ticks> <item>...` for a cycle that reported anything, else `None`.
fn describe_cycle(ticks: u32, detected: Detected, directions: Directions) -> Option<String> {
    if detected.is_empty() {
        return None;
    }
    let mut items: Vec<String> = Vec::new();
    for kind in detected.gestures.iter() {
        match direction_label(kind, &directions) {
            Some(direction) => items.push(format!("{}:{direction}", kind.label())),
            None => items.push(kind.label().to_string()),
        }
    }
    if detected.touchdown {
        items.push("touchdown".into());
    }
    if detected.liftoff {
        items.push("liftoff".into());
    }
    Some(format!("{ticks} {}", items.join(" ")))
}

fn direction_label(kind: GestureKind, directions: &Directions) -> Option<&'static str> {
    match kind {
        GestureKind::OneFingerScroll => directions.one_finger_scroll.map(quadrant_label),
        GestureKind::TwoFingerScroll => directions.two_finger_scroll.map(quadrant_label),
        GestureKind::OneFingerEdgeSwipe => directions.edge_swipe.map(quadrant_label),
        GestureKind::OneFingerFlick => directions.flick.map(flick_label),
        GestureKind::OneFingerRotate => directions.rotate.map(|r| match r {
            Rotation::Clockwise => "cw",
            Rotation::CounterClockwise => "ccw",
        }),
        GestureKind::TwoFingerZoom => directions.zoom.map(|z| match z {
            Zoom::In => "in",
            Zoom::Out => "out",
        }),
        _ => None,
    }
}

fn quadrant_label(quadrant: Quadrant) -> &'static str {
    match quadrant {
        Quadrant::Up => "up",
        Quadrant::Down => "down",
        Quadrant::Right => "right",
        Quadrant::Left => "left",
    }
}

fn flick_label(direction: FlickDirection) -> &'static str {
    match direction {
        FlickDirection::Up => "up",
        FlickDirection::Down => "down",
        FlickDirection::Right => "right",
        FlickDirection::Left => "left",
        FlickDirection::UpRight => "up_right",
        FlickDirection::DownLeft => "down_left",
        FlickDirection::DownRight => "down_right",
        FlickDirection::UpLeft => "up_left",
    }
}

fn parse_trace(path: &Path) -> Result<Vec<ReplaySample>, String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);

    let mut out: Vec<ReplaySample> = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line_result
            .map_err(|e| format!("failed to read {}:{}: {e}", path.display(), line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(format!(
                "{}:{} invalid trace line, expected `t count x0 y0 x1 y1`",
                path.display(),
                line_no
            ));
        }

        let ticks = parse_field::<u32>(parts[0], path, line_no, "t")?;
        let touch_count = parse_field::<u8>(parts[1], path, line_no, "count")?;
        let x0 = parse_field::<u16>(parts[2], path, line_no, "x0")?;
        let y0 = parse_field::<u16>(parts[3], path, line_no, "y0")?;
        let x1 = parse_field::<u16>(parts[4], path, line_no, "x1")?;
        let y1 = parse_field::<u16>(parts[5], path, line_no, "y1")?;

        out.push(ReplaySample {
            ticks,
            touch_count,
            points: [Position::new(x0, y0), Position::new(x1, y1)],
        });
    }

    Ok(out)
}

fn parse_expected_lines(path: &Path) -> Result<Vec<String>, String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line = line_result
            .map_err(|e| format!("failed to read {}:{}: {e}", path.display(), line_no + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(trimmed.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    Ok(lines)
}

fn parse_field<T>(raw: &str, path: &Path, line_no: usize, field: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| {
        format!(
            "{}:{} invalid {} '{}': {}",
            path.display(),
            line_no,
            field,
            raw,
            e
        )
    })
}

#[cfg(test)]
mod tests;
