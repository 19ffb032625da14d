#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// The ten gestures the engine can decode, in bit order of the legacy mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GestureKind {
    OneFingerSingleClick = 0,
    OneFingerDoubleClick = 1,
    OneFingerClickDrag = 2,
    TwoFingerSingleClick = 3,
    OneFingerScroll = 4,
    TwoFingerScroll = 5,
    OneFingerEdgeSwipe = 6,
    OneFingerFlick = 7,
    OneFingerRotate = 8,
    TwoFingerZoom = 9,
}

impl GestureKind {
    pub const ALL: [GestureKind; 10] = [
        GestureKind::OneFingerSingleClick,
        GestureKind::OneFingerDoubleClick,
        GestureKind::OneFingerClickDrag,
        GestureKind::TwoFingerSingleClick,
        GestureKind::OneFingerScroll,
        GestureKind::TwoFingerScroll,
        GestureKind::OneFingerEdgeSwipe,
        GestureKind::OneFingerFlick,
        GestureKind::OneFingerRotate,
        GestureKind::TwoFingerZoom,
    ];

    pub const fn mask(self) -> u16 {
        1 << (self as u8)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            GestureKind::OneFingerSingleClick => "one_finger_single_click",
            GestureKind::OneFingerDoubleClick => "one_finger_double_click",
            GestureKind::OneFingerClickDrag => "one_finger_click_drag",
            GestureKind::TwoFingerSingleClick => "two_finger_single_click",
            GestureKind::OneFingerScroll => "one_finger_scroll",
            GestureKind::TwoFingerScroll => "two_finger_scroll",
            GestureKind::OneFingerEdgeSwipe => "one_finger_edge_swipe",
            GestureKind::OneFingerFlick => "one_finger_flick",
            GestureKind::OneFingerRotate => "one_finger_rotate",
            GestureKind::TwoFingerZoom => "two_finger_zoom",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
pub struct GestureSet(u16);

impl GestureSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL_BITS: u16 = 0x03FF;
    pub const ALL: Self = Self(Self::ALL_BITS);

    /// Keeps only bits that name a gesture.
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn with(self, kind: GestureKind) -> Self {
        Self(self.0 | kind.mask())
    }

    pub const fn contains(self, kind: GestureKind) -> bool {
        self.0 & kind.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, kind: GestureKind) {
        self.0 |= kind.mask();
    }

    pub fn iter(self) -> impl Iterator<Item = GestureKind> {
        GestureKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl FromIterator<GestureKind> for GestureSet {
    fn from_iter<I: IntoIterator<Item = GestureKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, GestureSet::with)
    }
}

/// Per-cycle detection result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
pub struct Detected {
    pub gestures: GestureSet,
    pub touchdown: bool,
    pub liftoff: bool,
}

impl Detected {
    pub const TOUCHDOWN_BIT: u16 = 0x2000;
    pub const LIFTOFF_BIT: u16 = 0x4000;

    pub const NONE: Self = Self {
        gestures: GestureSet::EMPTY,
        touchdown: false,
        liftoff: false,
    };

    pub const fn only(kind: GestureKind) -> Self {
        Self {
            gestures: GestureSet::EMPTY.with(kind),
            touchdown: false,
            liftoff: false,
        }
    }

    pub const fn contains(&self, kind: GestureKind) -> bool {
        self.gestures.contains(kind)
    }

    pub const fn is_empty(&self) -> bool {
        self.gestures.is_empty() && !self.touchdown && !self.liftoff
    }

    /// Packed legacy detection word.
    pub const fn bits(&self) -> u16 {
        let mut bits = self.gestures.bits();
        if self.touchdown {
            bits |= Self::TOUCHDOWN_BIT;
        }
        if self.liftoff {
            bits |= Self::LIFTOFF_BIT;
        }
        bits
    }
}

/// Dominant axis and sign of a displacement. Positive y is `Up`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Quadrant {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Quadrant {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FlickDirection {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
    UpRight = 4,
    DownLeft = 5,
    DownRight = 6,
    UpLeft = 7,
}

impl FlickDirection {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// `In` when the touches spread apart, `Out` when they pinch together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
pub enum Zoom {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
pub struct Directions {
    pub one_finger_scroll: Option<Quadrant>,
    pub two_finger_scroll: Option<Quadrant>,
    pub edge_swipe: Option<Quadrant>,
    pub rotate: Option<Rotation>,
    pub zoom: Option<Zoom>,
    pub flick: Option<FlickDirection>,
}

impl Directions {
    pub const OFFSET_ONE_SCROLL: u16 = 0;
    pub const OFFSET_TWO_SCROLL: u16 = 2;
    pub const OFFSET_EDGE: u16 = 4;
    pub const OFFSET_ROTATE: u16 = 6;
    pub const OFFSET_ZOOM: u16 = 7;
    pub const OFFSET_FLICK: u16 = 8;

    /// Packed legacy direction field. Absent directions pack as zero.
    pub fn packed(&self) -> u16 {
        let quadrant = |q: Option<Quadrant>| q.map_or(0, |q| u16::from(q.code()));
        let rotate = match self.rotate {
            Some(Rotation::CounterClockwise) => 1,
            _ => 0,
        };
        let zoom = match self.zoom {
            Some(Zoom::Out) => 1,
            _ => 0,
        };
        let flick = self.flick.map_or(0, |f| u16::from(f.code()));

        (quadrant(self.one_finger_scroll) << Self::OFFSET_ONE_SCROLL)
            | (quadrant(self.two_finger_scroll) << Self::OFFSET_TWO_SCROLL)
            | (quadrant(self.edge_swipe) << Self::OFFSET_EDGE)
            | (rotate << Self::OFFSET_ROTATE)
            | (zoom << Self::OFFSET_ZOOM)
            | (flick << Self::OFFSET_FLICK)
    }
}

/// Observable sub-state of a single decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "telemetry-defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DecoderPhase {
    #[default]
    Idle = 0,
    FirstTouch = 1,
    FirstLiftoff = 2,
    SecondTouch = 3,
    Detected = 4,
    Invalid = 0xFF,
}

impl DecoderPhase {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}
