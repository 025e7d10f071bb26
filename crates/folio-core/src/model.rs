//! Core data model for folio documents.
//!
//! A document is a list of fixed-size pages. Each page owns an unordered
//! list of components — paint order comes from each component's sparse `z`
//! index, not from list position. Groups aggregate ≥2 components and are
//! referenced from members by a non-owning back-reference. Guides are
//! advisory alignment lines that never affect geometry.

use crate::id::Id;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Fixed page width in canvas pixels (A4 portrait at 96 dpi).
pub const PAGE_WIDTH: f32 = 794.0;
/// Fixed page height in canvas pixels (A4 portrait at 96 dpi).
pub const PAGE_HEIGHT: f32 = 1123.0;

/// Smallest width/height a component may have after any transform.
pub const MIN_EXTENT: f32 = 1.0;

// ─── Color ───────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 | 8 => {
                let mut chan = [0u8; 4];
                chan[3] = 255;
                for (i, pair) in bytes.chunks_exact(2).enumerate() {
                    chan[i] = hex_val(pair[0])? << 4 | hex_val(pair[1])?;
                }
                Some(Self::rgba(chan[0], chan[1], chan[2], chan[3]))
            }
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

// ─── Shadow / stroke / font ──────────────────────────────────────────────

/// Drop shadow descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub dx: f32,
    pub dy: f32,
    pub blur: f32,
    pub color: Color,
}

/// Stroke for shapes and lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub weight: u16, // 100..900
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Inter".into(),
            size: 16.0,
            weight: 400,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// ─── Component variants ──────────────────────────────────────────────────

/// Geometric primitive drawn by a shape component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Triangle,
}

/// The five placeable component kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentKind {
    Text {
        content: String,
        font: FontSpec,
        color: Color,
        align: TextAlign,
    },
    Image {
        /// Source reference (URL or asset key); resolution is the
        /// renderer's concern.
        src: String,
        opacity: f32,
    },
    Shape {
        shape: ShapeKind,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Line {
        /// Endpoint offsets relative to (x, y).
        x2: f32,
        y2: f32,
        stroke: Stroke,
    },
    Icon {
        glyph: String,
        color: Color,
    },
}

impl ComponentKind {
    /// Id prefix for this variant (`text-…`, `image-…`, …).
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Shape { .. } => "shape",
            Self::Line { .. } => "line",
            Self::Icon { .. } => "icon",
        }
    }
}

// ─── Component ───────────────────────────────────────────────────────────

/// A single placeable visual entity on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: Id,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, unnormalized — renderers interpret modulo 360.
    pub rotation: f32,
    /// Sparse paint-order index. Never re-indexed; ties break by list
    /// position.
    pub z: i32,
    pub locked: bool,
    pub visible: bool,
    pub shadow: Option<Shadow>,
    /// Back-reference to the owning group record, if any. Non-owning:
    /// always resolved through the document's group collection.
    pub group: Option<Id>,
    pub kind: ComponentKind,
}

impl Component {
    fn base(width: f32, height: f32, kind: ComponentKind) -> Self {
        Self {
            id: Id::fresh(kind.prefix()),
            x: 0.0,
            y: 0.0,
            width,
            height,
            rotation: 0.0,
            z: 0,
            locked: false,
            visible: true,
            shadow: None,
            group: None,
            kind,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::base(
            200.0,
            28.0,
            ComponentKind::Text {
                content: content.into(),
                font: FontSpec::default(),
                color: Color::BLACK,
                align: TextAlign::Left,
            },
        )
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::base(
            200.0,
            150.0,
            ComponentKind::Image {
                src: src.into(),
                opacity: 1.0,
            },
        )
    }

    pub fn shape(shape: ShapeKind) -> Self {
        Self::base(
            120.0,
            120.0,
            ComponentKind::Shape {
                shape,
                fill: Color::rgb(108, 92, 231),
                stroke: None,
            },
        )
    }

    pub fn line() -> Self {
        Self::base(
            120.0,
            2.0,
            ComponentKind::Line {
                x2: 120.0,
                y2: 0.0,
                stroke: Stroke::default(),
            },
        )
    }

    pub fn icon(glyph: impl Into<String>) -> Self {
        Self::base(
            48.0,
            48.0,
            ComponentKind::Icon {
                glyph: glyph.into(),
                color: Color::BLACK,
            },
        )
    }

    /// Axis-aligned bounding box. Rotation is ignored — hit testing and
    /// marquee selection work on the unrotated box.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Merge a partial update into this component.
    pub fn apply(&mut self, patch: &ComponentPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(shadow) = &patch.shadow {
            self.shadow = *shadow;
        }
        self.clamp_extents();
    }

    /// Enforce the minimal positive size bound.
    pub fn clamp_extents(&mut self) {
        self.width = self.width.max(MIN_EXTENT);
        self.height = self.height.max(MIN_EXTENT);
    }
}

/// Partial update over the common component fields. `None` leaves the
/// field untouched; `shadow: Some(None)` clears the shadow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation: Option<f32>,
    pub z: Option<i32>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
    pub shadow: Option<Option<Shadow>>,
}

impl ComponentPatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn rotate(degrees: f32) -> Self {
        Self {
            rotation: Some(degrees),
            ..Self::default()
        }
    }
}

// ─── Group / page / guide ────────────────────────────────────────────────

/// A named aggregate of ≥2 components selected and moved as a unit.
///
/// Lock/visibility toggles are written through onto every member at toggle
/// time — renderers and hit testing consult only the component's own flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Id,
    pub name: String,
    pub members: SmallVec<[Id; 8]>,
    pub locked: bool,
    pub visible: bool,
}

impl Group {
    pub fn new(name: impl Into<String>, members: SmallVec<[Id; 8]>) -> Self {
        Self {
            id: Id::fresh("group"),
            name: name.into(),
            members,
            locked: false,
            visible: true,
        }
    }
}

/// An independent component collection with its own background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: Id,
    pub name: String,
    pub components: Vec<Component>,
    pub background: Color,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::fresh("page"),
            name: name.into(),
            components: Vec::new(),
            background: Color::WHITE,
        }
    }
}

/// Axis for guides and distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Alignment reference edge over a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignEdge {
    Left,
    /// Horizontal centers onto the mean of centers.
    Center,
    Right,
    Top,
    /// Vertical centers onto the mean of centers.
    Middle,
    Bottom,
}

/// An advisory alignment line. Never affects hit testing or export
/// geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: Id,
    pub axis: Axis,
    /// Offset from the page origin along the perpendicular axis.
    pub offset: f32,
    pub color: Color,
    pub visible: bool,
}

impl Guide {
    pub fn new(axis: Axis, offset: f32) -> Self {
        Self {
            id: Id::fresh("guide"),
            axis,
            offset,
            color: Color::rgb(0, 196, 204),
            visible: true,
        }
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Strict AABB overlap on both axes — touching edges do not intersect,
    /// partial coverage does.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
