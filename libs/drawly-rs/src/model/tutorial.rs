use serde::{Deserialize, Serialize};

/// Most tutorials a library will hold; adds beyond this drop the oldest entry.
pub const MAX_TUTORIALS: usize = 10;

/// Largest encoded image we'll persist, in bytes of encoded text. Anything
/// bigger is swapped for [PLACEHOLDER_IMAGE] before it touches disk.
pub const MAX_IMAGE_SIZE: usize = 500 * 1024;

/// Serialized ceiling for the whole library blob.
pub const MAX_BLOB_SIZE: usize = 5 * 1024 * 1024;

/// How many entries below [MAX_TUTORIALS] the degraded write retry keeps
/// (floor of 1 retained entry).
pub const REDUCED_RETRY_HEADROOM: usize = 2;

/// A 1x1 transparent PNG. Stands in for images over [MAX_IMAGE_SIZE].
pub static PLACEHOLDER_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One geometric primitive overlaid on the tracing canvas. Immutable once
/// created. The serialized form is tagged with a lowercase `type` field so
/// blobs written by older drawly clients hydrate as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle { x: f32, y: f32, radius: f32 },
    Rectangle { x: f32, y: f32, width: f32, height: f32 },
    Triangle { points: [Point; 3] },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Curve { points: Vec<Point> },
}

/// One stage of a tutorial. Steps are cumulative: each stage's shape list is
/// a superset of the previous one, by convention of the producer. Nothing
/// here enforces that.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TutorialStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub shapes: Vec<Shape>,
}

/// One generated drawing guide. Created atomically by the analysis pass and
/// owned by the store once added; clients hold read-only copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    /// Creation time in unix epoch millis, rendered as a decimal string.
    pub id: String,
    pub title: String,
    /// A data-URI-encoded bitmap, or an external reference string.
    pub original_image: String,
    /// RFC 3339.
    pub created_at: String,
    pub steps: Vec<TutorialStep>,
}

/// Shallow-merge patch for [crate::Drawly::update_tutorial]. `None` fields
/// are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TutorialUpdate {
    pub title: Option<String>,
    pub original_image: Option<String>,
    pub steps: Option<Vec<TutorialStep>>,
}

impl Tutorial {
    pub fn merge(&mut self, patch: TutorialUpdate) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(original_image) = patch.original_image {
            self.original_image = original_image;
        }
        if let Some(steps) = patch.steps {
            self.steps = steps;
        }
    }
}
