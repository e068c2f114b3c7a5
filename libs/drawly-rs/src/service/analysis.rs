use std::io::ErrorKind;
use std::path::Path;

use chrono::{Local, SecondsFormat, Utc};
use tokio::fs;
use tokio::time;

use crate::Drawly;
use crate::model::errors::{DrawlyErrKind, DrawlyResult};
use crate::model::tutorial::{Point, Shape, Tutorial, TutorialStep};

impl Drawly {
    /// The "analysis" pass. Sleeps for [crate::Config::analysis_delay] and
    /// hands back the fixed five-stage breakdown; there is no vision here and
    /// the image is carried through untouched. The id doubles as the creation
    /// time in unix millis.
    #[instrument(level = "debug", skip_all, err(Debug))]
    pub async fn generate_tutorial(&self, image: &str) -> DrawlyResult<Tutorial> {
        time::sleep(self.config.analysis_delay).await;

        let now = Utc::now();
        let id = now.timestamp_millis().to_string();
        info!("generated tutorial {id}");

        Ok(Tutorial {
            id,
            title: format!("Tutorial {}", Local::now().format("%-m/%-d/%Y")),
            original_image: image.to_string(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            steps: baked_steps(),
        })
    }

    /// Reads a bitmap off disk and encodes it as a `data:` URI suitable for
    /// [Tutorial::original_image]. Oversize handling is the store's job.
    #[instrument(level = "debug", skip(self), err(Debug))]
    pub async fn import_photo(&self, path: &Path) -> DrawlyResult<String> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DrawlyErrKind::ImageNonexistent.into());
            }
            Err(err) => return Err(err.into()),
        };

        let mime = match path.extension().and_then(|e| e.to_str()) {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("webp") => "image/webp",
            _ => "image/png",
        };

        Ok(format!("data:{mime};base64,{}", base64::encode(bytes)))
    }
}

/// The pre-baked stages every tutorial gets. Each stage repeats the shapes of
/// the last and adds its own, so a client can render any step standalone.
fn baked_steps() -> Vec<TutorialStep> {
    let mut shapes = vec![
        Shape::Circle { x: 150.0, y: 100.0, radius: 50.0 },
        Shape::Rectangle { x: 100.0, y: 150.0, width: 100.0, height: 80.0 },
    ];
    let mut steps =
        vec![step("1", "Basic Shapes", "Start with the main circular and rectangular forms", &shapes)];

    shapes.push(Shape::Triangle {
        points: [pt(150.0, 50.0), pt(120.0, 100.0), pt(180.0, 100.0)],
    });
    steps.push(step("2", "Secondary Forms", "Add supporting geometric structures", &shapes));

    shapes.push(Shape::Line { x1: 150.0, y1: 100.0, x2: 150.0, y2: 230.0 });
    steps.push(step("3", "Connecting Lines", "Draw construction lines to connect the forms", &shapes));

    shapes.push(Shape::Circle { x: 130.0, y: 90.0, radius: 10.0 });
    shapes.push(Shape::Circle { x: 170.0, y: 90.0, radius: 10.0 });
    steps.push(step("4", "Refine Details", "Add smaller shapes for details", &shapes));

    shapes.push(Shape::Curve { points: vec![pt(120.0, 110.0), pt(150.0, 120.0), pt(180.0, 110.0)] });
    steps.push(step("5", "Final Outline", "Complete the drawing with final contours", &shapes));

    steps
}

fn step(id: &str, title: &str, description: &str, shapes: &[Shape]) -> TutorialStep {
    TutorialStep {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        shapes: shapes.to_vec(),
    }
}

fn pt(x: f32, y: f32) -> Point {
    Point { x, y }
}
