use std::time::Duration;

use drawly_rs::Drawly;
use drawly_rs::model::core_config::Config;
use drawly_rs::model::tutorial::{Point, Shape, Tutorial, TutorialStep};
use uuid::Uuid;

pub fn test_config() -> Config {
    Config {
        writeable_path: format!("/tmp/{}", Uuid::new_v4()),
        logs: false,
        stdout_logs: false,
        colored_logs: false,
        storage_capacity: None,
        analysis_delay: Duration::ZERO,
    }
}

pub async fn test_drawly() -> Drawly {
    Drawly::init(test_config()).await.unwrap()
}

pub async fn test_drawly_from(config: Config) -> Drawly {
    Drawly::init(config).await.unwrap()
}

/// A deterministic tutorial: same id in, same bytes out. Keeps blob sizes
/// reproducible across stores.
pub fn small_tutorial(id: &str) -> Tutorial {
    tutorial_with_image(id, "data:image/png;base64,AAAA".to_string())
}

pub fn tutorial_with_image(id: &str, original_image: String) -> Tutorial {
    Tutorial {
        id: id.to_string(),
        title: format!("Tutorial {id}"),
        original_image,
        created_at: "2026-08-23T00:00:00.000Z".to_string(),
        steps: vec![TutorialStep {
            id: "1".to_string(),
            title: "Basic Shapes".to_string(),
            description: "Start with the main circular and rectangular forms".to_string(),
            shapes: vec![
                Shape::Circle { x: 150.0, y: 100.0, radius: 50.0 },
                Shape::Line { x1: 0.0, y1: 0.0, x2: 10.0, y2: 10.0 },
                Shape::Curve { points: vec![Point { x: 1.0, y: 2.0 }, Point { x: 3.0, y: 4.0 }] },
            ],
        }],
    }
}

/// An "encoded image" of exactly `len` characters.
pub fn text_image(len: usize) -> String {
    "x".repeat(len)
}
