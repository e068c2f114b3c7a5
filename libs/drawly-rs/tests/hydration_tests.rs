use std::fs;

use drawly_rs::Drawly;
use drawly_rs::io::disk::BLOB_FILE;
use drawly_rs::model::tutorial::Shape;
use test_utils::*;

// a blob as an older drawly client would have written it
static LEGACY_BLOB: &str = r#"[{"id":"1755905000000","title":"Tutorial 8/22/2026","originalImage":"data:image/png;base64,AAAA","createdAt":"2026-08-22T21:23:20.000Z","steps":[{"id":"1","title":"Basic Shapes","description":"Start with the main circular and rectangular forms","shapes":[{"type":"circle","x":150.0,"y":100.0,"radius":50.0},{"type":"rectangle","x":100.0,"y":150.0,"width":100.0,"height":80.0},{"type":"triangle","points":[{"x":150.0,"y":50.0},{"x":120.0,"y":100.0},{"x":180.0,"y":100.0}]},{"type":"line","x1":150.0,"y1":100.0,"x2":150.0,"y2":230.0},{"type":"curve","points":[{"x":120.0,"y":110.0},{"x":150.0,"y":120.0}]}]}]}]"#;

#[tokio::test]
async fn hydrates_blob_written_by_a_previous_client() {
    let config = test_config();
    fs::create_dir_all(&config.writeable_path).unwrap();
    fs::write(format!("{}/{BLOB_FILE}", config.writeable_path), LEGACY_BLOB).unwrap();

    let drawly = Drawly::init(config).await.unwrap();

    let tutorials = drawly.list_tutorials().await;
    assert_eq!(tutorials.len(), 1);
    assert_eq!(tutorials[0].id, "1755905000000");
    assert_eq!(tutorials[0].original_image, "data:image/png;base64,AAAA");
    assert_eq!(tutorials[0].created_at, "2026-08-22T21:23:20.000Z");

    let shapes = &tutorials[0].steps[0].shapes;
    assert_eq!(shapes.len(), 5);
    assert_eq!(shapes[0], Shape::Circle { x: 150.0, y: 100.0, radius: 50.0 });
    assert!(matches!(shapes[2], Shape::Triangle { .. }));
    assert!(matches!(shapes[4], Shape::Curve { .. }));
}

#[tokio::test]
async fn absent_blob_starts_empty() {
    let drawly = test_drawly().await;

    assert_eq!(drawly.list_tutorials().await, vec![]);
    assert!(!drawly.is_loading());
}

#[tokio::test]
async fn corrupt_blob_falls_back_to_empty() {
    let config = test_config();
    fs::create_dir_all(&config.writeable_path).unwrap();
    fs::write(format!("{}/{BLOB_FILE}", config.writeable_path), "definitely not json").unwrap();

    let drawly = Drawly::init(config).await.unwrap();

    assert_eq!(drawly.list_tutorials().await, vec![]);

    // the store stays usable; the next commit overwrites the bad blob
    drawly.add_tutorial(small_tutorial("1")).await.unwrap();
    assert_eq!(drawly.list_tutorials().await.len(), 1);
}

#[tokio::test]
async fn library_survives_restart() {
    let config = test_config();
    let drawly = Drawly::init(config.clone()).await.unwrap();
    drawly.add_tutorial(small_tutorial("1")).await.unwrap();
    drawly.add_tutorial(small_tutorial("2")).await.unwrap();

    let reopened = Drawly::init(config).await.unwrap();

    assert_eq!(reopened.list_tutorials().await, drawly.list_tutorials().await);
}

#[tokio::test]
async fn clear_all_removes_the_blob() {
    let drawly = test_drawly().await;
    drawly.add_tutorial(small_tutorial("1")).await.unwrap();
    drawly.add_tutorial(small_tutorial("2")).await.unwrap();

    drawly.clear_all().await;

    assert_eq!(drawly.list_tutorials().await, vec![]);
    assert_eq!(drawly.disk.get().await.unwrap(), None);

    let info = drawly.storage_info().await.unwrap();
    assert_eq!(info.tutorial_count, 0);
    assert_eq!(info.storage_size_mb, "0.00");
}

#[tokio::test]
async fn clear_all_on_an_empty_store_is_fine() {
    let drawly = test_drawly().await;

    drawly.clear_all().await;

    assert_eq!(drawly.list_tutorials().await, vec![]);
}
