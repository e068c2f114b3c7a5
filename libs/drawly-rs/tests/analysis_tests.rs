use std::fs;
use std::path::Path;

use chrono::DateTime;
use drawly_rs::DrawlyErrKind;
use drawly_rs::model::tutorial::Shape;
use test_utils::*;

#[tokio::test]
async fn generator_emits_five_cumulative_steps() {
    let drawly = test_drawly().await;

    let tutorial = drawly.generate_tutorial("some-image-ref").await.unwrap();

    assert_eq!(tutorial.steps.len(), 5);
    let ids: Vec<&str> = tutorial.steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

    // every stage repeats the previous stage's shapes before adding its own
    for pair in tutorial.steps.windows(2) {
        assert_eq!(&pair[1].shapes[..pair[0].shapes.len()], &pair[0].shapes[..]);
        assert!(pair[1].shapes.len() > pair[0].shapes.len());
    }

    let first = &tutorial.steps[0].shapes;
    assert!(matches!(first[0], Shape::Circle { .. }));
    assert!(matches!(first[1], Shape::Rectangle { .. }));

    let last = &tutorial.steps[4].shapes;
    assert_eq!(last.len(), 7);
    assert!(matches!(last[6], Shape::Curve { .. }));
}

#[tokio::test]
async fn generator_stamps_id_and_timestamps() {
    let drawly = test_drawly().await;

    let tutorial = drawly.generate_tutorial("some-image-ref").await.unwrap();

    let millis: i64 = tutorial.id.parse().unwrap();
    assert!(millis > 0);
    assert!(tutorial.title.starts_with("Tutorial "));
    assert_eq!(tutorial.original_image, "some-image-ref");
    let created = DateTime::parse_from_rfc3339(&tutorial.created_at).unwrap();
    assert_eq!(created.timestamp_millis(), millis);
}

#[tokio::test]
async fn import_photo_encodes_a_data_uri() {
    let drawly = test_drawly().await;
    let dir = drawly.config.writeable_path.clone();
    fs::create_dir_all(&dir).unwrap();
    let photo = format!("{dir}/photo.png");
    fs::write(&photo, [0x89, b'P', b'N', b'G', 0x0d, 0x0a]).unwrap();

    let uri = drawly.import_photo(Path::new(&photo)).await.unwrap();

    let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
    assert_eq!(base64::decode(encoded).unwrap(), vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a]);
}

#[tokio::test]
async fn import_photo_detects_jpeg() {
    let drawly = test_drawly().await;
    let dir = drawly.config.writeable_path.clone();
    fs::create_dir_all(&dir).unwrap();
    let photo = format!("{dir}/photo.jpg");
    fs::write(&photo, [0xff, 0xd8, 0xff]).unwrap();

    let uri = drawly.import_photo(Path::new(&photo)).await.unwrap();

    assert!(uri.starts_with("data:image/jpeg;base64,"));
}

#[tokio::test]
async fn import_photo_missing_file() {
    let drawly = test_drawly().await;

    let err = drawly
        .import_photo(Path::new("/tmp/does-not-exist.png"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, DrawlyErrKind::ImageNonexistent);
}

#[tokio::test]
async fn generate_then_add_lands_in_the_library() {
    let drawly = test_drawly().await;

    let tutorial = drawly.generate_tutorial("some-image-ref").await.unwrap();
    let id = tutorial.id.clone();
    drawly.add_tutorial(tutorial).await.unwrap();

    let stored = drawly.get_tutorial(&id).await.unwrap();
    assert_eq!(stored.steps.len(), 5);
}
