use drawly_rs::Drawly;
use drawly_rs::model::errors::DrawlyResult;
use drawly_rs::model::tutorial::{Shape, TutorialStep};

pub async fn show(drawly: &Drawly, id: &str, step: Option<usize>) -> DrawlyResult<()> {
    let tutorial = drawly.get_tutorial(id).await?;

    println!("{} ({})", tutorial.title, tutorial.id);
    println!("created: {}", tutorial.created_at);
    println!("image: {}", describe_image(&tutorial.original_image));
    println!();

    match step {
        Some(n) => match tutorial.steps.get(n.wrapping_sub(1)) {
            Some(step) => print_step(step),
            None => println!("No step {n}; this tutorial has {} steps.", tutorial.steps.len()),
        },
        None => {
            for step in &tutorial.steps {
                print_step(step);
                println!();
            }
        }
    }

    Ok(())
}

fn print_step(step: &TutorialStep) {
    println!("Step {}: {}", step.id, step.title);
    println!("  {}", step.description);
    for shape in &step.shapes {
        println!("  - {}", describe_shape(shape));
    }
}

fn describe_shape(shape: &Shape) -> String {
    match shape {
        Shape::Circle { x, y, radius } => format!("circle at ({x}, {y}) radius {radius}"),
        Shape::Rectangle { x, y, width, height } => {
            format!("rectangle at ({x}, {y}) {width}x{height}")
        }
        Shape::Triangle { points } => format!(
            "triangle ({}, {}) ({}, {}) ({}, {})",
            points[0].x, points[0].y, points[1].x, points[1].y, points[2].x, points[2].y
        ),
        Shape::Line { x1, y1, x2, y2 } => format!("line ({x1}, {y1}) to ({x2}, {y2})"),
        Shape::Curve { points } => format!("curve through {} points", points.len()),
    }
}

fn describe_image(image: &str) -> String {
    match image.split_once(';') {
        Some((head, _)) if head.starts_with("data:") => {
            format!("{} ({} chars embedded)", &head["data:".len()..], image.len())
        }
        _ => image.to_string(),
    }
}
