use drawly_rs::Drawly;
use drawly_rs::model::errors::DrawlyResult;

pub async fn list(drawly: &Drawly) -> DrawlyResult<()> {
    let tutorials = drawly.list_tutorials().await;

    if tutorials.is_empty() {
        println!("Your library is empty. Try `drawly new <photo>`.");
        return Ok(());
    }

    for tutorial in tutorials {
        println!(
            "{}\t{}\t{} steps\t{}",
            tutorial.id,
            tutorial.title,
            tutorial.steps.len(),
            tutorial.created_at
        );
    }

    Ok(())
}
