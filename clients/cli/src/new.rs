use std::path::Path;

use drawly_rs::Drawly;
use drawly_rs::model::errors::DrawlyResult;
use drawly_rs::service::store::SaveOutcome;

pub async fn new(drawly: &Drawly, photo: &Path) -> DrawlyResult<()> {
    let image = drawly.import_photo(photo).await?;

    println!("Analyzing image, breaking down forms into simple shapes...");
    let tutorial = drawly.generate_tutorial(&image).await?;
    let id = tutorial.id.clone();
    let title = tutorial.title.clone();

    match drawly.add_tutorial(tutorial).await? {
        SaveOutcome::Saved => println!("Saved \"{title}\" ({id})"),
        SaveOutcome::SavedReduced { dropped } => {
            println!("Saved \"{title}\" ({id})");
            println!("Storage full: {dropped} older tutorial(s) were removed to make space.");
        }
    }

    Ok(())
}
