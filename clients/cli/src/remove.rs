use drawly_rs::Drawly;
use drawly_rs::model::errors::DrawlyResult;

pub async fn remove(drawly: &Drawly, id: &str) -> DrawlyResult<()> {
    // confirm the id first; an unmatched remove would silently no-op
    let tutorial = drawly.get_tutorial(id).await?;

    drawly.remove_tutorial(id).await?;

    println!("Removed \"{}\"", tutorial.title);
    Ok(())
}
