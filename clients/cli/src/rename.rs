use drawly_rs::Drawly;
use drawly_rs::model::errors::DrawlyResult;
use drawly_rs::model::tutorial::TutorialUpdate;

pub async fn rename(drawly: &Drawly, id: &str, title: &str) -> DrawlyResult<()> {
    // confirm the id first; an unmatched update would silently no-op
    drawly.get_tutorial(id).await?;

    let patch = TutorialUpdate { title: Some(title.to_string()), ..Default::default() };
    drawly.update_tutorial(id, patch).await?;

    println!("Renamed {id} to \"{title}\"");
    Ok(())
}
