use drawly_rs::Drawly;
use drawly_rs::model::errors::DrawlyResult;

pub async fn status(drawly: &Drawly) -> DrawlyResult<()> {
    let info = drawly.storage_info().await?;

    println!("tutorials: {} of {}", info.tutorial_count, info.max_tutorials);
    println!("on disk: {} MB", info.storage_size_mb);

    Ok(())
}
