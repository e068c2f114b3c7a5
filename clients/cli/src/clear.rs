use std::io::{self, BufRead, Write};

use drawly_rs::Drawly;
use drawly_rs::model::errors::DrawlyResult;

pub async fn clear(drawly: &Drawly, force: bool) -> DrawlyResult<()> {
    let count = drawly.list_tutorials().await.len();
    if count == 0 {
        println!("Your library is already empty.");
        return Ok(());
    }

    if !force {
        print!("Remove all {count} tutorial(s)? [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Nothing removed.");
            return Ok(());
        }
    }

    drawly.clear_all().await;
    println!("Library cleared.");
    Ok(())
}
