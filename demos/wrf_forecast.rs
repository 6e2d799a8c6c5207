use observatory::{local_today, DateWindow, Observatory, ObservatoryError};

#[tokio::main]
async fn main() -> Result<(), ObservatoryError> {
    let observatory = Observatory::new().await?;
    let window = DateWindow::wrf(local_today(observatory.utc_offset()));
    let date = window.default_date();

    let forecast = observatory
        .wrf()
        .date(date)
        .variable("t2")
        .call()
        .await?;

    println!(
        "{} ({}) on {}, {}",
        forecast.variable().name,
        forecast.variable().id,
        date,
        observatory.utc_offset()
    );
    for hour in forecast.available_hours() {
        match forecast.image_at(hour) {
            Some(url) => println!("  {} -> {}", hour, url),
            None => println!("  {} -> no image", hour),
        }
    }

    Ok(())
}
