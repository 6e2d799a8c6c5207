use observatory::{local_today, Observatory, ObservatoryError};

#[tokio::main]
async fn main() -> Result<(), ObservatoryError> {
    let observatory = Observatory::new().await?;
    let today = local_today(observatory.utc_offset());

    for chart in observatory.gases().for_date(today).await? {
        match chart.image_url() {
            Some(url) => println!(
                "{}: {} (updated {})",
                chart.gas,
                url,
                chart.last_updated().unwrap_or("unknown")
            ),
            None => println!("{}: no chart for {}", chart.gas, today),
        }
    }

    let statics = observatory.static_products();
    if let Some(fwi) = statics.fire_weather_index().await? {
        println!("FWI: {:?}", fwi.preferred_image());
    }
    if let Some(routes) = statics.wind_routes().await? {
        println!("Wind routes: {:?}", routes.preferred_image());
    }

    Ok(())
}
