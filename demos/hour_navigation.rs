use observatory::{
    local_today, DateWindow, ForecastSession, ImageView, Observatory, ObservatoryError,
};

#[tokio::main]
async fn main() -> Result<(), ObservatoryError> {
    let observatory = Observatory::new().await?;
    let window = DateWindow::wrf(local_today(observatory.utc_offset()));
    let mut session = ForecastSession::new(window.default_date());

    let pending = session.select_variable("wspd10")?;
    session.apply(pending.run(&observatory).await);
    println!("{}", session.status());

    let navigator = session.navigator();
    println!(
        "{} hours{}, shortcuts: {:?}",
        navigator.hours().len(),
        if navigator.is_fallback() { " (default list)" } else { "" },
        navigator
            .shortcuts()
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
    );

    for _ in 0..navigator.hours().len().min(6) {
        let hour = session.next_hour();
        let position = session.navigator().position();
        match (hour, session.view()) {
            (Some(hour), ImageView::Image(url)) => println!("{} {:?}: {}", hour, position, url),
            (Some(hour), view) => println!("{} {:?}: {:?}", hour, position, view),
            (None, view) => println!("no hour selected: {:?}", view),
        }
    }

    Ok(())
}
