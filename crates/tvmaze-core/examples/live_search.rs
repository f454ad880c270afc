use tvmaze_core::{RenderOutcome, ShowBrowser};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "batman".to_string());
    let browser = ShowBrowser::new()?;

    println!("Searching for '{}'...\n", query);

    let shows = browser.catalog().search_shows(&query).await?;
    for (i, show) in shows.iter().enumerate() {
        println!(
            "  {}. {} [{}] - ID: {}",
            i + 1,
            show.name,
            show.premiered.as_deref().unwrap_or("unlisted"),
            show.id
        );
    }

    let Some(first) = shows.first() else {
        println!("No shows found.");
        return Ok(());
    };

    println!("\nEpisodes of {} (ID: {}):\n", first.name, first.id);
    for episode in browser.catalog().get_episodes(first.id).await? {
        println!("  {}", tvmaze_core::render::format_episode_line(&episode));
    }

    // Drive the page the way the UI would and dump the resulting document.
    if let RenderOutcome::Failed { message } = browser.submit_search(&query).await {
        eprintln!("search failed: {}", message);
    }
    browser.episode_button_clicked(&first.id.to_string()).await;
    println!("\n{}", browser.document().await);

    Ok(())
}
