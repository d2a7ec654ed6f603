use std::sync::Arc;
use std::time::Duration;

use cinemood::{
    models::{Mood, Preference},
    services::{
        enrichment::EnrichmentController,
        providers::{gemini::GeminiSummarizer, omdb::OmdbProvider},
        recommendation::{MoodSelection, RecommendationClient},
        results::{mood_display, MoodDisplay, ResultsView},
    },
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("enrich") => enrich(&config, args.collect()).await,
        Some("recommend") => recommend(&config, args.collect()).await,
        _ => anyhow::bail!(
            "usage: cinemood enrich <title> [year]\n       cinemood recommend <congruence|incongruence> <mood 1-12>..."
        ),
    }
}

/// Runs one enrichment pass and prints the assembled draft as JSON.
async fn enrich(config: &Config, args: Vec<String>) -> anyhow::Result<()> {
    let title = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("usage: cinemood enrich <title> [year]"))?;
    let year = args.get(1).cloned().unwrap_or_default();

    let metadata = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));
    let summarizer = Arc::new(GeminiSummarizer::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
    ));

    let controller = EnrichmentController::new(metadata, summarizer);
    controller
        .search(title, &year)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let draft = controller.draft().await;
    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}

/// Requests recommendations for the given preference and mood numbers and
/// prints the revealed, display-ready result.
async fn recommend(config: &Config, args: Vec<String>) -> anyhow::Result<()> {
    let preference = match args.first().map(String::as_str) {
        Some("congruence") => Preference::Congruence,
        Some("incongruence") => Preference::Incongruence,
        _ => anyhow::bail!("first argument must be congruence or incongruence"),
    };

    let mut selection = MoodSelection::new();
    for raw in &args[1..] {
        let index: usize = raw
            .parse()
            .map_err(|_| anyhow::anyhow!("mood must be a number between 1 and 12"))?;
        let mood = index
            .checked_sub(1)
            .and_then(|i| Mood::ALL.get(i))
            .copied()
            .ok_or_else(|| anyhow::anyhow!("mood must be a number between 1 and 12"))?;
        selection.toggle(mood);
    }

    let client = RecommendationClient::new(
        reqwest::Client::new(),
        config.backend_url.clone(),
        Duration::from_millis(config.submit_delay_ms),
    );

    let result = client
        .request(&selection, Some(preference), "")
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let view = ResultsView::new(Duration::from_millis(config.reveal_delay_ms));
    view.set_result(result).await;
    let processed = view
        .reveal()
        .await
        .ok_or_else(|| anyhow::anyhow!("result was superseded before reveal"))?;

    println!("{}", processed.message);
    for movie in &processed.movies {
        println!("\n{} ({})  match {:.2}", movie.title, movie.year, movie.match_score);
        match mood_display(movie) {
            MoodDisplay::Scored(scores) => {
                for score in scores {
                    println!("  {}  {:.2}", score.mood, score.score);
                }
            }
            MoodDisplay::Labels(labels) => {
                for label in labels {
                    println!("  {}", label);
                }
            }
        }
    }
    Ok(())
}
