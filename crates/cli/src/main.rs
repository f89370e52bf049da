use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;

use catalog::{
    forecast_for, local_tips, AccommodationType, Catalog, Interest, Money, TravelRequest,
    TravelStyle, WeatherDay,
};
use pipeline::FallbackPolicy;
use planner::{enrich_recommendation, PlannerConfig, Recommendation, TravelPlanner};
use sources::SerperClient;

/// Trip Planner - flights, hotels and activities for a budget
#[derive(Parser)]
#[command(name = "trip-planner")]
#[command(about = "Travel recommendations filtered by budget and preferences", long_about = None)]
struct Cli {
    #[command(flatten)]
    services: ServiceArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Credentials and endpoints for the external services
#[derive(Args)]
struct ServiceArgs {
    /// API key for the narrative model
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true, global = true)]
    google_api_key: Option<String>,

    /// API key for the search service
    #[arg(long, env = "SERPER_API_KEY", hide_env_values = true, global = true)]
    serper_api_key: Option<String>,

    /// Model used for itineraries
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash", global = true)]
    model: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,
}

impl ServiceArgs {
    fn config(&self, fallback: FallbackPolicy) -> PlannerConfig {
        PlannerConfig {
            google_api_key: self.google_api_key.clone(),
            serper_api_key: self.serper_api_key.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout),
            fallback,
            ..Default::default()
        }
    }

    fn search_client(&self) -> Result<SerperClient> {
        self.config(FallbackPolicy::default())
            .search_client()?
            .ok_or_else(|| anyhow!("SERPER_API_KEY is not set"))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a full recommendation for a trip
    Plan {
        /// Where to go
        #[arg(long, default_value = "Paris")]
        destination: String,

        /// Free-form date range, e.g. "May 5-9, 2025"
        #[arg(long)]
        dates: String,

        /// Total trip budget
        #[arg(long)]
        budget: Money,

        #[arg(long, default_value_t = TravelStyle::Balanced)]
        style: TravelStyle,

        #[arg(long, default_value_t = AccommodationType::Hotel)]
        accommodation: AccommodationType,

        #[arg(long, default_value = "2")]
        travelers: u32,

        /// Repeat for several interests
        #[arg(long = "interest")]
        interests: Vec<Interest>,

        /// Never widen hotel or activity matches to the whole catalog
        #[arg(long)]
        strict: bool,

        /// Merge searched attractions into the activities
        #[arg(long)]
        enrich: bool,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the forecast for a date range
    Weather {
        #[arg(long)]
        dates: String,
    },

    /// Show local tips for a destination
    Tips {
        #[arg(long, default_value = "Paris")]
        destination: String,
    },

    /// Show recent headlines about a destination
    News {
        #[arg(long, default_value = "Paris")]
        destination: String,
    },

    /// Search destination photos
    Images {
        #[arg(long, default_value = "Paris")]
        destination: String,

        #[arg(long, default_value = "8")]
        count: usize,

        /// e.g. "Landmarks", "Food"; "All" disables the category
        #[arg(long)]
        category: Option<String>,

        /// "Latest", "Recent" or "Classic"
        #[arg(long)]
        time_filter: Option<String>,
    },

    /// Run benchmark to test filter performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            destination,
            dates,
            budget,
            style,
            accommodation,
            travelers,
            interests,
            strict,
            enrich,
            json,
        } => {
            let request = TravelRequest::new(destination, dates, budget)
                .with_travel_style(style)
                .with_accommodation(accommodation)
                .with_travelers(travelers)
                .with_interests(interests);
            let fallback = if strict {
                FallbackPolicy::KeepEmpty
            } else {
                FallbackPolicy::WidenToCatalog
            };
            handle_plan(&cli.services.config(fallback), request, enrich, json).await?
        }
        Commands::Weather { dates } => print_forecast(&forecast_for(&dates)),
        Commands::Tips { destination } => handle_tips(&destination),
        Commands::News { destination } => handle_news(&cli.services, &destination).await?,
        Commands::Images {
            destination,
            count,
            category,
            time_filter,
        } => {
            handle_images(
                &cli.services,
                &destination,
                count,
                category.as_deref(),
                time_filter.as_deref(),
            )
            .await?
        }
        Commands::Benchmark { requests } => handle_benchmark(requests).await?,
    }

    Ok(())
}

/// Handle the 'plan' command
async fn handle_plan(
    config: &PlannerConfig,
    request: TravelRequest,
    enrich: bool,
    json: bool,
) -> Result<()> {
    if request.destination.trim().is_empty() {
        return Err(anyhow!("Destination must not be empty"));
    }
    let planner = TravelPlanner::from_config(config, &request.destination)?;

    let start = Instant::now();
    let mut recommendation = planner.recommend(&request).await?;
    if enrich {
        let source = config.attraction_source()?;
        let added =
            enrich_recommendation(&mut recommendation, &request.destination, source.as_ref())
                .await;
        debug!("Enrichment added {} activities", added);
    }

    if json {
        let output = serde_json::to_string_pretty(&recommendation)
            .context("Failed to serialize recommendation")?;
        println!("{}", output);
        return Ok(());
    }

    println!(
        "{} Planned {} in {:?}\n",
        "✓".green(),
        request.destination.bold(),
        start.elapsed()
    );
    print_recommendation(&recommendation);
    println!();
    print_forecast(&forecast_for(&request.dates));
    println!();
    handle_tips(&request.destination);
    Ok(())
}

/// Handle the 'tips' command
fn handle_tips(destination: &str) {
    let tips = local_tips(destination);
    if tips.is_empty() {
        println!("No local tips for {} yet.", destination);
        return;
    }
    println!("{}", format!("Local tips for {}:", destination).bold().blue());
    for (section, entries) in tips.sections() {
        println!("{}", section.bold());
        for entry in entries {
            println!("  {} {}", "•".green(), entry);
        }
    }
}

/// Handle the 'news' command
async fn handle_news(services: &ServiceArgs, destination: &str) -> Result<()> {
    let client = services.search_client()?;
    let news = client
        .news(destination)
        .await
        .with_context(|| format!("Failed to fetch news for {}", destination))?;

    println!("{}", format!("Latest news for {}:", destination).bold().blue());
    if news.is_empty() {
        println!("No recent news found.");
    }
    for (i, item) in news.iter().enumerate() {
        println!("{}. {}", (i + 1).to_string().green(), item.title.bold());
        println!("   {} | {}", item.source, item.date);
        println!("   {}", item.link.dimmed());
    }
    Ok(())
}

/// Handle the 'images' command
async fn handle_images(
    services: &ServiceArgs,
    destination: &str,
    count: usize,
    category: Option<&str>,
    time_filter: Option<&str>,
) -> Result<()> {
    let client = services.search_client()?;
    let images = client
        .images(destination, count, category, time_filter)
        .await
        .with_context(|| format!("Failed to fetch images for {}", destination))?;

    println!("{}", format!("Images of {}:", destination).bold().blue());
    for image in &images {
        println!(
            "{} {} ({}, {})",
            "•".green(),
            image.title.bold(),
            image.photographer,
            image.date
        );
        println!("  {}", image.url.dimmed());
        for fact in &image.facts {
            println!("  - {}", fact);
        }
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(requests: usize) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("Benchmark needs at least one request"));
    }
    let planner = TravelPlanner::offline(Catalog::paris());

    let batch = random_requests(requests);

    let wall = Instant::now();
    let mut handles = vec![];
    for request in batch {
        let planner = planner.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            planner.recommend(&request).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let total_time = wall.elapsed();

    let summed: Duration = timings.iter().sum();
    let avg_latency = summed / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p).round() as usize];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Random requests over the whole preference space
fn random_requests(count: usize) -> Vec<TravelRequest> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let style = TravelStyle::ALL[rng.random_range(0..TravelStyle::ALL.len())];
            let accommodation =
                AccommodationType::ALL[rng.random_range(0..AccommodationType::ALL.len())];
            let interests: Vec<Interest> = Interest::ALL
                .iter()
                .copied()
                .filter(|_| rng.random_bool(0.3))
                .collect();
            TravelRequest::new("Paris", "May 5-9, 2025", rng.random_range(300.0..10_000.0))
                .with_travel_style(style)
                .with_accommodation(accommodation)
                .with_travelers(rng.random_range(1..=6))
                .with_interests(interests)
        })
        .collect()
}

/// Helper function to format and print a recommendation
fn print_recommendation(rec: &Recommendation) {
    println!("{}", "Flights:".bold().blue());
    if rec.flights.is_empty() {
        println!("  {}", "No flights within budget".yellow());
    }
    for flight in &rec.flights {
        let class = flight.class.map(|c| format!(" [{}]", c)).unwrap_or_default();
        println!(
            "  {} {} {} -> {} ${:.2}{}",
            "•".green(),
            flight.airline,
            flight.departure,
            flight.arrival,
            flight.price,
            class
        );
    }

    println!("{}", "Hotels:".bold().blue());
    if rec.hotels.is_empty() {
        println!("  {}", "No hotels within budget".yellow());
    }
    for hotel in &rec.hotels {
        println!(
            "  {} {} ({}, {:.1}/10) ${:.2}/night",
            "•".green(),
            hotel.name,
            hotel.kind,
            hotel.rating,
            hotel.price
        );
    }

    println!("{}", "Activities:".bold().blue());
    if rec.activities.is_empty() {
        println!("  {}", "No activities within budget".yellow());
    }
    for activity in &rec.activities {
        let rating = activity
            .rating
            .map(|r| format!(" ★{:.1}", r))
            .unwrap_or_default();
        println!(
            "  {} {} ({}, {}) ${:.2}{}",
            "•".green(),
            activity.name,
            activity.category,
            activity.duration,
            activity.price,
            rating
        );
    }

    println!(
        "\n{} ${:.2}",
        "Estimated total:".bold(),
        rec.total_cost()
    );
    println!("\n{}", "Itinerary:".bold().blue());
    println!("{}", rec.narrative);
}

/// Helper function to print a forecast table
fn print_forecast(days: &[WeatherDay]) {
    println!("{}", "Weather forecast:".bold().blue());
    for day in days {
        println!(
            "  {} {:<8} {:<14} {:>10}  rain {}%",
            day.icon,
            day.date,
            day.condition,
            day.temperature_range(),
            day.precipitation_pct
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plan_refuses_blank_destination() {
        let request = TravelRequest::new("   ", "May 5-9, 2025", 5000.0);
        let err = handle_plan(&PlannerConfig::default(), request, false, true)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Destination must not be empty");
    }
}
