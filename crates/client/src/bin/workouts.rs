use clap::{Parser, Subcommand};
use client::{Adjustment, Draft, Field, Tracker, WorkoutsClient};
use rust_decimal::Decimal;
use storage::dto::{
    coerce::{parse_count, parse_decimal},
    workout::UpdateWorkoutRequest,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "workouts")]
#[command(about = "Workout tracker terminal client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "WORKOUTS_URL", default_value = "http://127.0.0.1:3000")]
    server: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all workouts
    List,
    /// Add a workout
    Add {
        name: String,

        #[arg(long, default_value = "")]
        sets: String,

        #[arg(long, default_value = "")]
        reps: String,

        #[arg(long, default_value = "")]
        weight: String,
    },
    /// Step a counter up
    Inc {
        id: i64,
        field: Field,

        #[arg(long, default_value = "1")]
        by: Decimal,
    },
    /// Step a counter down, stopping at zero
    Dec {
        id: i64,
        field: Field,

        #[arg(long, default_value = "1")]
        by: Decimal,
    },
    /// Overwrite fields of a workout
    Set {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        sets: Option<String>,

        #[arg(long)]
        reps: Option<String>,

        #[arg(long)]
        weight: Option<String>,
    },
    /// Delete a workout
    Rm { id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("workouts={},client={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut tracker = Tracker::new(WorkoutsClient::new(cli.server));
    tracker.refresh().await?;

    match cli.command {
        Commands::List => {}
        Commands::Add {
            name,
            sets,
            reps,
            weight,
        } => {
            let created = tracker
                .add(Draft {
                    name,
                    sets,
                    reps,
                    weight,
                })
                .await?;
            tracing::info!("Added workout {}", created.id);
        }
        Commands::Inc { id, field, by } => {
            let adjustment = Adjustment {
                field,
                delta: by.abs(),
            };
            tracker.bump(id, adjustment).await?;
        }
        Commands::Dec { id, field, by } => {
            let adjustment = Adjustment {
                field,
                delta: -by.abs(),
            };
            tracker.bump(id, adjustment).await?;
        }
        Commands::Set {
            id,
            name,
            sets,
            reps,
            weight,
        } => {
            let request = UpdateWorkoutRequest {
                id: Some(id),
                name,
                sets: sets.as_deref().and_then(parse_count),
                reps: reps.as_deref().and_then(parse_count),
                weight: weight.as_deref().and_then(parse_decimal),
            };
            tracker.edit(request).await?;
        }
        Commands::Rm { id } => {
            tracker.remove(id).await?;
        }
    }

    print!("{}", tracker.board());

    Ok(())
}
