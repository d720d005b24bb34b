//! Record store administration CLI
//!
//! Works directly against the store file, without the web server.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::info;

use hospital_admin::alarms::{self, AlarmReport};
use hospital_admin::database::Database;
use hospital_admin::imaging;

#[derive(Parser)]
#[command(name = "records-admin")]
#[command(about = "Hospital admin record store tool")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the record store file
    #[arg(long, env = "DATABASE_PATH", default_value = "hospital_data.db")]
    database_path: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Table {
    Patients,
    Equipment,
    Referrals,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the record tables if they do not exist
    Init,

    /// Print every row of a table as JSON lines
    List {
        #[arg(value_enum)]
        table: Table,
    },

    /// Report equipment whose latest status is not Working
    Alarms,

    /// Copy the store file byte-for-byte
    Backup {
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Run the grayscale and edge filters on an image file
    ProcessImage {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let database = open_store(&cli.database_path).await?;
            let tables = database.table_names().await?;
            println!("Record store ready: {}", tables.join(", "));
        }
        Commands::List { table } => {
            let database = open_store(&cli.database_path).await?;
            let lines = match table {
                Table::Patients => to_json_lines(&database.list_patients().await?)?,
                Table::Equipment => to_json_lines(&database.list_equipment().await?)?,
                Table::Referrals => to_json_lines(&database.list_referrals().await?)?,
            };
            if lines.is_empty() {
                println!("No records available yet.");
            }
            for line in lines {
                println!("{}", line);
            }
        }
        Commands::Alarms => {
            let database = open_store(&cli.database_path).await?;
            match alarms::check_alarms(&database).await? {
                AlarmReport::AllClear => println!("All equipment is in working condition."),
                AlarmReport::Attention(alarms) => {
                    println!("Attention required: Equipment issues detected!");
                    for alarm in alarms {
                        println!(
                            "Equipment: {}, Status: {}, Timestamp: {}",
                            alarm.equipment_name.as_str(),
                            alarm.status.as_str(),
                            alarm.timestamp
                        );
                    }
                }
            }
        }
        Commands::Backup { out } => {
            let database = open_store(&cli.database_path).await?;
            let written = database.backup_to(&out).await?;
            info!("Backup written to {}", out.display());
            println!("Wrote {} bytes to {}", written, out.display());
        }
        Commands::ProcessImage { input, out_dir } => process_image(input, out_dir)?,
    }

    Ok(())
}

async fn open_store(path: &Path) -> Result<Database> {
    let database = Database::new(path).await?;
    database.run_migrations().await?;
    Ok(database)
}

fn to_json_lines<T: serde::Serialize>(rows: &[T]) -> Result<Vec<String>> {
    rows.iter()
        .map(|row| serde_json::to_string(row).map_err(|e| anyhow!("Failed to serialize row: {}", e)))
        .collect()
}

fn process_image(input: PathBuf, out_dir: PathBuf) -> Result<()> {
    let bytes = std::fs::read(&input)
        .map_err(|e| anyhow!("Failed to read {}: {}", input.display(), e))?;
    let processed = imaging::process_image(&bytes)?;
    std::fs::create_dir_all(&out_dir)?;

    let outputs = [
        ("original.png", DynamicImage::ImageRgb8(processed.color)),
        ("grayscale.png", DynamicImage::ImageLuma8(processed.grayscale)),
        ("edges.png", DynamicImage::ImageLuma8(processed.edges)),
    ];
    for (name, image) in outputs {
        let path = out_dir.join(name);
        std::fs::write(&path, imaging::encode_png(image)?)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
