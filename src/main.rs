use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod activity;
mod aggregate;
mod analyze;
mod classify;
mod error;
mod logging;
mod renderer;
mod stats;
mod stats_builder;
mod timefmt;
mod window;

use analyze::{AnalyzeConfig, DEFAULT_WINDOW_DAYS};
use activity::DEFAULT_ACTIVE_DAY_THRESHOLD;

// Help text constants
const HELP_MAIN: &str = "\
grouppulse — group chat activity recap (last 7 days)

Commands:
    <chat.txt>           Analyze a chat export and write reports.
    --render [formats]   Report formats (md,json). Default renders both.

Usage:
    grouppulse <chat.txt> [--render formats] [--output <dir>] [--days <n>] [--threshold <n>]
    grouppulse --render md --json-stats <path> [--output <dir>]

More help:
    grouppulse --help render";

const HELP_RENDER: &str = "\
Render reports (md,json)

Usage:
    grouppulse <chat.txt> --render [formats] [--output <dir>]
    grouppulse --render [formats] --json-stats <path> [--output <dir>]

Options:
    --render [formats]   Comma-separated formats (md,json). Empty renders all.
    --json-stats <path>  Render from a previously written summary JSON instead
                         of re-parsing a chat export.
    --output <dir>       Output directory (default: current dir). Filenames are
                         auto-generated from the window's last day.

Examples:
  grouppulse chat.txt --render md --output reports
  grouppulse --render md,json --json-stats reports/pulse-7d-2024-06-02.json";

#[derive(Parser)]
#[command(name = "grouppulse", disable_help_flag = true)]
#[command(about = "Group chat activity recap tool", long_about = None)]
struct Cli {
    /// Path to a chat export (.txt)
    chat: Option<PathBuf>,

    /// Report formats (comma-separated: md,json). Renders all if no formats specified.
    #[arg(long)]
    render: Option<String>,

    /// Path to a previously written summary JSON (skips parsing)
    #[arg(long)]
    json_stats: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Trailing window length in days
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    days: u32,

    /// Messaging days needed to count a user as highly active
    #[arg(long, default_value_t = DEFAULT_ACTIVE_DAY_THRESHOLD)]
    threshold: u32,

    /// Directory for a plain-text log file (stderr only when omitted)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Show help (global or per topic). Example: grouppulse --help render
    #[arg(long, value_name = "TOPIC", num_args = 0..=1, default_missing_value = "")]
    help: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(help_topic) = cli.help {
        let topic = help_topic.trim();
        if topic.is_empty() {
            println!("{}", HELP_MAIN);
        } else if topic.eq_ignore_ascii_case("render") {
            println!("{}", HELP_RENDER);
        } else {
            println!("Unknown help topic: {}", topic);
        }
        return Ok(());
    }

    logging::init(cli.log_dir.as_deref())?;

    // Load or compute the summary
    let summary = if let Some(json_path) = cli.json_stats {
        stats::Summary::load_from_file(&json_path)?
    } else if let Some(chat_path) = cli.chat {
        let config = AnalyzeConfig {
            window_days: cli.days,
            active_day_threshold: cli.threshold,
        };
        tracing::info!(path = %chat_path.display(), "analyzing chat export");
        analyze::analyze_file(&chat_path, &config)?
    } else {
        eprintln!("No input specified. Pass a chat export or --json-stats.");
        eprintln!("Example: grouppulse chat.txt --render md");
        return Ok(());
    };

    // Determine output directory
    let output_dir = cli.output.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    // Parse formats
    let render_arg = cli.render.unwrap_or_default();
    let formats: Vec<&str> = if render_arg.is_empty() {
        // Empty string means render all
        vec!["md", "json"]
    } else {
        render_arg.split(',').map(|s| s.trim()).collect()
    };

    // Render each format
    for format in formats {
        match format {
            "md" => {
                let markdown = renderer::md::render(&summary)?;
                let output_path = output_dir.join(default_filename(&summary, "md"));
                std::fs::write(&output_path, markdown)?;
                eprintln!("Markdown report written to: {}", output_path.display());
            }
            "json" => {
                let json = serde_json::to_string_pretty(&summary)?;
                let output_path = output_dir.join(default_filename(&summary, "json"));
                std::fs::write(&output_path, json)?;
                eprintln!("Summary JSON written to: {}", output_path.display());
            }
            _ => {
                eprintln!("Warning: Unknown format '{}', skipping", format);
            }
        }
    }

    Ok(())
}

fn default_filename(summary: &stats::Summary, ext: &str) -> String {
    format!(
        "pulse-{}d-{}.{}",
        summary.window_days, summary.coverage.to, ext
    )
}
