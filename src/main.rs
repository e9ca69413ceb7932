use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use aisleep::reports::FileReportStore;
use aisleep::scoring::ReportForm;
use aisleep::ReportError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug)]
struct SubmitArgs {
    /// Bedtime hour (1-12)
    #[arg(long)]
    bedtime_hour: String,
    /// Bedtime minute (0-59)
    #[arg(long)]
    bedtime_minute: String,
    /// AM or PM
    #[arg(long)]
    bedtime_ampm: String,
    /// Wake-up hour (1-12)
    #[arg(long)]
    wakeup_hour: String,
    /// Wake-up minute (0-59)
    #[arg(long)]
    wakeup_minute: String,
    /// AM or PM
    #[arg(long)]
    wakeup_ampm: String,
    /// Times woken during the night, or "10+ times"
    #[arg(long)]
    wakeups: String,
    /// "No", "10+ oz", or any other answer together with --alcohol-oz
    #[arg(long, default_value = "No")]
    alcohol: String,
    /// Ounces of alcohol before bed
    #[arg(long)]
    alcohol_oz: Option<String>,
}

impl From<SubmitArgs> for ReportForm {
    fn from(args: SubmitArgs) -> Self {
        ReportForm {
            bedtime_hour: args.bedtime_hour,
            bedtime_minute: args.bedtime_minute,
            bedtime_ampm: args.bedtime_ampm,
            wakeup_hour: args.wakeup_hour,
            wakeup_minute: args.wakeup_minute,
            wakeup_ampm: args.wakeup_ampm,
            wakeup_count: args.wakeups,
            alcohol: args.alcohol,
            alcohol_count: args.alcohol_oz,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List your sleep reports (default if no subcommand)
    List,
    /// Log a night of sleep and show its score and tips
    Submit(SubmitArgs),
    /// Show a past report by its id
    Show {
        /// Report id, as shown in list
        id: u64,
    },
    /// Show average score and goal progress
    Stats,
    /// Set your target sleep score (0-100)
    Goal {
        /// Target score
        score: u32,
    },
}

#[derive(Parser, Debug)]
#[command(name = "aisleep")]
#[command(about = "Sleep report logging and scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/aisleep/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Account to act as (defaults to `user` from config, then $USER)
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn exit_code(e: &ReportError) -> i32 {
    match e {
        ReportError::InvalidInput { .. } | ReportError::NotFound(_) => EXIT_INPUT,
        ReportError::Storage(_) => EXIT_STORAGE,
    }
}

fn main() {
    let cli = Cli::parse();
    aisleep::logging::init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::List);

    let config = match aisleep::config::load_config(cli.config.map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = aisleep::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let Some(user) = cli
        .user
        .or_else(|| config.user.clone())
        .or_else(|| std::env::var("USER").ok())
        .filter(|u| !u.trim().is_empty())
    else {
        eprintln!("No user given. Pass --user or set `user` in the config file.");
        std::process::exit(EXIT_CONFIG);
    };

    let data_path = match aisleep::config::resolve_data_path(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let mut store = match FileReportStore::open(&data_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open report data: {:#}", e);
            std::process::exit(EXIT_STORAGE);
        }
    };
    tracing::debug!(user = %user, data = %store.path().display(), "ready");

    let use_colors = aisleep::output::should_use_colors();

    let result = match command {
        Commands::List => {
            let reports = aisleep::handlers::list_reports(&store, &user);
            println!("{}", aisleep::output::format_report_list(&reports, use_colors));
            Ok(())
        }
        Commands::Submit(args) => {
            let form = ReportForm::from(args);
            aisleep::handlers::submit_report(&mut store, &user, &form, &scoring, chrono::Utc::now())
                .map(|submission| {
                    if cli.verbose {
                        eprintln!(
                            "{}",
                            aisleep::output::format_deductions(&submission.report.deductions)
                        );
                    }
                    let view = aisleep::handlers::ReportView {
                        tips: submission.stored.tip_segments(),
                        report: submission.stored,
                    };
                    println!("{}", aisleep::output::format_report_detail(&view, use_colors));
                })
        }
        Commands::Show { id } => aisleep::handlers::redisplay_report(&store, &user, id)
            .map(|view| println!("{}", aisleep::output::format_report_detail(&view, use_colors))),
        Commands::Stats => {
            let stats = aisleep::handlers::user_stats(&store, &user);
            println!("{}", aisleep::output::format_stats(&stats, use_colors));
            Ok(())
        }
        Commands::Goal { score } => aisleep::handlers::set_goal(&mut store, &user, score)
            .map(|()| println!("Sleep goal set to {}.", score)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }

    std::process::exit(EXIT_SUCCESS);
}
