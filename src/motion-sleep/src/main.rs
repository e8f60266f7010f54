#[macro_use]
extern crate log;

use std::path::PathBuf;

use anyhow::anyhow;
use chrono::NaiveDateTime;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use motion_sleep::{JsonFileSource, MotionSleep, MotionSleepError};
use motion_sleep_algos::helpers::format_hm::FormatHM;
use motion_sleep_types::SleepWindow;

#[derive(Parser)]
pub struct MotionSleepCli {
    /// JSON array of motion records
    #[arg(env = "MOTION_RECORDS", long)]
    pub records: Option<PathBuf>,
    #[clap(subcommand)]
    pub subcommand: MotionSleepCommand,
}

#[derive(Subcommand)]
pub enum MotionSleepCommand {
    ///
    /// Print motion records
    ///
    Activities {
        #[command(flatten)]
        range: RangeArgs,
    },
    ///
    /// Infer sleep sessions from motion records
    ///
    SleepSessions {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long, env = "SLEEP_WINDOW", default_value = "22:00-09:00")]
        window: SleepWindow,
    },
    ///
    /// Print the most recent sleep session
    ///
    RecentSession {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long, env = "SLEEP_WINDOW", default_value = "22:00-09:00")]
        window: SleepWindow,
    },
    ///
    /// Run a method channel request and print the JSON result
    ///
    Call {
        method: String,
        #[arg(long, default_value = "{}")]
        arguments: String,
    },
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

#[derive(Args)]
pub struct RangeArgs {
    /// e.g. 2025-01-01T18:00:00, UTC
    #[arg(long)]
    pub start: Option<NaiveDateTime>,
    #[arg(long)]
    pub end: Option<NaiveDateTime>,
}

impl RangeArgs {
    fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (
            self.start.unwrap_or(NaiveDateTime::MIN),
            self.end.unwrap_or(NaiveDateTime::MAX),
        )
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = MotionSleepCli::parse();
    let records = cli.records;

    match cli.subcommand {
        MotionSleepCommand::Activities { range } => {
            let motion = open(records)?;
            let (start, end) = range.bounds();
            for record in motion.fetch_activities(start, end)? {
                println!(
                    "{} stationary={} walking={} running={} automotive={} cycling={} unknown={} confidence={:?}",
                    record.start,
                    record.stationary,
                    record.walking,
                    record.running,
                    record.automotive,
                    record.cycling,
                    record.unknown,
                    record.confidence
                );
            }
            Ok(())
        }
        MotionSleepCommand::SleepSessions { range, window } => {
            let motion = open(records)?;
            let (start, end) = range.bounds();
            let sessions = motion.fetch_sleep_sessions(start, end, &window)?;
            for session in &sessions {
                println!("{} ({})", session, session.duration().format_hm());
            }
            Ok(())
        }
        MotionSleepCommand::RecentSession { range, window } => {
            let motion = open(records)?;
            let (start, end) = range.bounds();
            match motion.fetch_recent_sleep_session(start, end, &window) {
                Ok(session) => println!("{} ({})", session, session.duration().format_hm()),
                Err(MotionSleepError::NoSleepSession) => println!("No sleep session found"),
                Err(error) => return Err(error.into()),
            }
            Ok(())
        }
        MotionSleepCommand::Call { method, arguments } => {
            let motion = open(records)?;
            let arguments = serde_json::from_str(&arguments)?;
            let result = motion.handle(&method, arguments)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        MotionSleepCommand::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut MotionSleepCli::command(),
                "motion-sleep",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn open(records: Option<PathBuf>) -> anyhow::Result<MotionSleep<JsonFileSource>> {
    let records =
        records.ok_or(anyhow!("No records file, pass --records or set MOTION_RECORDS"))?;
    debug!("Reading motion records from {}", records.display());

    let motion = MotionSleep::new(JsonFileSource::new(records));
    if !motion.is_activity_available() {
        warn!("Records file is missing or not a regular file");
    }
    Ok(motion)
}
