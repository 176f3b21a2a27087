use std::io::{self, Write};
use std::process;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::LevelFilter;
use tsks::commands::*;
use tsks::{Config, Result};

#[derive(Parser)]
#[command(name = "tsks")]
#[command(about = "Day-based terminal task tracker", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(long)]
    debug: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Treat the first word as the name of a favorite
        #[arg(short = 'n', long = "favorite")]
        favorite: bool,
        /// Day: t (today), t+N, t-N or YYYY-MM-DD
        #[arg(short, long, default_value = "t")]
        day: String,
        /// Task content, or a favorite name with -n
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },
    /// Display tasks
    Ls {
        /// Day or range: t, t-1, YYYY-MM-DD, w (all days), t-7:t, 2019-01-01:w
        #[arg(short, long, default_value = "t")]
        day: String,
        /// Include finished tasks
        #[arg(short, long)]
        all: bool,
        /// Print the stored task list file
        #[arg(short = 't', long = "text")]
        text: bool,
    },
    /// Finish tasks
    Fin {
        /// Day: t (today), t+N, t-N or YYYY-MM-DD
        #[arg(short, long, default_value = "t")]
        day: String,
        /// Task numbers separated by commas, or w for all
        tasks: String,
    },
    /// Revive finished tasks
    Rev {
        /// Day: t (today), t+N, t-N or YYYY-MM-DD
        #[arg(short, long, default_value = "t")]
        day: String,
        /// Task numbers separated by commas, or w for all
        tasks: String,
    },
    /// List, show, add, change or delete favorites
    Fav {
        /// Delete the named favorite
        #[arg(short, long)]
        delete: bool,
        /// Favorite name
        name: Option<String>,
        /// New content for the favorite
        content: Vec<String>,
    },
    /// Delete all tasks up to a day, or within a range
    Fls {
        /// Day or range, as for ls
        day: String,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn run(command: Commands) -> Result<()> {
    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "tsks", &mut io::stdout());
        return Ok(());
    }

    let config = Config::from_env()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Add { favorite, day, content } => cmd_add(&config, &content, favorite, &day),
        Commands::Ls { day, all, text } => {
            if text {
                cmd_list_raw(&config, &mut out)
            } else {
                cmd_list(&config, &day, all, &mut out)
            }
        }
        Commands::Fin { day, tasks } => cmd_finish_or_revive(&config, &day, &tasks, true),
        Commands::Rev { day, tasks } => cmd_finish_or_revive(&config, &day, &tasks, false),
        Commands::Fav { delete, name, content } => {
            cmd_fav(&config, delete, name.as_deref(), &content, &mut out)
        }
        Commands::Fls { day } => cmd_flush(&config, &day).map(|_| ()),
        Commands::Completions { .. } => Ok(()),
    }?;
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };
    if let Err(e) = run(command) {
        println!("{}", e);
        process::exit(1);
    }
}
