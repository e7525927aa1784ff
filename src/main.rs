use anyhow::{Context, Result};
use pico_args::Arguments;
use powerprompt::config::{self, CONFIG_ENV};
use powerprompt::utils::init_logging;
use powerprompt::{Engine, Flags, SystemEnvironment};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    error_code: i32,
    terminal_width: Option<usize>,
    shell: String,
    plain: bool,
    print_config: bool,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            plain: args.contains("--plain"),
            print_config: args.contains("--print-config"),
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")
                .context("invalid --config")?
                .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from)),
            error_code: args
                .opt_value_from_str("--error")
                .context("invalid --error")?
                .unwrap_or(0),
            terminal_width: args
                .opt_value_from_str("--terminal-width")
                .context("invalid --terminal-width")?
                .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.trim().parse().ok())),
            shell: args
                .opt_value_from_str("--shell")
                .context("invalid --shell")?
                .or_else(shell_from_env)
                .unwrap_or_default(),
        };

        let rest = args.finish();
        if !rest.is_empty() {
            warn!(target: "cli", ?rest, "ignoring unknown arguments");
        }

        Ok(parsed)
    }
}

fn shell_from_env() -> Option<String> {
    let shell = env::var("SHELL").ok()?;
    PathBuf::from(shell)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    let config = config::load_config(args.config.clone()).await?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let flags = Flags {
        error_code: args.error_code,
        terminal_width: args.terminal_width,
        shell: args.shell,
        plain: args.plain || !should_use_colors(),
    };
    let env = Arc::new(SystemEnvironment::new(flags)?);
    let engine = Engine::new(config, env).with_truecolor(supports_rgb_colors());

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", engine.render_prompt())?;
    stdout.flush()?;

    Ok(())
}

fn should_use_colors() -> bool {
    // Prompts are usually written through a pipe by the shell hook, so a
    // missing TTY says nothing; only explicit opt-outs count.
    env::var_os("NO_COLOR").is_none() && env::var("TERM").map_or(true, |term| term != "dumb")
}

fn supports_rgb_colors() -> bool {
    env::var("COLORTERM").map_or(false, |ct| ct.contains("truecolor") || ct.contains("24bit"))
        || env::var("TERM").map_or(false, |term| {
            term.contains("direct") || term == "xterm-kitty" || term == "alacritty" || term == "wezterm"
        })
}

fn print_help() {
    println!("powerprompt - segment based shell prompt");
    println!();
    println!("USAGE:");
    println!("    powerprompt [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <FILE>          Config file path");
    println!("    --error <CODE>           Exit status of the last command [default: 0]");
    println!("    --terminal-width <N>     Terminal width used for right-aligned blocks");
    println!("    --shell <NAME>           Shell name exposed to templates");
    println!("    --plain                  Print without colors");
    println!("    --print-config           Print the effective configuration as JSON");
    println!("    -h, --help               Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    POWERPROMPT_CONFIG         Config path when --config is absent");
    println!("    POWERPROMPT_FINAL_SPACE    Override final_space (true/false)");
    println!("    POWERPROMPT_DEBUG          Debug logging on stderr (tracing filter)");
    println!("    NO_COLOR                   Disable colors");
    println!("    COLUMNS                    Terminal width when --terminal-width is absent");
}
