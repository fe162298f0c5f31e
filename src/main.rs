use clap::Parser;

use nts_cli::cli::{self, parse_exit_code, Args, Command, CommandError, ConfigAction, Context};
use nts_cli::config::{self, Config};
use nts_cli::format::{palette, Theme};

/// Initialize logging: warn by default, `-v` info, `-vv` debug; RUST_LOG wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args, theme: &mut Theme) -> Result<(), CommandError> {
    let config_path = args.config.clone().unwrap_or_else(config::default_path);
    let mut stdout = std::io::stdout().lock();

    // Init must work even when the config file is missing or broken.
    if matches!(
        args.command,
        Command::Config {
            action: ConfigAction::Init
        }
    ) {
        return cli::init_config(&config_path, &mut stdout);
    }

    let cfg = Config::load(args.config.as_deref())?;
    let ctx = Context::new(cfg, config_path, args.no_color)?;
    *theme = ctx.theme;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CommandError::Runtime)?;

    rt.block_on(cli::run(&ctx, args.command, &mut stdout))
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version land here too.
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };
    init_logging(args.verbose);

    let mut theme = Theme::resolve(args.no_color, true);
    if let Err(e) = run(args, &mut theme) {
        log::debug!("Command failed: {:?}", e);
        eprintln!("{} {}", theme.paint("Error:", palette::ERROR), e);
        std::process::exit(1);
    }
}
