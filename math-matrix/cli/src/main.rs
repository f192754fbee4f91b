use anyhow::Result;
use math_matrix_cli::{run, setup_logger, Config, Opts};
use structopt::StructOpt;

fn main() {
    let opts = Opts::from_args();
    if let Err(err) = start(opts) {
        // no-op when the configured logger is already installed
        setup_logger("warn");
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn start(opts: Opts) -> Result<()> {
    let mut config = Config::load_or_default(opts.config.as_deref())?;
    setup_logger(&config.log_filter);
    if opts.bare {
        config.show_kind = false;
    }
    let hint = opts.hint.or(config.hint);
    tracing::debug!(?hint, command = ?opts.command, "running");
    println!("{}", run(&opts.command, hint, &config)?);
    Ok(())
}
