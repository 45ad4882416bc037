use anyhow::Result;
use sciopero::cli::{self, CliOptions};
use sciopero::config::Config;
use sciopero::context::StandardContext;
use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opts = CliOptions::parse(env::args().skip(1))?;

    if opts.help {
        cli::print_help("sciopero");
        return Ok(());
    }

    let ctx = StandardContext::new(opts.root.clone());
    let mut config = Config::load_or_default(&ctx)?;
    opts.apply(&mut config);

    sciopero::logging::init(&config.logfile)?;

    log::info!("starting");

    match sciopero::controller::run(&ctx, &config, opts.input.as_deref()).await {
        Ok(_) => {
            log::info!("finished");
            Ok(())
        }
        Err(e) => {
            log::error!("{:#}", e);
            Err(e)
        }
    }
}
