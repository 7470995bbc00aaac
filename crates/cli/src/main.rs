mod cli;
mod render;

use crate::cli::{Cli, Output};
use clap::Parser;
use config::Config;
use scanner::{Check, SyscallCheck};
use std::time::Duration;
use tracing::{debug, trace};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // NOTE: The verbosity flag takes precedence over the environment
    // variable for log control. For example, `TRAPSCAN_LOG=warn trapscan
    // -vvv` will still log at the trace level. The environment variable
    // can only set the log level per crate, not override the verbosity
    // flag.
    let env_filter = EnvFilter::builder()
        .with_env_var("TRAPSCAN_LOG")
        .from_env()?
        .add_directive(cli.verbosity.log_level_filter().as_str().parse()?);

    let layer = tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .init();

    // load config
    let mut config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => {
            let mut candidates = glob::glob("/etc/trapscan/config.d/*.toml")?
                .filter_map(Result::ok)
                .collect::<Vec<_>>();
            candidates.insert(0, "/etc/trapscan/config.toml".into());
            trace!(?candidates, "config file candidates");
            Config::load_multiple(candidates)?
        }
    };
    if let Some(millis) = cli.timeout {
        config.probe.timeout = Duration::from_millis(millis);
    }
    debug!(?config, ?cli);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let check = SyscallCheck::new(&config);
    let table = runtime.block_on(check.run())?;

    // Probe workers that timed out are still parked on blocking-pool
    // threads; joining them would gate exit on every stuck syscall
    // returning. Drop the runtime without waiting instead.
    runtime.shutdown_background();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        Output::Table => render::table(&mut out, &table)?,
        Output::Json => render::json(&mut out, &table)?,
    }

    Ok(())
}
