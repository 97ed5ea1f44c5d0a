use std::{io, process::ExitCode, sync::OnceLock};

use application::{Args, Config, Report};
use service::Service;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_target(false)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                            >= *meta.level()
                })),
        )
        .init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn start() -> Result<(), u8> {
    let Args { config, command } = Args::parse().map_err(|e| {
        _ = e.print();
        u8::try_from(e.exit_code()).unwrap_or(2)
    })?;

    let Config { service, log } = Config::new(config).map_err(|e| {
        let e = tracerr::new!(application::Error::from(e));
        log::error!("{}", Report(&e));
        e.as_ref().exit_code()
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(service.into());
    application::execute(&service, command, &mut io::stdout().lock()).map_err(
        |e| {
            log::error!("{}", Report(&e));
            e.as_ref().exit_code()
        },
    )
}
