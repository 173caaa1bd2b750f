use std::io::Write;

use ratechain_exchange::{http_chain, offline_chain, CurrencyPair, RateChain};
use ratechain_resolution::Unhandled;
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::Args;
use crate::config::Config;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_chain(config: &Config, args: &Args) -> RateChain {
    if args.offline {
        tracing::info!("Offline mode: using the static rate table only");
        offline_chain()
    } else {
        http_chain(&config.exchange)
    }
}

/// One line of user-facing output for a resolved (or unresolved) pair.
pub fn format_outcome(
    pair: &CurrencyPair,
    outcome: &Result<Decimal, Unhandled<CurrencyPair>>,
) -> String {
    match outcome {
        Ok(rate) => format!("{}: {}", pair, rate),
        Err(_) => format!("Cannot get the {} conversion ratio.", pair),
    }
}

pub fn run(config: &Config, args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let chain = build_chain(config, args);
    tracing::debug!("Resolution chain: {:?}", chain);

    for pair in args.pairs() {
        let (outcome, trace) = chain.resolve_traced(&pair);
        writeln!(out, "{}", format_outcome(&pair, &outcome))?;
        if args.trace {
            writeln!(out, "  {}", trace.summary())?;
        }
    }

    Ok(())
}
