use clap::Parser;
use ratechain_exchange::CurrencyPair;

/// Pairs looked up when none are given on the command line.
const DEFAULT_PAIRS: &[(&str, &str)] = &[
    ("EUR", "PLN"),
    ("EUR", "GBP"),
    ("USD", "USD"),
    ("USD", "USH"),
    ("AAA", "USD"),
    ("USD", "AAA"),
    ("AAA", "ZZZ"),
];

#[derive(Clone, Debug, Parser)]
#[command(name = "ratechain", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Args {
    /// Currency pairs to convert, e.g. `EUR/PLN`, `eur-usd` or `GBPUSD`
    #[arg(value_name = "PAIR")]
    pub pairs: Vec<CurrencyPair>,

    /// Use the built-in rate table only, without any network access
    #[arg(long)]
    pub offline: bool,

    /// Print which resolvers were tried for every pair
    #[arg(long)]
    pub trace: bool,
}

impl Args {
    /// Pairs to resolve, falling back to the built-in demo list.
    pub fn pairs(&self) -> Vec<CurrencyPair> {
        if self.pairs.is_empty() {
            DEFAULT_PAIRS
                .iter()
                .map(|(from, to)| CurrencyPair::new(*from, *to))
                .collect()
        } else {
            self.pairs.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ratechain"]).unwrap();

        assert!(!args.offline);
        assert!(!args.trace);
        assert_eq!(args.pairs().len(), DEFAULT_PAIRS.len());
        assert_eq!(args.pairs()[0], CurrencyPair::new("EUR", "PLN"));
    }

    #[test]
    fn test_explicit_pairs_and_flags() {
        let args =
            Args::try_parse_from(["ratechain", "--offline", "--trace", "eur-usd", "GBPPLN"])
                .unwrap();

        assert!(args.offline);
        assert!(args.trace);
        assert_eq!(
            args.pairs(),
            vec![CurrencyPair::new("EUR", "USD"), CurrencyPair::new("GBP", "PLN")]
        );
    }

    #[test]
    fn test_invalid_pair_is_rejected() {
        assert!(Args::try_parse_from(["ratechain", "EURO/USD"]).is_err());
    }

    #[test]
    fn test_help_has_description() {
        use clap::CommandFactory;

        let command = Args::command();
        let about = command.get_about().map(|a| a.to_string()).unwrap_or_default();
        assert!(about.contains("conversion ratios"), "about was {:?}", about);
    }
}
