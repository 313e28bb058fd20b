use clap::{Parser, ValueEnum};

use crate::DriverError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    Greeting,
    Churn,
    All,
}

/// Exercises the double hashing table with fixed and random keys
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "driver", version, long_about = None)]
pub struct DriverConfig {
    /// Which exercise to run
    #[arg(short, long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Random words per churn phase
    #[arg(short, long, default_value_t = 30)]
    pub count: usize,

    /// Shortest random word
    #[arg(long, default_value_t = 10)]
    pub min_len: usize,

    /// Longest random word
    #[arg(long, default_value_t = 15)]
    pub max_len: usize,

    /// Seed for the word generator, random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every slot after the churn scenario
    #[arg(short, long)]
    pub dump: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::parse_from(["driver"])
    }
}

impl DriverConfig {
    /// Checks what clap cannot: `1 <= min_len <= max_len`
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.min_len == 0 || self.min_len > self.max_len {
            return Err(DriverError::InvalidWordLength {
                min: self.min_len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use clap::{CommandFactory, Parser, error::ErrorKind};

    use super::{DriverConfig, Scenario};
    use crate::DriverError;

    fn parse(args: &[&str]) -> Result<DriverConfig, clap::Error> {
        DriverConfig::try_parse_from(std::iter::once("driver").chain(args.iter().copied()))
    }

    #[test]
    fn command() {
        DriverConfig::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let c = parse(&[]).unwrap();
        assert_eq!(c, DriverConfig::default());
        assert_eq!(c.scenario, Scenario::All);
        assert_eq!((c.count, c.min_len, c.max_len), (30, 10, 15));
        assert_eq!(c.seed, None);
        assert!(!c.dump);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn all_flags() {
        let c = parse(&[
            "--scenario", "churn", "--count", "100", "--min-len", "3", "--max-len", "4", "--seed",
            "42", "--dump",
        ])
        .unwrap();

        assert_eq!(c.scenario, Scenario::Churn);
        assert_eq!(c.count, 100);
        assert_eq!((c.min_len, c.max_len), (3, 4));
        assert_eq!(c.seed, Some(42));
        assert!(c.dump);
        assert!(c.validate().is_ok());

        let c = parse(&["-s", "greeting", "-c", "5", "-d"]).unwrap();
        assert_eq!(c.scenario, Scenario::Greeting);
        assert_eq!(c.count, 5);
        assert!(c.dump);
    }

    #[test]
    fn parse_errors() {
        let e = parse(&["--nope"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnknownArgument);

        let e = parse(&["--count", "many"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ValueValidation);

        assert!(parse(&["--count"]).is_err());
        assert!(parse(&["--scenario", "everything"]).is_err());

        let e = parse(&["--help"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn word_length_range() {
        let c = parse(&["--min-len", "8", "--max-len", "2"]).unwrap();
        assert!(matches!(
            c.validate(),
            Err(DriverError::InvalidWordLength { min: 8, max: 2 })
        ));

        let c = parse(&["--min-len", "0"]).unwrap();
        assert!(matches!(
            c.validate(),
            Err(DriverError::InvalidWordLength { min: 0, .. })
        ));

        let c = parse(&["--min-len", "4", "--max-len", "4"]).unwrap();
        assert!(c.validate().is_ok());
    }
}
