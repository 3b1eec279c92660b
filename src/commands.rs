use std::path::PathBuf;

use clap::Parser;

use crate::error::GenerateError;

pub const INVALID_COUNT: &str = "Invalid 'count': expected positive integer";

#[derive(Parser, Debug)]
#[command(version, about = "Generate synthetic person records as a JSON array")]
pub struct Args {
    /// The number of person records to generate
    #[arg(long, env = "PEOPLE_COUNT", value_name = "N", value_parser = parse_count)]
    pub count: Option<usize>,

    /// The file to write, replaced if it already exists
    #[arg(long, env = "DATA_PEOPLE_PATH", value_name = "PATH")]
    pub output: PathBuf,

    /// Seed for reproducible output
    #[arg(long, env = "PEOPLE_SEED")]
    pub seed: Option<u64>,
}

impl Args {
    /// The requested record count. A missing count is rejected the same way
    /// as a malformed one.
    pub fn record_count(&self) -> Result<usize, GenerateError> {
        self.count
            .ok_or_else(|| GenerateError::InvalidArgument(INVALID_COUNT.to_string()))
    }
}

pub fn parse_count(value: &str) -> Result<usize, GenerateError> {
    value
        .trim()
        .parse()
        .map_err(|_| GenerateError::InvalidArgument(INVALID_COUNT.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_accepts_non_negative_integers() {
        assert_eq!(parse_count("0").unwrap(), 0);
        assert_eq!(parse_count("3").unwrap(), 3);
        assert_eq!(parse_count(" 10000 ").unwrap(), 10_000);
    }

    #[test]
    fn count_rejects_anything_else() {
        for value in ["abc", "", "-1", "2.5", "1e3"] {
            match parse_count(value) {
                Err(GenerateError::InvalidArgument(message)) => assert_eq!(message, INVALID_COUNT),
                other => panic!("{:?} parsed as {:?}", value, other),
            }
        }
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "peoplegen",
            "--count",
            "3",
            "--output",
            "out/people.json",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(args.record_count().unwrap(), 3);
        assert_eq!(args.output, PathBuf::from("out/people.json"));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn missing_count_is_an_invalid_argument() {
        let args = Args {
            count: None,
            output: PathBuf::from("people.json"),
            seed: None,
        };

        match args.record_count() {
            Err(GenerateError::InvalidArgument(message)) => assert_eq!(message, INVALID_COUNT),
            other => panic!("missing count gave {:?}", other),
        }
    }

    #[test]
    fn invalid_count_is_reported_by_the_parser() {
        let error = Args::try_parse_from(["peoplegen", "--count", "abc", "--output", "x.json"])
            .unwrap_err();
        assert!(error.to_string().contains(INVALID_COUNT));
    }
}
