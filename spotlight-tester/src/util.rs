use chrono::Utc;
use std::hash::Hasher;
use twox_hash::XxHash64;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse a comma-separated seed list. Non-numeric tokens are hashed so that
/// named seeds (`release-candidate`) stay reproducible.
pub fn parse_seeds(tokens: &[String]) -> Vec<u64> {
    tokens
        .iter()
        .map(|token| token.parse::<u64>().unwrap_or_else(|_| seed_hash(token)))
        .collect()
}

fn seed_hash(text: &str) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(text.as_bytes());
    hasher.finish()
}

pub fn report_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn seeds_accept_numbers_and_names() {
        let seeds = parse_seeds(&split_csv("1337,nightly,nightly"));
        assert_eq!(seeds[0], 1337);
        assert_eq!(seeds[1], seeds[2]);
        assert_ne!(seeds[1], 1337);
    }

    #[test]
    fn named_seeds_use_xxhash64() {
        let seeds = parse_seeds(&split_csv("nightly,release-candidate"));
        assert_eq!(seeds[0], XxHash64::oneshot(0, b"nightly"));
        assert_eq!(seeds[1], XxHash64::oneshot(0, b"release-candidate"));
        assert_ne!(seeds[0], seeds[1]);
    }

    #[test]
    fn timestamp_is_utc() {
        assert!(report_timestamp().ends_with('Z'));
    }
}
