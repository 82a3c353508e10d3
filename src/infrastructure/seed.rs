use crate::domain::subscriber::Subscriber;
use crate::error::{Result, UssdError};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const DEMO_SUBSCRIBERS: &str = include_str!("../../data/subscribers.json");

/// The subscriber set bundled with the binary.
pub fn demo_subscribers() -> Result<Vec<Subscriber>> {
    parse_subscribers(DEMO_SUBSCRIBERS.as_bytes())
}

/// Reads a JSON array of subscriber records from `path`.
pub fn load_subscribers(path: &Path) -> Result<Vec<Subscriber>> {
    let file = File::open(path)?;
    parse_subscribers(BufReader::new(file))
}

/// Parses a JSON array of subscriber records, rejecting duplicate MSISDNs.
pub fn parse_subscribers<R: Read>(source: R) -> Result<Vec<Subscriber>> {
    let subscribers: Vec<Subscriber> = serde_json::from_reader(source)?;
    let mut seen = HashSet::new();
    for sub in &subscribers {
        if !seen.insert(sub.msisdn.as_str()) {
            return Err(UssdError::ConfigError(format!(
                "duplicate subscriber '{}' in seed data",
                sub.msisdn
            )));
        }
    }
    Ok(subscribers)
}
