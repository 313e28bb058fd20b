use std::io::Write;

use collections::HashTable;
use collections::hashmap::TableInfo;
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::{DriverConfig, Scenario};
use crate::words::words;
use crate::DriverError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingReport {
    pub first: Option<String>,
    pub updated: Option<String>,
    pub size_after_update: usize,
    pub removed: bool,
    pub after_remove: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurnReport {
    /// Words that were new to the table
    pub inserted: usize,
    /// Words that were already present and got overwritten
    pub updated: usize,
    pub found: usize,
    pub removed: usize,
    pub info: TableInfo,
}

/// Insert, update, look up and remove a single key, dumping the table in between
pub fn greeting<W: Write>(table: &mut HashTable, out: &mut W) -> Result<GreetingReport, DriverError> {
    table.try_insert("Hello", "World")?;
    write!(out, "{}", table.dump())?;
    let first = table.get("Hello").map(str::to_string);

    table.try_insert("Hello", "No value")?;
    write!(out, "{}", table.dump())?;
    let updated = table.get("Hello").map(str::to_string);
    let size_after_update = table.len();
    writeln!(out, "res1: {}", updated.as_deref().unwrap_or("not found"))?;

    let removed = table.remove("Hello");
    write!(out, "{}", table.dump())?;
    let after_remove = table.get("Hello").map(str::to_string);
    writeln!(out, "res2: {}", after_remove.as_deref().unwrap_or("not found"))?;

    Ok(GreetingReport {
        first,
        updated,
        size_after_update,
        removed,
        after_remove,
    })
}

/// Inserts `count` random words, then looks up and removes
/// `count` freshly generated ones
pub fn churn<R: Rng, W: Write>(
    table: &mut HashTable,
    rng: &mut R,
    config: &DriverConfig,
    out: &mut W,
) -> Result<ChurnReport, DriverError> {
    let (min, max) = (config.min_len, config.max_len);
    let mut report = ChurnReport {
        inserted: 0,
        updated: 0,
        found: 0,
        removed: 0,
        info: table.info(),
    };

    for word in words(rng, min, max).take(config.count) {
        match table.try_insert(word.clone(), word)? {
            None => report.inserted += 1,
            Some(_) => report.updated += 1,
        }
    }
    debug!(target: "churn", "inserted {} words, {}", report.inserted, table.info());

    report.found = words(rng, min, max)
        .take(config.count)
        .filter(|w| table.contains_key(w))
        .count();

    for word in words(rng, min, max).take(config.count) {
        if table.remove(&word) {
            report.removed += 1;
        }
    }
    debug!(target: "churn", "found {}, removed {}", report.found, report.removed);

    report.info = table.info();
    if config.dump {
        write!(out, "{}", table.dump())?;
    }
    writeln!(out, "Done")?;
    writeln!(out, "{}", report.info)?;

    Ok(report)
}

/// Runs the scenarios selected by `config`, each on a fresh table
pub fn run<W: Write>(config: &DriverConfig, out: &mut W) -> Result<(), DriverError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if matches!(config.scenario, Scenario::Greeting | Scenario::All) {
        info!(target: "scenario", "greeting");
        let mut table = HashTable::new();
        greeting(&mut table, out)?;
        table.destroy();
    }

    if matches!(config.scenario, Scenario::Churn | Scenario::All) {
        info!(
            target: "scenario",
            "churn: {} words of {}..={} letters",
            config.count, config.min_len, config.max_len
        );
        let mut table = HashTable::new();
        let report = churn(&mut table, &mut rng, config, out)?;
        info!(target: "scenario", "{:?}", report);
        table.destroy();
    }

    Ok(())
}
