use alloy::rpc::types::Log;
use mm_core::{IndexerConfig, IndexerError};
use mm_processor::EventProcessor;
use mm_store::ProjectionStore;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

/// Counters for one replay run
#[derive(Debug, Default)]
struct ReplayReport {
    lines: u64,
    skipped: u64,
    dropped: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("mm_processor=info".parse()?)
                .add_directive("mm_store=info".parse()?),
        )
        .init();

    info!("Market maker indexer starting...");

    // Load configuration (validates env vars and loads deployment file)
    let config = match IndexerConfig::load() {
        Ok(config) => {
            info!(
                chain_id = config.chain_id,
                market_maker = ?config.market_maker,
                start_block = config.start_block,
                event_log = %config.event_log.display(),
                "Configuration loaded from deployment"
            );
            config
        }
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    mm_processor::metrics::init();

    let store = Arc::new(ProjectionStore::new());
    let processor = EventProcessor::new(store.clone(), config.clone());

    let report = match replay(&processor, &config.event_log).await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Replay failed");
            std::process::exit(1);
        }
    };

    let state = store.state.read().await;
    info!(
        lines = report.lines,
        skipped = report.skipped,
        dropped = report.dropped,
        last_block = state.last_seen_block(),
        events = state.stats.total_events_processed,
        orders = store.orders.count(),
        unclaimed = store.orders.unclaimed_count(),
        beneficiaries = store.beneficiaries.count(),
        anomalies = store.orders.anomaly_count(),
        "Replay complete"
    );

    Ok(())
}

/// Replay an NDJSON file of `eth_getLogs`-shaped records through the processor.
///
/// Lines are fed strictly in file order. A line that is not valid JSON for a
/// log record aborts the replay; a log that decodes to a malformed contract
/// event is dropped with a warning and the replay continues.
async fn replay(processor: &EventProcessor, path: &Path) -> Result<ReplayReport, IndexerError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let start_block = processor.config().start_block;

    let mut report = ReplayReport::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        report.lines += 1;

        let log: Log = serde_json::from_str(&line)
            .map_err(|e| IndexerError::EventLogParse(line_no + 1, e.to_string()))?;

        if !processor.is_relevant_log(&log) || log.block_number.unwrap_or_default() < start_block {
            report.skipped += 1;
            continue;
        }

        if let Err(e) = processor.process_log(log).await {
            warn!(line = line_no + 1, error = %e, "Dropped undecodable event log");
            report.dropped += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256, U256};
    use alloy_sol_types::SolEvent;
    use mm_core::events::OpenBuyOrder;
    use mm_core::types::OrderSide;
    use std::io::Write as _;
    use std::path::PathBuf;

    const MM: Address = Address::repeat_byte(0x11);

    fn config(start_block: u64, event_log: PathBuf) -> IndexerConfig {
        IndexerConfig {
            chain_id: 31337,
            market_maker: MM,
            start_block,
            event_log,
        }
    }

    fn log_line<E: SolEvent>(event: &E, address: Address, block: u64) -> String {
        let log = Log {
            inner: alloy_primitives::Log {
                address,
                data: event.encode_log_data(),
            },
            block_hash: Some(B256::repeat_byte(0xbb)),
            block_number: Some(block),
            block_timestamp: None,
            transaction_hash: Some(B256::repeat_byte(0xcc)),
            transaction_index: Some(0),
            log_index: Some(0),
            removed: false,
        };
        serde_json::to_string(&log).unwrap()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("mm-indexer-test-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn open_buy(batch: u64) -> OpenBuyOrder {
        OpenBuyOrder {
            buyer: Address::repeat_byte(0x01),
            batchId: U256::from(batch),
            collateral: Address::repeat_byte(0xc0),
            fee: U256::from(1),
            value: U256::from(10),
        }
    }

    #[tokio::test]
    async fn replay_skips_foreign_and_early_logs() {
        let lines = [
            log_line(&open_buy(1), MM, 3),
            String::new(),
            log_line(&open_buy(2), Address::repeat_byte(0x99), 10),
            log_line(&open_buy(3), MM, 10),
        ]
        .join("\n");
        let path = temp_file("skip.ndjson", &lines);

        let store = Arc::new(ProjectionStore::new());
        let processor = EventProcessor::new(store.clone(), config(5, path.clone()));

        let report = replay(&processor, &path).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(report.lines, 3);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.dropped, 0);
        assert_eq!(store.orders.count(), 1);
        assert!(store
            .orders
            .get_by_key(OrderSide::Buy, Address::repeat_byte(0x01), U256::from(3))
            .is_some());
    }

    #[tokio::test]
    async fn replay_rejects_invalid_json_lines() {
        let path = temp_file("bad.ndjson", "not json\n");
        let store = Arc::new(ProjectionStore::new());
        let processor = EventProcessor::new(store, config(0, path.clone()));

        let err = replay(&processor, &path).await.unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, IndexerError::EventLogParse(1, _)));
    }

    #[tokio::test]
    async fn replay_fails_on_missing_file() {
        let store = Arc::new(ProjectionStore::new());
        let path = PathBuf::from("does-not-exist.ndjson");
        let processor = EventProcessor::new(store, config(0, path.clone()));

        let err = replay(&processor, &path).await.unwrap_err();
        assert!(matches!(err, IndexerError::Io(_)));
    }
}
