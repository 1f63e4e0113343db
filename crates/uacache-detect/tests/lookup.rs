use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uacache_core::{fingerprint, CacheStore, ClientInfo, FileStore, OsInfo, ParsedRecord, RecordView, StoredRecord};
use uacache_detect::{Detection, DetectorFactory, ParseError, UserAgentParser};

const FIREFOX_UA: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10; rv:33.0) Gecko/20100101 Firefox/33.0";

struct CountingParser {
    calls: Arc<AtomicUsize>,
    record: ParsedRecord,
}

impl UserAgentParser for CountingParser {
    fn parse(&self, _user_agent: &str) -> Result<ParsedRecord, ParseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.record.clone())
    }
}

fn firefox_parse() -> ParsedRecord {
    ParsedRecord {
        bot: None,
        brand: "AP".to_string(),
        client: ClientInfo {
            kind: "browser".to_string(),
            name: "Firefox".to_string(),
            short_name: "FF".to_string(),
            version: "33.0".to_string(),
            engine: "Gecko".to_string(),
            engine_version: String::new(),
        },
        device: 0,
        model: String::new(),
        os: OsInfo {
            name: "Mac".to_string(),
            short_name: "MAC".to_string(),
            version: "10.10".to_string(),
            platform: String::new(),
        },
    }
}

fn factory(store: FileStore, record: ParsedRecord) -> (DetectorFactory, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let parser = CountingParser {
        calls: calls.clone(),
        record,
    };
    (
        DetectorFactory::new(Box::new(store), Box::new(parser)),
        calls,
    )
}

#[test]
fn warmed_entry_short_circuits_the_parser() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().to_path_buf());
    let entry: StoredRecord = serde_json::from_value(serde_json::json!({
        "bot": null,
        "brand": "Cooper",
        "client": { "type": "browser", "name": "Microsoft Edge" },
        "device": 1,
        "model": "iPhone",
        "os": { "name": "Linux" }
    }))?;
    store.put(&fingerprint("UA-X"), &entry)?;
    let (factory, calls) = factory(store, firefox_parse());

    let detection = factory.lookup("UA-X")?;
    assert!(matches!(detection, Detection::Cached(_)));
    assert_eq!(detection.bot(), None);
    assert_eq!(detection.brand(), "Cooper");
    assert_eq!(detection.client().name, "Microsoft Edge");
    assert_eq!(detection.client().kind, "browser");
    assert_eq!(detection.device(), 1);
    assert_eq!(detection.model(), "iPhone");
    assert_eq!(detection.os().name, "Linux");
    assert_eq!(detection.os().platform, "");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn cold_cache_returns_the_live_parse() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().to_path_buf());
    let (factory, calls) = factory(store, firefox_parse());

    let detection = factory.lookup(FIREFOX_UA)?;
    assert!(matches!(detection, Detection::Parsed(_)));
    assert_eq!(detection.bot(), None);
    assert_eq!(detection.brand(), "AP");
    assert_eq!(detection.client(), firefox_parse().client);
    assert_eq!(detection.device(), 0);
    assert_eq!(detection.model(), "");
    assert_eq!(detection.os(), firefox_parse().os);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn corrupt_entry_falls_back_to_the_parser() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let key = fingerprint("UA-Z");
    // the layout FileStore documents: root/<first two key chars>/<key>.json
    let shard = dir.path().join(&key[..2]);
    fs::create_dir_all(&shard)?;
    fs::write(shard.join(format!("{key}.json")), b"{ truncated")?;

    let store = FileStore::new(dir.path().to_path_buf());
    let (factory, calls) = factory(store, firefox_parse());

    let detection = factory.lookup("UA-Z")?;
    assert!(matches!(detection, Detection::Parsed(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn producer_written_parse_results_are_served_back() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().to_path_buf());
    store.put(
        &fingerprint(FIREFOX_UA),
        &StoredRecord::from(firefox_parse()),
    )?;
    let (factory, calls) = factory(store, ParsedRecord::default());

    let detection = factory.lookup(FIREFOX_UA)?;
    assert!(matches!(detection, Detection::Cached(_)));
    assert_eq!(detection.client().name, "Firefox");
    assert_eq!(detection.os().short_name, "MAC");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}
