use uacache_core::{ClientInfo, OsInfo, RecordView, StoredRecord};

/// Read-only view over a producer-written cache entry.
///
/// Producers may persist partial entries, so every accessor resolves a
/// missing field to its default instead of failing: strings to `""`,
/// the device code to `0`, the bot flag to absent.
#[derive(Debug, Clone)]
pub struct CachedRecord {
    raw: StoredRecord,
}

impl CachedRecord {
    pub fn new(raw: StoredRecord) -> Self {
        Self { raw }
    }
}

impl RecordView for CachedRecord {
    fn bot(&self) -> Option<&str> {
        self.raw.bot.as_deref()
    }

    fn brand(&self) -> &str {
        self.raw.brand.as_deref().unwrap_or("")
    }

    fn client(&self) -> ClientInfo {
        let raw = self.raw.client.clone().unwrap_or_default();
        ClientInfo {
            kind: raw.kind.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            short_name: raw.short_name.unwrap_or_default(),
            version: raw.version.unwrap_or_default(),
            engine: raw.engine.unwrap_or_default(),
            engine_version: raw.engine_version.unwrap_or_default(),
        }
    }

    fn device(&self) -> u32 {
        self.raw.device.unwrap_or(0)
    }

    fn model(&self) -> &str {
        self.raw.model.as_deref().unwrap_or("")
    }

    fn os(&self) -> OsInfo {
        let raw = self.raw.os.clone().unwrap_or_default();
        OsInfo {
            name: raw.name.unwrap_or_default(),
            short_name: raw.short_name.unwrap_or_default(),
            version: raw.version.unwrap_or_default(),
            platform: raw.platform.unwrap_or_default(),
        }
    }
}
