use serde::{Deserialize, Serialize};

/// Uniform read surface over one detection result, whatever its origin.
///
/// A cache-backed record and a freshly parsed record both implement
/// this trait, so callers cannot tell the two apart.
pub trait RecordView {
    /// Bot name, or `None` for ordinary traffic.
    fn bot(&self) -> Option<&str>;
    /// Device manufacturer, empty when unknown.
    fn brand(&self) -> &str;
    fn client(&self) -> ClientInfo;
    /// Integer device-class code, `0` when unknown.
    fn device(&self) -> u32;
    fn model(&self) -> &str;
    fn os(&self) -> OsInfo;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub short_name: String,
    pub version: String,
    pub engine: String,
    pub engine_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OsInfo {
    pub name: String,
    pub short_name: String,
    pub version: String,
    pub platform: String,
}

/// Fully populated result returned by a parser. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParsedRecord {
    pub bot: Option<String>,
    pub brand: String,
    pub client: ClientInfo,
    pub device: u32,
    pub model: String,
    pub os: OsInfo,
}

impl RecordView for ParsedRecord {
    fn bot(&self) -> Option<&str> {
        self.bot.as_deref()
    }

    fn brand(&self) -> &str {
        &self.brand
    }

    fn client(&self) -> ClientInfo {
        self.client.clone()
    }

    fn device(&self) -> u32 {
        self.device
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn os(&self) -> OsInfo {
        self.os.clone()
    }
}

/// Raw on-disk shape of a cache entry. Producers may write partial
/// entries, so every field is optional; readers apply defaults at
/// access time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoredRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<StoredClient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<StoredOs>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoredClient {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoredOs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl From<ParsedRecord> for StoredRecord {
    fn from(record: ParsedRecord) -> Self {
        StoredRecord {
            bot: record.bot,
            brand: Some(record.brand),
            client: Some(StoredClient {
                kind: Some(record.client.kind),
                name: Some(record.client.name),
                short_name: Some(record.client.short_name),
                version: Some(record.client.version),
                engine: Some(record.client.engine),
                engine_version: Some(record.client.engine_version),
            }),
            device: Some(record.device),
            model: Some(record.model),
            os: Some(StoredOs {
                name: Some(record.os.name),
                short_name: Some(record.os.short_name),
                version: Some(record.os.version),
                platform: Some(record.os.platform),
            }),
        }
    }
}
