use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Options for the generation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Largest record count accepted in one batch.
    pub max_records: Option<u64>,
    /// Seed for the random source; entropy-seeded when absent.
    pub seed: Option<u64>,
}

/// Generated value for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    Text(String),
    Int(i64),
    Record(Record),
    Records(Vec<Record>),
}

impl GeneratedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            GeneratedValue::Record(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            GeneratedValue::Records(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

/// Ordered field-name to value mapping.
///
/// Keys keep their first insertion position; writing an existing name
/// replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, GeneratedValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: GeneratedValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Records produced by one batch request, keyed under `Report_Entry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    #[serde(rename = "Report_Entry")]
    pub report_entry: Vec<Record>,
}

impl BatchResult {
    pub fn records(&self) -> &[Record] {
        &self.report_entry
    }

    pub fn len(&self) -> usize {
        self.report_entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.report_entry.is_empty()
    }
}
