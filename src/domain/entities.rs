use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// An entry in one screen's persisted collection.
pub trait ListEntry: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> &str;

    /// Consumes a draft and stamps the store-assigned id on it.
    fn with_id(self, id: String) -> Self;
}

/// One expense row on the budget screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
}

impl Expense {
    /// Draft without an id; the store assigns one on insert.
    pub fn draft(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            amount,
        }
    }
}

impl ListEntry for Expense {
    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

/// One row of the packing checklist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: String,
    pub name: String,
    /// Defaults to unpacked for lists persisted before the flag existed.
    #[serde(default)]
    pub packed: bool,
}

impl PackingItem {
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            packed: false,
        }
    }
}

impl ListEntry for PackingItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

/// One stop on the multi-destination itinerary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
}

impl Destination {
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }
}

impl ListEntry for Destination {
    fn id(&self) -> &str {
        &self.id
    }

    fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

/// Normalized weather facts for one city.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    /// City name as reported by the provider.
    pub city: String,
    pub temperature_c: f64,
    pub description: String,
    pub humidity_percent: f64,
}
