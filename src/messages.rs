// src/messages.rs
//! Typed UI → host messages.
//!
//! Each message is serialized as `{ "pluginMessage": { "type": ..., ... } }`.
//! There is no correlation id: at most one request per `type` is in flight.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::Profile;
use crate::error::Result;
use crate::types::{BulkError, ErrorRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    /// Select every listed node in the host document.
    SelectMultipleLayers {
        #[serde(rename = "nodeArray")]
        node_array: Vec<String>,
    },
    /// Load full data for one node.
    FetchLayerData { id: String },
    /// Switch the active rule profile for the next evaluation.
    UpdateConfiguration { configuration: Profile },
}

impl PluginMessage {
    #[must_use]
    pub fn select_all(bulk: &BulkError) -> Self {
        Self::SelectMultipleLayers {
            node_array: bulk.nodes.clone(),
        }
    }

    #[must_use]
    pub fn select(error: &ErrorRecord) -> Self {
        Self::FetchLayerData {
            id: error.node_id.clone(),
        }
    }

    #[must_use]
    pub fn configure(profile: Profile) -> Self {
        Self::UpdateConfiguration {
            configuration: profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "pluginMessage")]
    pub plugin_message: PluginMessage,
}

impl Envelope {
    /// Decodes one envelope. Unknown configuration values are rejected.
    ///
    /// # Errors
    /// Returns error if the JSON is not a known message.
    pub fn decode(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns error if serialization fails.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<PluginMessage> for Envelope {
    fn from(plugin_message: PluginMessage) -> Self {
        Self { plugin_message }
    }
}

/// One-way channel to the host.
pub trait MessageChannel {
    /// # Errors
    /// Returns error if the message cannot be delivered.
    fn post(&mut self, message: &PluginMessage) -> Result<()>;
}

/// Writes one JSON envelope per line.
pub struct JsonLinesChannel<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesChannel<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageChannel for JsonLinesChannel<W> {
    fn post(&mut self, message: &PluginMessage) -> Result<()> {
        let line = Envelope::from(message.clone()).encode()?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}
