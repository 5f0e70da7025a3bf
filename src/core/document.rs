use crate::core::inventory::{decode_list, encode_list, Inventory};
use crate::core::printer::Printable;
use crate::core::{Item, JsonCodec, Model, Result, Storage};
use serde_json::Value;
use std::io::{self, Write};

/// The file shapes this crate reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DocumentKind {
    /// One model object or an array of them
    Model,
    /// One item object or an array of them
    Item,
    /// `{"models": [...], "items": [...]}`
    Inventory,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Models(Vec<Model>),
    Items(Vec<Item>),
    Inventory(Inventory),
}

impl Document {
    pub fn decode(kind: DocumentKind, value: &Value) -> Self {
        match kind {
            DocumentKind::Model => Document::Models(decode_list(value)),
            DocumentKind::Item => Document::Items(decode_list(value)),
            DocumentKind::Inventory => {
                let mut inventory = Inventory::default();
                inventory.decode_value(value);
                Document::Inventory(inventory)
            }
        }
    }

    pub fn encode(&self) -> Value {
        match self {
            Document::Models(models) => encode_list(models),
            Document::Items(items) => encode_list(items),
            Document::Inventory(inventory) => inventory.to_json_value(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Models(_) => DocumentKind::Model,
            Document::Items(_) => DocumentKind::Item,
            Document::Inventory(_) => DocumentKind::Inventory,
        }
    }

    /// (models, items)
    pub fn counts(&self) -> (usize, usize) {
        match self {
            Document::Models(models) => (models.len(), 0),
            Document::Items(items) => (0, items.len()),
            Document::Inventory(inventory) => (inventory.models.len(), inventory.items.len()),
        }
    }

    /// 將文件轉成 Inventory，方便統一驗證
    pub fn into_inventory(self) -> Inventory {
        match self {
            Document::Models(models) => Inventory::new(models, Vec::new()),
            Document::Items(items) => Inventory::new(Vec::new(), items),
            Document::Inventory(inventory) => inventory,
        }
    }
}

impl Printable for Document {
    fn print_to<W: Write>(&self, out: &mut W, indentation: usize) -> io::Result<()> {
        match self {
            Document::Models(models) => models.print_to(out, indentation),
            Document::Items(items) => items.print_to(out, indentation),
            Document::Inventory(inventory) => inventory.print_to(out, indentation),
        }
    }
}

/// Reads and writes documents through a [`Storage`] backend.
pub struct DocumentStore<S: Storage> {
    storage: S,
}

impl<S: Storage> DocumentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Malformed JSON text is an error here; shape mismatches inside valid
    /// JSON are absorbed by the tolerant decode.
    pub async fn load(&self, path: &str, kind: DocumentKind) -> Result<Document> {
        tracing::debug!("Reading {:?} document from {}", kind, path);
        let data = self.storage.read_file(path).await?;
        let value: Value = serde_json::from_slice(&data)?;

        let document = Document::decode(kind, &value);
        let (models, items) = document.counts();
        tracing::debug!("Decoded {} models and {} items from {}", models, items, path);

        Ok(document)
    }

    pub async fn save(&self, path: &str, document: &Document, pretty: bool) -> Result<()> {
        let value = document.encode();
        let mut data = if pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        data.push(b'\n');

        self.storage.write_file(path, &data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), path);
        Ok(())
    }
}
