//! Renders signatures as standalone HTML documents in a directory.
//!
//! Each signature gets its own document, and `index.html` embeds every
//! document in a sandboxed `<iframe>` so signature markup cannot leak into
//! the page that lists them.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use ms_core::ports::SignaturePresenterPort;
use ms_core::{FetchStatus, Signature};

const INDEX_FILE: &str = "index.html";
const STATUS_FILE: &str = "status.txt";
const SIGNATURE_FILE_PREFIX: &str = "signature-";

pub struct HtmlDirectoryPresenter {
    output_dir: PathBuf,
}

impl HtmlDirectoryPresenter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn signature_file_name(index: usize) -> String {
        format!("{SIGNATURE_FILE_PREFIX}{index}.html")
    }

    fn signature_document(signature: &Signature) -> String {
        format!(
            "<!DOCTYPE html><html><head><title>Signature</title></head><body>{}</body></html>",
            signature.html
        )
    }

    fn index_document(signatures: &[Signature], message: &str) -> String {
        let mut body = String::new();
        for (index, signature) in signatures.iter().enumerate() {
            body.push_str(&format!(
                "<label class=\"ms-Label\">{}</label>\n<iframe class=\"signature-frame\" id=\"signatureFrame{index}\" sandbox src=\"{}\"></iframe>\n",
                escape_html(&signature.name),
                Self::signature_file_name(index),
            ));
        }
        format!(
            "<!DOCTYPE html><html><head><title>Signatures</title></head><body>\n<div id=\"signaturesList\">\n{body}</div>\n<p id=\"resultMessage\">{}</p>\n</body></html>",
            escape_html(message)
        )
    }

    /// Removes every file this presenter wrote before.
    async fn remove_rendered(&self) -> anyhow::Result<()> {
        let mut entries = match fs::read_dir(&self.output_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let owned = file_name == INDEX_FILE
                || file_name == STATUS_FILE
                || (file_name.starts_with(SIGNATURE_FILE_PREFIX) && file_name.ends_with(".html"));
            if owned {
                fs::remove_file(entry.path()).await?;
            }
        }
        Ok(())
    }

    async fn write_status(&self, message: &str) -> anyhow::Result<()> {
        fs::write(self.output_dir.join(STATUS_FILE), message).await?;
        Ok(())
    }
}

#[async_trait]
impl SignaturePresenterPort for HtmlDirectoryPresenter {
    async fn show_signatures(
        &self,
        signatures: &[Signature],
        status: FetchStatus,
    ) -> anyhow::Result<()> {
        fs::create_dir_all(&self.output_dir).await?;
        self.remove_rendered().await?;

        for (index, signature) in signatures.iter().enumerate() {
            let path = self.output_dir.join(Self::signature_file_name(index));
            fs::write(&path, Self::signature_document(signature)).await?;
        }

        let message = status.message();
        fs::write(
            self.output_dir.join(INDEX_FILE),
            Self::index_document(signatures, message),
        )
        .await?;
        self.write_status(message).await?;

        info!(
            count = signatures.len(),
            status = %status,
            output_dir = %self.output_dir.display(),
            "{}",
            message
        );
        Ok(())
    }

    async fn clear(&self, message: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.output_dir).await?;
        self.remove_rendered().await?;
        fs::write(
            self.output_dir.join(INDEX_FILE),
            Self::index_document(&[], message),
        )
        .await?;
        self.write_status(message).await?;

        debug!(output_dir = %self.output_dir.display(), "Rendered signatures cleared");
        info!("{}", message);
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
