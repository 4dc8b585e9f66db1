//! Retrieval of published pages

use std::time::Duration;

use docdeck::source::{self, PageType};

const USER_AGENT: &str = concat!("docdeck/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// Check if an input names a URL rather than a local file
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Validate a published document URL and download its body as text
pub fn fetch_document(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    match source::resolve(url)? {
        PageType::Document => {}
        PageType::Spreadsheet => {
            return Err(format!("{} is a spreadsheet; only documents can be outlined", url).into())
        }
    }

    let rt = tokio::runtime::Runtime::new()?;
    let bytes = rt.block_on(download(url))?;
    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);

    Ok(source::decode_body(&bytes))
}

async fn download(url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(format!("Request to {} failed with status {}", url, status).into());
    }

    Ok(response.bytes().await?.to_vec())
}
