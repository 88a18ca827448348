//! The `intervue skills` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use intervue_core::traits::{ExtractRequest, InterviewService};
use intervue_services::config::load_config_from;
use intervue_services::create_service;

pub async fn execute(
    document: PathBuf,
    service_name: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        document.exists(),
        "document not found: {}",
        document.display()
    );
    let bytes = std::fs::read(&document)
        .with_context(|| format!("failed to read document: {}", document.display()))?;
    anyhow::ensure!(
        !bytes.is_empty(),
        "document is empty: {}",
        document.display()
    );

    let config = load_config_from(config_path.as_deref())?;
    let service_name = service_name.unwrap_or_else(|| config.default_service.clone());
    let Some(service_config) = config.services.get(&service_name) else {
        anyhow::bail!(
            "service '{}' not found in config. Available: {:?}",
            service_name,
            config.services.keys().collect::<Vec<_>>()
        );
    };
    let service = create_service(&service_name, service_config)?;

    let request = ExtractRequest {
        file_name: document
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string()),
        document: bytes,
    };
    let response = service.extract_skills(&request).await?;

    if response.skills.is_empty() {
        println!("No skills found.");
    } else {
        for skill in &response.skills {
            println!("{skill}");
        }
    }

    Ok(())
}
