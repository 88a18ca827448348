//! The `intervue export` command.

use std::path::PathBuf;

use anyhow::Result;

use intervue_core::report::SessionReport;
use intervue_export::json::write_json_report;
use intervue_export::layout::PageLayout;
use intervue_export::text::write_text_report;

pub fn execute(session: PathBuf, output: PathBuf, format: String) -> Result<()> {
    let report = SessionReport::load_json(&session)?;
    let layout = PageLayout::default();

    std::fs::create_dir_all(&output)?;
    let stem = session
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".to_string());

    let formats: Vec<&str> = if format == "all" {
        vec!["text", "json"]
    } else {
        format.split(',').map(str::trim).collect()
    };

    for fmt in &formats {
        match *fmt {
            "text" => {
                let path = output.join(format!("{stem}.txt"));
                write_text_report(&report, &layout, &path)?;
                println!("Text report: {}", path.display());
            }
            "json" => {
                let path = output.join(format!("{stem}.paged.json"));
                write_json_report(&report, &layout, &path)?;
                println!("JSON report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    println!(
        "Exported session {} ({} questions, overall {:.2})",
        report.id,
        report.blocks.len(),
        report.overall_score
    );

    Ok(())
}
