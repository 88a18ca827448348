//! The `intervue run` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use intervue_core::engine::InterviewEngine;
use intervue_core::model::Feedback;
use intervue_core::parser::parse_answer_script;
use intervue_core::report::SessionReport;
use intervue_export::json::write_json_report;
use intervue_export::layout::PageLayout;
use intervue_export::text::write_text_report;
use intervue_services::config::load_config_from;
use intervue_services::create_service;

pub async fn execute(
    document: PathBuf,
    role: Option<String>,
    service_name: Option<String>,
    answers: Option<PathBuf>,
    output: PathBuf,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Validate inputs before anything mutates
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
    let file_name = document
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    let script = match &answers {
        Some(path) => Some(parse_answer_script(path)?),
        None => None,
    };

    // Load config and create the backend
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
    let role = role.unwrap_or_else(|| config.default_role.clone());

    let mut engine = InterviewEngine::new(service);

    // Extract skills
    let skills = engine.upload_document(&file_name, &bytes).await?.to_vec();
    if skills.is_empty() {
        println!("No skills found in {}", document.display());
    } else {
        println!("Extracted skills: {}", skills.join(", "));
    }

    // Generate the question sequence
    let count = engine.generate_questions(Some(&role)).await?;
    println!("Generated {count} questions for role: {role}\n");

    if let Some(script) = &script {
        script.match_questions(engine.session().questions())?;
        run_scripted(&mut engine, script).await?;
    } else {
        run_interactive(&mut engine).await?;
    }

    // Walk any remaining questions so the session reaches Finished
    while !engine.is_finished() && engine.current().is_some() {
        engine.next();
    }

    print_summary(&engine);

    // Save outputs
    let report = engine.build_report();
    std::fs::create_dir_all(&output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    let layout = PageLayout::default();

    let session_path = output.join(format!("session-{timestamp}.json"));
    report.save_json(&session_path)?;
    println!("Session saved to: {}", session_path.display());

    write_exports(&report, &layout, &output, &format, &timestamp.to_string())?;

    Ok(())
}

async fn run_scripted(
    engine: &mut InterviewEngine,
    script: &intervue_core::parser::AnswerScript,
) -> Result<()> {
    for entry in &script.answers {
        let question = engine
            .current()
            .ok_or_else(|| anyhow::anyhow!("script has more answers than questions"))?
            .to_string();
        let position = engine.session().position().unwrap_or(0);

        println!("Q{position}: {question}");
        engine.record_answer(&entry.text)?;
        let feedback = engine.evaluate_current().await?.clone();
        print_feedback(&feedback);
        engine.next();
    }
    Ok(())
}

async fn run_interactive(engine: &mut InterviewEngine) -> Result<()> {
    let stdin = std::io::stdin();
    let total = engine.session().question_count();

    while let Some(question) = engine.current().map(str::to_string) {
        let position = engine.session().position().unwrap_or(0);
        println!("Question {position} of {total}");
        println!("{question}");
        print!("> ");
        std::io::stdout().flush()?;

        let mut answer = String::new();
        let read = stdin.lock().read_line(&mut answer)?;
        if read == 0 {
            // Stdin closed: leave the rest unanswered.
            println!();
            break;
        }
        let answer = answer.trim_end_matches(['\n', '\r']);

        engine.record_answer(answer)?;
        let feedback = engine.evaluate_current().await?.clone();
        print_feedback(&feedback);
        engine.next();
    }
    Ok(())
}

fn print_feedback(feedback: &Feedback) {
    println!(
        "  sentiment {} ({:.2}) | coverage {:.2} | score {:.2}",
        feedback.sentiment_label(),
        feedback.sentiment,
        feedback.keyword_coverage,
        feedback.score
    );
    for tip in &feedback.tips {
        println!("  - {tip}");
    }
    println!();
}

fn print_summary(engine: &InterviewEngine) {
    use comfy_table::{Cell, Table};

    let session = engine.session();
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Score", "Coverage", "Sentiment"]);

    for (i, question) in session.questions().iter().enumerate() {
        let row = match session.feedback().get(question) {
            Some(f) => vec![
                Cell::new(i + 1),
                Cell::new(question),
                Cell::new(format!("{:.2}", f.score)),
                Cell::new(format!("{:.2}", f.keyword_coverage)),
                Cell::new(f.sentiment_label()),
            ],
            None => vec![
                Cell::new(i + 1),
                Cell::new(question),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
            ],
        };
        table.add_row(row);
    }

    println!("{table}\n");
    println!("Overall Score: {:.2}", engine.overall_score());
}

fn write_exports(
    report: &SessionReport,
    layout: &PageLayout,
    output: &std::path::Path,
    format: &str,
    timestamp: &str,
) -> Result<()> {
    let formats: Vec<&str> = if format == "all" {
        vec!["text", "json"]
    } else {
        format.split(',').map(str::trim).collect()
    };

    for fmt in &formats {
        match *fmt {
            "text" => {
                let path = output.join(format!("report-{timestamp}.txt"));
                write_text_report(report, layout, &path)?;
                println!("Text report: {}", path.display());
            }
            "json" => {
                let path = output.join(format!("report-{timestamp}.paged.json"));
                write_json_report(report, layout, &path)?;
                println!("JSON report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}
