//! The `intervue init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create intervue.toml
    if std::path::Path::new("intervue.toml").exists() {
        println!("intervue.toml already exists, skipping.");
    } else {
        std::fs::write("intervue.toml", SAMPLE_CONFIG)?;
        println!("Created intervue.toml");
    }

    // Create a sample document to run against
    if std::path::Path::new("sample-resume.txt").exists() {
        println!("sample-resume.txt already exists, skipping.");
    } else {
        std::fs::write("sample-resume.txt", SAMPLE_RESUME)?;
        println!("Created sample-resume.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit intervue.toml if you want the remote service");
    println!("  2. Run: intervue skills --document sample-resume.txt");
    println!("  3. Run: intervue run --document sample-resume.txt --role \"Software Engineer\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# intervue configuration

default_service = "local"
default_role = "Software Engineer"
output_dir = "./intervue-results"

[services.local]
type = "local"

[services.remote]
type = "remote"
base_url = "${INTERVUE_REMOTE_URL}"
"#;

const SAMPLE_RESUME: &str = r#"Jordan Avery
Backend engineer with five years of experience building Python services
and SQL analytics pipelines. Deployed containerized workloads with Docker
on AWS, maintained CI tooling with Git, and mentored two junior engineers.

Highlights:
- Rebuilt a reporting pipeline in Python, cutting runtime by 60%.
- Designed PostgreSQL schemas serving 2M daily queries.
- Led the migration of a legacy REST API to FastAPI.
"#;
