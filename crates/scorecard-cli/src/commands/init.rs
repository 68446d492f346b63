//! The `scorecard init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("scorecard.toml").exists() {
        println!("scorecard.toml already exists, skipping.");
    } else {
        std::fs::write("scorecard.toml", SAMPLE_CONFIG)?;
        println!("Created scorecard.toml");
    }

    println!("\nNext steps:");
    println!("  1. Point [source] at your scoring service, or at a JSON snapshot");
    println!("  2. Run: scorecard show");
    println!("  3. Run: scorecard show --email john --module safety --page 2");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# scorecard configuration

page_size = 10

[source]
type = "http"
endpoint = "https://coca-cola-backend.onrender.com/api/getUserScore"
field = "user"
timeout_secs = 30

# Read a local snapshot instead:
# [source]
# type = "file"
# path = "scores.json"
# field = "user"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_client::ScorecardConfig;

    #[test]
    fn sample_config_parses() {
        let config: ScorecardConfig = toml_from_sample();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.field(), "user");
    }

    fn toml_from_sample() -> ScorecardConfig {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scorecard.toml");
        std::fs::write(&path, SAMPLE_CONFIG).unwrap();
        scorecard_client::config::load_config_from(Some(&path)).unwrap()
    }
}
