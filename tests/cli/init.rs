use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

const CONFIG_FILE: &str = ".linguaguardrc.json";

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .linguaguardrc.json"));
    assert!(test.root().join(CONFIG_FILE).exists());

    let content = test.read_file(CONFIG_FILE)?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localesRoot"], "public/locales");
    assert_eq!(parsed["sourceLocale"], "en");
    assert_eq!(
        parsed["targetLocales"],
        serde_json::json!(["hi", "ar", "ja", "de"])
    );
    assert_eq!(parsed["failOnIssues"], false);
    assert_eq!(parsed["autoFix"], false);
    assert!(content.starts_with("{\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(CONFIG_FILE, "{}")?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".linguaguardrc.json already exists"));
    assert_eq!(test.read_file(CONFIG_FILE)?, "{}");

    Ok(())
}
