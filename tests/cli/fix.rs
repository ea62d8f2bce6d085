use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, spawn_translation_server};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "public/locales/en.json",
        r#"{"nav": {"home": "Home", "about": "About"}, "cta": "Buy now"}"#,
    )?;
    test.write_file("public/locales/de.json", r#"{"nav": {"home": "Startseite"}}"#)?;
    Ok(test)
}

#[test]
fn test_fix_dry_run_lists_keys() -> Result<()> {
    let test = project()?;
    let before = test.read_file("public/locales/de.json")?;

    let mut cmd = test.fix_command();
    cmd.args(["--target-locales", "de"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("public/locales/de.json\n      + nav.about\n      + cta\n"));
    assert!(output.stdout.contains("Would translate 2 key(s) into 1 locale(s)."));
    assert!(output.stdout.contains("Run with --apply to write these translations."));
    assert_eq!(test.read_file("public/locales/de.json")?, before);

    Ok(())
}

#[test]
fn test_fix_nothing_missing() -> Result<()> {
    let test = CliTest::with_file("public/locales/en.json", r#"{"a": "A"}"#)?;
    test.write_file("public/locales/de.json", r#"{"a": "A"}"#)?;

    let mut cmd = test.fix_command();
    cmd.args(["--apply", "--target-locales", "de"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No missing keys to translate"));

    Ok(())
}

#[test]
fn test_fix_apply_requires_api_key() -> Result<()> {
    let test = project()?;

    let mut cmd = test.fix_command();
    cmd.args(["--apply", "--target-locales", "de"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("LINGO_API_KEY"));

    Ok(())
}

#[test]
fn test_fix_apply_writes_translations() -> Result<()> {
    let test = project()?;
    let endpoint = spawn_translation_server(5)?;

    let mut cmd = test.fix_command();
    cmd.args(["--apply", "--target-locales", "de,ja", "--endpoint", &endpoint]);
    cmd.env("LINGO_API_KEY", "test-key");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Translated 5 key(s)."));

    assert_eq!(
        test.read_file("public/locales/de.json")?,
        "{\n  \"nav\": {\n    \"home\": \"Startseite\",\n    \"about\": \"[de] About\"\n  },\n  \"cta\": \"[de] Buy now\"\n}\n"
    );
    let ja: Value = serde_json::from_str(&test.read_file("public/locales/ja.json")?)?;
    assert_eq!(
        ja,
        json!({"nav": {"home": "[ja] Home", "about": "[ja] About"}, "cta": "[ja] Buy now"})
    );

    Ok(())
}

#[test]
fn test_fix_apply_keeps_going_when_provider_rejects() -> Result<()> {
    let test = project()?;
    let endpoint = spawn_translation_server(2)?;

    let mut cmd = test.fix_command();
    cmd.args(["--apply", "--target-locales", "de", "--endpoint", &endpoint]);
    cmd.env("LINGO_API_KEY", "wrong-key");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Translated 0 of 2 key(s); 2 failed"));
    assert!(output.stderr.contains("translation failed"));

    let de: Value = serde_json::from_str(&test.read_file("public/locales/de.json")?)?;
    assert_eq!(de, json!({"nav": {"home": "Startseite"}}));

    Ok(())
}
