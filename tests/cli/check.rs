use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, spawn_translation_server};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "src/components/Hero.tsx",
        r#"export const Hero = () => (
  <section className="flex-col">
    <h1>Welcome to Our Amazing Platform</h1>
    <input placeholder="Search products" />
    <p>{t("hero.subtitle")}</p>
  </section>
);
"#,
    )?;
    test.write_file(
        "src/components/Footer.tsx",
        "export const Footer = () => <footer>{t('footer.copy')}</footer>;\n",
    )?;
    test.write_file(
        "public/locales/en/common.json",
        r#"{"hero": {"subtitle": "Ship faster"}, "nav": {"about": "About us"}}"#,
    )?;
    test.write_file(
        "public/locales/de/common.json",
        r#"{"hero": {"subtitle": "Schneller liefern"}}"#,
    )?;
    Ok(test)
}

fn json_report(test: &CliTest, extra: &[&str]) -> Result<Value> {
    let mut cmd = test.check_command();
    cmd.args(["--format", "json", "--target-locales", "de"]);
    cmd.args(extra);
    let output = test.run(cmd)?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    Ok(serde_json::from_str(&output.stdout)?)
}

#[test]
fn test_check_json_report() -> Result<()> {
    let test = project()?;
    let report = json_report(&test, &[])?;

    assert_eq!(report["filesScanned"], 2);
    assert_eq!(report["totalIssues"], 3);

    let hardcoded = report["hardcodedStrings"].as_array().unwrap();
    assert_eq!(hardcoded.len(), 2);
    assert_eq!(hardcoded[0]["text"], "Welcome to Our Amazing Platform");
    assert_eq!(hardcoded[0]["kind"], "text-node");
    assert_eq!(hardcoded[0]["severity"], "high");
    assert_eq!(hardcoded[0]["line"], 3);
    assert_eq!(hardcoded[0]["suggestedKey"], "hero.welcomeToOur");
    assert_eq!(hardcoded[1]["text"], "Search products");
    assert_eq!(hardcoded[1]["kind"], "attribute");
    assert_eq!(hardcoded[1]["severity"], "medium");

    let missing = report["missingKeys"].as_array().unwrap();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0]["key"], "nav.about");
    assert_eq!(missing[0]["sourceValue"], "About us");
    assert_eq!(missing[0]["missingInLocales"], serde_json::json!(["de"]));

    assert_eq!(report["staleTranslations"], serde_json::json!([]));
    assert_eq!(report["coverage"]["overall"], 50);
    assert_eq!(report["coverage"]["perLanguage"][0]["locale"], "de");

    Ok(())
}

#[test]
fn test_check_changed_files_limit_scan_and_flag_stale() -> Result<()> {
    let test = project()?;
    let report = json_report(
        &test,
        &["--changed", "src/components/Footer.tsx", "public/locales/en/common.json"],
    )?;

    assert_eq!(report["filesScanned"], 1);
    assert_eq!(report["hardcodedStrings"], serde_json::json!([]));

    let stale = report["staleTranslations"].as_array().unwrap();
    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0]["locale"], "de");
    assert_eq!(
        stale[0]["reason"],
        "Source locale (en) was updated but de translations were not"
    );

    Ok(())
}

#[test]
fn test_check_terminal_output() -> Result<()> {
    let test = project()?;
    let mut cmd = test.check_command();
    cmd.args(["--target-locales", "de"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("high: \"Welcome to Our Amazing Platform\"  hardcoded"));
    assert!(output.stdout.contains("--> src/components/Hero.tsx:3:9"));
    assert!(output.stdout.contains("= note: suggested key: hero.welcomeToOur"));
    assert!(output.stdout.contains("high: \"nav.about\"  missing-key"));
    assert!(output.stdout.contains("3 problems (2 high, 1 medium)"));

    Ok(())
}

#[test]
fn test_check_markdown_output() -> Result<()> {
    let test = project()?;
    let mut cmd = test.check_command();
    cmd.args(["--format", "markdown", "--target-locales", "de"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("<!-- lingua-guard -->\n"));
    assert!(output.stdout.contains("Found 3 issues (0 auto-fixed)"));
    assert!(output.stdout.contains(
        "| `src/components/Hero.tsx` | L3 | \"Welcome to Our Amazing Platform\" | `hero.welcomeToOur` |"
    ));
    assert!(output.stdout.contains("| `nav.about` | 🇩🇪 | \"About us\" |"));

    Ok(())
}

#[test]
fn test_check_fail_on_issues() -> Result<()> {
    let test = project()?;
    let mut cmd = test.check_command();
    cmd.args(["--fail-on-issues", "--target-locales", "de"]);
    assert_eq!(test.run(cmd)?.code, Some(1));

    Ok(())
}

#[test]
fn test_check_fail_on_issues_from_config() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".linguaguardrc.json",
        r#"{ "targetLocales": ["de"], "failOnIssues": true }"#,
    )?;
    assert_eq!(test.run(test.check_command())?.code, Some(1));

    Ok(())
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "export const App = () => <main>{t('app.title')}</main>;\n",
    )?;
    test.write_file("public/locales/en/common.json", r#"{"app": {"title": "App"}}"#)?;
    test.write_file("public/locales/de/common.json", r#"{"app": {"title": "App"}}"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--fail-on-issues", "--target-locales", "de"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 source file - no issues found"));
    assert!(output.stdout.contains("de  100% (1/1)"));

    Ok(())
}

#[test]
fn test_check_malformed_locale_is_error() -> Result<()> {
    let test = CliTest::with_file("public/locales/en/common.json", "{ not json")?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to parse locale file"));

    Ok(())
}

/// A project whose only issue is one key missing from `de`.
fn missing_key_project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "src/App.tsx",
        "export const App = () => <main>{t('title')}</main>;\n",
    )?;
    test.write_file("public/locales/en.json", r#"{"title": "Shop", "cta": "Buy now"}"#)?;
    test.write_file("public/locales/de.json", r#"{"title": "Laden"}"#)?;
    Ok(test)
}

#[test]
fn test_check_fix_reports_auto_fixed_count() -> Result<()> {
    let test = missing_key_project()?;
    let endpoint = spawn_translation_server(1)?;

    let mut cmd = test.check_command();
    cmd.args([
        "--format",
        "markdown",
        "--fix",
        "--fail-on-issues",
        "--target-locales",
        "de",
        "--endpoint",
        &endpoint,
    ]);
    cmd.env("LINGO_API_KEY", "test-key");
    let output = test.run(cmd)?;

    // The only issue was fixed, so --fail-on-issues does not trip.
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("## 🔧 lingua-guard i18n Report"));
    assert!(output.stdout.contains("Found 1 issues - all auto-fixed!"));
    assert!(output.stdout.contains("| 🔧 Auto-fixed | 1 |"));
    assert!(output.stdout.contains("> ✅ **1 keys were auto-translated**"));

    let de: Value = serde_json::from_str(&test.read_file("public/locales/de.json")?)?;
    assert_eq!(de, json!({"title": "Laden", "cta": "[de] Buy now"}));

    Ok(())
}

#[test]
fn test_check_fix_terminal_output() -> Result<()> {
    let test = missing_key_project()?;
    let endpoint = spawn_translation_server(1)?;

    let mut cmd = test.check_command();
    cmd.args(["--fix", "--target-locales", "de", "--endpoint", &endpoint]);
    cmd.env("LINGO_API_KEY", "test-key");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("high: \"cta\"  missing-key"));
    assert!(output.stdout.contains("Translated 1 key(s)."));

    Ok(())
}

#[test]
fn test_check_fix_requires_api_key() -> Result<()> {
    let test = missing_key_project()?;

    let mut cmd = test.check_command();
    cmd.args(["--fix", "--target-locales", "de"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("LINGO_API_KEY"));

    Ok(())
}

#[test]
fn test_check_auto_fix_config_without_key_skips() -> Result<()> {
    let test = missing_key_project()?;
    test.write_file(
        ".linguaguardrc.json",
        r#"{ "targetLocales": ["de"], "autoFix": true, "failOnIssues": true }"#,
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--format", "markdown"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("| 🔧 Auto-fixed | 0 |"));
    assert!(output.stderr.contains("no API key is set"));
    assert_eq!(test.read_file("public/locales/de.json")?, r#"{"title": "Laden"}"#);

    Ok(())
}
