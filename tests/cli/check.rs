use anyhow::{Ok, Result};

use crate::{CliTest, ES_CATALOG, stderr, stdout, ts};

#[test]
fn test_check_reports_untranslated_as_warning() -> Result<()> {
    let test = CliTest::with_file("translations/vitables_es.ts", ES_CATALOG)?;

    let output = test.run(&["check"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("warning: \"VTGUI::Close\"  untranslated"), "{out}");
    assert!(out.contains("--> translations/vitables_es.ts:16"), "{out}");
    assert!(out.contains("1 problems (0 errors, 1 warning)"), "{out}");

    Ok(())
}

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "translations/vitables_de.ts",
        &ts(
            "de",
            r#"<context>
    <name>VTGUI</name>
    <message>
        <source>Close</source>
        <translation>Schließen</translation>
    </message>
</context>"#,
        ),
    )?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 translation file - no issues found"));

    Ok(())
}

#[test]
fn test_check_placeholder_mismatch_fails() -> Result<()> {
    let test = CliTest::with_file(
        "translations/vitables_es.ts",
        &ts(
            "es",
            r#"<context>
    <name>VTGUI</name>
    <message>
        <source>Copy %1 to %2</source>
        <translation>Copiar %1</translation>
    </message>
</context>"#,
        ),
    )?;

    let output = test.run(&["check"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"VTGUI::Copy %1 to %2\"  placeholder-mismatch"), "{out}");
    assert!(out.contains("missing %2"), "{out}");

    Ok(())
}

#[test]
fn test_check_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("translations/vitables_es.ts", ES_CATALOG)?;

    let output = test.run(&["check", "placeholder-mismatch"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("untranslated"));

    Ok(())
}

#[test]
fn test_check_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/vitables_es.ts", ES_CATALOG)?;
    test.write_file(
        "translations/broken.ts",
        "<TS version=\"2.1\">\n<context>\n",
    )?;

    let output = test.run(&["check"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("parse-error"), "{out}");
    assert!(out.contains("--> translations/broken.ts"), "{out}");
    assert!(stderr(&output).contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_check_respects_ignore_contexts() -> Result<()> {
    let test = CliTest::with_file("translations/vitables_es.ts", ES_CATALOG)?;
    test.write_file(".tsctlrc.json", r#"{"ignoreContexts": ["VTGUI"]}"#)?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no issues found"));

    Ok(())
}
