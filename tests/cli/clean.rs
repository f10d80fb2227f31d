use anyhow::{Ok, Result};
use pretty_assertions::assert_eq;

use crate::{CliTest, ES_CATALOG, stdout};

const CATALOG: &str = "translations/vitables_es.ts";

/// `ES_CATALOG` with one obsolete and one vanished message appended.
fn catalog_with_retired() -> String {
    ES_CATALOG.replace(
        "</context>",
        r#"    <message>
        <source>Quit</source>
        <translation type="obsolete">Salir</translation>
    </message>
    <message>
        <source>Refresh</source>
        <translation type="vanished">Actualizar</translation>
    </message>
</context>"#,
    )
}

#[test]
fn test_clean_dry_run_keeps_file() -> Result<()> {
    let content = catalog_with_retired();
    let test = CliTest::with_file(CATALOG, &content)?;

    let output = test.run(&["clean"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("translations/vitables_es.ts: 2 message(s)"), "{out}");
    assert!(out.contains("Would remove 2 obsolete message(s) in 1 file(s)."), "{out}");
    assert!(out.contains("Run with --apply"), "{out}");
    assert_eq!(test.read_file(CATALOG)?, content);

    Ok(())
}

#[test]
fn test_clean_apply_prunes_retired_messages() -> Result<()> {
    let test = CliTest::with_file(CATALOG, &catalog_with_retired())?;

    let output = test.run(&["clean", "--apply"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Removed 2 obsolete message(s) in 1 file(s)."));
    assert_eq!(test.read_file(CATALOG)?, ES_CATALOG);

    Ok(())
}

#[test]
fn test_clean_nothing_to_remove() -> Result<()> {
    let test = CliTest::with_file(CATALOG, ES_CATALOG)?;

    let output = test.run(&["clean", "--apply"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No obsolete messages found"));
    assert_eq!(test.read_file(CATALOG)?, ES_CATALOG);

    Ok(())
}
