use anyhow::{Ok, Result};

use crate::{CliTest, ES_CATALOG, stdout, ts};

const CATALOG: &str = "translations/vitables_es.ts";

/// Fresh extraction: `Copy %1 to %2` and `Close` are gone, `Save` is new.
fn template() -> String {
    ts(
        "",
        r#"<context>
    <name>VTGUI</name>
    <message>
        <location filename="../vitables/vtgui.py" line="80"/>
        <source>&amp;Open...</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location filename="../vitables/vtgui.py" line="95"/>
        <source>Save</source>
        <translation type="unfinished"></translation>
    </message>
</context>"#,
    )
    .replace(" language=\"\"", "")
}

#[test]
fn test_sync_dry_run() -> Result<()> {
    let test = CliTest::with_file(CATALOG, ES_CATALOG)?;
    test.write_file("i18n/vitables.ts", &template())?;

    let output = test.run(&["sync", "--template", "i18n/vitables.ts"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(
        out.contains("translations/vitables_es.ts: 1 added, 1 obsoleted, 1 dropped, 0 revived"),
        "{out}"
    );
    assert!(out.contains("Would update 1 file(s) from i18n/vitables.ts."), "{out}");
    assert_eq!(test.read_file(CATALOG)?, ES_CATALOG);

    Ok(())
}

#[test]
fn test_sync_apply_merges_template() -> Result<()> {
    let test = CliTest::with_file(CATALOG, ES_CATALOG)?;
    test.write_file("i18n/vitables.ts", &template())?;

    let output = test.run(&["sync", "--template", "i18n/vitables.ts", "--apply"])?;
    assert_eq!(output.status.code(), Some(0));

    let merged = test.read_file(CATALOG)?;
    assert!(merged.contains("<TS version=\"2.1\" language=\"es_ES\">"));
    assert!(merged.contains("line=\"80\""), "{merged}");
    assert!(merged.contains("<translation>&amp;Abrir...</translation>"), "{merged}");
    assert!(merged.contains("<source>Save</source>"), "{merged}");
    assert!(
        merged.contains("<translation type=\"obsolete\">Copiar %1 a %2</translation>"),
        "{merged}"
    );
    assert!(!merged.contains("<source>Close</source>"), "{merged}");

    // A second run has nothing left to do.
    let again = test.run(&["sync", "--template", "i18n/vitables.ts"])?;
    assert!(stdout(&again).contains("All catalogs match i18n/vitables.ts"));

    Ok(())
}

#[test]
fn test_sync_template_from_config() -> Result<()> {
    let test = CliTest::with_file(CATALOG, ES_CATALOG)?;
    test.write_file("i18n/vitables.ts", &template())?;
    test.write_file(".tsctlrc.json", r#"{"template": "i18n/vitables.ts"}"#)?;

    let output = test.run(&["sync"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("1 added, 1 obsoleted, 1 dropped"));

    Ok(())
}

#[test]
fn test_sync_without_template_fails() -> Result<()> {
    let test = CliTest::with_file(CATALOG, ES_CATALOG)?;

    let output = test.run(&["sync"])?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
