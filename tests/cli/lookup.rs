use anyhow::{Ok, Result};
use insta::assert_snapshot;

use crate::{CliTest, ES_CATALOG, stdout, ts};

const CATALOG: &str = "translations/vitables_es.ts";

#[test]
fn test_lookup_fills_placeholders() -> Result<()> {
    let test = CliTest::with_file(CATALOG, ES_CATALOG)?;

    let output = test.run(&[
        "lookup",
        CATALOG,
        "--context",
        "VTGUI",
        "--source",
        "Copy %1 to %2",
        "--arg",
        "a.h5",
        "--arg",
        "/tmp",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output).trim_end(), @"Copiar a.h5 a /tmp");

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file(CATALOG, ES_CATALOG)?;

    let unfinished = test.run(&["lookup", CATALOG, "--context", "VTGUI", "--source", "Close"])?;
    let unknown_context = test.run(&["lookup", CATALOG, "--context", "Nope", "--source", "Close"])?;

    assert_eq!(unfinished.status.code(), Some(0));
    assert_snapshot!(stdout(&unfinished).trim_end(), @"Close");
    assert_snapshot!(stdout(&unknown_context).trim_end(), @"Close");

    Ok(())
}

#[test]
fn test_lookup_no_unfinished() -> Result<()> {
    let test = CliTest::with_file(
        CATALOG,
        &ts(
            "es",
            r#"<context>
    <name>VTApp</name>
    <message>
        <source>Ready</source>
        <translation type="unfinished">Listo</translation>
    </message>
</context>"#,
        ),
    )?;

    let with = test.run(&["lookup", CATALOG, "--context", "VTApp", "--source", "Ready"])?;
    let without = test.run(&[
        "lookup",
        CATALOG,
        "--context",
        "VTApp",
        "--source",
        "Ready",
        "--no-unfinished",
    ])?;

    assert_snapshot!(stdout(&with).trim_end(), @"Listo");
    assert_snapshot!(stdout(&without).trim_end(), @"Ready");

    Ok(())
}

#[test]
fn test_lookup_plural_forms() -> Result<()> {
    let test = CliTest::with_file(
        "translations/vitables_ru.ts",
        &ts(
            "ru",
            r#"<context>
    <name>VTGUI</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n файл</numerusform>
            <numerusform>%n файла</numerusform>
            <numerusform>%n файлов</numerusform>
        </translation>
    </message>
</context>"#,
        ),
    )?;

    let lookup = |n: &str| -> Result<String> {
        let output = test.run(&[
            "lookup",
            "translations/vitables_ru.ts",
            "--context",
            "VTGUI",
            "--source",
            "%n file(s)",
            "-n",
            n,
        ])?;
        Ok(stdout(&output).trim_end().to_string())
    };

    assert_eq!(lookup("1")?, "1 файл");
    assert_eq!(lookup("3")?, "3 файла");
    assert_eq!(lookup("5")?, "5 файлов");
    assert_eq!(lookup("21")?, "21 файл");

    Ok(())
}

#[test]
fn test_lookup_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["lookup", "nope.ts", "--context", "A", "--source", "b"])?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
