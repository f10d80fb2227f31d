use anyhow::{Ok, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, ES_CATALOG, stdout};

#[test]
fn test_export_to_stdout() -> Result<()> {
    let test = CliTest::with_file("translations/vitables_es.ts", ES_CATALOG)?;

    let output = test.run(&["export", "translations/vitables_es.ts"])?;
    let json: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        json,
        json!({
            "VTGUI": {
                "&Open...": "&Abrir...",
                "Copy %1 to %2": "Copiar %1 a %2"
            }
        })
    );

    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let test = CliTest::with_file("translations/vitables_es.ts", ES_CATALOG)?;

    let output = test.run(&[
        "export",
        "translations/vitables_es.ts",
        "--output",
        "es.json",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_str(&test.read_file("es.json")?)?;
    assert_eq!(json["VTGUI"]["Copy %1 to %2"], "Copiar %1 a %2");

    Ok(())
}
