use anyhow::{Ok, Result};
use serde_json::Value;

use crate::{CliTest, ES_CATALOG, stdout};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_file("translations/vitables_es.ts", ES_CATALOG)?;

    let output = test.run(&["stats"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("translations/vitables_es.ts"), "{out}");
    assert!(out.contains("es_ES"), "{out}");
    assert!(out.contains("66.7%"), "{out}");

    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_file("translations/vitables_es.ts", ES_CATALOG)?;

    let output = test.run(&["stats", "--json"])?;
    let json: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(output.status.code(), Some(0));
    let catalog = &json[0];
    assert_eq!(catalog["file"], "translations/vitables_es.ts");
    assert_eq!(catalog["language"], "es_ES");
    assert_eq!(catalog["messages"], 3);
    assert_eq!(catalog["finished"], 2);
    assert_eq!(catalog["unfinished"], 1);
    assert_eq!(catalog["obsolete"], 0);
    assert_eq!(catalog["percentDone"].as_f64(), Some(66.7));

    Ok(())
}

#[test]
fn test_stats_no_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["stats"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No catalogs found."));

    Ok(())
}
