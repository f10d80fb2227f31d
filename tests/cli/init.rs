use anyhow::{Ok, Result};
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .tsctlrc.json"));

    let config: Value = serde_json::from_str(&test.read_file(".tsctlrc.json")?)?;
    assert_eq!(config["translationsRoot"], "./translations");
    assert_eq!(config["includes"][0], "**/*.ts");
    assert_eq!(config["includeUnfinished"], true);
    assert_eq!(config["sourceLanguage"], "en");
    assert!(test.root().join(".tsctlrc.json").is_file());

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::with_file(".tsctlrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file(".tsctlrc.json")?, "{}");

    Ok(())
}
