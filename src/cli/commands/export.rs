use std::fs;

use anyhow::{Context, Ok, Result, bail};
use serde_json::{Map, Value};

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary, ExportSummary, helper::finish};
use crate::{
    config::load_config,
    core::{LookupOptions, MessageKey, Translator, parse_file},
};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = load_config(&args.common.path)?.config;
    let options = LookupOptions {
        include_unfinished: config.include_unfinished && !args.no_unfinished,
    };

    let catalog = parse_file(&args.file)?;
    let translator = Translator::new(&catalog, options);
    let json = serde_json::to_string_pretty(&lookup_table_json(&translator)?)
        .context("Failed to serialize lookup table")?;

    let output = match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {:?}", path))?;
            tracing::debug!(path = %path.display(), entries = translator.len(), "exported");
            Some(path.display().to_string())
        }
        None => None,
    };

    Ok(finish(
        CommandSummary::Export(ExportSummary {
            output,
            json,
            entry_count: translator.len(),
        }),
        Vec::new(),
        1,
        true,
    ))
}

/// `{context: {source: translation}}` in catalog order.
///
/// Disambiguated entries are keyed `"source (comment)"`. Fails when that key
/// is also the literal source of another entry in the same context.
pub fn lookup_table_json(translator: &Translator) -> Result<Value> {
    let mut contexts: Map<String, Value> = Map::new();
    for (context, source, comment, text) in translator.entries() {
        let key = MessageKey { source, comment }.to_string();
        let entry = contexts
            .entry(context.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = entry {
            if map.contains_key(&key) {
                bail!(
                    "Context \"{}\" has two entries exported as \"{}\"; rename the source or change the comment",
                    context,
                    key
                );
            }
            map.insert(key, Value::String(text.to_string()));
        }
    }
    Ok(Value::Object(contexts))
}
