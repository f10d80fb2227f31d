use anyhow::{Ok, Result};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::{
    config::load_config,
    core::{LookupOptions, Translator, parse_file, placeholder::fill_placeholders},
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = load_config(&args.common.path)?.config;
    let options = LookupOptions {
        include_unfinished: config.include_unfinished && !args.no_unfinished,
    };

    let catalog = parse_file(&args.file)?;
    let translator = Translator::new(&catalog, options);

    let text = match args.count {
        Some(n) => translator.translate_plural(&args.context, &args.source, &args.comment, n),
        None => translator
            .translate(&args.context, &args.source, &args.comment)
            .to_string(),
    };
    let translated = translator.contains(&args.context, &args.source, &args.comment);

    let values: Vec<&str> = args.values.iter().map(String::as_str).collect();
    let text = fill_placeholders(&text, &values);

    Ok(finish(
        CommandSummary::Lookup(LookupSummary { text, translated }),
        Vec::new(),
        1,
        true,
    ))
}
