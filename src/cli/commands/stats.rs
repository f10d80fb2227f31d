use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{CommandResult, CommandSummary, StatsSummary, helper::finish};
use crate::{
    core::{CatalogStats, CheckContext},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common, &args.files)?;

    let catalogs: Vec<CatalogStats> = ctx
        .catalogs()
        .iter()
        .map(CatalogStats::from_loaded)
        .collect();

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            catalogs,
            json: args.json,
        }),
        issues,
        ctx.files_checked(),
        true,
    ))
}
