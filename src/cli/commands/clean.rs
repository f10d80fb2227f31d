use anyhow::{Ok, Result};

use super::super::args::CleanCommand;
use super::helper::finish;
use super::{CleanFileSummary, CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, prune, writer::write_file},
    issues::Issue,
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common, &args.files)?;
    let apply = args.apply;

    let mut files = Vec::new();
    for loaded in ctx.catalogs() {
        let (pruned, removed) = prune(&loaded.catalog);
        if removed == 0 {
            continue;
        }
        if apply {
            write_file(&pruned, &loaded.path)?;
        }
        tracing::debug!(file = %loaded.display_path, removed, apply, "pruned catalog");
        files.push(CleanFileSummary {
            file_path: loaded.display_path.clone(),
            removed,
        });
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            files,
            is_apply: apply,
        }),
        issues,
        ctx.files_checked(),
        true,
    ))
}
