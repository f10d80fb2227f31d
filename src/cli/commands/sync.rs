use std::path::PathBuf;

use anyhow::{Ok, Result, bail};

use super::super::args::SyncCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, SyncCommandSummary, SyncFileSummary};
use crate::{
    core::{CheckContext, parse_file, sync as sync_catalog, writer::write_file},
    issues::Issue,
};

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common, &args.files)?;
    let apply = args.apply;

    let template_path: PathBuf = match (&args.template, &ctx.config.template) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => ctx.resolve(path),
        (None, None) => bail!("No template given. Use --template or set \"template\" in config."),
    };
    let template = parse_file(&template_path)?;
    let template_canonical = template_path.canonicalize().ok();

    let mut files = Vec::new();
    for loaded in ctx.catalogs() {
        if template_canonical.is_some() && loaded.path.canonicalize().ok() == template_canonical {
            continue;
        }
        let (merged, summary) = sync_catalog(&loaded.catalog, &template);
        if summary.is_empty() && merged == loaded.catalog {
            continue;
        }
        if apply {
            write_file(&merged, &loaded.path)?;
        }
        tracing::debug!(file = %loaded.display_path, ?summary, apply, "synced catalog");
        files.push(SyncFileSummary {
            file_path: loaded.display_path.clone(),
            summary,
        });
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Sync(SyncCommandSummary {
            template: template_path.display().to_string(),
            files,
            is_apply: apply,
        }),
        issues,
        ctx.files_checked(),
        true,
    ))
}
