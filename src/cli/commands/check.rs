use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Rule,
    rules::{ALL_RULES, run_rules},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    PlaceholderMismatch,
    DuplicateMessage,
    Untranslated,
    AcceleratorMismatch,
    EndingMismatch,
    Obsolete,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::PlaceholderMismatch,
            CheckRule::DuplicateMessage,
            CheckRule::Untranslated,
            CheckRule::AcceleratorMismatch,
            CheckRule::EndingMismatch,
            CheckRule::Obsolete,
        ]
    }
}

impl From<CheckRule> for Rule {
    fn from(rule: CheckRule) -> Self {
        match rule {
            CheckRule::PlaceholderMismatch => Rule::PlaceholderMismatch,
            CheckRule::DuplicateMessage => Rule::DuplicateMessage,
            CheckRule::Untranslated => Rule::Untranslated,
            CheckRule::AcceleratorMismatch => Rule::AcceleratorMismatch,
            CheckRule::EndingMismatch => Rule::EndingMismatch,
            CheckRule::Obsolete => Rule::Obsolete,
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common, &args.files)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };
    let rules: Vec<Rule> = checks.into_iter().map(Rule::from).collect();
    tracing::debug!(?rules, catalogs = ctx.catalogs().len(), "running checks");

    let issues = run_rules(&ctx, &rules);

    Ok(finish(
        CommandSummary::Check,
        issues,
        ctx.files_checked(),
        true,
    ))
}
