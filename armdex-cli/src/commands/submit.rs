use armdex_catalog::{IssueTracker, Submission};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{Context, runtime};
use crate::cli_types::SubmitArgs;
use crate::error::CliError;

impl From<SubmitArgs> for Submission {
    fn from(args: SubmitArgs) -> Self {
        Submission {
            name: args.name,
            category: args.category,
            status: args.status.display_name().to_string(),
            direct_download_link: args.download,
            store_link: args.store,
            about: args.about,
            icon: args.icon,
        }
    }
}

pub(crate) fn run_submit(ctx: &Context, form: SubmitArgs, dry_run: bool) -> Result<(), CliError> {
    let submission = Submission::from(form);
    submission.validate()?;

    if dry_run {
        let issue = submission.to_issue();
        log::info!(
            "{} {}",
            "Would file:".if_supports_color(Stdout, |t| t.bold()),
            issue.title,
        );
        log::info!("  labels: {}", issue.labels.join(", "));
        log::info!("");
        for line in issue.body.lines() {
            log::info!("  {}", line);
        }
        return Ok(());
    }

    let tracker = IssueTracker::new(&ctx.config.tracker)?;
    let rt = runtime()?;
    let url = rt.block_on(tracker.submit(&submission))?;

    log::info!(
        "{} {}",
        "Submitted".if_supports_color(Stdout, |t| t.green()),
        submission.name.if_supports_color(Stdout, |t| t.bold()),
    );
    if let Some(url) = url {
        log::info!("  {}", url.if_supports_color(Stdout, |t| t.cyan()));
    }
    Ok(())
}
