use anyhow::{Context, Result};
use tracing::info;

use tutor_cli::steps::{Replay, load_script, replay};
use tutor_pages::default_registry;

use crate::cli::{InspectArgs, PagesArgs, RenderArgs};
use crate::summary::{PageRow, print_page, print_pages};

pub fn run_pages(args: &PagesArgs) -> Result<()> {
    let registry = default_registry();
    let mut rows = Vec::new();
    for entry in registry.filter(args.filter.as_deref().unwrap_or_default()) {
        let page = entry
            .build()
            .with_context(|| format!("build page {}", entry.path))?;
        rows.push(PageRow {
            path: entry.path,
            name: entry.name,
            controls: page.controls().len(),
            bindings: page.bindings().len(),
        });
    }
    print_pages(&rows);
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let page = default_registry()
        .build(&args.path)
        .with_context(|| format!("load page {}", args.path))?;
    print_page(&page);
    Ok(())
}

/// Replay the steps and print the final render state. Script steps run
/// before `--step` ones.
pub fn run_render(args: &RenderArgs, pretty: bool) -> Result<Replay> {
    let page = default_registry()
        .build(&args.path)
        .with_context(|| format!("load page {}", args.path))?;
    let mut steps = match &args.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    steps.extend(args.steps.iter().cloned());

    let result = replay(page, &steps).with_context(|| format!("replay steps on {}", args.path))?;
    info!(
        steps = result.steps,
        failures = result.failures.len(),
        "replay finished"
    );
    let json = if pretty {
        serde_json::to_string_pretty(&result.state)
    } else {
        serde_json::to_string(&result.state)
    }
    .context("serialize render state")?;
    println!("{json}");
    Ok(result)
}
