//! Command handlers: resolve the collection, run the command, print.

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use log::LevelFilter;

use verso::catalog::Catalog;
use verso::commands::{self, config::ConfigAction, CmdMessage};
use verso::config::VersoConfig;
use verso::error::{Result, VersoError};
use verso::filter::TagFilter;
use verso::loader;
use verso::model::Poem;
use verso::source::{ContentSource, DirSource, HttpSource};

use super::browse;
use super::print;
use super::setup::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { query, tag }) => handle_list(&ctx, query, tag),
        Some(Commands::Show { selector }) => handle_show(&ctx, &selector),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Browse) => handle_browse(&ctx),
        Some(Commands::Check) => handle_check(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Everything a handler needs: the resolved source, the config, and a
/// runtime to drive the async loader from synchronous handlers.
pub(crate) struct AppContext {
    pub(crate) rt: tokio::runtime::Runtime,
    pub(crate) source: Box<dyn ContentSource>,
    pub(crate) config: VersoConfig,
    pub(crate) config_dir: PathBuf,
}

/// Builds the [`AppContext`]. The collection comes from `--collection`,
/// then the configured default, then the current directory.
fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "verso", "verso").expect("Could not determine config dir");
    let config_dir = proj_dirs.config_dir().to_path_buf();
    let config = VersoConfig::load(&config_dir).unwrap_or_default();

    let collection = match &cli.collection {
        Some(c) => c.clone(),
        None => match &config.collection {
            Some(c) => c.clone(),
            None => std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .to_string_lossy()
                .into_owned(),
        },
    };

    let source: Box<dyn ContentSource> =
        if collection.starts_with("http://") || collection.starts_with("https://") {
            Box::new(HttpSource::new(&collection)?)
        } else {
            Box::new(DirSource::new(&collection))
        };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(VersoError::Io)?;

    Ok(AppContext {
        rt,
        source,
        config,
        config_dir,
    })
}

fn load_catalog(ctx: &AppContext) -> Result<(Catalog, usize)> {
    let outcome = ctx
        .rt
        .block_on(loader::load(ctx.source.as_ref(), &ctx.config))?;
    let skipped = outcome.skipped.len();
    Ok((Catalog::load(outcome.poems), skipped))
}

fn warn_skipped(skipped: usize) {
    if skipped > 0 {
        print::print_messages(&[CmdMessage::warning(format!(
            "{} poem{} could not be loaded.",
            skipped,
            if skipped == 1 { "" } else { "s" }
        ))]);
    }
}

/// Picks the image reference for a poem: its own image when the source has
/// it, the configured placeholder otherwise.
pub(crate) fn resolve_image(ctx: &AppContext, poem: &Poem) -> String {
    if ctx.rt.block_on(ctx.source.exists(&poem.image)) {
        poem.image.clone()
    } else {
        ctx.config.placeholder.clone()
    }
}

fn handle_list(ctx: &AppContext, query: Option<String>, tag: Option<String>) -> Result<()> {
    let (catalog, skipped) = load_catalog(ctx)?;
    warn_skipped(skipped);

    let tag = match tag {
        Some(t) => TagFilter::Tag(t),
        None => TagFilter::All,
    };
    let result = commands::list::run(&catalog, query.as_deref().unwrap_or(""), &tag)?;

    print::print_messages(&result.messages);
    print::print_cards(&result.listed);
    Ok(())
}

fn handle_show(ctx: &AppContext, selector: &str) -> Result<()> {
    let (catalog, skipped) = load_catalog(ctx)?;
    warn_skipped(skipped);

    let result = commands::show::run(&catalog, selector)?;
    print::print_messages(&result.messages);
    for poem in &result.listed {
        let image = resolve_image(ctx, poem);
        print::print_detail(poem, &image);
    }
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let (catalog, skipped) = load_catalog(ctx)?;
    warn_skipped(skipped);

    let result = commands::tags::run(&catalog)?;
    print::print_messages(&result.messages);
    print::print_tag_counts(&result.tag_counts);
    Ok(())
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let (catalog, skipped) = load_catalog(ctx)?;
    browse::run(ctx, &catalog)?;
    // The session cleared the screen, so the warning lands after it.
    warn_skipped(skipped);
    Ok(())
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx
        .rt
        .block_on(commands::check::run(ctx.source.as_ref(), &ctx.config))?;
    print::print_messages(&result.messages);

    let broken = result.problems.len();
    if broken > 0 {
        return Err(VersoError::Api(format!(
            "{} poem{} with missing documents",
            broken,
            if broken == 1 { "" } else { "s" }
        )));
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::Get(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let persist = matches!(action, ConfigAction::Set(..));

    let result = commands::config::run(&mut ctx.config, action)?;
    if persist {
        ctx.config.save(&ctx.config_dir)?;
    }
    print::print_messages(&result.messages);
    Ok(())
}
