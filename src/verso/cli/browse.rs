//! The interactive browse session.
//!
//! Owns the terminal and the event loop; every state change goes through
//! [`BrowseState`] so the keyboard behavior stays testable without a tty.

use std::collections::HashMap;

use console::{Key, Term};
use unicode_width::UnicodeWidthStr;

use verso::browse::{BrowseState, Pane};
use verso::catalog::Catalog;
use verso::error::{Result, VersoError};
use verso::filter::{self, TagFilter};
use verso::model::Poem;

use super::commands::{resolve_image, AppContext};
use super::print;
use super::styles;

const TITLE_WIDTH: usize = 60;

pub(crate) fn run(ctx: &AppContext, catalog: &Catalog) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(VersoError::Api(
            "browse needs an interactive terminal".to_string(),
        ));
    }

    let _ = term.hide_cursor();
    let result = event_loop(&term, ctx, catalog);
    let _ = term.show_cursor();
    let _ = term.clear_screen();
    result
}

fn event_loop(term: &Term, ctx: &AppContext, catalog: &Catalog) -> Result<()> {
    let mut state = BrowseState::default();
    // Image probes can go over the network, so each one runs at most once
    // per session.
    let mut image_cache: HashMap<String, String> = HashMap::new();

    loop {
        let tag_filter = state.tag_filter(catalog.tags());
        let filtered = filter::apply(catalog.all(), &state.query, &tag_filter);
        state.clamp_selection(filtered.len());

        draw(term, ctx, catalog, &state, &filtered, &mut image_cache)?;

        let key = match term.read_key() {
            Ok(key) => key,
            // read_key reports Ctrl-C as an interrupted read.
            Err(_) => break,
        };
        if key == Key::Char('\u{3}') {
            break;
        }

        let filtered_ids: Vec<String> = filtered.iter().map(|p| p.id.clone()).collect();
        state.handle(key, catalog.tags().len(), &filtered_ids);
        if state.quit {
            break;
        }
    }

    Ok(())
}

fn draw(
    term: &Term,
    ctx: &AppContext,
    catalog: &Catalog,
    state: &BrowseState,
    filtered: &[&Poem],
    image_cache: &mut HashMap<String, String>,
) -> Result<()> {
    term.clear_screen()?;

    let tag_label = match state.tag_filter(catalog.tags()) {
        TagFilter::Tag(tag) => format!("#{}", tag),
        TagFilter::All => "all".to_string(),
    };
    term.write_line(&format!(
        "{} {}  {} {}",
        styles::PROMPT.apply_to("search:"),
        state.query,
        styles::PROMPT.apply_to("tag:"),
        tag_label
    ))?;
    term.write_line("")?;

    match state.pane {
        Pane::List => {
            if catalog.is_empty() {
                term.write_line("No poems could be loaded from the collection.")?;
            } else {
                draw_list(term, state, filtered)?;
            }
        }
        Pane::Detail => draw_detail(term, ctx, catalog, state, image_cache)?,
    }

    let help = match state.pane {
        Pane::List => "type to search   Tab: tag   Up/Down: move   Enter: open   Esc: quit",
        Pane::Detail => "type to search   Tab: tag   Esc: back",
    };
    term.write_line("")?;
    term.write_line(&format!("{}", styles::DATE.apply_to(help)))?;
    Ok(())
}

fn draw_list(term: &Term, state: &BrowseState, filtered: &[&Poem]) -> Result<()> {
    if filtered.is_empty() {
        term.write_line("No poems match the current filters.")?;
        return Ok(());
    }

    for (i, poem) in filtered.iter().enumerate() {
        let title = print::truncate_to_width(&poem.title, TITLE_WIDTH);
        let padding = TITLE_WIDTH.saturating_sub(title.width());
        let row = format!(
            "{:>3}. {}{}  {}",
            i + 1,
            title,
            " ".repeat(padding),
            print::format_date(poem.date)
        );
        if i == state.selected {
            term.write_line(&format!("{}", styles::SELECTED.apply_to(row)))?;
        } else {
            term.write_line(&row)?;
        }
    }
    Ok(())
}

fn draw_detail(
    term: &Term,
    ctx: &AppContext,
    catalog: &Catalog,
    state: &BrowseState,
    image_cache: &mut HashMap<String, String>,
) -> Result<()> {
    let id = match &state.open {
        Some(id) => id,
        None => return Ok(()),
    };
    let poem = match catalog.get(id) {
        Some(poem) => poem,
        None => {
            term.write_line("The open poem is no longer available.")?;
            return Ok(());
        }
    };

    let image = image_cache
        .entry(poem.id.clone())
        .or_insert_with(|| resolve_image(ctx, poem));

    term.write_line(&format!("{}", styles::TITLE.apply_to(&poem.title)))?;
    if poem.tags.is_empty() {
        term.write_line(&format!(
            "{}",
            styles::DATE.apply_to(print::format_date(poem.date))
        ))?;
    } else {
        term.write_line(&format!(
            "{}  {}",
            styles::DATE.apply_to(print::format_date(poem.date)),
            styles::TAG.apply_to(print::format_tags(&poem.tags))
        ))?;
    }
    term.write_line("--------------------------------")?;
    for line in poem.body.trim_end().lines() {
        term.write_line(line)?;
    }
    term.write_line("")?;
    term.write_line(&format!(
        "{}",
        styles::DATE.apply_to(format!("Image: {}", image))
    ))?;
    Ok(())
}
