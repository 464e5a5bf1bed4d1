// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless gallery walkthrough.
//!
//! Loads a project catalog, mounts a [`Gallery`] against a host that only
//! logs listener traffic, and replays a short session: the scatter deck
//! opening, a drag, a tap, the switch to the timeline and its reveal, and a
//! language toggle. Geometry is printed as the host would hand it to a
//! renderer.
//!
//! Run:
//! - `cargo run -p vitrine_demos -- --language zh --width 1024`
//! - `RUST_LOG=debug cargo run -p vitrine_demos` to see state transitions.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::Point;
use tracing_subscriber::EnvFilter;
use vitrine_gallery::{Gallery, GalleryConfig, ViewMode};
use vitrine_gesture::listeners::{EventKinds, ListenTarget, ListenerHost};
use vitrine_project::{Catalog, Language, ProjectId};
use vitrine_selection::DetailPanel;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");
const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "vitrine_walkthrough")]
#[command(about = "Replay a scripted session against a headless Vitrine gallery")]
#[command(version)]
struct Cli {
    /// Project catalog (JSON). Defaults to the bundled sample.
    #[arg(long)]
    projects: Option<PathBuf>,

    /// Gallery configuration (JSON). Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display language: `en` or `zh`.
    #[arg(long, default_value = "en")]
    language: Language,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// How long to let the timeline reveal run, in seconds.
    #[arg(long, default_value_t = 20.0)]
    seconds: f64,
}

/// Listener host that counts registrations and logs them.
#[derive(Debug, Default)]
struct LoggingHost {
    next: Cell<u32>,
    live: Cell<usize>,
}

impl ListenerHost for LoggingHost {
    type Handle = u32;

    fn attach(&self, target: ListenTarget, kind: EventKinds) -> u32 {
        let handle = self.next.get() + 1;
        self.next.set(handle);
        self.live.set(self.live.get() + 1);
        tracing::debug!(handle, ?target, ?kind, "listener attached");
        handle
    }

    fn detach(&self, handle: u32) {
        self.live.set(self.live.get().saturating_sub(1));
        tracing::debug!(handle, "listener detached");
    }
}

/// Detail panel that prints what it would scroll to.
#[derive(Debug, Default)]
struct PrintPanel {
    reveals: usize,
}

impl DetailPanel for PrintPanel {
    fn scroll_into_view(&mut self, id: &ProjectId) {
        self.reveals += 1;
        println!("  detail panel -> {id}");
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let (source, text) = match path {
        Some(path) => (
            path.display().to_string(),
            std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?,
        ),
        None => ("<bundled>".to_owned(), BUNDLED_CATALOG.to_owned()),
    };
    let catalog: Catalog =
        serde_json::from_str(&text).with_context(|| format!("parsing catalog {source}"))?;
    tracing::info!(%source, projects = catalog.projects().len(), "catalog loaded");
    Ok(catalog)
}

fn load_config(path: Option<&PathBuf>) -> Result<GalleryConfig> {
    let Some(path) = path else {
        return Ok(GalleryConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn print_scatter(gallery: &Gallery<LoggingHost>) {
    let state = if gallery.scatter().is_open() { "open" } else { "closed" };
    println!("scatter ({state}, scale {:.1})", gallery.scatter().scale());
    for card in gallery.scatter_cards() {
        let t = card.transform;
        println!(
            "  #{} {:<12} translate=({:>7.1}, {:>7.1}) rotate={:>5.1}deg scale={:.2} z={} accent={}{}",
            card.index,
            card.title,
            t.translate.x,
            t.translate.y,
            t.rotate_deg,
            t.scale,
            card.z_index,
            card.accent.as_str(),
            if card.is_active { " [selected]" } else { "" },
        );
    }
}

fn print_timeline(gallery: &Gallery<LoggingHost>) {
    let frame = gallery.timeline_frame();
    let ticks: Vec<_> = frame
        .ticks
        .iter()
        .map(|t| format!("{}@{:.1}%", t.year, t.percent))
        .collect();
    println!(
        "timeline width={:.0} scroll={:.1} ticks=[{}]",
        frame.width,
        frame.scroll_left,
        ticks.join(", ")
    );
    for card in &frame.cards {
        print!(
            "  {}. {:<12} left={:>7.1} {}",
            card.ordinal, card.title, card.left, card.project.period
        );
        if let Some(seg) = card.segment {
            print!(
                "  [{} {:.0}..{:.0} {}]",
                seg.start_label,
                seg.left,
                seg.right(),
                seg.end_label
            );
        }
        println!();
    }
}

/// Advances frames from `now` until the deck opens or `limit` passes.
///
/// Returns the time of the last frame.
fn wait_for_deck<H: ListenerHost>(
    gallery: &mut Gallery<H>,
    panel: &mut impl DetailPanel,
    mut now: f64,
    limit: f64,
) -> f64 {
    while !gallery.scatter().is_open() && now < limit {
        now += FRAME_MS;
        gallery.frame(now, panel);
    }
    now
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.projects.as_ref())?;
    let config = load_config(cli.config.as_ref())?;

    let host = Rc::new(LoggingHost::default());
    let mut gallery = Gallery::new(config, Rc::clone(&host), cli.width);
    let mut panel = PrintPanel::default();
    let mut now = 0.0;

    gallery.set_language(&catalog, cli.language, now);
    gallery.mount(now);
    print_scatter(&gallery);

    // The configuration may start on the timeline; the walkthrough begins
    // with the deck.
    gallery.set_mode(ViewMode::Scatter, now);
    let limit = now + cli.seconds * 1000.0;
    now = wait_for_deck(&mut gallery, &mut panel, now, limit);
    if gallery.scatter().is_open() {
        println!("deck opened after {now:.0}ms");
    } else {
        println!("deck still closed after {now:.0}ms");
    }
    print_scatter(&gallery);

    let Some(first) = gallery.projects().first().map(|p| p.id.clone()) else {
        println!("catalog is empty; nothing to show");
        return Ok(());
    };

    // Drag the first card; the release click must not select it.
    gallery.pointer_down(Some(&first), Point::new(400.0, 300.0));
    for step in 1..=6 {
        let step = f64::from(step);
        gallery.pointer_move(Point::new(400.0 + step * 12.0, 300.0 - step * 4.0));
    }
    gallery.pointer_up();
    let disposition = gallery.click(&first);
    println!("drag release on {first}: {disposition:?}");

    // A plain tap on the last card selects it.
    if let Some(last) = gallery.projects().last().map(|p| p.id.clone()) {
        gallery.pointer_down(Some(&last), Point::new(200.0, 200.0));
        gallery.pointer_up();
        let disposition = gallery.click(&last);
        println!("tap on {last}: {disposition:?}");
    }
    now += FRAME_MS;
    gallery.frame(now, &mut panel);
    print_scatter(&gallery);

    // Timeline: let the reveal run, reporting once per second.
    gallery.set_mode(ViewMode::Timeline, now);
    let end = now + cli.seconds * 1000.0;
    let mut next_report = now;
    while now < end {
        now += FRAME_MS;
        let outcome = gallery.frame(now, &mut panel);
        if let Some(x) = outcome.scroll_to {
            gallery.scroll(x);
        }
        if now >= next_report {
            print_timeline(&gallery);
            next_report += 1000.0;
        }
        if !gallery.timeline().is_animating() {
            break;
        }
    }
    println!(
        "reveal settled at {:.1}px after {:.1}s",
        gallery.timeline().scroll_left(),
        now / 1000.0
    );

    // Language toggle keeps ids, and with them the selection.
    let other = gallery.language().unwrap_or_default().toggle();
    gallery.set_language(&catalog, other, now);
    if let Some(project) = gallery.selected_project() {
        println!("[{}] selected: {} / {}", other.code(), project.title(), project.role);
    }

    gallery.set_mode(ViewMode::Scatter, now);
    gallery.unmount();
    println!(
        "unmounted; {} listeners left attached, {} detail reveals",
        host.live.get(),
        panel.reveals
    );
    Ok(())
}
