use std::{io, sync::OnceLock};

use application::{Args, Config};
use common::{operations::FetchAll, Handler as _};
use itertools::Itertools as _;
use service::{infra::Http, Pipeline, Snapshot};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let args = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        api,
        table,
        pipeline,
        log,
    } = Config::new(&args.config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let criteria = args.criteria();
    if !table
        .rows_per_page_options
        .contains(&criteria.rows_per_page.get())
    {
        log::error!(
            "`--rows-per-page` must be one of {:?}",
            table.rows_per_page_options,
        );
        return Err(());
    }

    let source = Http::new(&api.into());

    let pipeline = Pipeline::new(pipeline.into());
    pipeline.criteria().set(criteria);

    let handle = pipeline.start();
    let mut snapshots = handle.snapshots();

    let users = match source.execute(FetchAll).await {
        Ok(users) => users,
        Err(never) => match never {},
    };
    pipeline.supply(users);

    while snapshots.borrow().is_loading {
        snapshots.changed().await.map_err(|_| {
            log::error!("view pipeline stopped unexpectedly");
        })?;
    }
    let snapshot = snapshots.borrow_and_update().clone();

    render(&snapshot);

    handle.stop();

    Ok(())
}

/// Prints the given [`Snapshot`] as an aligned text table.
fn render(snapshot: &Snapshot) {
    const HEADERS: [&str; 5] =
        ["First name", "Last name", "Phone", "City", "Birth date"];

    if !snapshot.has_any_users() {
        println!("No users to display.");
        return;
    }

    let rows = snapshot
        .rows
        .iter()
        .map(|r| {
            [
                r.first_name.as_str(),
                r.last_name.as_str(),
                r.phone.as_str(),
                r.city.as_str(),
                r.birth_date.as_str(),
            ]
        })
        .collect::<Vec<_>>();

    let widths = rows.iter().fold(
        HEADERS.map(str::len),
        |mut widths, row| {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
            widths
        },
    );

    let line = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .join(" | ")
    };

    println!("{}", line(&HEADERS));
    println!("{}", widths.map(|w| "-".repeat(w)).join("-+-"));
    for row in &rows {
        println!("{}", line(row));
    }
    println!(
        "Page {} of {} (pages: {})",
        snapshot.criteria.current_page,
        snapshot.page_count,
        snapshot.page_count.numbers().join(" "),
    );
}
