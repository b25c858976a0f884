//! Debounced view [`Pipeline`] recomputing the visible page of [`Row`]s.

use std::{sync::Arc, time::Duration};

use common::pagination::{self, PageCount, PageNumber};
use tokio::{sync::watch, task::JoinHandle, time};
use tracing as log;

use crate::{criteria::Criteria, domain::User, read, read::Row};

/// [`Pipeline`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Quiescence window collapsing rapid [`Criteria`] edits into a
    /// single recomputation using the most recent value.
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
        }
    }
}

/// Shared cell publishing a change notification on every write.
///
/// Subscribers always observe the latest value only (last-value-wins):
/// writes are never queued behind one another.
#[derive(Debug)]
pub struct Cell<T> {
    /// Channel holding the current value of this [`Cell`].
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Cell<T> {
    /// Creates a new [`Cell`] holding the provided `value`.
    fn new(value: T) -> Self {
        let (tx, _) = watch::channel(value);
        Self { tx: Arc::new(tx) }
    }

    /// Replaces the value of this [`Cell`], notifying subscribers.
    pub fn set(&self, value: T) {
        _ = self.tx.send_replace(value);
    }

    /// Mutates the value of this [`Cell`] in place, notifying
    /// subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Returns a copy of the current value of this [`Cell`].
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Subscribes to changes of this [`Cell`].
    fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

/// Result of a single [`Pipeline`] recomputation.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// [`Row`]s of the currently selected page, in their source order.
    pub rows: Vec<Row>,

    /// Total [`PageCount`] of the filtered row sequence.
    pub page_count: PageCount,

    /// Effective [`Criteria`] this [`Snapshot`] was computed with,
    /// including any automatic `current_page` reset.
    pub criteria: Criteria,

    /// Indicator whether the initial row set is still outstanding.
    pub is_loading: bool,
}

impl Snapshot {
    /// Creates a [`Snapshot`] of a [`Pipeline`] with no row set supplied
    /// yet.
    fn loading(criteria: Criteria) -> Self {
        Self {
            rows: Vec::new(),
            page_count: PageCount::default(),
            criteria,
            is_loading: true,
        }
    }

    /// Indicates whether the displayed page contains any users.
    #[must_use]
    pub fn has_any_users(&self) -> bool {
        !self.rows.is_empty()
    }
}

/// View pipeline projecting [`User`]s into [`Row`]s, filtering them by
/// [`Criteria`], and slicing out the currently selected page.
///
/// Owns two change cells — the current row set and the current
/// [`Criteria`] — with a single combinator task subscribed to both (see
/// [`Pipeline::start`]). Row set replacements recompute immediately,
/// while [`Criteria`] edits are debounced by [`Config::debounce`].
#[derive(Debug)]
pub struct Pipeline {
    /// Configuration of this [`Pipeline`].
    config: Config,

    /// [`Cell`] holding the latest projected row set, [`None`] until the
    /// first [`Pipeline::supply`].
    rows: Cell<Option<Vec<Row>>>,

    /// [`Cell`] holding the current [`Criteria`].
    criteria: Cell<Criteria>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Pipeline {
    /// Creates a new [`Pipeline`] with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            rows: Cell::new(None),
            criteria: Cell::new(Criteria::default()),
        }
    }

    /// [`Cell`] holding the current [`Criteria`].
    ///
    /// Edits are expected from a single writer and collapse into one
    /// recomputation if they occur within the [`Config::debounce`]
    /// window. An edit racing the combinator's own `current_page`
    /// write-back from another thread may have its notification
    /// swallowed until the next trigger, so concurrent writers must
    /// serialize their access to this [`Cell`].
    #[must_use]
    pub fn criteria(&self) -> &Cell<Criteria> {
        &self.criteria
    }

    /// Supplies a freshly fetched collection of [`User`]s, projecting
    /// them into [`Row`]s and replacing the previous row set.
    ///
    /// Triggers an immediate recomputation, not subject to debouncing.
    pub fn supply(&self, users: impl IntoIterator<Item = User>) {
        self.rows.set(Some(read::row::project(users)));
    }

    /// Starts the combinator task of this [`Pipeline`], subscribing it
    /// to both change cells.
    ///
    /// The task recomputes on every row set replacement and on every
    /// debounce-quiesced [`Criteria`] edit, always evaluating only the
    /// latest combination of the two. Whenever the recomputed
    /// [`PageCount`] differs from the previously known one,
    /// `current_page` resets to 1 both in the emitted [`Snapshot`] and in
    /// the shared [`Criteria`] cell, without waiting out another
    /// debounce window.
    #[must_use]
    pub fn start(&self) -> Handle {
        let mut rows_rx = self.rows.subscribe();
        let mut criteria_rx = self.criteria.subscribe();
        let criteria_cell = self.criteria.clone();
        let debounce = self.config.debounce;

        let (out_tx, output) = watch::channel(Snapshot::loading(
            criteria_cell.get(),
        ));

        let task = tokio::spawn(async move {
            // Established by the first recomputation seeing a row set,
            // so the initial page selection isn't mistaken for a
            // page-count change.
            let mut known_pages = None;
            'run: loop {
                let rows = rows_rx.borrow_and_update().clone();
                let snapshot = recompute(
                    rows.as_deref(),
                    &criteria_cell,
                    &mut criteria_rx,
                    &mut known_pages,
                );
                log::debug!(
                    rows = snapshot.rows.len(),
                    pages = snapshot.page_count.get(),
                    loading = snapshot.is_loading,
                    "recomputed view pipeline",
                );
                if out_tx.send(snapshot).is_err() {
                    // All snapshot subscribers are gone.
                    break 'run;
                }

                tokio::select! {
                    changed = rows_rx.changed() => {
                        if changed.is_err() {
                            break 'run;
                        }
                    }
                    changed = criteria_rx.changed() => {
                        if changed.is_err() {
                            break 'run;
                        }
                        // Quiescence window, restarted by every further
                        // edit.
                        loop {
                            tokio::select! {
                                () = time::sleep(debounce) => break,
                                changed = criteria_rx.changed() => {
                                    if changed.is_err() {
                                        break;
                                    }
                                }
                            }
                        }
                    }
                }
            }
        });

        Handle { output, task }
    }
}

/// Runs a single projection → filter → paginate evaluation, reconciling
/// the known [`PageCount`] with the current page selection.
fn recompute(
    rows: Option<&[Row]>,
    criteria_cell: &Cell<Criteria>,
    criteria_rx: &mut watch::Receiver<Criteria>,
    known_pages: &mut Option<PageCount>,
) -> Snapshot {
    let mut criteria = criteria_rx.borrow_and_update().clone();

    let Some(rows) = rows else {
        return Snapshot::loading(criteria);
    };

    let filtered = criteria.apply(rows);
    let page_count = PageCount::of(filtered.len(), criteria.rows_per_page);
    if known_pages.is_some_and(|known| known != page_count) {
        criteria.current_page = PageNumber::FIRST;
        criteria_cell.update(|c| c.current_page = PageNumber::FIRST);
        // Consume the write-back notification, so the reset doesn't
        // re-enter the debounce window.
        criteria_rx.mark_unchanged();
    }
    *known_pages = Some(page_count);

    let rows = pagination::page_of(
        &filtered,
        criteria.rows_per_page,
        criteria.current_page,
    )
    .to_vec();

    Snapshot {
        rows,
        page_count,
        criteria,
        is_loading: false,
    }
}

/// Handle of a started [`Pipeline`].
///
/// Aborts the combinator task on [`Handle::stop`] or on drop: once
/// stopped, no further recomputation fires and no subscription to the
/// change cells is retained.
#[derive(Debug)]
pub struct Handle {
    /// Channel publishing recomputed [`Snapshot`]s.
    output: watch::Receiver<Snapshot>,

    /// Combinator task of the started [`Pipeline`].
    task: JoinHandle<()>,
}

impl Handle {
    /// Subscribes to the [`Snapshot`]s recomputed by the [`Pipeline`].
    ///
    /// The channel always holds the latest [`Snapshot`], starting with a
    /// loading one.
    #[must_use]
    pub fn snapshots(&self) -> watch::Receiver<Snapshot> {
        self.output.clone()
    }

    /// Stops the [`Pipeline`] recomputation deterministically.
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
