// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection controller: one context owning model, collapse, and selection.

use alloc::vec::Vec;

use orgchart_collapse::{CollapseState, ViewTree};
use orgchart_directory::{DirectoryEntry, search};
use orgchart_model::{MalformedRecord, MemberId, NormalizeOptions, OrgTree, RawRecord, normalize_with};

use crate::detail::{DetailState, DetailUnavailable};
use crate::state::{SelectionState, select_by_id};
use crate::types::{CenterRequest, DetailRequest, Effect, Generation};

/// Owns the current model together with its collapse and selection state.
///
/// The three are only ever replaced together: loading a new record starts
/// from an all-expanded, unselected state and drops every pending effect,
/// because ids are only meaningful within one snapshot.
///
/// Before the first successful load every operation is a no-op or returns an
/// empty result; an absent model is a normal state, not an error.
///
/// ## Usage
///
/// - Feed records with [`SelectionController::load`].
/// - Route clicks and directory picks to [`SelectionController::select`];
///   collapse toggles to [`SelectionController::toggle`].
/// - Render [`SelectionController::view`].
/// - After each action, take [`SelectionController::drain_effects`] and run
///   them: centering requests go back through
///   [`SelectionController::accept_center`] once the new view is laid out, and
///   detail responses go to [`SelectionController::detail_loaded`].
pub struct SelectionController<D = ()> {
    options: NormalizeOptions,
    generation: Generation,
    snapshot: Option<Snapshot>,
    detail: DetailState<D>,
    effects: Vec<Effect>,
}

struct Snapshot {
    model: OrgTree,
    collapse: CollapseState,
    selection: SelectionState,
}

impl<D> core::fmt::Debug for SelectionController<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionController")
            .field("generation", &self.generation)
            .field("members", &self.total())
            .field("highlighted", &self.selection().and_then(SelectionState::highlighted))
            .field("pending_effects", &self.effects.len())
            .finish_non_exhaustive()
    }
}

impl<D> Default for SelectionController<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SelectionController<D> {
    /// Create a controller with no model and default normalization options.
    pub fn new() -> Self {
        Self::with_options(NormalizeOptions::default())
    }

    /// Create a controller with no model and the given normalization options.
    pub fn with_options(options: NormalizeOptions) -> Self {
        Self {
            options,
            generation: Generation::default(),
            snapshot: None,
            detail: DetailState::Absent,
            effects: Vec::new(),
        }
    }

    /// Normalize `raw` and install it as the current model.
    ///
    /// On success the model, collapse state, selection, detail state, and
    /// pending effects are all replaced, and the new generation is returned.
    /// On failure nothing changes: the previous model, if any, stays current.
    pub fn load(&mut self, raw: &RawRecord) -> Result<Generation, MalformedRecord> {
        let model = normalize_with(raw, &self.options).inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                err = %_err,
                generation = self.generation.get(),
                "keeping previous organization model"
            );
        })?;
        Ok(self.replace_model(model))
    }

    /// Install an already normalized model, with the same replacement rules as [`Self::load`].
    pub fn replace_model(&mut self, model: OrgTree) -> Generation {
        self.generation = self.generation.next();
        #[cfg(feature = "tracing")]
        tracing::info!(
            generation = self.generation.get(),
            members = model.len(),
            dropped_effects = self.effects.len(),
            "installed organization model"
        );
        self.snapshot = Some(Snapshot {
            model,
            collapse: CollapseState::new(),
            selection: SelectionState::new(),
        });
        self.detail = DetailState::Absent;
        self.effects.clear();
        self.generation
    }

    /// The current generation; zero until the first model is installed.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns true if `generation` is the current one.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.snapshot.is_some() && generation == self.generation
    }

    /// Returns true once a model is installed.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The current model.
    pub fn model(&self) -> Option<&OrgTree> {
        self.snapshot.as_ref().map(|s| &s.model)
    }

    /// The current collapse state.
    pub fn collapse(&self) -> Option<&CollapseState> {
        self.snapshot.as_ref().map(|s| &s.collapse)
    }

    /// The current selection.
    pub fn selection(&self) -> Option<&SelectionState> {
        self.snapshot.as_ref().map(|s| &s.selection)
    }

    /// The detail panel state for the current selection.
    pub fn detail(&self) -> &DetailState<D> {
        &self.detail
    }

    /// Number of members in the current model, or zero before the first load.
    pub fn total(&self) -> usize {
        self.model().map_or(0, OrgTree::len)
    }

    /// Toggle the collapsed state of `id`. Selection is unaffected.
    pub fn toggle(&mut self, id: MemberId) {
        if let Some(s) = self.snapshot.as_mut() {
            s.collapse.toggle(id);
        }
    }

    /// Expand every member. Selection is unaffected.
    pub fn expand_all(&mut self) {
        if let Some(s) = self.snapshot.as_mut() {
            s.collapse.expand_all();
        }
    }

    /// Select `id`: reveal it, highlight it and its ancestor path, and ask the
    /// host to center on it and fetch its details.
    ///
    /// Returns `false` and changes nothing if no model is loaded or `id` is not
    /// in it, such as a directory row left over from before a refresh.
    ///
    /// Reselecting the current member repeats the reveal and issues another
    /// centering request. A detail lookup that is in flight or done is not
    /// repeated; a failed one is retried.
    pub fn select(&mut self, id: MemberId) -> bool {
        let Some(s) = self.snapshot.as_mut() else {
            return false;
        };
        if !select_by_id(&s.model, &mut s.collapse, &mut s.selection, id) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%id, "ignoring selection of unknown member");
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(%id, depth = s.selection.path().len(), "selected member");

        let generation = self.generation;
        self.effects
            .push(Effect::BringIntoView(CenterRequest { id, generation }));
        let fetched = matches!(
            self.detail,
            DetailState::Loading(current) | DetailState::Ready(current, _) if current == id
        );
        if !fetched {
            self.detail = DetailState::Loading(id);
            self.effects
                .push(Effect::FetchDetail(DetailRequest { id, generation }));
        }
        true
    }

    /// Select the member behind a directory row.
    pub fn select_entry(&mut self, entry: &DirectoryEntry<'_>) -> bool {
        self.select(entry.id)
    }

    /// Clear the highlighted member and path. Collapse state is kept.
    pub fn clear_selection(&mut self) {
        if let Some(s) = self.snapshot.as_mut() {
            s.selection.clear();
        }
        self.detail = DetailState::Absent;
    }

    /// Derive the view tree for rendering, with the selection marked on it.
    pub fn view(&self) -> Option<ViewTree<'_>> {
        let s = self.snapshot.as_ref()?;
        let mut view = s.collapse.derive_view(&s.model);
        view.apply_highlight(s.selection.path(), s.selection.highlighted());
        Some(view)
    }

    /// Search the directory; empty before the first load.
    pub fn search(&self, term: &str) -> Vec<DirectoryEntry<'_>> {
        self.model()
            .map(|model| search(model, term))
            .unwrap_or_default()
    }

    /// Effects emitted since the last drain, oldest first.
    pub fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Take the effects emitted since the last drain, oldest first.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        core::mem::take(&mut self.effects)
    }

    /// Validate a centering request after the host has laid out the new view.
    ///
    /// Returns the member to center on, or `None` if the request belongs to an
    /// older model or the member is not visible any more.
    pub fn accept_center(&self, request: CenterRequest) -> Option<MemberId> {
        if !self.is_current(request.generation) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                id = %request.id,
                issued = request.generation.get(),
                current = self.generation.get(),
                "discarding stale centering request"
            );
            return None;
        }
        let s = self.snapshot.as_ref()?;
        s.collapse
            .is_visible(&s.model, request.id)
            .then_some(request.id)
    }

    /// Deliver the outcome of a detail lookup.
    ///
    /// The outcome is applied only if `request` belongs to the current model
    /// and its member is still selected; otherwise it is dropped and this
    /// returns `false`. A failure leaves tree, collapse, and selection state
    /// untouched and marks the panel [`DetailState::Unavailable`].
    pub fn detail_loaded(
        &mut self,
        request: DetailRequest,
        outcome: Result<D, DetailUnavailable>,
    ) -> bool {
        let selected = self.selection().and_then(SelectionState::highlighted);
        if !self.is_current(request.generation) || selected != Some(request.id) {
            #[cfg(feature = "tracing")]
            tracing::debug!(id = %request.id, "discarding stale member details");
            return false;
        }
        self.detail = match outcome {
            Ok(detail) => DetailState::Ready(request.id, detail),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(err = %_err, "member details unavailable");
                DetailState::Unavailable(request.id)
            }
        };
        true
    }
}
