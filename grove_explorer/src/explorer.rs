// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use grove_expansion::ExpansionState;
use grove_layout::{Layout, compute_layout};
use grove_source::{
    BuiltTree, EmptyInput, GenerationError, GenerationRequest, GenerationSequence,
    GenerationService, Provenance, Ticket, build_tree, finish_tree,
};
use grove_svg::export_svg;
use grove_tree::{Tree, TreeNode};
use grove_view::ViewportState;
use kurbo::{Point, Rect};

use crate::config::ExplorerConfig;

/// What a click on a node did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activation {
    /// The node's expansion was flipped.
    pub toggled: bool,
    /// The node links to this source page; the activation handler was called
    /// with it.
    pub page: Option<usize>,
}

/// A tree with its open branches and the layout derived from both.
struct Loaded {
    tree: Tree,
    expansion: ExpansionState,
    layout: Layout,
    layout_revision: u64,
}

impl Loaded {
    fn new(tree: Tree, config: &ExplorerConfig) -> Self {
        let expansion = ExpansionState::initial(&tree);
        let layout = compute_layout(&tree, &expansion, &config.layout);
        Self {
            layout_revision: expansion.revision(),
            tree,
            expansion,
            layout,
        }
    }

    /// Recomputes the layout if the expansion changed since the last pass.
    fn refresh(&mut self, config: &ExplorerConfig) -> bool {
        if self.layout_revision == self.expansion.revision() {
            return false;
        }
        self.layout = compute_layout(&self.tree, &self.expansion, &config.layout);
        self.layout_revision = self.expansion.revision();
        true
    }
}

type ActivationHandler = Box<dyn FnMut(usize)>;

/// An interactive mind map session.
///
/// The explorer owns the current tree, which branches are open, the layout
/// derived from them and the viewport framing it. Every change to the tree
/// or to the open branches recomputes the layout and view box immediately;
/// zoom changes touch neither.
///
/// Without a tree the explorer is in its empty state: [`layout`](Self::layout)
/// and [`export_snapshot`](Self::export_snapshot) return `None` and
/// interaction is ignored.
pub struct Explorer {
    config: ExplorerConfig,
    loaded: Option<Loaded>,
    viewport: ViewportState,
    sequence: GenerationSequence,
    on_activate: Option<ActivationHandler>,
}

impl fmt::Debug for Explorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Explorer")
            .field("config", &self.config)
            .field("nodes", &self.tree().map(Tree::node_count))
            .field("viewport", &self.viewport)
            .field("sequence", &self.sequence)
            .field("on_activate", &self.on_activate.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}

impl Explorer {
    /// Creates an empty explorer.
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        let viewport = ViewportState::new(config.padding, config.zoom);
        Self {
            config,
            loaded: None,
            viewport,
            sequence: GenerationSequence::new(),
            on_activate: None,
        }
    }

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Sets the callback invoked with a node's source page when the node is
    /// activated.
    pub fn set_activation_handler(&mut self, handler: impl FnMut(usize) + 'static) {
        self.on_activate = Some(Box::new(handler));
    }

    /// Replaces the current tree.
    ///
    /// Expansion is reset to its initial state (root and branches open) and
    /// the layout and view box are recomputed. Zoom is kept. Any in-flight
    /// generation is superseded.
    pub fn load(&mut self, tree: Tree) {
        self.sequence.cancel();
        self.install(tree);
    }

    fn install(&mut self, tree: Tree) {
        let loaded = Loaded::new(tree, &self.config);
        tracing::info!(
            nodes = loaded.tree.node_count(),
            visible = loaded.layout.nodes().len(),
            "loaded tree"
        );
        self.viewport.set_bounds(loaded.layout.bounds());
        self.loaded = Some(loaded);
    }

    /// Drops the current tree and enters the empty state.
    ///
    /// In-flight generation is left alone; its result may still arrive.
    pub fn clear(&mut self) {
        if self.loaded.take().is_some() {
            tracing::debug!("cleared tree");
        }
        self.viewport.clear_bounds();
    }

    /// Returns `true` in the empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_none()
    }

    /// Builds a tree for `request` with `service` and loads it.
    ///
    /// Any in-flight generation started with [`begin_generation`](Self::begin_generation)
    /// is superseded. A request without pages puts the explorer into its
    /// empty state.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInput`] for a request without pages.
    pub fn rebuild<S>(
        &mut self,
        service: &S,
        request: &GenerationRequest,
    ) -> Result<Provenance, EmptyInput>
    where
        S: GenerationService + ?Sized,
    {
        self.sequence.cancel();
        match build_tree(service, request) {
            Ok(built) => Ok(self.load_built(built)),
            Err(empty) => {
                self.clear();
                Err(empty)
            }
        }
    }

    /// Starts an asynchronous generation. Keep the ticket with the request
    /// and pass it to [`complete_generation`](Self::complete_generation).
    pub fn begin_generation(&mut self) -> Ticket {
        self.sequence.begin()
    }

    /// Applies the result of a generation started with
    /// [`begin_generation`](Self::begin_generation).
    ///
    /// Results for superseded or already completed tickets are discarded and
    /// `None` is returned. Otherwise the ticket is retired and the outcome (or the fallback map, if generation failed) is
    /// loaded; a request without pages clears the explorer.
    pub fn complete_generation(
        &mut self,
        ticket: Ticket,
        request: &GenerationRequest,
        outcome: Result<TreeNode, GenerationError>,
    ) -> Option<Provenance> {
        if !self.sequence.finish(ticket) {
            tracing::info!(
                ticket = ticket.get(),
                latest = self.sequence.latest().map(Ticket::get),
                "discarding stale generation result"
            );
            return None;
        }
        if request.is_empty() {
            self.clear();
            return None;
        }
        Some(self.load_built(finish_tree(outcome, request)))
    }

    fn load_built(&mut self, built: BuiltTree) -> Provenance {
        self.install(built.tree);
        built.provenance
    }

    /// The current tree.
    #[must_use]
    pub fn tree(&self) -> Option<&Tree> {
        self.loaded.as_ref().map(|loaded| &loaded.tree)
    }

    /// Which nodes are open.
    #[must_use]
    pub fn expansion(&self) -> Option<&ExpansionState> {
        self.loaded.as_ref().map(|loaded| &loaded.expansion)
    }

    /// Layout of the visible nodes, `None` in the empty state.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.loaded.as_ref().map(|loaded| &loaded.layout)
    }

    /// View box and zoom.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Flips the expansion of `id`. Returns `true` if anything changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.update(|tree, expansion| expansion.toggle(tree, id))
    }

    /// Opens `id`.
    pub fn expand(&mut self, id: &str) -> bool {
        self.update(|tree, expansion| expansion.expand(tree, id))
    }

    /// Closes `id`, remembering which of its descendants were open.
    pub fn collapse(&mut self, id: &str) -> bool {
        self.update(|_, expansion| expansion.collapse(id))
    }

    /// Opens every ancestor of `id` so it becomes visible.
    pub fn reveal(&mut self, id: &str) -> bool {
        self.update(|tree, expansion| expansion.reveal(tree, id))
    }

    /// Opens every node.
    pub fn expand_all(&mut self) -> bool {
        self.update(|tree, expansion| {
            expansion.expand_all(tree);
            true
        })
    }

    /// Closes everything but the root.
    pub fn collapse_all(&mut self) -> bool {
        self.update(|tree, expansion| {
            expansion.collapse_all(tree);
            true
        })
    }

    /// Runs `change` on the expansion and relayouts if it moved the revision.
    fn update(&mut self, change: impl FnOnce(&Tree, &mut ExpansionState) -> bool) -> bool {
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        change(&loaded.tree, &mut loaded.expansion);
        if !loaded.refresh(&self.config) {
            return false;
        }
        tracing::debug!(
            visible = loaded.layout.nodes().len(),
            revision = loaded.layout_revision,
            "relayout"
        );
        self.viewport.set_bounds(loaded.layout.bounds());
        true
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom().value()
    }

    /// Zooms in one step.
    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_mut().zoom_in()
    }

    /// Zooms out one step.
    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_mut().zoom_out()
    }

    /// Returns to the neutral zoom.
    pub fn reset_zoom(&mut self) -> bool {
        self.viewport.zoom_mut().reset()
    }

    /// Sets the zoom, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        self.viewport.zoom_mut().set(zoom)
    }

    /// Activates the visible node `id`, as a click on it would.
    ///
    /// A node with visible children is toggled. A node linked to a source
    /// page passes that page to the activation handler. Both may happen at
    /// once. Returns `None` if `id` is not visible.
    pub fn activate(&mut self, id: &str) -> Option<Activation> {
        let node = self.layout()?.node(id)?;
        let (has_children, page) = (node.has_children, node.source_page_index);

        let toggled = has_children && self.toggle(id);
        if let (Some(page), Some(handler)) = (page, self.on_activate.as_mut()) {
            handler(page);
        }
        tracing::debug!(id, toggled, page, "activated node");
        Some(Activation { toggled, page })
    }

    /// Node under `point`, given in device coordinates inside `device_rect`.
    #[must_use]
    pub fn node_at(&self, device_rect: Rect, point: Point) -> Option<&str> {
        let world = self.viewport.view_to_world_point(device_rect, point);
        self.layout()?
            .hit_test(world)
            .map(|node| node.id.as_str())
    }

    /// Activates whatever node is under `point` (device coordinates inside
    /// `device_rect`).
    pub fn click_at(&mut self, device_rect: Rect, point: Point) -> Option<Activation> {
        let id = self.node_at(device_rect, point)?.to_owned();
        self.activate(&id)
    }

    /// Standalone SVG document of the whole current map.
    ///
    /// The snapshot is framed by the unzoomed view box so that it always
    /// shows every visible node. Returns `None` in the empty state.
    #[must_use]
    pub fn export_snapshot(&self) -> Option<String> {
        let layout = self.layout()?;
        Some(export_svg(
            layout,
            &self.config.layout,
            self.viewport.view_box(),
            &self.config.theme,
        ))
    }
}
