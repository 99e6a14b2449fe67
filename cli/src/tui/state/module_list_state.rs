use console_defs::{Alert, AlertCode, GlobalConfig, Module, ModuleList};
use log::{debug, info};

use crate::tui::card::CardEvent;

/// A filter chip built from one distinct primary tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    pub name: String,
    pub status: bool,
}

/// Tag filters are derived once, from the first list that arrives, and are
/// never rebuilt afterwards; tags introduced by later refreshes get no chip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilters {
    #[default]
    Uninitialized,
    Derived(Vec<TagFilter>),
}

impl TagFilters {
    pub fn as_slice(&self) -> &[TagFilter] {
        match self {
            TagFilters::Uninitialized => &[],
            TagFilters::Derived(tags) => tags,
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, TagFilters::Derived(_))
    }

    pub fn active_count(&self) -> usize {
        self.as_slice().iter().filter(|tag| tag.status).count()
    }

    fn reset(&mut self) {
        if let TagFilters::Derived(tags) = self {
            tags.iter_mut().for_each(|tag| tag.status = false);
        }
    }
}

/// Result of feeding a list response into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer response was already applied.
    Stale,
    /// The request failed; the current list stays as it is.
    Failed,
}

/// Owns everything the module list view shows: the module list, the tag
/// filters, the deployed-only switch, the alert banner and the global config.
#[derive(Debug, Default)]
pub struct ModuleListState {
    modules: ModuleList,
    tag_filters: TagFilters,
    show_only_deployed: bool,
    active_alert: Option<Alert>,
    global_config: Option<GlobalConfig>,
    applied_generation: u64,
    loaded: bool,
}

impl ModuleListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules.modules
    }

    pub fn tag_filters(&self) -> &TagFilters {
        &self.tag_filters
    }

    pub fn show_only_deployed(&self) -> bool {
        self.show_only_deployed
    }

    pub fn active_alert(&self) -> Option<&Alert> {
        self.active_alert.as_ref()
    }

    pub fn global_config(&self) -> Option<&GlobalConfig> {
        self.global_config.as_ref()
    }

    /// True once a list response has been applied.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn applied_generation(&self) -> u64 {
        self.applied_generation
    }

    /// Applies the response of the list request tagged `generation`.
    ///
    /// The list is replaced wholesale, so lifecycle fields merged from a card
    /// event are overwritten by whatever the backend reports next.
    pub fn apply_refresh(&mut self, generation: u64, result: Option<ModuleList>) -> RefreshOutcome {
        let Some(list) = result else {
            debug!("Module list refresh #{} failed, keeping current list", generation);
            return RefreshOutcome::Failed;
        };

        if generation <= self.applied_generation {
            info!(
                "Discarding module list #{}, #{} is already applied",
                generation, self.applied_generation
            );
            return RefreshOutcome::Stale;
        }

        self.applied_generation = generation;
        self.modules = list;
        self.loaded = true;
        self.derive_tag_filters();
        RefreshOutcome::Applied
    }

    /// Builds one filter per distinct primary tag, in first-seen order, all
    /// inactive. Does nothing once the filters exist. Returns whether it ran.
    pub fn derive_tag_filters(&mut self) -> bool {
        if self.tag_filters.is_derived() {
            return false;
        }

        let mut tags: Vec<TagFilter> = Vec::new();
        for tag in self.modules().iter().flat_map(|m| m.primary_tags.iter()) {
            if !tags.iter().any(|t| &t.name == tag) {
                tags.push(TagFilter {
                    name: tag.clone(),
                    status: false,
                });
            }
        }

        debug!("Derived {} tag filters", tags.len());
        self.tag_filters = TagFilters::Derived(tags);
        true
    }

    /// Positions, in list order, of the modules the current filters let through.
    ///
    /// In deployed-only mode every tag filter is switched off as part of the read.
    pub fn visible_indices(&mut self) -> Vec<usize> {
        if self.show_only_deployed {
            self.tag_filters.reset();
            return self
                .modules()
                .iter()
                .enumerate()
                .filter(|(_, m)| m.deployed)
                .map(|(i, _)| i)
                .collect();
        }

        if self.tag_filters.active_count() > 0 {
            let active: Vec<&str> = self
                .tag_filters
                .as_slice()
                .iter()
                .filter(|t| t.status)
                .map(|t| t.name.as_str())
                .collect();
            return self
                .modules()
                .iter()
                .enumerate()
                .filter(|(_, m)| active.iter().any(|tag| m.has_primary_tag(tag)))
                .map(|(i, _)| i)
                .collect();
        }

        (0..self.modules().len()).collect()
    }

    pub fn visible_modules(&mut self) -> Vec<&Module> {
        let indices = self.visible_indices();
        indices.into_iter().map(|i| &self.modules.modules[i]).collect()
    }

    /// Flips the filter at `index`. Turning a tag on leaves deployed-only mode.
    /// Returns the new status, or `None` if there is no such filter.
    pub fn toggle_tag(&mut self, index: usize) -> Option<bool> {
        let TagFilters::Derived(tags) = &mut self.tag_filters else {
            return None;
        };
        let tag = tags.get_mut(index)?;
        tag.status = !tag.status;
        let status = tag.status;
        if status {
            self.show_only_deployed = false;
        }
        Some(status)
    }

    pub fn toggle_tag_named(&mut self, name: &str) -> Option<bool> {
        let index = self
            .tag_filters
            .as_slice()
            .iter()
            .position(|t| t.name == name)?;
        self.toggle_tag(index)
    }

    pub fn set_show_only_deployed(&mut self, enabled: bool) {
        self.show_only_deployed = enabled;
    }

    pub fn toggle_show_only_deployed(&mut self) {
        self.show_only_deployed = !self.show_only_deployed;
    }

    pub fn show_alert(&mut self, code: AlertCode) {
        self.active_alert = Some(code.alert());
    }

    pub fn dismiss_alert(&mut self) {
        self.active_alert = None;
    }

    /// A failed config request (`None`) keeps whatever was loaded before.
    pub fn set_global_config(&mut self, config: Option<GlobalConfig>) {
        if let Some(config) = config {
            self.global_config = Some(config);
        }
    }

    pub fn deployed_count(&self) -> usize {
        self.modules().iter().filter(|m| m.deployed).count()
    }

    pub fn max_modules_reached(&self) -> bool {
        match self
            .global_config
            .as_ref()
            .and_then(|c| c.allowed_modules_count())
        {
            Some(allowed) => self.deployed_count() >= allowed,
            None => false,
        }
    }

    /// Applies an event emitted by a module card. Returns true when the list
    /// has to be resynced with the backend.
    pub fn apply_card_event(&mut self, event: &CardEvent) -> bool {
        match event {
            CardEvent::Message(message) => {
                debug!("Card message: {}", message);
                true
            }
            CardEvent::Alert(code) => {
                self.show_alert(*code);
                false
            }
            CardEvent::ModuleUpdated { application, state } => {
                if let Some(module) = self
                    .modules
                    .modules
                    .iter_mut()
                    .find(|m| &m.application == application)
                {
                    *module = module.merged_with(state);
                }
                false
            }
        }
    }
}
