pub mod modal_state;
pub mod module_list_state;

pub use modal_state::ModalState;
pub use module_list_state::{ModuleListState, RefreshOutcome, TagFilter, TagFilters};
