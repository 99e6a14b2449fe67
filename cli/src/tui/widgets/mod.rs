pub mod alert;
pub mod footer;
pub mod loading;
pub mod modal;
pub mod navigation;
pub mod table;
pub mod tag_bar;

pub use alert::AlertBanner;
pub use footer::FooterBar;
pub use loading::LoadingWidget;
pub use modal::ConfirmationModal;
pub use navigation::NavigationBar;
pub use table::{StyledRow, TableWidget};
pub use tag_bar::TagBar;
