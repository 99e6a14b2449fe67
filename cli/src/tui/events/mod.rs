pub mod main_handler;
pub mod modal_handler;

pub use main_handler::MainHandler;
pub use modal_handler::ModalHandler;
