pub mod dialog;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;

pub use dialog::DialogModule;
pub use header::Header;
pub use layout::Layout;
pub use page::Page;
