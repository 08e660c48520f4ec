pub mod dialog;

pub use dialog::{use_dialog, DialogService};
