mod toastcontrols;
pub use toastcontrols::*;
