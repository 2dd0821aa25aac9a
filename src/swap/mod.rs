//! Currency swap form

pub mod form;
pub mod page;

pub use form::SwapForm;
pub use page::SwapPage;
