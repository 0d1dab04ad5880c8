mod root;
mod router;
mod views;

pub(crate) use views::ActiveView;

pub use root::App;
pub use router::SectionRouter;
