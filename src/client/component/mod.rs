pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod search_input;
pub mod utilization;
pub mod year_select;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, FullScreenModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use pagination::Pagination;
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
pub use search_input::SearchInput;
pub use utilization::UtilizationBar;
pub use year_select::YearSelect;
