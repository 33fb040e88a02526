pub mod badge;
pub mod bar_list;
pub mod button;
pub mod card;
pub mod data_table;
pub mod dialog;
pub mod feedback;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod pagination;
pub mod search_bar;
pub mod textarea;
pub mod toast;

pub use badge::*;
pub use bar_list::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use feedback::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use textarea::*;
pub use toast::*;
