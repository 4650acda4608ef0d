mod admin_page;
mod auth_page;
mod item_list;
mod user_page;

pub use admin_page::AdminPage;
pub use auth_page::{LoginPage, NotFoundPage, SignupPage};
pub use item_list::ItemList;
pub use user_page::UserPage;

pub(crate) const BUTTON_STYLE: &str =
    "padding:0.6em 1.2em; font-size:1em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;";
pub(crate) const SECONDARY_BUTTON_STYLE: &str =
    "padding:0.6em 1.2em; font-size:1em; background:#6c757d; color:white; border:none; border-radius:4px; cursor:pointer;";
pub(crate) const INPUT_STYLE: &str =
    "width:100%; padding:0.5em; border:1px solid #ccc; border-radius:4px; box-sizing:border-box;";
