pub mod dom;
pub mod page;
pub mod roster;

pub use dom::{Element, Node};
pub use page::{render_page, roster_container};
pub use roster::{
    build_roster_card, render_roster, render_roster_error, EMPTY_ROSTER_MESSAGE,
    ROSTER_ERROR_MESSAGE,
};
