mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_add, handle_colors, handle_delete, handle_edit, handle_export, handle_init,
    handle_list, handle_show,
};
