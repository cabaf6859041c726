pub mod app;
pub mod cart_board;
pub mod form_field;
pub mod login_screen;
pub mod product_table;
pub mod sync_indicator;

pub use app::App;
pub use cart_board::CartBoard;
pub use form_field::FormField;
pub use login_screen::LoginScreen;
pub use product_table::ProductTable;
pub use sync_indicator::SyncIndicator;
