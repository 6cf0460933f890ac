pub mod book_card;
pub mod layout;
pub mod login_prompt;
pub mod shelf;
pub mod upload_form;

pub use book_card::BookCard;
pub use login_prompt::LoginPrompt;
pub use shelf::Shelf;
pub use upload_form::UploadForm;
