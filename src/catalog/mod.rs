pub mod action;
pub mod paginate;
pub mod reducer;
pub mod sort;
pub mod state;
pub mod view;

pub use action::CatalogAction;
pub use paginate::paginate;
pub use reducer::reduce;
pub use sort::sort_movies;
pub use state::{CatalogState, DEFAULT_PAGE_SIZE};
pub use view::{count_message, paged_movies, PagedMovies};
