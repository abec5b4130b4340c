mod crawl;
mod index;
mod init;
mod search;
mod serve;
mod suggest;

pub use crawl::crawl_site;
pub use index::index_dump;
pub use init::init_config;
pub use search::search_index;
pub use serve::serve;
pub use suggest::suggest_words;
