use storage::ArticleRepository;

/// Shared handler state: the repository, which holds the one store handle.
#[derive(Clone)]
pub struct AppState {
    pub repository: ArticleRepository,
}

impl AppState {
    pub fn new(repository: ArticleRepository) -> Self {
        Self { repository }
    }
}
