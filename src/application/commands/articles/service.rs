// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::CsrfTokenManager, time::Clock, util::SlugGenerator},
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) csrf: Arc<dyn CsrfTokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        csrf: Arc<dyn CsrfTokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugger,
            csrf,
            clock,
        }
    }
}
