use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::error;

use crate::error::Error;
use crate::layout::{self, ASSETS_DIR};
use crate::model::{Resource, Season};
use crate::render::{self, Page, RenderContext};
use crate::writer;

/// What one publish left on disk: the pages written, and the first page that could not be.
#[derive(Debug, Default)]
pub struct Published {
    pub written: usize,
    pub failure: Option<Error>,
}

/// Receives every resource a run fetches.
#[async_trait]
pub trait PageSink: Send + Sync {
    async fn publish(&self, resource: Resource) -> Published;
}

/// The generated site on disk: renders resources and writes them under `root`.
pub struct Site {
    root: PathBuf,
    context: RenderContext,
}

impl Site {
    pub fn new(root: PathBuf, context: RenderContext) -> Self {
        Site { root, context }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes every page, even past a failed one. Keeps the first failure.
    pub async fn write_pages(&self, pages: Vec<Page>) -> Published {
        let mut published = Published::default();
        for page in pages {
            let directory = layout::directory(&self.root, page.dir);
            match writer::write(&directory, &page.base_name, &page.html).await {
                Ok(_) => published.written += 1,
                Err(e) => {
                    error!(
                        "Could not write {}: {e}",
                        directory.join(layout::file_name(&page.base_name)).display()
                    );
                    published.failure.get_or_insert(e);
                }
            }
        }
        published
    }

    /// `Index.html` and one page per league under `leagues/`.
    pub async fn write_landing_pages(&self, leagues: &[Season]) -> Published {
        self.write_pages(render::landing_pages(&self.context, leagues)).await
    }

    /// Copies the active theme's stylesheet from `assets_dir` into the site's `assets/`.
    pub async fn copy_stylesheet(&self, assets_dir: &Path) -> Result<PathBuf, Error> {
        let src = assets_dir.join(self.context.theme.stylesheet());
        writer::copy_asset(&src, &self.root.join(ASSETS_DIR)).await
    }
}

#[async_trait]
impl PageSink for Site {
    async fn publish(&self, resource: Resource) -> Published {
        let pages = render::render(&self.context, &resource);
        self.write_pages(pages).await
    }
}
