use crate::config;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration, Instant};

type Error = Box<dyn std::error::Error>;

/// Outcome of loading a roster page
pub enum PageStatus {
    /// Rendered HTML after lazy-loaded images settled
    Loaded(String),
    /// The site answered with a not-found page; skip this team
    NotFound,
}

/// One headless Chrome session, shared by all team page loads
pub struct Navigator {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Page,
}

impl Navigator {
    /// Launch the browser. Failure here aborts the whole run.
    pub async fn launch() -> Result<Self, Error> {
        let config = BrowserConfig::builder().build()?;
        let (browser, mut handler) = Browser::launch(config).await?;

        // The CDP event handler must be polled for the session to make progress
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Navigator {
            browser,
            handler,
            page,
        })
    }

    /// Navigate to a team roster page and return its rendered HTML,
    /// or `NotFound` when the page title carries a not-found marker.
    pub async fn load_roster(&self, url: &str) -> Result<PageStatus, Error> {
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;

        let title = self.page.get_title().await?.unwrap_or_default();
        if config::NOT_FOUND_MARKERS.iter().any(|m| title.contains(m)) {
            return Ok(PageStatus::NotFound);
        }

        self.settle_lazy_images().await?;

        Ok(PageStatus::Loaded(self.page.content().await?))
    }

    /// The site lazy-loads player photos as the viewport approaches them.
    /// Scroll to the bottom and poll the rendered image count until it holds
    /// steady, under a hard wait budget.
    async fn settle_lazy_images(&self) -> Result<(), Error> {
        let deadline = Instant::now() + Duration::from_millis(config::SETTLE_BUDGET_MS);
        let mut last_count: i64 = -1;
        let mut stable = 0;

        // One pass down and back to mid-page kicks off the lazy loader
        self.scroll_to(1.0).await?;
        self.scroll_to(0.5).await?;

        while stable < config::SETTLE_STABLE_POLLS && Instant::now() < deadline {
            self.scroll_to(1.0).await?;
            sleep(Duration::from_millis(config::SETTLE_POLL_MS)).await;

            let count: i64 = self
                .page
                .evaluate("document.images.length")
                .await?
                .into_value()?;

            if count == last_count {
                stable += 1;
            } else {
                stable = 0;
                last_count = count;
            }
        }

        Ok(())
    }

    async fn scroll_to(&self, fraction: f64) -> Result<(), Error> {
        let js = format!(
            "window.scrollTo(0, document.body.scrollHeight * {});",
            fraction
        );
        self.page.evaluate(js).await?;
        Ok(())
    }

    /// Best-effort shutdown; called regardless of how the run went.
    pub async fn close(mut self) {
        let _ = self.browser.close().await;
        let _ = self.browser.wait().await;
        self.handler.abort();
    }
}
