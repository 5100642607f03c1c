//! Poster loading for the detail modal
//!
//! Posters are fetched and decoded off the UI thread; the render loop picks
//! up finished protocols from a channel. Loaded posters stay cached by movie
//! id for the lifetime of the process.

use anyhow::{Context, Result};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;

use crate::{log_debug, App, PosterState};

impl App {
    /// Kick off a background poster load, unless one already ran for this
    /// movie or previews are disabled.
    pub fn load_poster(&mut self, movie_id: u64, url: String) {
        if self.poster_states.contains_key(&movie_id) {
            return;
        }
        let Some(picker) = self.poster_picker.as_ref() else {
            return;
        };

        self.poster_states.insert(movie_id, PosterState::Loading);

        let http = self.http.clone();
        let picker = picker.clone();
        let poster_tx = self.poster_update_tx.clone();

        tokio::spawn(async move {
            match fetch_poster(&http, &url, &picker).await {
                Ok(protocol) => {
                    let _ = poster_tx.send((movie_id, PosterState::Ready(protocol)));
                }
                Err(e) => {
                    log_debug(&format!(
                        "DEBUG [Poster]: Load failed for movie={}: {:#}",
                        movie_id, e
                    ));
                    let _ = poster_tx.send((movie_id, PosterState::Failed));
                }
            }
        });
    }
}

async fn fetch_poster(
    http: &reqwest::Client,
    url: &str,
    picker: &Picker,
) -> Result<StatefulProtocol> {
    let response = http
        .get(url)
        .send()
        .await
        .context("Failed to fetch poster")?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("Poster request returned {}", status);
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read poster body")?;

    // Decoding is CPU-bound, keep it off the async threads
    let img = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .context("Poster decode task failed")?
        .context("Failed to decode poster")?;

    Ok(picker.new_resize_protocol(img))
}
