//! Player transfer history extraction.
//!
//! Nine independent selector queries against the transfers page, zipped
//! positionally into one record per transfer event, plus the youth-club
//! list and the extraction timestamp.

use chrono::{DateTime, Utc};
use transfermarkt_core::markup::Page;
use transfermarkt_core::selectors::players::{profile, transfers};
use transfermarkt_core::text::safe_split;
use transfermarkt_core::transfer::{PlayerTransfer, PlayerTransferHistory};
use transfermarkt_core::url::{extract_from_url, extract_id};

use crate::clients::transfermarkt::TransfermarktClient;
use crate::error::ScrapeError;

/// Extracts a player's transfer history from their Transfermarkt transfers
/// page. Construction validates that the page belongs to a real player
/// before any extraction runs; individual missing fields afterwards degrade
/// to absent values instead of failing.
#[derive(Debug)]
pub struct PlayerTransfers {
    player_id: String,
    page: Page,
}

impl PlayerTransfers {
    /// Fetch the player's transfers page and validate it.
    pub async fn fetch(
        client: &TransfermarktClient,
        player_id: &str,
    ) -> Result<Self, ScrapeError> {
        if player_id.trim().is_empty() {
            return Err(ScrapeError::InvalidPlayerId);
        }
        let html = client.player_transfers_page(player_id).await?;
        Self::from_html(player_id, &html)
    }

    /// Build the extractor from an already-fetched document. Fails with
    /// `NotFound` when the player-name marker is missing, which covers both
    /// unknown players and upstream markup changes.
    pub fn from_html(player_id: &str, html: &str) -> Result<Self, ScrapeError> {
        if player_id.trim().is_empty() {
            return Err(ScrapeError::InvalidPlayerId);
        }

        let page = Page::parse(html);
        if page.first_text(profile::NAME).is_none() {
            return Err(ScrapeError::NotFound(player_id.to_string()));
        }

        Ok(Self {
            player_id: player_id.to_string(),
            page,
        })
    }

    /// Extract the full transfer history, stamped with the current time.
    pub fn transfer_history(&self) -> PlayerTransferHistory {
        self.transfer_history_at(Utc::now())
    }

    /// Clock-injected variant of [`Self::transfer_history`].
    pub fn transfer_history_at(&self, now: DateTime<Utc>) -> PlayerTransferHistory {
        PlayerTransferHistory {
            id: self.player_id.clone(),
            transfers: self.parse_transfers(),
            youth_clubs: self.parse_youth_clubs(),
            updated_at: now,
        }
    }

    fn parse_transfers(&self) -> Vec<PlayerTransfer> {
        let urls = self.page.attrs(transfers::TRANSFER_URLS, "href");
        let seasons = self.page.texts(transfers::SEASONS);
        let dates = self.page.texts(transfers::DATES);
        let old_club_urls = self.page.attrs(transfers::OLD_CLUB_URLS, "href");
        let old_club_names = self.page.texts(transfers::OLD_CLUB_NAMES);
        let new_club_urls = self.page.attrs(transfers::NEW_CLUB_URLS, "href");
        let new_club_names = self.page.texts(transfers::NEW_CLUB_NAMES);
        let market_values = self.page.texts(transfers::MARKET_VALUES);
        let fees = self.page.texts(transfers::FEES);

        let lengths = [
            urls.len(),
            seasons.len(),
            dates.len(),
            old_club_urls.len(),
            old_club_names.len(),
            new_club_urls.len(),
            new_club_names.len(),
            market_values.len(),
            fees.len(),
        ];
        // The grid renders one cell per field per transfer, so these agree on
        // intact pages. Truncate to the shortest list rather than misalign.
        let count = lengths.iter().copied().min().unwrap_or(0);
        if lengths.iter().any(|&len| len != count) {
            tracing::warn!(
                "transfer field lists out of step for player {}: {:?}; truncating to {}",
                self.player_id,
                lengths,
                count
            );
        }

        (0..count)
            .map(|i| PlayerTransfer {
                id: extract_from_url(&urls[i], "transfer_id"),
                season_id: seasons[i].clone(),
                date: dates[i].clone(),
                old_club_id: extract_id(&old_club_urls[i]),
                old_club_name: old_club_names[i].clone(),
                new_club_id: extract_id(&new_club_urls[i]),
                new_club_name: new_club_names[i].clone(),
                market_value: market_values[i].clone(),
                fee: fees[i].clone(),
            })
            .collect()
    }

    fn parse_youth_clubs(&self) -> Vec<String> {
        self.page
            .first_text(transfers::YOUTH_CLUBS)
            .map(|text| safe_split(&text, ','))
            .unwrap_or_default()
    }
}
